//! SWOT analysis parser.
//!
//! Section headers switch the active section; bullet lines append to it.
//! Every list is backfilled with generic defaults when the response left it
//! empty, so the result never has an empty list.

use forge_core::entities::SwotAnalysis;

use crate::lines::{meaningful_lines, strip_bullet};

/// Score used when the viability line has no usable number.
pub const DEFAULT_VIABILITY: u8 = 70;

const DEFAULT_STRENGTHS: [&str; 2] = ["Strong market fit", "Innovative approach"];
const DEFAULT_WEAKNESSES: [&str; 2] = ["Requires initial investment", "Market competition"];
const DEFAULT_OPPORTUNITIES: [&str; 2] = ["Growing market demand", "Digital expansion potential"];
const DEFAULT_THREATS: [&str; 2] = ["Market saturation", "Economic uncertainty"];
const DEFAULT_RECOMMENDATIONS: [&str; 2] = [
    "Start with a minimum viable product",
    "Validate with target customers",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Viability,
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
    Recommendations,
}

/// Keyword per section, checked in this order against the uppercased line.
const SECTION_KEYWORDS: [(&str, Section); 6] = [
    ("VIABILITY", Section::Viability),
    ("STRENGTH", Section::Strengths),
    ("WEAKNESS", Section::Weaknesses),
    ("OPPORTUNIT", Section::Opportunities),
    ("THREAT", Section::Threats),
    ("RECOMMENDATION", Section::Recommendations),
];

fn section_of(line: &str) -> Option<Section> {
    let upper = line.to_uppercase();
    SECTION_KEYWORDS
        .iter()
        .find(|(keyword, _)| upper.contains(keyword))
        .map(|&(_, section)| section)
}

/// First run of ASCII digits on the line, if it is a valid score.
fn viability_score(line: &str) -> Option<u8> {
    let start = line.find(|c: char| c.is_ascii_digit())?;
    let digits: String = line[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse::<u8>().ok().filter(|score| *score <= 100)
}

#[derive(Debug, Default)]
struct SwotLists {
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    opportunities: Vec<String>,
    threats: Vec<String>,
    recommendations: Vec<String>,
}

impl SwotLists {
    fn list_mut(&mut self, section: Section) -> Option<&mut Vec<String>> {
        match section {
            Section::Viability => None,
            Section::Strengths => Some(&mut self.strengths),
            Section::Weaknesses => Some(&mut self.weaknesses),
            Section::Opportunities => Some(&mut self.opportunities),
            Section::Threats => Some(&mut self.threats),
            Section::Recommendations => Some(&mut self.recommendations),
        }
    }
}

fn or_defaults(list: Vec<String>, defaults: [&str; 2]) -> Vec<String> {
    if list.is_empty() {
        defaults.into_iter().map(String::from).collect()
    } else {
        list
    }
}

/// Parse a SWOT response. Never fails.
#[must_use]
pub fn parse_swot(raw: &str) -> SwotAnalysis {
    let mut score = None;
    let mut section = None;
    let mut lists = SwotLists::default();

    for line in meaningful_lines(raw) {
        if let Some(item) = strip_bullet(line) {
            let list = section.and_then(|active| lists.list_mut(active));
            if let (Some(list), false) = (list, item.is_empty()) {
                list.push(item.to_string());
            }
        } else if let Some(found) = section_of(line) {
            if found == Section::Viability && score.is_none() {
                score = Some(viability_score(line).unwrap_or(DEFAULT_VIABILITY));
            }
            section = Some(found);
        }
    }

    SwotAnalysis {
        viability_score: score.unwrap_or(DEFAULT_VIABILITY),
        strengths: or_defaults(lists.strengths, DEFAULT_STRENGTHS),
        weaknesses: or_defaults(lists.weaknesses, DEFAULT_WEAKNESSES),
        opportunities: or_defaults(lists.opportunities, DEFAULT_OPPORTUNITIES),
        threats: or_defaults(lists.threats, DEFAULT_THREATS),
        recommendations: or_defaults(lists.recommendations, DEFAULT_RECOMMENDATIONS),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn lone_viability_line_gets_default_lists() {
        let swot = parse_swot("VIABILITY: 85");
        assert_eq!(swot.viability_score, 85);
        assert_eq!(swot.strengths, DEFAULT_STRENGTHS);
        assert_eq!(swot.weaknesses, DEFAULT_WEAKNESSES);
        assert_eq!(swot.opportunities, DEFAULT_OPPORTUNITIES);
        assert_eq!(swot.threats, DEFAULT_THREATS);
        assert_eq!(swot.recommendations, DEFAULT_RECOMMENDATIONS);
    }

    #[test]
    fn full_response_is_read_by_section() {
        let raw = "VIABILITY: 78/100

STRENGTHS:
- Low startup cost
• Recurring revenue
WEAKNESSES:
* Founder time
OPPORTUNITIES:
- Remote work trend
THREATS:
- Big platforms
RECOMMENDATIONS:
- Pilot with ten customers
- Raise prices after month three";

        let swot = parse_swot(raw);
        assert_eq!(swot.viability_score, 78);
        assert_eq!(swot.strengths, ["Low startup cost", "Recurring revenue"]);
        assert_eq!(swot.weaknesses, ["Founder time"]);
        assert_eq!(swot.opportunities, ["Remote work trend"]);
        assert_eq!(swot.threats, ["Big platforms"]);
        assert_eq!(
            swot.recommendations,
            ["Pilot with ten customers", "Raise prices after month three"]
        );
    }

    #[test]
    fn bullets_mentioning_keywords_stay_in_their_section() {
        let raw = "STRENGTHS:\n- Opportunities for upsell\n- Few threats nearby";
        let swot = parse_swot(raw);
        assert_eq!(
            swot.strengths,
            ["Opportunities for upsell", "Few threats nearby"]
        );
        assert_eq!(swot.opportunities, DEFAULT_OPPORTUNITIES);
    }

    #[test]
    fn markdown_headers_switch_sections() {
        let swot = parse_swot("**Strengths**\n- Team\n## Threats\n- Rivals");
        assert_eq!(swot.strengths, ["Team"]);
        assert_eq!(swot.threats, ["Rivals"]);
    }

    #[test]
    fn stray_lines_are_ignored() {
        let raw = "Here is my analysis.\n- orphan bullet\nSTRENGTHS:\nSome prose.\n- Kept";
        let swot = parse_swot(raw);
        assert_eq!(swot.strengths, ["Kept"]);
    }

    #[rstest]
    #[case("VIABILITY: 85", 85)]
    #[case("Viability score - 0", 0)]
    #[case("VIABILITY: 100", 100)]
    #[case("VIABILITY: high", DEFAULT_VIABILITY)]
    #[case("VIABILITY SCORE: 2024 market", DEFAULT_VIABILITY)]
    #[case("VIABILITY: 101", DEFAULT_VIABILITY)]
    fn viability_score_extraction(#[case] line: &str, #[case] expected: u8) {
        assert_eq!(parse_swot(line).viability_score, expected);
    }

    #[test]
    fn missing_viability_defaults() {
        assert_eq!(parse_swot("STRENGTHS:\n- x").viability_score, DEFAULT_VIABILITY);
    }
}

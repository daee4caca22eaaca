//! Idea list parser.
//!
//! Reads the `IDEA <n>` record format requested by the idea template. Each
//! header line starts a new record. `Key: value` lines fill the current
//! record through [`IdeaField`]. Records without a title are dropped, and a
//! response yielding no records at all asks the caller to fall back.

use forge_core::entities::BusinessIdeaDraft;
use forge_core::enums::{Category, Difficulty, Level};

use crate::lines::{meaningful_lines, strip_bullet, unmark_field};

pub const DEFAULT_DESCRIPTION: &str = "A promising business opportunity tailored to your profile.";
pub const DEFAULT_REVENUE: &str = "$1K-5K/month";
pub const DEFAULT_LAUNCH: &str = "2-3 months";
pub const DEFAULT_COST: &str = "$500-2,000";
pub const DEFAULT_MARGIN: &str = "30-50%";
pub const DEFAULT_NOTE: &str =
    "This idea aligns with your unique combination of skills and interests.";

/// Result of parsing an idea list response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaParseOutcome {
    /// At least one record with a title, in response order.
    Ideas(Vec<BusinessIdeaDraft>),
    /// Nothing usable was found.
    NeedsFallback,
}

impl IdeaParseOutcome {
    #[must_use]
    pub fn into_ideas(self) -> Option<Vec<BusinessIdeaDraft>> {
        match self {
            Self::Ideas(ideas) => Some(ideas),
            Self::NeedsFallback => None,
        }
    }
}

// ── Field keys ──────────────────────────────────────────────────────────────

/// The closed set of keys an idea record understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaField {
    Title,
    Description,
    Category,
    Difficulty,
    Revenue,
    Launch,
    Skills,
    Cost,
    Margin,
    Demand,
    Competition,
    Note,
}

impl IdeaField {
    /// Resolve a lowercased, trimmed key. Unknown keys resolve to `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let field = match key {
            "title" | "name" => Self::Title,
            "description" | "summary" => Self::Description,
            "category" | "industry" => Self::Category,
            "difficulty" | "difficulty level" => Self::Difficulty,
            "revenue" | "estimated revenue" | "revenue range" | "revenue potential" => {
                Self::Revenue
            }
            "launch" | "launch time" | "launch timeframe" | "time to launch" => Self::Launch,
            "skills" | "required skills" | "skills needed" => Self::Skills,
            "cost" | "startup cost" | "startup costs" | "initial investment" => Self::Cost,
            "margin" | "profit margin" | "profit margins" => Self::Margin,
            "demand" | "market demand" => Self::Demand,
            "competition" | "competition level" => Self::Competition,
            "note" | "personal note" | "why it fits" => Self::Note,
            _ => return None,
        };
        Some(field)
    }
}

// ── Record builder ──────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct IdeaDraftBuilder {
    title: Option<String>,
    description: Option<String>,
    category: Option<Category>,
    difficulty: Option<Difficulty>,
    revenue: Option<String>,
    launch: Option<String>,
    skills: Option<Vec<String>>,
    cost: Option<String>,
    margin: Option<String>,
    demand: Option<Level>,
    competition: Option<Level>,
    note: Option<String>,
}

impl IdeaDraftBuilder {
    fn set(&mut self, field: IdeaField, value: &str) {
        let text = Some(value.to_string());
        match field {
            IdeaField::Title => self.title = text,
            IdeaField::Description => self.description = text,
            IdeaField::Category => self.category = Some(Category::from_label(value)),
            IdeaField::Difficulty => self.difficulty = Some(Difficulty::from_label(value)),
            IdeaField::Revenue => self.revenue = text,
            IdeaField::Launch => self.launch = text,
            IdeaField::Skills => self.skills = Some(split_skills(value)),
            IdeaField::Cost => self.cost = text,
            IdeaField::Margin => self.margin = text,
            IdeaField::Demand => self.demand = Some(Level::from_label(value)),
            IdeaField::Competition => self.competition = Some(Level::from_label(value)),
            IdeaField::Note => self.note = text,
        }
    }

    /// Backfill missing fields. Returns `None` when the record has no title.
    fn finish(self) -> Option<BusinessIdeaDraft> {
        let title = self.title?;
        Some(BusinessIdeaDraft {
            title,
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            category: self.category.unwrap_or(Category::General),
            difficulty: self.difficulty.unwrap_or(Difficulty::Medium),
            estimated_revenue_range: self.revenue.unwrap_or_else(|| DEFAULT_REVENUE.to_string()),
            launch_timeframe: self.launch.unwrap_or_else(|| DEFAULT_LAUNCH.to_string()),
            required_skills: self.skills.unwrap_or_default(),
            startup_cost_range: self.cost.unwrap_or_else(|| DEFAULT_COST.to_string()),
            profit_margin_range: self.margin.unwrap_or_else(|| DEFAULT_MARGIN.to_string()),
            market_demand: self.demand.unwrap_or(Level::Medium),
            competition_level: self.competition.unwrap_or(Level::Medium),
            personal_note: self.note.unwrap_or_else(|| DEFAULT_NOTE.to_string()),
        })
    }
}

fn split_skills(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(String::from)
        .collect()
}

// ── Parser ──────────────────────────────────────────────────────────────────

/// Whether `line` opens a new record: `IDEA` in any case, after markdown
/// markers, not continuing into a longer word such as `Ideal`.
fn is_header(line: &str) -> bool {
    let line = line.trim_start_matches(|c: char| c == '#' || c == '*' || c.is_whitespace());
    let Some(prefix) = line.get(..4) else {
        return false;
    };
    prefix.eq_ignore_ascii_case("idea")
        && !line[4..].starts_with(|c: char| c.is_alphabetic())
}

/// Split `Key: value` on the first colon into a known field and a
/// non-empty value.
fn field_line(line: &str) -> Option<(IdeaField, &str)> {
    let line = strip_bullet(line).unwrap_or(line);
    let (key, value) = line.split_once(':')?;
    let (key, value) = unmark_field(key, value);
    let field = IdeaField::from_key(&key.to_lowercase())?;
    (!value.is_empty()).then_some((field, value))
}

/// Parse an idea list response.
#[must_use]
pub fn parse_ideas(raw: &str) -> IdeaParseOutcome {
    let mut ideas = Vec::new();
    let mut current: Option<IdeaDraftBuilder> = None;

    for line in meaningful_lines(raw) {
        if is_header(line) {
            if let Some(draft) = current.take().and_then(IdeaDraftBuilder::finish) {
                ideas.push(draft);
            }
            current = Some(IdeaDraftBuilder::default());
        } else if let (Some(record), Some((field, value))) = (current.as_mut(), field_line(line)) {
            record.set(field, value);
        }
    }
    if let Some(draft) = current.and_then(IdeaDraftBuilder::finish) {
        ideas.push(draft);
    }

    if ideas.is_empty() {
        tracing::debug!("no idea records found in response");
        IdeaParseOutcome::NeedsFallback
    } else {
        tracing::debug!(count = ideas.len(), "parsed idea records");
        IdeaParseOutcome::Ideas(ideas)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const FULL_RECORD: &str = "IDEA 1
Title: Code Review Service
Description: Async reviews for small teams.
Category: Technology
Difficulty: Hard
Revenue: $3K-8K/month
Launch: 1-2 months
Skills: Coding, Communication ,  , Testing
Cost: $200-500
Margin: 60-80%
Demand: High
Competition: Low
Note: Uses your analytical side.";

    #[test]
    fn full_record_is_read_verbatim() {
        let ideas = parse_ideas(FULL_RECORD).into_ideas().unwrap();
        assert_eq!(
            ideas,
            vec![BusinessIdeaDraft {
                title: "Code Review Service".into(),
                description: "Async reviews for small teams.".into(),
                category: Category::Technology,
                difficulty: Difficulty::Hard,
                estimated_revenue_range: "$3K-8K/month".into(),
                launch_timeframe: "1-2 months".into(),
                required_skills: vec!["Coding".into(), "Communication".into(), "Testing".into()],
                startup_cost_range: "$200-500".into(),
                profit_margin_range: "60-80%".into(),
                market_demand: Level::High,
                competition_level: Level::Low,
                personal_note: "Uses your analytical side.".into(),
            }]
        );
    }

    #[test]
    fn missing_fields_are_backfilled() {
        let ideas = parse_ideas("IDEA 1\nTitle: Dog Walking").into_ideas().unwrap();
        let idea = &ideas[0];
        assert_eq!(idea.description, DEFAULT_DESCRIPTION);
        assert_eq!(idea.category, Category::General);
        assert_eq!(idea.difficulty, Difficulty::Medium);
        assert_eq!(idea.estimated_revenue_range, DEFAULT_REVENUE);
        assert_eq!(idea.launch_timeframe, DEFAULT_LAUNCH);
        assert!(idea.required_skills.is_empty());
        assert_eq!(idea.startup_cost_range, DEFAULT_COST);
        assert_eq!(idea.profit_margin_range, DEFAULT_MARGIN);
        assert_eq!(idea.market_demand, Level::Medium);
        assert_eq!(idea.competition_level, Level::Medium);
        assert_eq!(idea.personal_note, DEFAULT_NOTE);
    }

    #[test]
    fn value_splits_on_first_colon_only() {
        let ideas = parse_ideas("IDEA 1\nTitle: Ratio: A Budget App")
            .into_ideas()
            .unwrap();
        assert_eq!(ideas[0].title, "Ratio: A Budget App");
    }

    #[test]
    fn untitled_record_is_dropped_silently() {
        let raw = "IDEA 1\nDescription: no title here\nIDEA 2\nTitle: Kept";
        let ideas = parse_ideas(raw).into_ideas().unwrap();
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].title, "Kept");
    }

    #[test]
    fn empty_value_keeps_default() {
        let ideas = parse_ideas("IDEA 1\nTitle: Bakery\nRevenue:   \nDemand:")
            .into_ideas()
            .unwrap();
        assert_eq!(ideas[0].estimated_revenue_range, DEFAULT_REVENUE);
        assert_eq!(ideas[0].market_demand, Level::Medium);
    }

    #[test]
    fn markdown_decoration_is_tolerated() {
        let raw = "## **IDEA 1**\n**Title:** Pop-up Cafe\n- **Category:** Food\nStartup Cost: $5K";
        let ideas = parse_ideas(raw).into_ideas().unwrap();
        assert_eq!(ideas[0].title, "Pop-up Cafe");
        assert_eq!(ideas[0].category, Category::Food);
        assert_eq!(ideas[0].startup_cost_range, "$5K");
    }

    #[test]
    fn language_names_keep_their_hash() {
        let raw = "IDEA 1\nTitle: Learn C#\nSkills: Python, C#, F#\nNote: **Great for .NET devs**";
        let ideas = parse_ideas(raw).into_ideas().unwrap();
        assert_eq!(ideas[0].title, "Learn C#");
        assert_eq!(ideas[0].required_skills, ["Python", "C#", "F#"]);
        assert_eq!(ideas[0].personal_note, "Great for .NET devs");
    }

    #[test]
    fn unknown_keys_and_preamble_are_ignored() {
        let raw = "Title: before any header\nIDEA 1\nTitle: Real\nMood: great";
        let ideas = parse_ideas(raw).into_ideas().unwrap();
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].title, "Real");
    }

    #[rstest]
    #[case("")]
    #[case("Sorry, I cannot help with that.")]
    #[case("Title: Orphan\nDescription: no header")]
    #[case("IDEA 1\nDescription: still no title")]
    fn nothing_usable_needs_fallback(#[case] raw: &str) {
        assert_eq!(parse_ideas(raw), IdeaParseOutcome::NeedsFallback);
    }

    #[rstest]
    #[case("IDEA 1", true)]
    #[case("idea 2:", true)]
    #[case("### Idea #3", true)]
    #[case("**IDEA 4**", true)]
    #[case("Ideal customers: parents", false)]
    #[case("Ideas below", false)]
    #[case("Title: IDEA", false)]
    fn header_detection(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_header(line), expected);
    }

    #[rstest]
    #[case("title", Some(IdeaField::Title))]
    #[case("startup cost", Some(IdeaField::Cost))]
    #[case("profit margin", Some(IdeaField::Margin))]
    #[case("market demand", Some(IdeaField::Demand))]
    #[case("mood", None)]
    fn field_keys(#[case] key: &str, #[case] expected: Option<IdeaField>) {
        assert_eq!(IdeaField::from_key(key), expected);
    }
}

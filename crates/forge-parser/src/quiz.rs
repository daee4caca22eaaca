//! Quiz option parser.

use forge_core::entities::QuizOptionSet;
use forge_core::enums::QuizStep;

use crate::lines::{meaningful_lines, strip_ordinal, unmark};

/// Clean a single candidate line, or `None` when it is not an option.
///
/// Dash lines are treated as commentary and skipped. A leading ordinal
/// (`1.`, `2)`) or bullet (`•`, `*`) followed by whitespace is removed.
fn clean_option(line: &str) -> Option<String> {
    if line.starts_with('-') {
        return None;
    }
    let stripped = strip_ordinal(line)
        .or_else(|| line.strip_prefix('•').map(str::trim_start))
        .or_else(|| {
            line.strip_prefix('*')
                .filter(|rest| rest.starts_with(char::is_whitespace))
                .map(str::trim_start)
        })
        .unwrap_or(line);
    let option = unmark(stripped);
    (!option.is_empty()).then(|| option.to_string())
}

/// Parse one option per line, in order, without deduplication.
#[must_use]
pub fn parse_quiz_options(step: QuizStep, raw: &str) -> QuizOptionSet {
    QuizOptionSet {
        step_category: step,
        options: meaningful_lines(raw).filter_map(clean_option).collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1. Data Analysis", Some("Data Analysis"))]
    #[case("2) Public Speaking", Some("Public Speaking"))]
    #[case("• Creative", Some("Creative"))]
    #[case("* Curious", Some("Curious"))]
    #[case("**Bold Option**", Some("Bold Option"))]
    #[case("- a dash note", None)]
    #[case("Plain Option", Some("Plain Option"))]
    #[case("C#", Some("C#"))]
    #[case("3. F#", Some("F#"))]
    #[case("• **C#**", Some("C#"))]
    fn options_are_cleaned(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(clean_option(line).as_deref(), expected);
    }

    #[test]
    fn order_and_duplicates_are_kept() {
        let set = parse_quiz_options(
            QuizStep::Skills,
            "1. Writing\n\n   \n2. Coding\n- skip me\n3. Writing\n",
        );
        assert_eq!(set.step_category, QuizStep::Skills);
        assert_eq!(set.options, ["Writing", "Coding", "Writing"]);
    }

    #[test]
    fn trailing_hash_is_kept() {
        let set = parse_quiz_options(QuizStep::Skills, "C#\nF#\nPython");
        assert_eq!(set.options, ["C#", "F#", "Python"]);
    }

    #[test]
    fn empty_response_yields_no_options() {
        assert!(parse_quiz_options(QuizStep::Interests, "").options.is_empty());
    }
}

//! Timeline JSON parser.

use forge_core::entities::TimelineStage;

use crate::error::ParseError;

/// Parse a timeline stage array out of a response.
///
/// Markdown code fences are removed, then the text from the first `[` to the
/// last `]` is decoded strictly. There is no partial recovery.
///
/// # Errors
///
/// Returns [`ParseError::MissingArray`] when no bracketed span exists, or
/// [`ParseError::Json`] when the span is not a valid stage array.
pub fn parse_timeline(raw: &str) -> Result<Vec<TimelineStage>, ParseError> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let start = cleaned.find('[').ok_or(ParseError::MissingArray)?;
    let end = cleaned.rfind(']').ok_or(ParseError::MissingArray)?;
    if end < start {
        return Err(ParseError::MissingArray);
    }
    let stages: Vec<TimelineStage> = serde_json::from_str(&cleaned[start..=end])?;
    tracing::debug!(count = stages.len(), "parsed timeline stages");
    Ok(stages)
}

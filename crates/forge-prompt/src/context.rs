//! Behavioral context block appended to every outbound prompt.
//!
//! [`build_context_block`] is a pure function of the snapshot. Sections whose
//! data is absent are left out entirely; they are never rendered as empty or
//! placeholder text. A snapshot with no data yields an empty string.

use chrono::NaiveTime;
use forge_config::ContextConfig;
use forge_core::behavior::BehaviorSnapshot;

/// Header line that opens a non-empty context block.
pub const CONTEXT_HEADER: &str = "USER CONTEXT:";

/// Bounds on how much of the snapshot is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextLimits {
    pub max_features: usize,
    pub max_conversations: usize,
    pub max_notes: usize,
    pub response_excerpt_chars: usize,
    pub note_excerpt_chars: usize,
}

impl Default for ContextLimits {
    fn default() -> Self {
        Self::from(&ContextConfig::default())
    }
}

impl From<&ContextConfig> for ContextLimits {
    fn from(config: &ContextConfig) -> Self {
        Self {
            max_features: config.max_features,
            max_conversations: config.max_conversations,
            max_notes: config.max_notes,
            response_excerpt_chars: config.response_excerpt_chars,
            note_excerpt_chars: config.note_excerpt_chars,
        }
    }
}

/// Summarize `snapshot` as a text block, bounded by `limits`.
///
/// # Examples
///
/// ```
/// use forge_core::behavior::BehaviorSnapshot;
/// use forge_prompt::{ContextLimits, build_context_block};
///
/// let snapshot = BehaviorSnapshot {
///     ai_interaction_count: Some(7),
///     ..BehaviorSnapshot::default()
/// };
/// let block = build_context_block(&snapshot, &ContextLimits::default());
/// assert_eq!(block, "USER CONTEXT:\n- AI interactions: 7");
///
/// let empty = BehaviorSnapshot::default();
/// assert!(build_context_block(&empty, &ContextLimits::default()).is_empty());
/// ```
#[must_use]
pub fn build_context_block(snapshot: &BehaviorSnapshot, limits: &ContextLimits) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !snapshot.activity_by_category.is_empty() {
        lines.push(format!(
            "- Recent activity: {}",
            ranked_counts(snapshot.activity_by_category.iter(), usize::MAX)
        ));
    }

    let features = ranked_counts(snapshot.feature_usage.iter(), limits.max_features);
    if !features.is_empty() {
        lines.push(format!("- Most used features: {features}"));
    }

    let keywords = non_blank(&snapshot.focus_keywords);
    if !keywords.is_empty() {
        lines.push(format!("- Business focus: {}", keywords.join(", ")));
    }

    let industries = non_blank(&snapshot.preferred_industries);
    if !industries.is_empty() {
        lines.push(format!("- Preferred industries: {}", industries.join(", ")));
    }

    let conversations = tail(&snapshot.recent_conversations, limits.max_conversations);
    if !conversations.is_empty() {
        lines.push("- Recent AI conversations:".to_string());
        for exchange in conversations {
            lines.push(format!(
                "  * Q: {} | A: {}",
                exchange.query.trim(),
                excerpt(&exchange.response, limits.response_excerpt_chars)
            ));
        }
    }

    let notes = tail(&snapshot.recent_notes, limits.max_notes);
    if !notes.is_empty() {
        lines.push("- Recent notes:".to_string());
        for note in notes {
            lines.push(format!(
                "  * [{}] {}",
                note.category.trim(),
                excerpt(&note.content, limits.note_excerpt_chars)
            ));
        }
    }

    if let Some(rate) = snapshot.goal_completion_rate.filter(|r| r.is_finite()) {
        lines.push(format!("- Goal completion rate: {}%", percent(rate)));
    }

    if let Some(count) = snapshot.ai_interaction_count {
        lines.push(format!("- AI interactions: {count}"));
    }

    let hours: Vec<String> = snapshot
        .preferred_reminder_hours
        .iter()
        .filter_map(|&hour| format_hour(hour))
        .collect();
    if !hours.is_empty() {
        lines.push(format!("- Preferred reminder times: {}", hours.join(", ")));
    }

    if lines.is_empty() {
        return String::new();
    }

    let mut block = String::from(CONTEXT_HEADER);
    for line in lines {
        block.push('\n');
        block.push_str(&line);
    }
    block
}

/// `name (count)` pairs sorted by count descending, then name, capped at `limit`.
fn ranked_counts<'a>(counts: impl Iterator<Item = (&'a String, &'a u32)>, limit: usize) -> String {
    let mut ranked: Vec<(&String, &u32)> =
        counts.filter(|(name, _)| !name.trim().is_empty()).collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(name, count)| format!("{name} ({count})"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_blank(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Last `n` items, oldest first.
fn tail<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// Trim `text` and cut it to `max_chars` characters, marking the cut with `...`.
fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(rate: f64) -> u32 {
    (rate.clamp(0.0, 1.0) * 100.0).round() as u32
}

/// Render an hour of day as `9:00 AM`. Hours outside `0..=23` yield `None`.
fn format_hour(hour: u8) -> Option<String> {
    NaiveTime::from_hms_opt(u32::from(hour), 0, 0).map(|t| t.format("%-I:%M %p").to_string())
}

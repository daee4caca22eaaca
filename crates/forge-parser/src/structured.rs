//! Strict JSON parsers for the structured timeline tasks.
//!
//! The raw response is decoded as-is. Anything other than the exact object
//! the template asked for is an error.

use forge_core::entities::{OptimizationOrder, SmartSuggestionBundle, TimelineModificationPlan};

use crate::error::ParseError;

/// # Errors
///
/// Returns [`ParseError::Json`] when the response is not a modification plan.
pub fn parse_modification_plan(raw: &str) -> Result<TimelineModificationPlan, ParseError> {
    let mut plan: TimelineModificationPlan = serde_json::from_str(raw)?;
    plan.confidence = plan.confidence.clamp(0.0, 1.0);
    Ok(plan)
}

/// # Errors
///
/// Returns [`ParseError::Json`] when the response is not a suggestion bundle.
pub fn parse_suggestions(raw: &str) -> Result<SmartSuggestionBundle, ParseError> {
    Ok(serde_json::from_str(raw)?)
}

/// # Errors
///
/// Returns [`ParseError::Json`] when the response is not an optimization order.
pub fn parse_optimization(raw: &str) -> Result<OptimizationOrder, ParseError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use forge_core::enums::{Level, ModificationKind};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn modification_plan_decodes() {
        let raw = r#"{
            "kind": "add",
            "confidence": 0.8,
            "reasoning": "Add a pricing stage",
            "changes": [{
                "stageId": null,
                "newStage": {
                    "title": "Pricing",
                    "description": "Set prices",
                    "duration": "1 week",
                    "keyTasks": ["Survey"],
                    "successMetrics": ["Price set"],
                    "emoji": "💰"
                },
                "newPosition": 2
            }],
            "suggestedReminders": [{"title": "Check", "message": "Review prices", "daysFromNow": 7}]
        }"#;

        let plan = parse_modification_plan(raw).unwrap();
        assert_eq!(plan.kind, ModificationKind::Add);
        assert_eq!(plan.changes.len(), 1);
        assert_eq!(plan.changes[0].stage_id, None);
        assert_eq!(plan.changes[0].new_position, Some(2));
        assert_eq!(plan.suggested_reminders[0].days_from_now, 7);
        assert!(plan.suggested_notes.is_empty());
    }

    #[test]
    fn confidence_is_clamped() {
        let raw = r#"{"kind":"reorder","confidence":1.7,"reasoning":"r","changes":[]}"#;
        assert!((parse_modification_plan(raw).unwrap().confidence - 1.0).abs() < f64::EPSILON);
        let raw = r#"{"kind":"reorder","confidence":-3,"reasoning":"r","changes":[]}"#;
        assert!(parse_modification_plan(raw).unwrap().confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn prose_around_json_is_rejected() {
        let raw = r#"Sure! {"kind":"add","confidence":0.5,"reasoning":"r","changes":[]}"#;
        assert!(matches!(parse_modification_plan(raw), Err(ParseError::Json(_))));
    }

    #[test]
    fn suggestions_accept_partial_bundle() {
        let raw = r#"{"nextActions":[{"title":"Call","description":"Call 3 leads","priority":"High","estimatedTime":"1 hour"}]}"#;
        let bundle = parse_suggestions(raw).unwrap();
        assert_eq!(bundle.next_actions[0].priority, Level::High);
        assert!(bundle.risk_items.is_empty());
    }

    #[test]
    fn optimization_decodes_and_rejects_garbage() {
        let order = parse_optimization(r#"{"orderedStageIds":["b","a"],"reasoning":"b first"}"#)
            .unwrap();
        assert_eq!(order.ordered_stage_ids, ["b", "a"]);
        assert!(parse_optimization("not json").is_err());
    }
}

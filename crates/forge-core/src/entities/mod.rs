//! Entity structs produced and consumed by the AI pipeline.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Types the
//! model returns as strict JSON use camelCase field names on the wire.

mod idea;
mod quiz;
mod suggestions;
mod swot;
mod timeline;

pub use idea::BusinessIdeaDraft;
pub use quiz::QuizOptionSet;
pub use suggestions::{
    ImprovementOpportunity, MilestoneAdjustment, NextAction, ResourceRecommendation, RiskItem,
    SmartSuggestionBundle,
};
pub use swot::SwotAnalysis;
pub use timeline::{
    ChangeOp, ExistingStage, OptimizationOrder, SuggestedNote, SuggestedReminder,
    TimelineModificationPlan, TimelineStage,
};

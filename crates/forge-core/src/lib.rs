//! # forge-core
//!
//! Core types shared across all IdeaForge crates:
//! - Entity structs produced by the AI pipeline (idea drafts, SWOT analyses,
//!   timeline stages, modification plans, suggestion bundles)
//! - Closed label enums with tolerant parsing from model output
//! - The behavioral snapshot read by the prompt context builder
//! - The error taxonomy every crate-level error maps onto

pub mod behavior;
pub mod entities;
pub mod enums;
pub mod errors;

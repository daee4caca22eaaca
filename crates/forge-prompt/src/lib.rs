//! # forge-prompt
//!
//! Prompt construction for every IdeaForge AI task.
//!
//! - [`context`] turns a [`BehaviorSnapshot`](forge_core::behavior::BehaviorSnapshot)
//!   into a bounded text block summarizing what the user has been doing.
//! - [`tasks`] holds the typed parameters of each task.
//! - [`templates`] renders the task-specific instructions. Some downstream
//!   parsers depend on the exact structure these templates request.
//! - [`PromptEngine`] combines the two into a [`PromptRequest`].
//!
//! Rendering is pure and never fails: missing parameters render as empty
//! segments.

pub mod context;
pub mod params;
pub mod tasks;
pub mod templates;

mod engine;
mod request;

pub use context::{ContextLimits, build_context_block};
pub use engine::{PromptEngine, PromptTask};
pub use params::{ParamValue, TemplateParams};
pub use request::PromptRequest;

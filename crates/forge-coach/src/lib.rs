//! # forge-coach
//!
//! The IdeaForge AI pipeline. A [`Coach`] renders a task prompt with the
//! user's behavioral context, makes one gateway call, and parses the
//! response into a typed entity.
//!
//! Idea and timeline generation always return content: failures are logged
//! and replaced with deterministic fallback content through
//! [`with_fallback`]. Every other operation surfaces a [`CoachError`].
//!
//! The gateway and the context source are injected, so either can be
//! replaced with a fake in tests.

mod coach;
pub mod context;
pub mod error;
mod policy;

pub use coach::Coach;
pub use context::{ContextSource, EmptyContext};
pub use error::CoachError;
pub use policy::with_fallback;

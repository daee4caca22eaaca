//! # forge-parser
//!
//! Turns raw model output into IdeaForge entities.
//!
//! - **Text parsers** (ideas, quiz options, SWOT) are tolerant: they skip
//!   noise, backfill defaults, and never fail. The idea parser signals
//!   [`IdeaParseOutcome::NeedsFallback`] when nothing usable was found.
//! - **JSON parsers** (timeline, modification plan, suggestions,
//!   optimization) are strict and return [`ParseError`].
//! - **Fallback content** ([`fallback_ideas`], [`fallback_timeline`]) is
//!   deterministic and used by callers when a call or parse yields nothing.

pub mod error;
pub mod fallback;
pub mod ideas;
mod lines;
pub mod quiz;
pub mod structured;
pub mod swot;
pub mod timeline;

pub use error::ParseError;
pub use fallback::{fallback_ideas, fallback_timeline};
pub use ideas::{IdeaField, IdeaParseOutcome, parse_ideas};
pub use quiz::parse_quiz_options;
pub use structured::{parse_modification_plan, parse_optimization, parse_suggestions};
pub use swot::parse_swot;
pub use timeline::parse_timeline;

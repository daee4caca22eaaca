//! Sources of the behavioral snapshot summarized into every prompt.

use std::sync::Arc;

use forge_core::behavior::BehaviorSnapshot;

/// Supplies the user's current behavioral snapshot.
///
/// Called once per task, immediately before the prompt is rendered.
pub trait ContextSource: Send + Sync {
    fn snapshot(&self) -> BehaviorSnapshot;
}

impl ContextSource for BehaviorSnapshot {
    fn snapshot(&self) -> BehaviorSnapshot {
        self.clone()
    }
}

impl<C: ContextSource + ?Sized> ContextSource for Arc<C> {
    fn snapshot(&self) -> BehaviorSnapshot {
        (**self).snapshot()
    }
}

/// A source with no behavioral data. Prompts carry no context block.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyContext;

impl ContextSource for EmptyContext {
    fn snapshot(&self) -> BehaviorSnapshot {
        BehaviorSnapshot::default()
    }
}

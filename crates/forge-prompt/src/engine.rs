//! Combines task templates with the behavioral context block.

use forge_core::behavior::BehaviorSnapshot;
use forge_core::enums::TaskKind;

use crate::context::{ContextLimits, build_context_block};
use crate::params::TemplateParams;
use crate::request::PromptRequest;

/// A task that can be rendered into a prompt.
pub trait PromptTask {
    const KIND: TaskKind;

    /// Parameters the task template is rendered from.
    fn parameters(&self) -> TemplateParams;

    /// The literal request line that closes the prompt.
    fn request_text(&self) -> String;
}

/// Renders tasks into [`PromptRequest`]s using fixed context bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptEngine {
    limits: ContextLimits,
}

impl PromptEngine {
    #[must_use]
    pub const fn new(limits: ContextLimits) -> Self {
        Self { limits }
    }

    /// Build the request for `task`, summarizing `snapshot` as its context block.
    #[must_use]
    pub fn render<T: PromptTask>(&self, task: &T, snapshot: &BehaviorSnapshot) -> PromptRequest {
        PromptRequest {
            task_kind: T::KIND,
            template_parameters: task.parameters(),
            context_block: build_context_block(snapshot, &self.limits),
            request_text: task.request_text(),
        }
    }
}

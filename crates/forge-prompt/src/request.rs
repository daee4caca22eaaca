//! Final prompt request for one AI task.

use forge_core::enums::TaskKind;
use serde::{Deserialize, Serialize};

use crate::params::TemplateParams;
use crate::templates::render_template;

/// Label that introduces the literal request text at the end of a prompt.
pub const REQUEST_LABEL: &str = "CURRENT REQUEST:";

/// Everything needed to produce the outbound prompt text.
///
/// The context block always follows the rendered template and is never
/// interleaved with task parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub task_kind: TaskKind,
    pub template_parameters: TemplateParams,
    pub context_block: String,
    pub request_text: String,
}

impl PromptRequest {
    /// Render the full prompt: template, context block, request line.
    #[must_use]
    pub fn text(&self) -> String {
        let mut prompt = render_template(self.task_kind, &self.template_parameters);
        if !self.context_block.is_empty() {
            prompt.push_str("\n\n");
            prompt.push_str(&self.context_block);
        }
        if !self.request_text.is_empty() {
            prompt.push_str("\n\n");
            prompt.push_str(REQUEST_LABEL);
            prompt.push(' ');
            prompt.push_str(&self.request_text);
        }
        prompt
    }
}

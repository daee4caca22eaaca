//! Bounds for the behavioral context block appended to prompts.

use serde::{Deserialize, Serialize};

const fn default_max_features() -> usize {
    3
}

const fn default_max_conversations() -> usize {
    3
}

const fn default_max_notes() -> usize {
    3
}

const fn default_response_excerpt_chars() -> usize {
    100
}

const fn default_note_excerpt_chars() -> usize {
    80
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContextConfig {
    /// How many of the most-used features to list.
    #[serde(default = "default_max_features")]
    pub max_features: usize,

    /// How many recent AI exchanges to include.
    #[serde(default = "default_max_conversations")]
    pub max_conversations: usize,

    /// How many recent notes to include.
    #[serde(default = "default_max_notes")]
    pub max_notes: usize,

    /// AI responses are cut to this many characters.
    #[serde(default = "default_response_excerpt_chars")]
    pub response_excerpt_chars: usize,

    /// Note bodies are cut to this many characters.
    #[serde(default = "default_note_excerpt_chars")]
    pub note_excerpt_chars: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_features: default_max_features(),
            max_conversations: default_max_conversations(),
            max_notes: default_max_notes(),
            response_excerpt_chars: default_response_excerpt_chars(),
            note_excerpt_chars: default_note_excerpt_chars(),
        }
    }
}

//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_stage_count() -> u32 {
    6
}

const fn default_quiz_option_count() -> u32 {
    8
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Stage count used when a timeline request does not specify one.
    #[serde(default = "default_stage_count")]
    pub default_stage_count: u32,

    #[serde(default = "default_quiz_option_count")]
    pub quiz_option_count: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_stage_count: default_stage_count(),
            quiz_option_count: default_quiz_option_count(),
        }
    }
}

//! # forge-config
//!
//! Layered configuration loading for IdeaForge using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FORGE_*` prefix, `__` as separator)
//! 2. Project-level `.ideaforge/config.toml`
//! 3. User-level `~/.config/ideaforge/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FORGE_GEMINI__API_KEY` -> `gemini.api_key`,
//! `FORGE_CONTEXT__MAX_NOTES` -> `context.max_notes`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use forge_config::ForgeConfig;
//!
//! let config = ForgeConfig::load_with_dotenv().expect("config");
//!
//! if !config.gemini.is_configured() {
//!     eprintln!("set FORGE_GEMINI__API_KEY to enable AI features");
//! }
//! ```

mod context;
mod error;
mod gemini;
mod general;

pub use context::ContextConfig;
pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ForgeConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub context: ContextConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ForgeConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if a loaded value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".ideaforge/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("FORGE_").split("__"))
    }

    /// Reject values the pipeline cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini.base_url.trim().is_empty() {
            return Err(invalid("gemini.base_url", "must not be empty"));
        }
        if self.gemini.model.trim().is_empty() {
            return Err(invalid("gemini.model", "must not be empty"));
        }
        if self.gemini.connect_timeout_secs == 0 {
            return Err(invalid("gemini.connect_timeout_secs", "must be at least 1"));
        }
        if self.gemini.request_timeout_secs < self.gemini.connect_timeout_secs {
            return Err(invalid(
                "gemini.request_timeout_secs",
                "must not be shorter than gemini.connect_timeout_secs",
            ));
        }
        if self.general.default_stage_count == 0 {
            return Err(invalid("general.default_stage_count", "must be at least 1"));
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ideaforge").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available), else tries the
    /// current directory. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

//! Pipeline error type for forge-coach.

use forge_core::enums::TaskKind;
use forge_core::errors::ErrorKind;
use forge_gateway::GatewayError;
use forge_parser::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum CoachError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{task} response contained nothing usable")]
    NothingUsable { task: TaskKind },
}

impl CoachError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Gateway(e) => e.kind(),
            Self::Parse(e) => e.kind(),
            Self::NothingUsable { .. } => ErrorKind::ProtocolViolation,
        }
    }

    /// Message suitable for showing to the end user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}

//! Error types for study sessions.

use scheduler_core::ConfigError;
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the session orchestrator, parameterized over the
/// record store's own error type.
#[derive(Debug, Error)]
pub enum SessionError<E>
where
    E: std::error::Error + 'static,
{
    #[error("deck not found: {0}")]
    DeckNotFound(Uuid),

    #[error("no card is currently presented")]
    NoCurrentCard,

    #[error("invalid review intervals: {0}")]
    Config(#[from] ConfigError),

    #[error("record store: {0}")]
    Store(#[source] E),
}

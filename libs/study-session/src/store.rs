//! Abstract record store consumed by the session orchestrator.
//!
//! The concrete persistence format is out of scope here; anything that can
//! hand back cards, decks, logs and settings (and append a log) can back a
//! study session. All calls are fallible I/O.

use scheduler_core::{Card, Deck, StudyLog, UserSettings};
use uuid::Uuid;

/// Storage operations the engine needs.
///
/// Logs are append-only: `save_log` is the only write, and a failed save
/// must leave the store unchanged.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get_all_cards(&self) -> Result<Vec<Card>, Self::Error>;

    async fn get_all_decks(&self) -> Result<Vec<Deck>, Self::Error>;

    async fn get_deck_by_id(&self, id: Uuid) -> Result<Option<Deck>, Self::Error>;

    async fn get_all_logs(&self) -> Result<Vec<StudyLog>, Self::Error>;

    async fn save_log(&self, log: &StudyLog) -> Result<(), Self::Error>;

    async fn get_settings(&self) -> Result<UserSettings, Self::Error>;
}

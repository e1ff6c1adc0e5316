//! Shared test fixtures: an in-memory record store with failure injection.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use uuid::Uuid;

use scheduler_core::{Card, Deck, ResponseType, StudyLog, UserSettings};
use study_session::RecordStore;

#[derive(Debug, Error)]
pub enum MemoryStoreError {
    #[error("save rejected")]
    SaveRejected,
}

#[derive(Default)]
struct Inner {
    decks: Vec<Deck>,
    cards: Vec<Card>,
    logs: Vec<StudyLog>,
    settings: UserSettings,
    fail_saves: bool,
}

/// In-memory store; clones share the same underlying data so tests can keep
/// a handle after moving a clone into the session.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_deck(&self, name: &str) -> Deck {
        let deck = Deck {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        self.inner.lock().unwrap().decks.push(deck.clone());
        deck
    }

    pub fn add_card(&self, deck_id: Uuid, front: &str, back: &str) -> Card {
        let card = Card {
            id: Uuid::new_v4(),
            deck_id,
            front: front.to_string(),
            back: back.to_string(),
        };
        self.inner.lock().unwrap().cards.push(card.clone());
        card
    }

    pub fn add_log(
        &self,
        card_id: Uuid,
        deck_id: Uuid,
        studied_at: DateTime<Utc>,
        response: ResponseType,
        interval: Duration,
    ) -> StudyLog {
        let log = StudyLog {
            id: Uuid::new_v4(),
            card_id,
            deck_id,
            studied_at,
            response_ms: 3_000,
            response,
            next_review_date: studied_at + interval,
        };
        self.inner.lock().unwrap().logs.push(log.clone());
        log
    }

    pub fn set_settings(&self, settings: UserSettings) {
        self.inner.lock().unwrap().settings = settings;
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.inner.lock().unwrap().fail_saves = fail;
    }

    pub fn logs(&self) -> Vec<StudyLog> {
        self.inner.lock().unwrap().logs.clone()
    }
}

impl RecordStore for MemoryStore {
    type Error = MemoryStoreError;

    async fn get_all_cards(&self) -> Result<Vec<Card>, Self::Error> {
        Ok(self.inner.lock().unwrap().cards.clone())
    }

    async fn get_all_decks(&self) -> Result<Vec<Deck>, Self::Error> {
        Ok(self.inner.lock().unwrap().decks.clone())
    }

    async fn get_deck_by_id(&self, id: Uuid) -> Result<Option<Deck>, Self::Error> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .decks
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    async fn get_all_logs(&self) -> Result<Vec<StudyLog>, Self::Error> {
        Ok(self.inner.lock().unwrap().logs.clone())
    }

    async fn save_log(&self, log: &StudyLog) -> Result<(), Self::Error> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_saves {
            return Err(MemoryStoreError::SaveRejected);
        }
        inner.logs.push(log.clone());
        Ok(())
    }

    async fn get_settings(&self) -> Result<UserSettings, Self::Error> {
        Ok(self.inner.lock().unwrap().settings.clone())
    }
}

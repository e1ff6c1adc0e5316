//! Study session orchestration.
//!
//! A session is one bounded pass over a fixed queue of due card ids, built
//! once at start (new cards plus due reviews, shuffled) and never reordered
//! mid-pass. Each answer computes a next review date, persists a log, and
//! advances; when the position reaches the end the session is complete.

use std::collections::HashMap;

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::Serialize;
use uuid::Uuid;

use scheduler_core::{
    next_review_date, select_today_cards, success_rate, Card, Deck, ResponseType, StudyLog,
    UserSettings,
};

use crate::error::SessionError;
use crate::store::RecordStore;

/// Running counts for one study pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionStats {
    pub wrong: u32,
    pub again: u32,
    pub hard: u32,
    pub correct: u32,
    pub easy: u32,
    #[serde(skip)]
    score_sum: f64,
}

impl SessionStats {
    fn record(&mut self, response: ResponseType, response_ms: i64) {
        match response {
            ResponseType::Wrong => self.wrong += 1,
            ResponseType::Again => self.again += 1,
            ResponseType::Hard => self.hard += 1,
            ResponseType::Correct => self.correct += 1,
            ResponseType::Easy => self.easy += 1,
        }
        self.score_sum += success_rate(response, response_ms);
    }

    /// Count for one response type.
    pub fn count(&self, response: ResponseType) -> u32 {
        match response {
            ResponseType::Wrong => self.wrong,
            ResponseType::Again => self.again,
            ResponseType::Hard => self.hard,
            ResponseType::Correct => self.correct,
            ResponseType::Easy => self.easy,
        }
    }

    /// Total answers recorded this pass.
    pub fn total(&self) -> u32 {
        self.wrong + self.again + self.hard + self.correct + self.easy
    }

    /// Mean success-rate score of the pass, if anything was answered.
    pub fn mean_success_rate(&self) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.score_sum / f64::from(total))
    }
}

/// One interactive study pass over a deck.
///
/// The caller is expected to serialize interactions: one current card, one
/// outstanding `respond` at a time. The store is the only shared resource.
pub struct StudySession<S: RecordStore> {
    store: S,
    deck: Deck,
    /// Deck cards in store order; the queue-selection scope.
    cards: Vec<Card>,
    cards_by_id: HashMap<Uuid, usize>,
    /// Full log history as loaded, plus logs persisted during this session.
    logs: Vec<StudyLog>,
    settings: UserSettings,
    queue: Vec<Uuid>,
    position: usize,
    stats: SessionStats,
}

impl<S: RecordStore> StudySession<S> {
    /// Load a deck and build today's shuffled queue.
    ///
    /// Fails if the deck does not exist or the configured intervals are
    /// invalid; an empty queue is not an error, the session just starts
    /// complete.
    pub async fn start(store: S, deck_id: Uuid) -> Result<Self, SessionError<S::Error>> {
        let deck = store
            .get_deck_by_id(deck_id)
            .await
            .map_err(SessionError::Store)?
            .ok_or(SessionError::DeckNotFound(deck_id))?;

        let settings = store.get_settings().await.map_err(SessionError::Store)?;
        settings.intervals.validate()?;

        let cards: Vec<Card> = store
            .get_all_cards()
            .await
            .map_err(SessionError::Store)?
            .into_iter()
            .filter(|c| c.deck_id == deck_id)
            .collect();
        let cards_by_id = cards.iter().enumerate().map(|(i, c)| (c.id, i)).collect();
        let logs = store.get_all_logs().await.map_err(SessionError::Store)?;

        let mut session = Self {
            store,
            deck,
            cards,
            cards_by_id,
            logs,
            settings,
            queue: Vec::new(),
            position: 0,
            stats: SessionStats::default(),
        };
        session.rebuild_queue();

        tracing::info!(
            deck = %session.deck.name,
            total = session.queue.len(),
            "study session started"
        );
        Ok(session)
    }

    /// Record an answer for the current card.
    ///
    /// Persists the resulting log before any in-memory state changes; if
    /// the store rejects the write, the current card, position and stats
    /// are left exactly as they were.
    pub async fn respond(
        &mut self,
        response: ResponseType,
        response_ms: i64,
    ) -> Result<StudyLog, SessionError<S::Error>> {
        let card = self.current_card().ok_or(SessionError::NoCurrentCard)?;
        let card_id = card.id;
        let deck_id = card.deck_id;

        let now = Utc::now();
        let due = next_review_date(card_id, response, &self.logs, &self.settings.intervals, now);
        let log = StudyLog {
            id: Uuid::new_v4(),
            card_id,
            deck_id,
            studied_at: now,
            response_ms,
            response,
            next_review_date: due,
        };

        self.store.save_log(&log).await.map_err(SessionError::Store)?;

        self.logs.push(log.clone());
        self.stats.record(response, response_ms);
        self.position += 1;

        if self.is_complete() {
            tracing::info!(deck = %self.deck.name, answered = self.stats.total(), "session complete");
        } else {
            tracing::debug!(
                card = %card_id,
                response = response.as_str(),
                next_due = %due,
                "response recorded"
            );
        }
        Ok(log)
    }

    /// Recompute today's queue and start a fresh pass.
    ///
    /// Logs persisted during the pass that just finished are re-read from
    /// the store, so cards already answered today stay excluded.
    pub async fn reset(&mut self) -> Result<(), SessionError<S::Error>> {
        let settings = self.store.get_settings().await.map_err(SessionError::Store)?;
        settings.intervals.validate()?;
        self.settings = settings;
        self.logs = self.store.get_all_logs().await.map_err(SessionError::Store)?;
        self.rebuild_queue();

        tracing::info!(deck = %self.deck.name, total = self.queue.len(), "session reset");
        Ok(())
    }

    /// The card currently presented, if the pass is not complete.
    pub fn current_card(&self) -> Option<&Card> {
        self.queue
            .get(self.position)
            .and_then(|id| self.cards_by_id.get(id))
            .map(|&i| &self.cards[i])
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.queue.len()
    }

    /// Cards left in the pass, including the current one.
    pub fn remaining(&self) -> usize {
        self.queue.len() - self.position
    }

    /// Queue length for this pass.
    pub fn total(&self) -> usize {
        self.queue.len()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Select today's cards for this deck and shuffle them into a queue.
    /// Shuffling happens here only; the order is fixed for the whole pass.
    fn rebuild_queue(&mut self) {
        let scope: Vec<Uuid> = self.cards.iter().map(|c| c.id).collect();
        let selection = select_today_cards(
            &self.logs,
            self.settings.new_cards_per_day,
            self.settings.reviews_per_day,
            &scope,
            Utc::now(),
        );
        tracing::debug!(
            new = selection.new_card_ids.len(),
            review = selection.review_card_ids.len(),
            "queue selected"
        );

        let mut queue: Vec<Uuid> = selection
            .new_card_ids
            .into_iter()
            .chain(selection.review_card_ids)
            .collect();
        queue.shuffle(&mut thread_rng());

        self.queue = queue;
        self.position = 0;
        self.stats = SessionStats::default();
    }
}

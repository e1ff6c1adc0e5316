//! Core scheduling library for the review scheduler.
//!
//! Provides:
//! - Interval calculator: maps a card's log history and an answer to the
//!   next review timestamp
//! - Success-rate scorer for recorded answers
//! - Daily queue selector: partitions a card pool into capped new/review
//!   work lists for the current study day
//! - Shared types (StudyLog, Card, ResponseType, settings, etc.)
//!
//! Everything here is pure: the current instant is always an explicit
//! parameter and all scheduling state is derived from the append-only log
//! history.

pub mod algorithm;
pub mod dates;
pub mod error;
pub mod queue;
pub mod types;

pub use algorithm::{next_review_date, success_rate};
pub use error::ConfigError;
pub use queue::select_today_cards;
pub use types::{
    Card, Deck, IntervalStep, QueueSelection, ResponseType, ReviewIntervals, StudyLog,
    UserSettings,
};

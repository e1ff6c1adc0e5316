//! Session orchestration on top of scheduler-core.
//!
//! Drives one interactive study pass: builds today's queue for a deck,
//! presents cards one at a time, records answers through the interval
//! calculator and persists them to an abstract record store.

pub mod error;
pub mod session;
pub mod store;

pub use error::SessionError;
pub use session::{SessionStats, StudySession};
pub use store::RecordStore;

//! Core types for the review scheduling engine.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ConfigError;

/// Quality of a recorded answer, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Wrong,
    Again,
    Hard,
    Correct,
    Easy,
}

impl ResponseType {
    /// All variants, worst to best.
    pub const ALL: [ResponseType; 5] = [
        Self::Wrong,
        Self::Again,
        Self::Hard,
        Self::Correct,
        Self::Easy,
    ];

    /// Convert to 5-point numeric value (1-5).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Wrong => 1,
            Self::Again => 2,
            Self::Hard => 3,
            Self::Correct => 4,
            Self::Easy => 5,
        }
    }

    /// Create from 5-point numeric value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Wrong),
            2 => Some(Self::Again),
            3 => Some(Self::Hard),
            4 => Some(Self::Correct),
            5 => Some(Self::Easy),
            _ => None,
        }
    }

    /// Ease weight used by the success-rate score.
    ///
    /// Note the jump from Correct (3) to Easy (5): an effortless recall is
    /// worth proportionally more than a plain correct one.
    pub fn ease_value(self) -> u8 {
        match self {
            Self::Wrong => 0,
            Self::Again => 1,
            Self::Hard => 2,
            Self::Correct => 3,
            Self::Easy => 5,
        }
    }

    /// Whether the answer counts towards a consecutive-correct streak.
    pub fn is_successful(self) -> bool {
        matches!(self, Self::Correct | Self::Easy)
    }

    /// Get the response name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrong => "wrong",
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Correct => "correct",
            Self::Easy => "easy",
        }
    }
}

/// One recorded answer. Logs are append-only; all scheduling state is
/// reconstructed from a card's log history, never stored on the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyLog {
    pub id: Uuid,
    pub card_id: Uuid,
    pub deck_id: Uuid,
    pub studied_at: DateTime<Utc>,
    /// Time the learner took to answer, in milliseconds.
    pub response_ms: i64,
    pub response: ResponseType,
    /// Always strictly after `studied_at`.
    pub next_review_date: DateTime<Utc>,
}

impl StudyLog {
    /// The interval this log scheduled: `next_review_date - studied_at`.
    pub fn interval(&self) -> Duration {
        self.next_review_date - self.studied_at
    }
}

/// A flashcard. Carries no scheduling state of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub deck_id: Uuid,
    pub front: String,
    pub back: String,
}

/// A named collection of cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: Uuid,
    pub name: String,
}

/// Base interval and growth factor for one response type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalStep {
    /// Base interval in fractional hours.
    pub base_hours: f64,
    /// Factor applied to the previous interval, >= 0.
    pub multiplier: f64,
}

impl IntervalStep {
    pub fn new(base_hours: f64, multiplier: f64) -> Self {
        Self {
            base_hours,
            multiplier,
        }
    }

    /// Base interval as a duration.
    pub fn base(&self) -> Duration {
        Duration::seconds((self.base_hours * 3600.0) as i64)
    }
}

/// User-adjustable interval table, one step per response type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewIntervals {
    pub wrong: IntervalStep,
    pub again: IntervalStep,
    pub hard: IntervalStep,
    pub correct: IntervalStep,
    pub easy: IntervalStep,
}

impl Default for ReviewIntervals {
    fn default() -> Self {
        Self {
            wrong: IntervalStep::new(1.0, 1.1),
            again: IntervalStep::new(6.0, 1.2),
            hard: IntervalStep::new(24.0, 1.5),
            correct: IntervalStep::new(72.0, 2.0),
            easy: IntervalStep::new(168.0, 2.5),
        }
    }
}

impl ReviewIntervals {
    /// Step for a response type.
    pub fn step(&self, response: ResponseType) -> &IntervalStep {
        match response {
            ResponseType::Wrong => &self.wrong,
            ResponseType::Again => &self.again,
            ResponseType::Hard => &self.hard,
            ResponseType::Correct => &self.correct,
            ResponseType::Easy => &self.easy,
        }
    }

    /// Base interval for a response type.
    pub fn base(&self, response: ResponseType) -> Duration {
        self.step(response).base()
    }

    /// Reject steps that would break the positive-interval invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for response in ResponseType::ALL {
            let step = self.step(response);
            if step.base_hours <= 0.0 {
                return Err(ConfigError::NonPositiveBase {
                    response: response.as_str(),
                    base_hours: step.base_hours,
                });
            }
            if step.multiplier < 0.0 {
                return Err(ConfigError::NegativeMultiplier {
                    response: response.as_str(),
                    multiplier: step.multiplier,
                });
            }
        }
        Ok(())
    }
}

/// Global settings consumed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub new_cards_per_day: u32,
    pub reviews_per_day: u32,
    pub intervals: ReviewIntervals,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            new_cards_per_day: 20,
            reviews_per_day: 200,
            intervals: ReviewIntervals::default(),
        }
    }
}

/// Card ids selected for one study day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueSelection {
    pub new_card_ids: Vec<Uuid>,
    pub review_card_ids: Vec<Uuid>,
}

impl QueueSelection {
    pub fn total(&self) -> usize {
        self.new_card_ids.len() + self.review_card_ids.len()
    }
}

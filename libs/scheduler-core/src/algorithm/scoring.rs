//! Success-rate scoring for recorded answers.
//!
//! Informational only: the score never feeds back into interval
//! computation. It exists for session statistics and future analytics.

use crate::types::ResponseType;

/// Answers slower than this are scaled down.
pub const SLOW_MS: i64 = 10_000;
/// Answers slower than this are scaled down harder, replacing the
/// [`SLOW_MS`] scaling rather than compounding it.
pub const VERY_SLOW_MS: i64 = 20_000;

/// Score an answer from 0 to 100.
///
/// Base score is the response's ease weight out of 5. Slow answers are
/// penalized in two independent steps; past 20s the 0.7 factor replaces
/// the 0.9 one.
pub fn success_rate(response: ResponseType, response_ms: i64) -> f64 {
    let base = f64::from(response.ease_value()) / 5.0 * 100.0;
    let mut score = base;
    if response_ms > SLOW_MS {
        score = base * 0.9;
    }
    if response_ms > VERY_SLOW_MS {
        score = base * 0.7;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_scores_per_response() {
        assert_eq!(success_rate(ResponseType::Wrong, 1_000), 0.0);
        assert_eq!(success_rate(ResponseType::Again, 1_000), 20.0);
        assert_eq!(success_rate(ResponseType::Hard, 1_000), 40.0);
        assert_eq!(success_rate(ResponseType::Correct, 1_000), 60.0);
        assert_eq!(success_rate(ResponseType::Easy, 1_000), 100.0);
    }

    #[test]
    fn slow_answer_scaled_down() {
        assert_eq!(success_rate(ResponseType::Easy, 15_000), 90.0);
    }

    #[test]
    fn very_slow_replaces_slow_scaling() {
        // 0.7 of the base, not 0.7 of the already-scaled 90.
        assert_eq!(success_rate(ResponseType::Easy, 25_000), 70.0);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(success_rate(ResponseType::Easy, SLOW_MS), 100.0);
        assert_eq!(success_rate(ResponseType::Easy, VERY_SLOW_MS), 90.0);
    }
}

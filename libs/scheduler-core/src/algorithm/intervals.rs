//! Next-review-date calculation.
//!
//! The schedule is a pure function of a card's log history: there is no
//! stored ease factor. Ease is implicit in the accumulated interval, nudged
//! by early/late corrections and a consecutive-correct streak bonus, which
//! approximates SM-2-style ease adjustment without any mutable per-card
//! scheduling state.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::types::{ResponseType, ReviewIntervals, StudyLog};

/// Reviewing before the scheduled date shrinks the multiplier.
pub const EARLY_FACTOR: f64 = 0.9;
/// Answering long after the scheduled date shrinks it further.
pub const OVERDUE_FACTOR: f64 = 0.7;
/// How far past the scheduled date counts as badly overdue.
pub const OVERDUE_GRACE_DAYS: i64 = 7;
/// Bonus per consecutive Correct/Easy answer.
pub const STREAK_BONUS: f64 = 0.1;
/// Hard ceiling on any computed interval.
pub const MAX_INTERVAL_DAYS: i64 = 180;

/// Compute when a card should next be reviewed.
///
/// `prior_logs` may be in any order and may contain logs for other cards;
/// only entries matching `card_id` are considered. `now` is the instant the
/// answer was recorded.
pub fn next_review_date(
    card_id: Uuid,
    response: ResponseType,
    prior_logs: &[StudyLog],
    intervals: &ReviewIntervals,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    let base = intervals.base(response);

    let mut history: Vec<&StudyLog> = prior_logs.iter().filter(|l| l.card_id == card_id).collect();
    history.sort_by_key(|l| std::cmp::Reverse(l.studied_at));

    let Some(last) = history.first() else {
        // First exposure always uses the base interval, never a multiplier.
        return now + base;
    };

    let interval = if response == ResponseType::Wrong {
        // Forgetting restarts the schedule from the bottom.
        intervals.base(ResponseType::Wrong)
    } else {
        let mut adjusted = intervals.step(response).multiplier;

        if now < last.next_review_date {
            adjusted *= EARLY_FACTOR;
        } else if now > last.next_review_date + Duration::days(OVERDUE_GRACE_DAYS) {
            adjusted *= OVERDUE_FACTOR;
        }

        let streak = consecutive_successes(&history);
        if streak > 0 {
            adjusted *= 1.0 + streak as f64 * STREAK_BONUS;
        }

        let previous = last.next_review_date - last.studied_at;
        let grown = scale(previous, adjusted);
        grown.max(base)
    };

    now + interval.min(Duration::days(MAX_INTERVAL_DAYS))
}

/// Length of the Correct/Easy run at the head of a most-recent-first history.
fn consecutive_successes(history: &[&StudyLog]) -> u32 {
    history
        .iter()
        .take_while(|l| l.response.is_successful())
        .count() as u32
}

fn scale(interval: Duration, factor: f64) -> Duration {
    Duration::milliseconds((interval.num_milliseconds() as f64 * factor) as i64)
}

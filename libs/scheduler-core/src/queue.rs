//! Daily queue selection.
//!
//! Partitions a card pool into capped "new" and "review" work lists for the
//! current study day. New candidates keep the scope's original order; review
//! candidates are sorted oldest-overdue-first (with the card id as a
//! tie-break) so the result never depends on map iteration order.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dates::same_study_day;
use crate::types::{QueueSelection, StudyLog};

/// Select the cards to study today.
///
/// `scope` is the pool under consideration (e.g. one deck's card ids) in a
/// stable caller-chosen order; `all_logs` may span other decks. A card with
/// no log at all is new; a card whose latest log is due (and which has not
/// already been answered today) is a review. Caps of 0 yield empty lists.
pub fn select_today_cards(
    all_logs: &[StudyLog],
    new_cards_per_day: u32,
    reviews_per_day: u32,
    scope: &[Uuid],
    now: DateTime<Utc>,
) -> QueueSelection {
    let scope_set: HashSet<Uuid> = scope.iter().copied().collect();

    // Latest log per in-scope card, plus whether the card was answered today.
    let mut latest: HashMap<Uuid, &StudyLog> = HashMap::new();
    let mut answered_today: HashSet<Uuid> = HashSet::new();
    for log in all_logs {
        if !scope_set.contains(&log.card_id) {
            continue;
        }
        match latest.get(&log.card_id) {
            Some(current) if current.studied_at >= log.studied_at => {}
            _ => {
                latest.insert(log.card_id, log);
            }
        }
        if same_study_day(log.studied_at, now) {
            answered_today.insert(log.card_id);
        }
    }

    let studied: HashSet<Uuid> = all_logs.iter().map(|l| l.card_id).collect();

    let new_card_ids: Vec<Uuid> = scope
        .iter()
        .filter(|id| !studied.contains(*id))
        .take(new_cards_per_day as usize)
        .copied()
        .collect();

    let mut due: Vec<(&Uuid, &&StudyLog)> = latest
        .iter()
        .filter(|(id, log)| log.next_review_date <= now && !answered_today.contains(*id))
        .collect();
    due.sort_by_key(|(id, log)| (log.next_review_date, **id));

    let review_card_ids: Vec<Uuid> = due
        .into_iter()
        .take(reviews_per_day as usize)
        .map(|(id, _)| *id)
        .collect();

    QueueSelection {
        new_card_ids,
        review_card_ids,
    }
}

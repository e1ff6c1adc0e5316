//! Interval computation and response scoring.

pub mod intervals;
pub mod scoring;

pub use intervals::next_review_date;
pub use scoring::success_rate;

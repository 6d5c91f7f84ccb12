use super::domain::ApplicantRecord;

/// Contribution for applicants sourced from an actively-searching pool.
pub const ACTIVE_SEARCH_SCORE: u8 = 10;

/// Per-record availability signal. The engine caps whatever this returns at
/// [`ACTIVE_SEARCH_SCORE`].
pub trait AvailabilitySignal: Send + Sync {
    fn score(&self, record: &ApplicantRecord) -> u8;
}

/// Every scored record comes from a pool of people who are currently looking for work.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivelySearchingPool;

impl AvailabilitySignal for ActivelySearchingPool {
    fn score(&self, _record: &ApplicantRecord) -> u8 {
        ACTIVE_SEARCH_SCORE
    }
}

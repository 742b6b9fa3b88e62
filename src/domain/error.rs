// Error taxonomy for dashboard generation
use thiserror::Error;

/// Failure kinds surfaced to callers. A day with zero events is not an error;
/// it renders as empty views with the full label sequence.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Malformed or out-of-range evaluation day / offset input. Never
    /// corrected silently to "today".
    #[error("invalid evaluation day: {0}")]
    InvalidDate(String),

    /// The probe event store could not serve the request. No internal retry;
    /// retry policy belongs to the caller.
    #[error("probe event store unavailable: {0}")]
    StoreUnavailable(#[source] anyhow::Error),
}

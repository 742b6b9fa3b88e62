// Repository trait for probe event access
use crate::domain::error::StatsError;
use crate::domain::probe::ProbeEvent;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read-only port to the probe event store. The adapter is the sole I/O
/// boundary of the engine; its failures surface as `StoreUnavailable` and
/// are never retried here.
#[async_trait]
pub trait ProbeEventRepository: Send + Sync {
    /// Fetch all probe events recorded on the given day.
    async fn fetch_events(&self, day: NaiveDate) -> Result<Vec<ProbeEvent>, StatsError>;
}

// Chart series domain models
use crate::domain::bucket::HOURS_PER_DAY;
use crate::domain::probe::Grouping;
use serde::Serialize;

/// Per-bucket aggregate values for one entity, index-aligned with the hour
/// label sequence. `None` is the empty sentinel for buckets without events,
/// distinct from an observed zero; it serializes as JSON null so the chart
/// layer keeps x-axis alignment.
pub type BucketValues = [Option<f64>; HOURS_PER_DAY];

/// One chart-ready line: an entity's hourly aggregates plus display metadata.
/// `chart_id` and `color` are deterministic functions of the entity key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub entity_key: String,
    pub chart_id: String,
    pub label: String,
    pub color: String,
    pub values: BucketValues,
}

/// All series for one grouping over one day, sorted by entity key, plus the
/// shared label sequence. Consumable by the rendering layer as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationView {
    pub grouping: Grouping,
    pub hour_labels: Vec<String>,
    pub series: Vec<Series>,
}

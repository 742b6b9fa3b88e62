// Dashboard domain model
use crate::domain::day_window::DayNavigation;
use crate::domain::series::{AggregationView, Series};
use serde::Serialize;

/// One day's complete dashboard payload: the overall trend plus the
/// device-grouped and channel-grouped views over the same event stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeDashboard {
    pub eval_day: String,
    pub day_key: String,
    pub navigation: DayNavigation,
    pub hour_labels: Vec<String>,
    pub device_list: Vec<String>,
    pub overall: Vec<Series>,
    pub trends_by_entity: AggregationView,
    pub subs_by_entity: AggregationView,
}

/// Per-device drilldown: one device's channels, one series each.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceDetail {
    pub eval_day: String,
    pub day_key: String,
    pub navigation: DayNavigation,
    pub device_id: String,
    pub channels: AggregationView,
}

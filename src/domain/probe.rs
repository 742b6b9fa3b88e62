// Probe event domain model
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One raw reading published by an input device channel. Produced by the
/// recorder; read-only to this engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeEvent {
    pub timestamp: DateTime<Utc>,
    pub device_id: String,
    pub channel_no: u16,
    pub value: f64,
}

impl ProbeEvent {
    pub fn new(timestamp: DateTime<Utc>, device_id: String, channel_no: u16, value: f64) -> Self {
        Self {
            timestamp,
            device_id,
            channel_no,
            value,
        }
    }
}

/// Grouping selector for aggregation: the same event stream is rolled up once
/// per device and once per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    Device,
    Channel,
}

impl Grouping {
    /// Entity key an event contributes to under this grouping.
    pub fn key_of(&self, event: &ProbeEvent) -> String {
        match self {
            Grouping::Device => event.device_id.clone(),
            Grouping::Channel => format!("{:02}", event.channel_no),
        }
    }

    /// Printable series label for an entity key.
    pub fn label_for(&self, key: &str) -> String {
        match self {
            Grouping::Device => key.to_string(),
            Grouping::Channel => format!("Channel: {key}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(device_id: &str, channel_no: u16) -> ProbeEvent {
        ProbeEvent::new(
            Utc.with_ymd_and_hms(2023, 10, 5, 8, 15, 0).unwrap(),
            device_id.to_string(),
            channel_no,
            1.0,
        )
    }

    #[test]
    fn test_grouping_keys() {
        let ev = event("bcm2835_01", 3);
        assert_eq!(Grouping::Device.key_of(&ev), "bcm2835_01");
        assert_eq!(Grouping::Channel.key_of(&ev), "03");
    }

    #[test]
    fn test_channel_label_is_printable() {
        assert_eq!(Grouping::Channel.label_for("03"), "Channel: 03");
        assert_eq!(Grouping::Device.label_for("bcm2835_01"), "bcm2835_01");
    }
}

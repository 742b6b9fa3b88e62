// Probe recorder repository implementation
use crate::application::probe_repository::ProbeEventRepository;
use crate::domain::error::StatsError;
use crate::domain::probe::ProbeEvent;
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// HTTP adapter to the probe recorder service, which exposes the recorded
/// input-probe messages as JSON. The sole I/O boundary of the engine.
#[derive(Debug, Clone)]
pub struct RecorderRepository {
    host: String,
    token: String,
    database: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct EventsResponse {
    #[serde(default)]
    events: Vec<EventRow>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EventRow {
    probe_time: String,
    device_id: String,
    channel_no: u16,
    value: f64,
}

impl RecorderRepository {
    pub fn new(host: String, token: String, database: String) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            token,
            database,
            client: reqwest::Client::new(),
        }
    }

    fn events_url(&self, day: NaiveDate) -> String {
        format!(
            "{}/api/events?db={}&day={}",
            self.host,
            urlencoding::encode(&self.database),
            day.format("%Y-%m-%d")
        )
    }

    async fn execute_query(&self, day: NaiveDate) -> anyhow::Result<EventsResponse> {
        let url = self.events_url(day);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Token {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to probe recorder")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("recorder query failed with status {}: {}", status, body);
        }

        let data = response
            .json::<EventsResponse>()
            .await
            .context("Failed to parse probe recorder response")?;

        if let Some(error) = &data.error {
            anyhow::bail!("recorder query error: {}", error);
        }

        Ok(data)
    }

    fn parse_row(row: &EventRow) -> Option<ProbeEvent> {
        match DateTime::parse_from_rfc3339(&row.probe_time) {
            Ok(time) => Some(ProbeEvent::new(
                time.with_timezone(&Utc),
                row.device_id.clone(),
                row.channel_no,
                row.value,
            )),
            Err(e) => {
                tracing::warn!("skipping event with bad timestamp {}: {}", row.probe_time, e);
                None
            }
        }
    }
}

#[async_trait]
impl ProbeEventRepository for RecorderRepository {
    async fn fetch_events(&self, day: NaiveDate) -> Result<Vec<ProbeEvent>, StatsError> {
        let response = self
            .execute_query(day)
            .await
            .map_err(StatsError::StoreUnavailable)?;

        let events: Vec<ProbeEvent> = response
            .events
            .iter()
            .filter_map(Self::parse_row)
            .collect();

        tracing::debug!("recorder returned {} events for {}", events.len(), day);
        Ok(events)
    }
}

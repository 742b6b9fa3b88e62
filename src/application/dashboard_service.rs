// Dashboard service - Use case for building the per-day dashboard
use crate::application::aggregator::{
    aggregate_entities, aggregate_overall, classify_events, Aggregate,
};
use crate::application::probe_repository::ProbeEventRepository;
use crate::application::series_builder::{build_overall_trend, build_view};
use crate::domain::bucket::hour_labels;
use crate::domain::dashboard::{DeviceDetail, ProbeDashboard};
use crate::domain::day_window::DayWindow;
use crate::domain::error::StatsError;
use crate::domain::probe::Grouping;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn ProbeEventRepository>,
    reducer: Aggregate,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn ProbeEventRepository>) -> Self {
        Self::with_reducer(repository, Aggregate::default())
    }

    /// Same service with a different per-entity reducer (count is the
    /// default; sum/average/extrema plug in without restructuring callers).
    pub fn with_reducer(repository: Arc<dyn ProbeEventRepository>, reducer: Aggregate) -> Self {
        Self { repository, reducer }
    }

    /// Full render for one evaluation day: resolve the window, fetch the
    /// day's events once, classify once, then build the overall trend and
    /// both entity views from the shared classified slice. All-or-nothing:
    /// any failure aborts the render, so no partial chart ever surfaces.
    pub async fn get_dashboard(
        &self,
        day_key: &str,
        offset: i64,
    ) -> Result<ProbeDashboard, StatsError> {
        let window = DayWindow::resolve(day_key, offset)?;
        let navigation = window.navigation()?;
        let events = self.repository.fetch_events(window.day()).await?;
        tracing::debug!("fetched {} events for {}", events.len(), window.day_key());

        let classified = classify_events(window.day(), &events);

        let device_aggregates = aggregate_entities(&classified, Grouping::Device, self.reducer);
        let channel_aggregates = aggregate_entities(&classified, Grouping::Channel, self.reducer);
        let overall = build_overall_trend(
            aggregate_overall(&classified, Aggregate::Minimum),
            aggregate_overall(&classified, Aggregate::Average),
            aggregate_overall(&classified, Aggregate::Maximum),
        );

        // BTreeMap keys are already sorted.
        let device_list: Vec<String> = device_aggregates.keys().cloned().collect();

        Ok(ProbeDashboard {
            eval_day: window.display_label(),
            day_key: window.day_key(),
            navigation,
            hour_labels: hour_labels(),
            device_list,
            overall,
            trends_by_entity: build_view(Grouping::Device, &device_aggregates),
            subs_by_entity: build_view(Grouping::Channel, &channel_aggregates),
        })
    }

    /// Per-device drilldown: that device's channels as one series each,
    /// averaged per hour.
    pub async fn get_device_detail(
        &self,
        day_key: &str,
        offset: i64,
        device_id: &str,
    ) -> Result<DeviceDetail, StatsError> {
        let window = DayWindow::resolve(day_key, offset)?;
        let navigation = window.navigation()?;
        let events = self.repository.fetch_events(window.day()).await?;

        let device_events: Vec<_> = events
            .into_iter()
            .filter(|event| event.device_id == device_id)
            .collect();
        let classified = classify_events(window.day(), &device_events);
        let channel_aggregates =
            aggregate_entities(&classified, Grouping::Channel, Aggregate::Average);

        Ok(DeviceDetail {
            eval_day: window.display_label(),
            day_key: window.day_key(),
            navigation,
            device_id: device_id.to_string(),
            channels: build_view(Grouping::Channel, &channel_aggregates),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::probe::ProbeEvent;
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::collections::HashMap;

    struct FakeRepository {
        events_by_day: HashMap<NaiveDate, Vec<ProbeEvent>>,
        fail: bool,
    }

    impl FakeRepository {
        fn with_events(day: NaiveDate, events: Vec<ProbeEvent>) -> Arc<Self> {
            Arc::new(Self {
                events_by_day: HashMap::from([(day, events)]),
                fail: false,
            })
        }

        fn unavailable() -> Arc<Self> {
            Arc::new(Self {
                events_by_day: HashMap::new(),
                fail: true,
            })
        }
    }

    #[async_trait]
    impl ProbeEventRepository for FakeRepository {
        async fn fetch_events(&self, day: NaiveDate) -> Result<Vec<ProbeEvent>, StatsError> {
            if self.fail {
                return Err(StatsError::StoreUnavailable(anyhow::anyhow!(
                    "recorder is down"
                )));
            }
            Ok(self.events_by_day.get(&day).cloned().unwrap_or_default())
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 5).unwrap()
    }

    fn event(hour: u32, minute: u32, device_id: &str, channel_no: u16) -> ProbeEvent {
        ProbeEvent::new(
            Utc.with_ymd_and_hms(2023, 10, 5, hour, minute, 0).unwrap(),
            device_id.to_string(),
            channel_no,
            1.0,
        )
    }

    fn scenario_repository() -> Arc<FakeRepository> {
        FakeRepository::with_events(
            day(),
            vec![
                event(8, 15, "A", 1),
                event(8, 50, "A", 2),
                event(9, 5, "B", 1),
            ],
        )
    }

    #[tokio::test]
    async fn test_dashboard_for_scenario_day() {
        let service = DashboardService::new(scenario_repository());
        let dashboard = service.get_dashboard("20231005", 0).await.unwrap();

        assert_eq!(dashboard.eval_day, "05.10.2023");
        assert_eq!(dashboard.navigation.previous, "20231004");
        assert_eq!(dashboard.navigation.next, "20231006");
        assert_eq!(dashboard.hour_labels.len(), 24);
        assert_eq!(dashboard.device_list, vec!["A", "B"]);

        let device_a = &dashboard.trends_by_entity.series[0];
        assert_eq!(device_a.entity_key, "A");
        assert_eq!(device_a.values[8], Some(2.0));
        assert_eq!(device_a.values[9], None);
        let device_b = &dashboard.trends_by_entity.series[1];
        assert_eq!(device_b.values[9], Some(1.0));

        let channel_1 = &dashboard.subs_by_entity.series[0];
        assert_eq!(channel_1.label, "Channel: 01");
        assert_eq!(channel_1.values[8], Some(1.0));
        assert_eq!(channel_1.values[9], Some(1.0));
        let channel_2 = &dashboard.subs_by_entity.series[1];
        assert_eq!(channel_2.values[8], Some(1.0));
    }

    #[tokio::test]
    async fn test_dashboard_resolves_offset_before_fetching() {
        let service = DashboardService::new(scenario_repository());
        let dashboard = service.get_dashboard("20231004", 1).await.unwrap();
        assert_eq!(dashboard.day_key, "20231005");
        assert_eq!(dashboard.device_list, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_empty_day_renders_with_full_label_sequence() {
        let service = DashboardService::new(FakeRepository::with_events(day(), Vec::new()));
        let dashboard = service.get_dashboard("20231005", 0).await.unwrap();

        assert!(dashboard.device_list.is_empty());
        assert!(dashboard.trends_by_entity.series.is_empty());
        assert!(dashboard.subs_by_entity.series.is_empty());
        assert_eq!(dashboard.hour_labels.len(), 24);
        assert!(dashboard.overall.iter().all(|s| s.values == [None; 24]));
    }

    #[tokio::test]
    async fn test_store_failure_aborts_render() {
        let service = DashboardService::new(FakeRepository::unavailable());
        let result = service.get_dashboard("20231005", 0).await;
        assert!(matches!(result, Err(StatsError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_invalid_day_key_aborts_before_fetch() {
        let service = DashboardService::new(FakeRepository::unavailable());
        let result = service.get_dashboard("not-a-day", 0).await;
        assert!(matches!(result, Err(StatsError::InvalidDate(_))));
    }

    #[tokio::test]
    async fn test_chart_identity_survives_unrelated_ingests() {
        let service = DashboardService::new(scenario_repository());
        let before = service.get_dashboard("20231005", 0).await.unwrap();

        // Same day re-requested from a store that also holds another day's
        // events; entity A's visual identity must not move.
        let other_day = NaiveDate::from_ymd_opt(2023, 10, 6).unwrap();
        let mut events_by_day = HashMap::new();
        events_by_day.insert(
            day(),
            vec![
                event(8, 15, "A", 1),
                event(8, 50, "A", 2),
                event(9, 5, "B", 1),
            ],
        );
        events_by_day.insert(
            other_day,
            vec![ProbeEvent::new(
                Utc.with_ymd_and_hms(2023, 10, 6, 3, 0, 0).unwrap(),
                "Z".to_string(),
                7,
                1.0,
            )],
        );
        let service = DashboardService::new(Arc::new(FakeRepository {
            events_by_day,
            fail: false,
        }));
        let after = service.get_dashboard("20231005", 0).await.unwrap();

        assert_eq!(
            before.trends_by_entity.series[0].chart_id,
            after.trends_by_entity.series[0].chart_id
        );
        assert_eq!(
            before.trends_by_entity.series[0].color,
            after.trends_by_entity.series[0].color
        );
    }

    #[tokio::test]
    async fn test_device_detail_restricts_to_one_device() {
        let service = DashboardService::new(scenario_repository());
        let detail = service.get_device_detail("20231005", 0, "A").await.unwrap();

        assert_eq!(detail.device_id, "A");
        assert_eq!(detail.channels.series.len(), 2);
        assert_eq!(detail.channels.series[0].label, "Channel: 01");
        // Device B's channel 1 event at 09:05 must not leak in.
        assert_eq!(detail.channels.series[0].values[9], None);
    }
}

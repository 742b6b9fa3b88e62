// Day window controller - resolves the evaluation day and its neighbors
use crate::domain::error::StatsError;
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Day key format used in URLs and navigation metadata ("20231005").
pub const DAY_KEY_FORMAT: &str = "%Y%m%d";
/// Human-readable day label shown on the dashboard ("05.10.2023").
pub const DAY_DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// The resolved evaluation day. All calendar math happens on naive civil
/// dates in UTC so day boundaries never drift, including across DST dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    day: NaiveDate,
}

/// Day keys for the previous/current/next evaluation day, consumed by the
/// routing layer for prev/next affordances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayNavigation {
    pub previous: String,
    pub current: String,
    pub next: String,
}

impl DayWindow {
    /// Resolves `base_day_key` shifted by `offset` days. Malformed keys and
    /// arithmetic overflow surface as `InvalidDate`.
    pub fn resolve(base_day_key: &str, offset: i64) -> Result<Self, StatsError> {
        let base = NaiveDate::parse_from_str(base_day_key, DAY_KEY_FORMAT)
            .map_err(|_| StatsError::InvalidDate(format!("malformed day key: {base_day_key}")))?;
        let shifted = if offset >= 0 {
            base.checked_add_days(Days::new(offset as u64))
        } else {
            base.checked_sub_days(Days::new(offset.unsigned_abs()))
        };
        let day = shifted.ok_or_else(|| {
            StatsError::InvalidDate(format!("offset {offset} out of range for {base_day_key}"))
        })?;
        Ok(Self { day })
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn day_key(&self) -> String {
        self.day.format(DAY_KEY_FORMAT).to_string()
    }

    pub fn display_label(&self) -> String {
        self.day.format(DAY_DISPLAY_FORMAT).to_string()
    }

    /// Day keys for offsets -1/0/+1 relative to the resolved day.
    pub fn navigation(&self) -> Result<DayNavigation, StatsError> {
        let previous = self
            .day
            .pred_opt()
            .ok_or_else(|| StatsError::InvalidDate("day before calendar minimum".to_string()))?;
        let next = self
            .day
            .succ_opt()
            .ok_or_else(|| StatsError::InvalidDate("day after calendar maximum".to_string()))?;
        Ok(DayNavigation {
            previous: previous.format(DAY_KEY_FORMAT).to_string(),
            current: self.day_key(),
            next: next.format(DAY_KEY_FORMAT).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_offsets() {
        assert_eq!(
            DayWindow::resolve("20231005", 0).unwrap().day_key(),
            "20231005"
        );
        assert_eq!(
            DayWindow::resolve("20231005", 1).unwrap().day_key(),
            "20231006"
        );
        assert_eq!(
            DayWindow::resolve("20231005", -1).unwrap().day_key(),
            "20231004"
        );
    }

    #[test]
    fn test_resolve_across_month_boundary() {
        assert_eq!(
            DayWindow::resolve("20231031", 1).unwrap().day_key(),
            "20231101"
        );
    }

    #[test]
    fn test_resolve_across_dst_boundary_has_no_drift() {
        // 2023-10-29 is the CET/CEST switch; civil-date math must not care.
        let window = DayWindow::resolve("20231028", 1).unwrap();
        assert_eq!(window.day_key(), "20231029");
        assert_eq!(window.navigation().unwrap().next, "20231030");
    }

    #[test]
    fn test_malformed_day_key_is_rejected() {
        assert!(matches!(
            DayWindow::resolve("2023-10-05", 0),
            Err(StatsError::InvalidDate(_))
        ));
        assert!(matches!(
            DayWindow::resolve("garbage", 0),
            Err(StatsError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_offset_overflow_is_rejected() {
        assert!(matches!(
            DayWindow::resolve("20231005", i64::MAX / 2),
            Err(StatsError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_display_label() {
        let window = DayWindow::resolve("20231005", 0).unwrap();
        assert_eq!(window.display_label(), "05.10.2023");
    }

    #[test]
    fn test_navigation_neighbors() {
        let nav = DayWindow::resolve("20231005", 0).unwrap().navigation().unwrap();
        assert_eq!(nav.previous, "20231004");
        assert_eq!(nav.current, "20231005");
        assert_eq!(nav.next, "20231006");
    }
}

//! Query windows for the dashboard's time range selector

use chrono::Utc;
use serde::{Deserialize, Serialize};

const DAY_SECONDS: i64 = 24 * 60 * 60;

/// Time range selectable on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
}

impl TimeRange {
    /// Parse the `timeRange` query value; anything unrecognised means 24h
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("7d") => TimeRange::Week,
            Some("30d") => TimeRange::Month,
            _ => TimeRange::Day,
        }
    }

    /// Length of the range in seconds
    pub fn seconds(&self) -> i64 {
        match self {
            TimeRange::Day => DAY_SECONDS,
            TimeRange::Week => 7 * DAY_SECONDS,
            TimeRange::Month => 30 * DAY_SECONDS,
        }
    }

    /// Window ending at `now` (unix seconds)
    pub fn window_at(&self, now: i64) -> TimeWindow {
        TimeWindow {
            time_range: *self,
            start_time: now.saturating_sub(self.seconds()),
            end_time: now,
        }
    }

    /// Window ending now
    pub fn window(&self) -> TimeWindow {
        self.window_at(Utc::now().timestamp())
    }
}

/// Unix-second bounds passed to the indexing service query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub time_range: TimeRange,
    pub start_time: i64,
    pub end_time: i64,
}

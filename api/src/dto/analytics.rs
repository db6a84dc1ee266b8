use serde::{Deserialize, Serialize};

/// Query string of the analytics window endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeRangeQuery {
    #[serde(rename = "timeRange")]
    pub time_range: Option<String>,
}

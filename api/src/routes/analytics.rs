use actix_web::{web, HttpResponse};

use crate::dto::analytics::TimeRangeQuery;

use dx_core::domain::entities::analytics::AnalyticsData;
use dx_core::services::analytics::{process_analytics, TimeRange};

/// Handler for POST /api/analytics
///
/// Reduces a data set fetched from the indexing service into the dashboard
/// report (totals, pool and factory summaries).
///
/// ## Errors
/// - 400 Bad Request: Body is not a data set
pub async fn process(data: web::Json<AnalyticsData>) -> HttpResponse {
    HttpResponse::Ok().json(process_analytics(&data))
}

/// Handler for GET /api/analytics/window?timeRange=24h|7d|30d
///
/// Unix-second bounds for the indexing query; unknown ranges mean 24h.
pub async fn window(query: web::Query<TimeRangeQuery>) -> HttpResponse {
    let range = TimeRange::from_param(query.time_range.as_deref());
    HttpResponse::Ok().json(range.window())
}

//! Analytics module for the exchange dashboard
//!
//! - Reducing a fetched subgraph data set into dashboard totals
//! - Per-pool and per-factory summaries
//! - Query windows for the 24h / 7d / 30d ranges

mod processor;
mod time_range;

pub use processor::{process_analytics, summarize_factory, summarize_metrics, summarize_pool};
pub use time_range::{TimeRange, TimeWindow};

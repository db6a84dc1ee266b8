//! Domain entities representing core business objects.

pub mod analytics;
pub mod session;
pub mod user;

// Re-export commonly used types
pub use analytics::{
    AnalyticsData, AnalyticsMetrics, AnalyticsReport, Bundle, EthUsd, Factory, FactorySummary,
    Pool, PoolSummary, PoolToken,
};
pub use session::{
    AuthenticatedUser, Identity, TokenHeader, TokenPayload, DEFAULT_ROLE, TOKEN_ALGORITHM,
    TOKEN_TYPE,
};
pub use user::{User, UserProfile};

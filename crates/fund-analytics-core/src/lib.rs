pub mod dates;
pub mod error;
pub mod nav;
pub mod sip;
pub mod trailing;
pub mod types;

pub use error::FundAnalyticsError;
pub use nav::NavSeries;
pub use types::*;

/// Standard result type for all fund-analytics operations
pub type FundAnalyticsResult<T> = Result<T, FundAnalyticsError>;

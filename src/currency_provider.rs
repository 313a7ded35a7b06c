//! Currency rate abstractions.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::RateError;

/// Per-call options for a rate lookup.
#[derive(Debug, Clone, Default)]
pub struct RateOptions {
    /// How long a previously fetched rate stays usable. `None` disables
    /// caching entirely.
    pub cache_ttl: Option<Duration>,
}

impl RateOptions {
    pub fn with_cache_ttl(ttl: Duration) -> Self {
        Self {
            cache_ttl: Some(ttl),
        }
    }
}

#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    /// Returns how many units of `to` one unit of `from` buys right now.
    async fn get_rate(
        &self,
        from: &str,
        to: &str,
        options: &RateOptions,
    ) -> Result<f64, RateError>;
}

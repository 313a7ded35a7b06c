pub mod cache;
pub mod config;
pub mod currency_provider;
pub mod error;
pub mod log;
pub mod providers;

pub use currency_provider::{CurrencyRateProvider, RateOptions};
pub use error::RateError;

use anyhow::Result;
use providers::yahoo_finance::YahooCurrencyProvider;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{debug, info};

static RATE_CACHE: OnceLock<Arc<cache::Cache<String, f64>>> = OnceLock::new();

/// The process-wide rate cache shared by every [`get_exchange_rate`] call.
fn process_cache() -> Arc<cache::Cache<String, f64>> {
    Arc::clone(RATE_CACHE.get_or_init(|| Arc::new(cache::Cache::new())))
}

/// Fetches the current `from` → `to` exchange rate from Yahoo Finance.
///
/// When `options.cache_ttl` is set, a rate fetched less than that long ago for
/// the same pair is returned without a new request. All calls in the process
/// share one cache.
///
/// ```no_run
/// # use std::time::Duration;
/// # async fn demo() -> Result<(), xrate::RateError> {
/// let options = xrate::RateOptions::with_cache_ttl(Duration::from_secs(60));
/// let rate = xrate::get_exchange_rate("USD", "EUR", &options).await?;
/// assert!(rate > 0.0);
/// # Ok(())
/// # }
/// ```
pub async fn get_exchange_rate(
    from: &str,
    to: &str,
    options: &RateOptions,
) -> Result<f64, RateError> {
    let provider =
        YahooCurrencyProvider::new("https://query1.finance.yahoo.com", process_cache());
    provider.get_rate(from, to, options).await
}

/// CLI entry point: resolves config, fetches one rate, returns it.
pub async fn run(
    from: &str,
    to: &str,
    cache_ttl: Option<Duration>,
    config_path: Option<&str>,
) -> Result<f64> {
    info!("Fetching exchange rate {} -> {}", from, to);

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let options = RateOptions {
        cache_ttl: cache_ttl.or(config.cache_ttl_secs.map(Duration::from_secs)),
    };

    let rate_cache = Arc::new(cache::Cache::new());
    let provider = YahooCurrencyProvider::new(config.yahoo_base_url(), rate_cache);

    let rate = provider.get_rate(from, to, &options).await?;
    Ok(rate)
}

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::cache::Cache;
use crate::currency_provider::{CurrencyRateProvider, RateOptions};
use crate::error::RateError;

/// Fixed query string for the Yahoo Finance chart endpoint.
const CHART_PARAMS: &str = "region=US&lang=en-US&includePrePost=false&interval=2m&useYfid=true&range=1d&corsDomain=finance.yahoo.com&.tsrc=finance";

pub struct YahooCurrencyProvider {
    base_url: String,
    cache: Arc<Cache<String, f64>>,
}

impl YahooCurrencyProvider {
    pub fn new(base_url: &str, cache: Arc<Cache<String, f64>>) -> Self {
        YahooCurrencyProvider {
            base_url: base_url.to_string(),
            cache,
        }
    }
}

#[derive(Debug, Deserialize)]
struct YahooCurrencyResponse {
    chart: CurrencyChartResult,
}

#[derive(Debug, Deserialize)]
struct CurrencyChartResult {
    result: Vec<CurrencyChartItem>,
}

#[derive(Debug, Deserialize)]
struct CurrencyChartItem {
    meta: CurrencyChartMeta,
}

#[derive(Debug, Deserialize)]
struct CurrencyChartMeta {
    #[serde(alias = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

#[async_trait]
impl CurrencyRateProvider for YahooCurrencyProvider {
    #[instrument(name = "YahooRateFetch", skip(self, options), fields(from = %from, to = %to))]
    async fn get_rate(
        &self,
        from: &str,
        to: &str,
        options: &RateOptions,
    ) -> Result<f64, RateError> {
        let symbol = format!("{}{}=X", from.to_uppercase(), to.to_uppercase());
        let cache_key = format!("{}-{}", from.to_uppercase(), to.to_uppercase());

        if let Some(ttl) = options.cache_ttl {
            if let Some(cached) = self.cache.get_fresh(&cache_key, ttl).await {
                return Ok(cached);
            }
        }

        let url = format!(
            "{}/v8/finance/chart/{}?{}",
            self.base_url, symbol, CHART_PARAMS
        );
        debug!("Requesting currency rate from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("xrate/0.1")
            .build()?;
        let response = client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(RateError::Server(response.status()));
        }

        let text = response.text().await?;

        let data: YahooCurrencyResponse = serde_json::from_str(&text)
            .map_err(|e| RateError::Data(format!("failed to parse response for {symbol}: {e}")))?;

        let item = data
            .chart
            .result
            .into_iter()
            .next()
            .ok_or_else(|| RateError::Data(format!("no rate data for currency pair: {symbol}")))?;

        let rate = item
            .meta
            .regular_market_price
            .filter(|r| r.is_finite() && *r > 0.0)
            .ok_or_else(|| RateError::Data(format!("no usable regularMarketPrice for {symbol}")))?;

        if options.cache_ttl.is_some() {
            self.cache.put(cache_key, rate).await;
        }

        Ok(rate)
    }
}

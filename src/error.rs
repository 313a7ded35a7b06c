//! Error taxonomy for rate lookups.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure kinds a rate lookup can surface.
///
/// Every error from [`crate::get_exchange_rate`] is one of these three; there
/// are no retries or partial recoveries behind them.
#[derive(Debug, Error)]
pub enum RateError {
    /// The request never produced an HTTP response (DNS, connect, TLS, or
    /// body-read failure).
    #[error("request to rate service failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("rate service returned HTTP {0}")]
    Server(StatusCode),

    /// The response body did not carry a usable `regularMarketPrice`.
    #[error("rate service returned malformed data: {0}")]
    Data(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RateError::Server(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "rate service returned HTTP 404 Not Found");

        let err = RateError::Data("missing regularMarketPrice".to_string());
        assert_eq!(
            err.to_string(),
            "rate service returned malformed data: missing regularMarketPrice"
        );
    }
}

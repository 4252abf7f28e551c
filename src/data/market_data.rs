use crate::models::{Bar, Ticker};
use crate::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct BarRequest {
    pub ticker: Ticker,
    pub period_months: u32,
    pub interval: String,
}

impl BarRequest {
    pub fn daily(ticker: Ticker, period_months: u32) -> Self {
        Self {
            ticker,
            period_months,
            interval: "1d".to_string(),
        }
    }
}

/// Source of OHLCV bars. An unknown ticker is reported as `Ok(vec![])`,
/// errors are reserved for transport and format failures.
pub trait MarketDataProvider: Send + Sync {
    fn fetch_bars(&self, request: &BarRequest) -> Result<Vec<Bar>>;
}

use crate::config::DataConfig;
use crate::data::market_data::{BarRequest, MarketDataProvider};
use crate::models::{sort_and_dedup, Bar};
use crate::{Error, Result};
use chrono::DateTime;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: Option<ChartMeta>,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    gmtoffset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteColumns>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QuoteColumns {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<f64>>,
}

pub struct YahooProvider {
    client: Client,
    base_url: Url,
}

impl YahooProvider {
    pub fn new(config: &DataConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|err| Error::new(format!("data.base_url is invalid: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::new("data.base_url must be an http(s) url"));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| Error::new(format!("http client build failed: {err}")))?;
        Ok(Self { client, base_url })
    }

    /// The ticker is pushed as a single percent-encoded segment, so `/`, `#`
    /// and `?` in user input stay part of the symbol.
    pub fn chart_url(&self, ticker: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::new("data.base_url must be an http(s) url"))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart"])
            .push(ticker);
        Ok(url)
    }
}

impl MarketDataProvider for YahooProvider {
    fn fetch_bars(&self, request: &BarRequest) -> Result<Vec<Bar>> {
        let url = self.chart_url(request.ticker.as_str())?;
        let query = [
            ("range".to_string(), format!("{}mo", request.period_months)),
            ("interval".to_string(), request.interval.clone()),
            ("includePrePost".to_string(), "false".to_string()),
        ];

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .map_err(|err| Error::new(format!("http request failed: {err}")))?;

        // Unknown symbols come back as 404 with a chart error body.
        let status = response.status();
        if !status.is_success() && status != StatusCode::NOT_FOUND {
            return Err(Error::new(format!("provider response status: {status}")));
        }

        let text = response
            .text()
            .map_err(|err| Error::new(format!("http read failed: {err}")))?;
        let bars = parse_yahoo_chart(&text)?;
        debug!(ticker = %request.ticker, bars = bars.len(), "yahoo chart fetched");
        Ok(bars)
    }
}

/// Parses a v8 chart payload. "Not Found" and an absent result both mean
/// the symbol has no data and yield an empty vec.
pub fn parse_yahoo_chart(text: &str) -> Result<Vec<Bar>> {
    let response: ChartResponse = serde_json::from_str(text)
        .map_err(|err| Error::new(format!("chart response parse failed: {err}")))?;

    if let Some(error) = response.chart.error {
        if error.code == "Not Found" {
            return Ok(Vec::new());
        }
        let description = error.description.unwrap_or_default();
        return Err(Error::new(format!("{}: {description}", error.code)));
    }

    let Some(data) = response.chart.result.and_then(|list| list.into_iter().next()) else {
        return Ok(Vec::new());
    };
    let Some(timestamps) = data.timestamp else {
        return Ok(Vec::new());
    };
    let offset = data.meta.and_then(|meta| meta.gmtoffset).unwrap_or(0);
    let quote = data
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| Error::new("chart response has no quote data"))?;

    let mut bars = Vec::with_capacity(timestamps.len());
    for (index, ts) in timestamps.iter().enumerate() {
        let fields = [
            column_value(&quote.open, index),
            column_value(&quote.high, index),
            column_value(&quote.low, index),
            column_value(&quote.close, index),
            column_value(&quote.volume, index),
        ];
        let [Some(open), Some(high), Some(low), Some(close), Some(volume)] = fields else {
            // holiday rows are all null; partial rows cannot be drawn either
            if fields.iter().any(Option::is_some) {
                debug!(timestamp = ts, "skipping incomplete bar");
            }
            continue;
        };
        let date = DateTime::from_timestamp(ts + offset, 0)
            .map(|dt| dt.date_naive())
            .ok_or_else(|| Error::new(format!("invalid timestamp: {ts}")))?;
        bars.push(Bar {
            date,
            open,
            high,
            low,
            close,
            volume,
        });
    }

    Ok(sort_and_dedup(bars))
}

fn column_value(column: &[Option<f64>], index: usize) -> Option<f64> {
    column.get(index).copied().flatten()
}

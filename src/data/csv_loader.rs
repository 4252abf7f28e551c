use crate::data::market_data::{BarRequest, MarketDataProvider};
use crate::models::{sort_and_dedup, Bar};
use crate::{Error, Result};
use chrono::{DateTime, Months, NaiveDate};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(serde::Deserialize)]
struct BarRow {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

/// Reads `<dir>/<TICKER>.csv`. A ticker without a file has no data.
pub struct CsvProvider {
    dir: PathBuf,
}

impl CsvProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `None` for tickers that could name a file outside `dir`.
    pub fn path_for(&self, ticker: &str) -> Option<PathBuf> {
        if ticker.contains(['/', '\\']) || ticker.contains("..") {
            return None;
        }
        Some(self.dir.join(format!("{ticker}.csv")))
    }
}

impl MarketDataProvider for CsvProvider {
    fn fetch_bars(&self, request: &BarRequest) -> Result<Vec<Bar>> {
        let Some(path) = self.path_for(request.ticker.as_str()) else {
            return Ok(Vec::new());
        };
        if !path.exists() {
            return Ok(Vec::new());
        }
        let bars = load_bars_from_csv(&path)?;
        Ok(trailing_months(bars, request.period_months))
    }
}

pub fn load_bars_from_csv(path: &Path) -> Result<Vec<Bar>> {
    let file = File::open(path).map_err(|err| Error::new(format!("csv open failed: {err}")))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut bars = Vec::new();
    for result in reader.deserialize::<BarRow>() {
        let row = result.map_err(|err| Error::new(format!("csv parse failed: {err}")))?;
        let date = parse_date(&row.date)?;
        bars.push(Bar::new(
            date, row.open, row.high, row.low, row.close, row.volume,
        )?);
    }

    Ok(sort_and_dedup(bars))
}

/// Keeps bars no older than `months` before the most recent one.
pub fn trailing_months(bars: Vec<Bar>, months: u32) -> Vec<Bar> {
    let Some(latest) = bars.last().map(|bar| bar.date) else {
        return bars;
    };
    let Some(cutoff) = latest.checked_sub_months(Months::new(months)) else {
        return bars;
    };
    bars.into_iter().filter(|bar| bar.date > cutoff).collect()
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::new("date value is empty"));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(epoch) = trimmed.parse::<i64>() {
        return DateTime::from_timestamp(epoch, 0)
            .map(|dt| dt.date_naive())
            .ok_or_else(|| Error::new(format!("epoch out of range: {epoch}")));
    }
    let parsed = DateTime::parse_from_rfc3339(trimmed)
        .map_err(|err| Error::new(format!("invalid date format: {err}")))?;
    Ok(parsed.date_naive())
}

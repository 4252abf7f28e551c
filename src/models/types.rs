use crate::{Error, Result};
use chrono::NaiveDate;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    /// Trims and uppercases user input. No other validation is applied;
    /// unknown symbols surface as empty provider results.
    pub fn normalize(input: &str) -> Result<Self> {
        let symbol = input.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(Error::new("Please enter a ticker symbol."));
        }
        Ok(Self(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Result<Self> {
        if open <= 0.0 || high <= 0.0 || low <= 0.0 || close <= 0.0 {
            return Err(Error::new(format!("{date}: prices must be positive")));
        }
        if volume < 0.0 {
            return Err(Error::new(format!("{date}: volume must be non-negative")));
        }
        if high < open.max(close) {
            return Err(Error::new(format!("{date}: high must be >= max(open, close)")));
        }
        if low > open.min(close) {
            return Err(Error::new(format!("{date}: low must be <= min(open, close)")));
        }
        Ok(Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

/// Sorts by date and keeps the last bar seen for any duplicated date.
pub fn sort_and_dedup(bars: Vec<Bar>) -> Vec<Bar> {
    let mut indexed: Vec<(usize, Bar)> = bars.into_iter().enumerate().collect();
    indexed.sort_by(|a, b| a.1.date.cmp(&b.1.date).then_with(|| a.0.cmp(&b.0)));

    let mut deduped: Vec<Bar> = Vec::with_capacity(indexed.len());
    for (_, bar) in indexed {
        if let Some(last) = deduped.last_mut() {
            if last.date == bar.date {
                *last = bar;
                continue;
            }
        }
        deduped.push(bar);
    }
    deduped
}

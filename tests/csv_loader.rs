use chrono::{Duration, NaiveDate};
use std::env;
use std::fs;
use std::path::PathBuf;
use stockview::data::csv_loader::{load_bars_from_csv, parse_date, trailing_months, CsvProvider};
use stockview::data::{BarRequest, MarketDataProvider};
use stockview::models::{Bar, Ticker};

fn fixture_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("csv");
    path
}

#[test]
fn loads_fixture_sorted_and_deduped() {
    let bars = load_bars_from_csv(&fixture_dir().join("MSFT.csv")).expect("load");

    assert_eq!(bars.len(), 3);
    assert!(bars[0].date < bars[1].date);
    assert!(bars[1].date < bars[2].date);
    assert_eq!(bars[1].close, 370.61);
}

#[test]
fn provider_reads_ticker_file() {
    let provider = CsvProvider::new(fixture_dir());
    let request = BarRequest::daily(Ticker::normalize("msft").expect("ticker"), 6);
    let bars = provider.fetch_bars(&request).expect("fetch");
    assert_eq!(bars.len(), 3);
}

#[test]
fn missing_ticker_file_has_no_data() {
    let provider = CsvProvider::new(fixture_dir());
    let request = BarRequest::daily(Ticker::normalize("ZZZZ").expect("ticker"), 6);
    let bars = provider.fetch_bars(&request).expect("fetch");
    assert!(bars.is_empty());
}

#[test]
fn parse_date_accepts_several_formats() {
    let expected = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");
    assert_eq!(parse_date("2024-01-01").expect("plain"), expected);
    assert_eq!(parse_date("1704067200").expect("epoch"), expected);
    assert_eq!(parse_date("2024-01-01T10:00:00Z").expect("rfc3339"), expected);
    assert!(parse_date("").is_err());
    assert!(parse_date("01/02/2024").is_err());
}

#[test]
fn rejects_invalid_row() {
    let mut path = env::temp_dir();
    path.push("stockview_invalid.csv");
    let content = "date,open,high,low,close,volume\n2024-01-02,100,90,95,98,1\n";
    fs::write(&path, content).expect("write temp");

    let result = load_bars_from_csv(&path);
    assert!(result.is_err());

    let _ = fs::remove_file(&path);
}

#[test]
fn trailing_months_drops_older_bars() {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).expect("date");
    let bars: Vec<Bar> = (0..365)
        .map(|offset| Bar {
            date: start + Duration::days(offset),
            open: 10.0,
            high: 11.0,
            low: 9.0,
            close: 10.0,
            volume: 1.0,
        })
        .collect();

    let kept = trailing_months(bars, 6);
    let latest = NaiveDate::from_ymd_opt(2023, 12, 31).expect("date");
    assert_eq!(kept.last().map(|bar| bar.date), Some(latest));
    assert_eq!(
        kept.first().map(|bar| bar.date),
        NaiveDate::from_ymd_opt(2023, 7, 1)
    );
}

#[test]
fn tickers_that_leave_the_data_dir_have_no_data() {
    let provider = CsvProvider::new(fixture_dir().join("nested"));
    assert!(provider.path_for("../csv/MSFT").is_none());
    assert!(provider.path_for("A/B").is_none());
    assert!(provider.path_for("A\\B").is_none());
    assert!(provider.path_for("MSFT").is_some());

    let request = BarRequest::daily(Ticker::normalize("../csv/msft").expect("ticker"), 6);
    let bars = provider.fetch_bars(&request).expect("fetch");
    assert!(bars.is_empty());
}

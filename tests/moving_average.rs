use stockview::analysis::{simple_moving_average, PriceFrame};
use stockview::models::Bar;
use chrono::{Duration, NaiveDate};

fn closes(count: usize) -> Vec<f64> {
    (0..count).map(|index| 100.0 + (index as f64 * 0.37).sin() * 5.0 + index as f64 * 0.1).collect()
}

fn bars_from_closes(values: &[f64]) -> Vec<Bar> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).expect("date");
    values
        .iter()
        .enumerate()
        .map(|(index, close)| Bar {
            date: start + Duration::days(index as i64),
            open: *close,
            high: close + 1.0,
            low: close - 1.0,
            close: *close,
            volume: 1_000.0 + index as f64,
        })
        .collect()
}

#[test]
fn long_window_matches_arithmetic_mean() {
    let values = closes(260);
    let averages = simple_moving_average(&values, 200);

    assert_eq!(averages.len(), values.len());
    for (index, average) in averages.iter().enumerate() {
        if index < 199 {
            assert!(average.is_none(), "row {index} should be missing");
            continue;
        }
        let window = &values[index - 199..=index];
        let expected = window.iter().sum::<f64>() / 200.0;
        let actual = average.expect("defined average");
        assert!((actual - expected).abs() < 1e-9, "row {index}: {actual} != {expected}");
    }
}

#[test]
fn window_of_one_is_the_series() {
    let values = [3.0, 1.5, 4.25];
    let averages = simple_moving_average(&values, 1);
    assert_eq!(averages, vec![Some(3.0), Some(1.5), Some(4.25)]);
}

#[test]
fn zero_window_yields_no_values() {
    let averages = simple_moving_average(&[1.0, 2.0, 3.0], 0);
    assert_eq!(averages, vec![None, None, None]);
}

#[test]
fn frame_columns_align_with_bars() {
    let values = closes(120);
    let frame = PriceFrame::from_bars(bars_from_closes(&values), 50, 200);

    assert_eq!(frame.len(), 120);
    assert_eq!(frame.ma_short.len(), 120);
    assert_eq!(frame.ma_long.len(), 120);
    assert!(frame.ma_short[48].is_none());
    assert!(frame.ma_short[49].is_some());
    // six months of daily bars never fill the long window
    assert!(frame.ma_long.iter().all(Option::is_none));
}

#[test]
fn frame_tail_returns_most_recent_rows_in_order() {
    let values = closes(30);
    let frame = PriceFrame::from_bars(bars_from_closes(&values), 5, 20);

    let tail = frame.tail(10);
    assert_eq!(tail.len(), 10);
    assert_eq!(tail[0].date, frame.bars[20].date);
    assert_eq!(tail[9].date, frame.bars[29].date);
    assert_eq!(tail[9].ma_short, frame.ma_short[29]);
    assert_eq!(tail[9].ma_long, frame.ma_long[29]);

    let short = PriceFrame::from_bars(bars_from_closes(&values[..4]), 5, 20);
    assert_eq!(short.tail(10).len(), 4);
}

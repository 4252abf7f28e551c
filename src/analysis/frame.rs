use crate::analysis::moving_average::simple_moving_average;
use crate::models::Bar;
use chrono::NaiveDate;

#[derive(Clone, Debug, PartialEq)]
pub struct FrameRow {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub ma_short: Option<f64>,
    pub ma_long: Option<f64>,
}

/// Bars with the short and long moving averages of the close appended as
/// columns sharing the bar index.
#[derive(Clone, Debug)]
pub struct PriceFrame {
    pub bars: Vec<Bar>,
    pub short_window: usize,
    pub long_window: usize,
    pub ma_short: Vec<Option<f64>>,
    pub ma_long: Vec<Option<f64>>,
}

impl PriceFrame {
    pub fn from_bars(bars: Vec<Bar>, short_window: usize, long_window: usize) -> Self {
        let closes: Vec<f64> = bars.iter().map(|bar| bar.close).collect();
        let ma_short = simple_moving_average(&closes, short_window);
        let ma_long = simple_moving_average(&closes, long_window);
        Self {
            bars,
            short_window,
            long_window,
            ma_short,
            ma_long,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn dates(&self) -> Vec<String> {
        self.bars
            .iter()
            .map(|bar| bar.date.format("%Y-%m-%d").to_string())
            .collect()
    }

    pub fn column(&self, pick: impl Fn(&Bar) -> f64) -> Vec<f64> {
        self.bars.iter().map(pick).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = FrameRow> + '_ {
        self.bars
            .iter()
            .zip(self.ma_short.iter().zip(self.ma_long.iter()))
            .map(|(bar, (short, long))| FrameRow {
                date: bar.date,
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                volume: bar.volume,
                ma_short: *short,
                ma_long: *long,
            })
    }

    /// The last `count` rows, oldest first.
    pub fn tail(&self, count: usize) -> Vec<FrameRow> {
        let skip = self.len().saturating_sub(count);
        self.rows().skip(skip).collect()
    }
}

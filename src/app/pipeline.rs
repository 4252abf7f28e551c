use crate::analysis::PriceFrame;
use crate::chart::{build_figure, chart_div_id, to_embed_html};
use crate::config::Config;
use crate::data::{BarRequest, MarketDataProvider};
use crate::models::Ticker;
use crate::report::render_table;
use crate::Result;
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq)]
pub enum PageOutcome {
    Rendered {
        ticker: Ticker,
        chart_html: String,
        table_html: String,
    },
    NoData {
        ticker: Ticker,
    },
    Failed {
        ticker: Option<Ticker>,
        message: String,
    },
}

impl PageOutcome {
    pub fn ticker(&self) -> Option<&Ticker> {
        match self {
            PageOutcome::Rendered { ticker, .. } | PageOutcome::NoData { ticker } => Some(ticker),
            PageOutcome::Failed { ticker, .. } => ticker.as_ref(),
        }
    }

    pub fn chart_html(&self) -> Option<&str> {
        match self {
            PageOutcome::Rendered { chart_html, .. } => Some(chart_html),
            _ => None,
        }
    }

    pub fn table_html(&self) -> Option<&str> {
        match self {
            PageOutcome::Rendered { table_html, .. } => Some(table_html),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            PageOutcome::Rendered { .. } => None,
            PageOutcome::NoData { ticker } => Some(no_data_message(ticker)),
            PageOutcome::Failed { message, .. } => Some(message.clone()),
        }
    }
}

pub fn no_data_message(ticker: &Ticker) -> String {
    format!("No data found for ticker '{ticker}'.")
}

pub fn generic_failure_message(ticker: &Ticker) -> String {
    format!("Unable to load data for ticker '{ticker}'.")
}

struct RenderedParts {
    chart_html: String,
    table_html: String,
}

pub fn run_pipeline(input: &str, provider: &dyn MarketDataProvider, config: &Config) -> PageOutcome {
    let ticker = match Ticker::normalize(input) {
        Ok(ticker) => ticker,
        Err(err) => {
            return PageOutcome::Failed {
                ticker: None,
                message: err.message,
            }
        }
    };

    match render_ticker(&ticker, provider, config) {
        Ok(Some(parts)) => {
            info!(ticker = %ticker, "chart rendered");
            PageOutcome::Rendered {
                ticker,
                chart_html: parts.chart_html,
                table_html: parts.table_html,
            }
        }
        Ok(None) => {
            info!(ticker = %ticker, "no data");
            PageOutcome::NoData { ticker }
        }
        Err(err) => {
            warn!(ticker = %ticker, error = %err.message, "chart pipeline failed");
            let message = if config.ui.show_error_details {
                err.message
            } else {
                generic_failure_message(&ticker)
            };
            PageOutcome::Failed {
                ticker: Some(ticker),
                message,
            }
        }
    }
}

fn render_ticker(
    ticker: &Ticker,
    provider: &dyn MarketDataProvider,
    config: &Config,
) -> Result<Option<RenderedParts>> {
    let request = BarRequest {
        ticker: ticker.clone(),
        period_months: config.data.period_months,
        interval: config.data.interval.clone(),
    };
    let bars = provider.fetch_bars(&request)?;
    if bars.is_empty() {
        return Ok(None);
    }

    let frame = PriceFrame::from_bars(bars, config.chart.short_window, config.chart.long_window);
    let figure = build_figure(ticker, &frame, &config.data.interval);
    let chart_html = to_embed_html(&figure, &chart_div_id(ticker))?;
    let table_html = render_table(&frame, config.chart.table_rows);

    Ok(Some(RenderedParts {
        chart_html,
        table_html,
    }))
}

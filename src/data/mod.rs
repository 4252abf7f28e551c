pub mod csv_loader;
pub mod market_data;
pub mod yahoo_loader;

use crate::config::Config;
use crate::{Error, Result};
use std::sync::Arc;

pub use market_data::{BarRequest, MarketDataProvider};

pub fn provider_from_config(config: &Config) -> Result<Arc<dyn MarketDataProvider>> {
    match config.data.source.as_str() {
        "yahoo" => Ok(Arc::new(yahoo_loader::YahooProvider::new(&config.data)?)),
        "csv" => {
            let dir = config
                .data
                .csv_dir
                .as_ref()
                .ok_or_else(|| Error::new("data.csv_dir must be set for csv source"))?;
            Ok(Arc::new(csv_loader::CsvProvider::new(dir)))
        }
        other => Err(Error::new(format!("unknown data source: {other}"))),
    }
}

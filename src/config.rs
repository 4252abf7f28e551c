use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: String,
}

#[derive(Clone, Debug)]
pub struct DataConfig {
    pub source: String,
    pub base_url: String,
    pub csv_dir: Option<String>,
    pub period_months: u32,
    pub interval: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub short_window: usize,
    pub long_window: usize,
    pub table_rows: usize,
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    pub show_error_details: bool,
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub chart: ChartConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Clone, Debug, Deserialize)]
struct ServerConfigFile {
    addr: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct DataConfigFile {
    source: Option<String>,
    base_url: Option<String>,
    csv_dir: Option<String>,
    period_months: Option<u32>,
    interval: Option<String>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct ChartConfigFile {
    short_window: Option<usize>,
    long_window: Option<usize>,
    table_rows: Option<usize>,
}

#[derive(Clone, Debug, Deserialize)]
struct UiConfigFile {
    show_error_details: Option<bool>,
}

#[derive(Clone, Debug, Deserialize)]
struct LogConfigFile {
    level: Option<String>,
    format: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct ConfigFile {
    server: Option<ServerConfigFile>,
    data: Option<DataConfigFile>,
    chart: Option<ChartConfigFile>,
    ui: Option<UiConfigFile>,
    log: Option<LogConfigFile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                addr: "127.0.0.1:8080".to_string(),
            },
            data: DataConfig {
                source: "yahoo".to_string(),
                base_url: "https://query1.finance.yahoo.com".to_string(),
                csv_dir: None,
                period_months: 6,
                interval: "1d".to_string(),
                timeout_secs: 30,
                user_agent: "Mozilla/5.0 (compatible; stockview/0.1)".to_string(),
            },
            chart: ChartConfig {
                short_window: 50,
                long_window: 200,
                table_rows: 10,
            },
            ui: UiConfig {
                show_error_details: true,
            },
            log: LogConfig {
                level: "info,tower_http=debug".to_string(),
                format: "plain".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| Error::new(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&content)
    }

    /// Like `load`, but a missing file means defaults plus env overrides.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            return Self::load(path);
        }
        let mut config = Config::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|err| Error::new(format!("failed to parse config: {err}")))?;
        let mut config = Config::from_file(file);
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(file: ConfigFile) -> Self {
        let mut config = Config::default();

        if let Some(server) = file.server {
            if let Some(value) = server.addr {
                config.server.addr = value;
            }
        }

        if let Some(data) = file.data {
            if let Some(value) = data.source {
                config.data.source = value;
            }
            if let Some(value) = data.base_url {
                config.data.base_url = value;
            }
            if let Some(value) = data.csv_dir {
                config.data.csv_dir = Some(value);
            }
            if let Some(value) = data.period_months {
                config.data.period_months = value;
            }
            if let Some(value) = data.interval {
                config.data.interval = value;
            }
            if let Some(value) = data.timeout_secs {
                config.data.timeout_secs = value;
            }
            if let Some(value) = data.user_agent {
                config.data.user_agent = value;
            }
        }

        if let Some(chart) = file.chart {
            if let Some(value) = chart.short_window {
                config.chart.short_window = value;
            }
            if let Some(value) = chart.long_window {
                config.chart.long_window = value;
            }
            if let Some(value) = chart.table_rows {
                config.chart.table_rows = value;
            }
        }

        if let Some(ui) = file.ui {
            if let Some(value) = ui.show_error_details {
                config.ui.show_error_details = value;
            }
        }

        if let Some(log) = file.log {
            if let Some(value) = log.level {
                config.log.level = value;
            }
            if let Some(value) = log.format {
                config.log.format = value;
            }
        }

        config
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = read_string_env("STOCKVIEW_ADDR")? {
            self.server.addr = value;
        }

        if let Some(value) = read_string_env("STOCKVIEW_DATA_SOURCE")? {
            self.data.source = value;
        }
        if let Some(value) = read_string_env("STOCKVIEW_BASE_URL")? {
            self.data.base_url = value;
        }
        if let Some(value) = read_string_env("STOCKVIEW_CSV_DIR")? {
            self.data.csv_dir = Some(value);
        }
        if let Some(value) = read_u32_env("STOCKVIEW_PERIOD_MONTHS")? {
            self.data.period_months = value;
        }
        if let Some(value) = read_string_env("STOCKVIEW_INTERVAL")? {
            self.data.interval = value;
        }
        if let Some(value) = read_u32_env("STOCKVIEW_TIMEOUT_SECS")? {
            self.data.timeout_secs = u64::from(value);
        }

        if let Some(value) = read_u32_env("STOCKVIEW_SHORT_WINDOW")? {
            self.chart.short_window = value as usize;
        }
        if let Some(value) = read_u32_env("STOCKVIEW_LONG_WINDOW")? {
            self.chart.long_window = value as usize;
        }
        if let Some(value) = read_u32_env("STOCKVIEW_TABLE_ROWS")? {
            self.chart.table_rows = value as usize;
        }

        if let Some(value) = read_bool_env("STOCKVIEW_SHOW_ERROR_DETAILS")? {
            self.ui.show_error_details = value;
        }

        if let Some(value) = read_string_env("STOCKVIEW_LOG")? {
            self.log.level = value;
        } else if let Some(value) = read_string_env("RUST_LOG")? {
            self.log.level = value;
        }
        if let Some(value) = read_string_env("STOCKVIEW_LOG_FORMAT")? {
            self.log.format = value;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.addr.trim().is_empty() {
            return Err(Error::new("server.addr must be set"));
        }

        match self.data.source.as_str() {
            "yahoo" => {
                if self.data.base_url.trim().is_empty() {
                    return Err(Error::new("data.base_url must be set for yahoo source"));
                }
            }
            "csv" => match &self.data.csv_dir {
                Some(dir) if !dir.trim().is_empty() => {}
                _ => return Err(Error::new("data.csv_dir must be set for csv source")),
            },
            _ => return Err(Error::new("data.source must be yahoo or csv")),
        }
        if !(1..=6).contains(&self.data.period_months) {
            return Err(Error::new("data.period_months must be in [1, 6]"));
        }
        if !matches!(self.data.interval.as_str(), "1d" | "1wk" | "1mo") {
            return Err(Error::new("data.interval must be 1d, 1wk, or 1mo"));
        }
        if self.data.timeout_secs == 0 {
            return Err(Error::new("data.timeout_secs must be positive"));
        }

        if self.chart.short_window == 0 {
            return Err(Error::new("chart.short_window must be positive"));
        }
        if self.chart.short_window >= self.chart.long_window {
            return Err(Error::new("chart.short_window must be < chart.long_window"));
        }
        if self.chart.table_rows == 0 {
            return Err(Error::new("chart.table_rows must be positive"));
        }

        if self.log.level.trim().is_empty() {
            return Err(Error::new("log.level must be set"));
        }
        if !matches!(self.log.format.trim().to_lowercase().as_str(), "plain" | "json") {
            return Err(Error::new("log.format must be plain or json"));
        }

        Ok(())
    }
}

fn read_string_env(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(Error::new(format!("failed to read {key}: {err}"))),
    }
}

fn read_bool_env(key: &str) -> Result<Option<bool>> {
    match read_string_env(key)? {
        Some(value) => match value.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            _ => Err(Error::new(format!("{key} must be a boolean"))),
        },
        None => Ok(None),
    }
}

fn read_u32_env(key: &str) -> Result<Option<u32>> {
    match read_string_env(key)? {
        Some(value) => value
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|err| Error::new(format!("{key} must be u32: {err}"))),
        None => Ok(None),
    }
}

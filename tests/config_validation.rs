use stockview::config::Config;

#[test]
fn default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn data_source_must_be_known() {
    let mut config = Config::default();
    config.data.source = "bloomberg".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn csv_source_requires_dir() {
    let mut config = Config::default();
    config.data.source = "csv".to_string();
    config.data.csv_dir = None;
    assert!(config.validate().is_err());

    config.data.csv_dir = Some("data".to_string());
    assert!(config.validate().is_ok());
}

#[test]
fn yahoo_source_requires_base_url() {
    let mut config = Config::default();
    config.data.base_url = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn period_is_capped_at_six_months() {
    let mut config = Config::default();
    config.data.period_months = 7;
    assert!(config.validate().is_err());
    config.data.period_months = 0;
    assert!(config.validate().is_err());
    config.data.period_months = 1;
    assert!(config.validate().is_ok());
}

#[test]
fn interval_must_be_known() {
    let mut config = Config::default();
    config.data.interval = "1m".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn interval_must_have_a_moving_average_label() {
    let mut config = Config::default();
    config.data.interval = "5d".to_string();
    let err = config.validate().expect_err("5d has no label");
    assert_eq!(err.message, "data.interval must be 1d, 1wk, or 1mo");

    config.data.interval = "1wk".to_string();
    assert!(config.validate().is_ok());
    config.data.interval = "1mo".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn short_window_must_be_below_long_window() {
    let mut config = Config::default();
    config.chart.short_window = 200;
    assert!(config.validate().is_err());
    config.chart.short_window = 0;
    assert!(config.validate().is_err());
}

#[test]
fn table_rows_must_be_positive() {
    let mut config = Config::default();
    config.chart.table_rows = 0;
    assert!(config.validate().is_err());
}

#[test]
fn timeout_must_be_positive() {
    let mut config = Config::default();
    config.data.timeout_secs = 0;
    assert!(config.validate().is_err());
}

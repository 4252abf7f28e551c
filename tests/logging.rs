use stockview::app::logging::{self, LogFormat};
use stockview::config::{Config, LogConfig};

fn log_config(level: &str, format: &str) -> LogConfig {
    LogConfig {
        level: level.to_string(),
        format: format.to_string(),
    }
}

#[test]
fn log_format_parses_known_names() {
    assert_eq!(LogFormat::parse("plain").expect("plain"), LogFormat::Plain);
    assert_eq!(LogFormat::parse(" JSON ").expect("json"), LogFormat::Json);
    assert!(LogFormat::parse("pretty").is_err());
}

#[test]
fn filter_accepts_default_level() {
    let config = Config::default();
    let filter = logging::build_filter(&config.log).expect("default filter");

    assert!(filter.to_string().contains("tower_http=debug"));
}

#[test]
fn malformed_level_is_rejected() {
    let err = logging::build_filter(&log_config("stockview=loud", "plain"))
        .expect_err("bad directive");

    assert!(err.message.starts_with("log.level is invalid"));
}

#[test]
fn init_with_unknown_format_fails_before_installing() {
    let err = logging::init(&log_config("info", "xml")).expect_err("bad format");

    assert_eq!(err.message, "unknown log format: xml");
}

#[test]
fn init_twice_is_harmless() {
    let config = log_config("warn", "json");

    logging::init(&config).expect("first init");
    logging::init(&config).expect("second init");
}

#[test]
fn validation_rejects_unknown_log_format() {
    let mut config = Config::default();
    config.log.format = "xml".to_string();

    let err = config.validate().expect_err("invalid format");
    assert_eq!(err.message, "log.format must be plain or json");
}

#[test]
fn validation_rejects_blank_log_level() {
    let mut config = Config::default();
    config.log.level = "  ".to_string();

    let err = config.validate().expect_err("blank level");
    assert_eq!(err.message, "log.level must be set");
}

use stockview::app::{logging, metrics, ui_server};
use stockview::config::Config;
use stockview::data::provider_from_config;

#[tokio::main]
async fn main() {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    metrics::init_start_time();

    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1);
    });

    if let Err(err) = start(cli).await {
        eprintln!("error: {}", err.message);
        std::process::exit(1);
    }
}

struct CliArgs {
    config_path: String,
    addr: Option<String>,
}

async fn start(cli: CliArgs) -> stockview::Result<()> {
    let mut config = Config::load_or_default(&cli.config_path)?;
    if let Some(addr) = cli.addr {
        config.server.addr = addr;
    }
    config.validate()?;
    logging::init(&config.log)?;

    let provider = provider_from_config(&config)?;
    ui_server::run(config, provider).await
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut config_path = "config.toml".to_string();
    let mut addr = None;

    let mut index = 1;
    while index < args.len() {
        match args[index].as_str() {
            "--config" | "-c" => {
                let value = args.get(index + 1).ok_or("missing value for --config")?;
                config_path = value.to_string();
                index += 2;
            }
            "--addr" => {
                let value = args.get(index + 1).ok_or("missing value for --addr")?;
                addr = Some(value.to_string());
                index += 2;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            unknown => {
                return Err(format!("unknown argument: {unknown}"));
            }
        }
    }

    Ok(CliArgs { config_path, addr })
}

fn print_usage() {
    println!("usage: stockview [--config <path>] [--addr <host:port>]");
    println!("  -c, --config   Path to config.toml (default: config.toml, optional)");
    println!("      --addr     Bind address (default: 127.0.0.1:8080 or STOCKVIEW_ADDR)");
}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use window_averager::{Averager, Category, ServiceConfig};

const USAGE: &str = "Usage: window-averager [--config <PATH>]

Serves GET /numbers/{p|f|e|r} and GET /health.
Env: HOST, PORT, UPSTREAM_ACCESS_TOKEN, RUST_LOG";

enum Command {
    Serve { config_path: Option<String> },
    Help,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut config_path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--config" | "-c" => {
                config_path = Some(args.next().ok_or("--config requires a path argument")?);
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(Command::Serve { config_path })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "window_averager=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Serve { config_path }) => config_path,
        Ok(Command::Help) => {
            eprintln!("{}", USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            ServiceConfig::from_file(&path)?
        }
        None => ServiceConfig::default(),
    }
    .with_env_overrides();

    for category in Category::ALL {
        if let Some(url) = config.upstream.endpoints.get(&category) {
            tracing::info!("{} ({}) -> {}", category.code(), category, url);
        }
    }

    Averager::new(config)?.run().await?;
    Ok(())
}

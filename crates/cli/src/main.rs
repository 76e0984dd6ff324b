use {
    clap::Parser,
    tokio_util::sync::CancellationToken,
    tracing::{error, info},
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

use vitryna_telegram::BotConfig;

#[derive(Parser)]
#[command(name = "vitryna", about = "Vitryna — Telegram storefront bot")]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "VITRYNA_LOG")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Fatal before any event is handled.
            error!("configuration error: {e}");
            std::process::exit(1);
        },
    };

    let cancel = CancellationToken::new();
    let poller = vitryna_telegram::start_polling(config, cancel.clone()).await?;
    info!("bot is running, press ctrl-c to stop");

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    cancel.cancel();
    poller.await?;
    Ok(())
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}

use rust_draughts::client::Client;
use rust_draughts::config::AppConfig;
use rust_draughts::player::strategy_by_name;

fn main() {
    // Initialize tracing (structured logging).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_draughts=info".into()),
        )
        .init();

    let config = AppConfig::from_env();

    let white =
        strategy_by_name(&config.white_strategy).expect("unknown DRAUGHTS_WHITE_STRATEGY");
    let black =
        strategy_by_name(&config.black_strategy).expect("unknown DRAUGHTS_BLACK_STRATEGY");

    let mut client = Client::new(white, black);

    tracing::info!(
        "rust-draughts v{} match {} starting",
        env!("CARGO_PKG_VERSION"),
        client.id
    );

    match client.run(config.max_rounds) {
        Ok(rounds) => {
            tracing::info!(rounds, "match finished");
            tracing::info!("\n{}", client.board());
        }
        Err(e) => {
            tracing::error!("match aborted: {e}");
            tracing::info!("\n{}", client.board());
            std::process::exit(1);
        }
    }
}

//! Palette Picker API server entrypoint.

use std::net::SocketAddr;

use palette_picker::{config::Config, create_app, db::Database, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palette_picker=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.contains(&"--help".to_string()) {
        print_help();
        return Ok(());
    }

    let config = Config::from_env();
    let database = Database::new(&config.db_path)?;

    if args.contains(&"--seed".to_string()) {
        database.seed()?;
        tracing::info!("Database seeded with sample projects and palettes");
        if args.len() <= 2 {
            return Ok(());
        }
    }

    let state = AppState::new(config.clone(), database);

    let bind_addr = resolve_bind_address(&config);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Palette Picker API running at http://{}", bind_addr);

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn print_help() {
    println!("Palette Picker API Server\n");
    println!("Usage: palette-picker [OPTIONS]\n");
    println!("Options:");
    println!("  --seed            Reset the database to the sample fixture");
    println!("  --help            Show this help message");
    println!("\nEnvironment variables:");
    println!("  DB_PATH           Database path (default: ./data/palette_picker.db)");
    println!("  PORT              Server port (default: 3001)");
    println!("  BIND              Override bind address (e.g. 0.0.0.0:3001)");
}

fn resolve_bind_address(config: &Config) -> SocketAddr {
    std::env::var("BIND")
        .ok()
        .and_then(|s| s.parse::<SocketAddr>().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], config.port)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down gracefully...");
}

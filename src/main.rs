use anyhow::Result;
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tabdeck::{
    util, web, AppStateStore, Config, Database, PersistenceBridge, SqliteSessionStore,
    TabManager, WebAppState,
};
use tokio_util::sync::CancellationToken;

/// Browser-rendered multi-tab terminal front end
#[derive(Parser, Debug)]
#[command(name = "tabdeck", version, about)]
struct Cli {
    /// Address to bind the web host to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Data directory (defaults to ~/.tabdeck)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Do not open the UI in a browser
    #[arg(long)]
    no_browser: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir);

    // Initialize logging to file (~/.tabdeck/logs/tabdeck.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let mut config = Config::load();
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    if cli.no_browser {
        config = config.with_open_browser(false);
    }

    let db = Database::open_default()?;
    let store = Arc::new(SqliteSessionStore::new(AppStateStore::new(db.connection())));
    let tabs = TabManager::new(config.shell.clone());

    let shutdown = CancellationToken::new();
    let bridge = Arc::new(
        PersistenceBridge::new(tabs.clone(), store.clone()).with_debounce(config.save_debounce),
    );
    let bridge_task = bridge.spawn(shutdown.clone());

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        web::shutdown_signal().await;
        signal_token.cancel();
    });

    let state = WebAppState::new(tabs, store).with_config_file(util::config_path());
    let served = web::run_server(state, config.server, shutdown.clone().cancelled_owned()).await;

    // Stop the bridge even when the server failed to start, so the pending save is flushed
    shutdown.cancel();
    if let Err(e) = bridge_task.await {
        tracing::error!(error = %e, "Persistence bridge task failed");
    }

    served
}

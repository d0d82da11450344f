//! Host and store fixtures

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tabdeck::{
    web, AppStateStore, Database, ServerConfig, SessionStore, ShellConfig, SqliteSessionStore,
    TabManager, WebAppState,
};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A SQLite-backed session store living in a temporary directory.
pub struct TempSqliteStore {
    pub dir: TempDir,
}

impl TempSqliteStore {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("tabdeck.db")
    }

    /// Open (or reopen) the database and wrap it in a session store.
    pub fn open(&self) -> SqliteSessionStore {
        let db = Database::open(self.db_path()).expect("Failed to open database");
        SqliteSessionStore::new(AppStateStore::new(db.connection()))
    }
}

/// A tabdeck host serving on an ephemeral local port.
pub struct TestHost {
    pub addr: SocketAddr,
    pub tabs: TabManager,
    shutdown: CancellationToken,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestHost {
    pub async fn start(store: Arc<dyn SessionStore>) -> Self {
        let tabs = TabManager::new(ShellConfig::default());
        let state = WebAppState::new(tabs.clone(), store);
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let config = ServerConfig {
            open_browser: false,
            ..ServerConfig::default()
        };
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(web::serve(
            listener,
            state,
            config,
            shutdown.clone().cancelled_owned(),
        ));

        Self {
            addr,
            tabs,
            shutdown,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    pub async fn stop(self) {
        self.shutdown.cancel();
        self.handle
            .await
            .expect("Server task panicked")
            .expect("Server returned an error");
    }
}

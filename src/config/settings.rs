use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use toml_edit::{DocumentMut, Item, Table};

use crate::session::SAVE_DEBOUNCE;
use crate::tabs::ShellConfig;
use crate::util::paths::config_path;
use crate::web::ServerConfig;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Web host settings
    pub server: ServerConfig,
    /// Shell used for tabs created without an explicit configuration
    pub shell: ShellConfig,
    /// Quiet period before tab changes are persisted
    pub save_debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            shell: ShellConfig::default(),
            save_debounce: SAVE_DEBOUNCE,
        }
    }
}

/// TOML representation of the `[server]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub open_browser: Option<bool>,
}

/// TOML representation of the `[shell]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlShellConfig {
    pub shell_type: Option<String>,
    pub wsl_distro: Option<String>,
    pub wsl_home_path: Option<String>,
}

/// TOML representation of the `[session]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlSessionConfig {
    pub save_debounce_ms: Option<u64>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub server: Option<TomlServerConfig>,
    pub shell: Option<TomlShellConfig>,
    pub session: Option<TomlSessionConfig>,
}

impl Config {
    /// Load configuration from the default location, merging with defaults.
    ///
    /// Writes the bundled example file on first run.
    pub fn load() -> Self {
        let config_file = config_path();

        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from a specific file, merging with defaults.
    ///
    /// A missing or unparsable file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return config,
        };

        match toml::from_str::<TomlConfig>(&contents) {
            Ok(toml_config) => config.merge(toml_config),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring unparsable config file"
                );
            }
        }

        config
    }

    fn merge(&mut self, toml_config: TomlConfig) {
        if let Some(server) = toml_config.server {
            if let Some(host) = server.host {
                self.server.host = host;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
            if let Some(open_browser) = server.open_browser {
                self.server.open_browser = open_browser;
            }
        }

        if let Some(shell) = toml_config.shell {
            if let Some(shell_type) = shell.shell_type {
                self.shell.shell_type = shell_type;
            }
            if let Some(wsl_distro) = shell.wsl_distro {
                self.shell.wsl_distro = wsl_distro;
            }
            if let Some(wsl_home_path) = shell.wsl_home_path {
                self.shell.wsl_home_path = wsl_home_path;
            }
        }

        if let Some(session) = toml_config.session {
            if let Some(ms) = session.save_debounce_ms {
                self.save_debounce = Duration::from_millis(ms);
            }
        }
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.server.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    pub fn with_open_browser(mut self, open_browser: bool) -> Self {
        self.server.open_browser = open_browser;
        self
    }
}

/// Update the `[shell]` section of `config_file`, preserving everything else.
pub fn save_shell_config_to(config_file: &Path, shell: &ShellConfig) -> std::io::Result<()> {
    let contents = if config_file.exists() {
        fs::read_to_string(config_file)?
    } else {
        String::new()
    };

    let mut doc: DocumentMut = contents
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    if !doc.contains_key("shell") {
        doc["shell"] = Item::Table(Table::new());
    }
    doc["shell"]["shell_type"] = toml_edit::value(shell.shell_type.as_str());
    doc["shell"]["wsl_distro"] = toml_edit::value(shell.wsl_distro.as_str());
    doc["shell"]["wsl_home_path"] = toml_edit::value(shell.wsl_home_path.as_str());

    if let Some(parent) = config_file.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(config_file, doc.to_string())?;

    Ok(())
}

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub backend: BackendConfig,
    pub images: ImagesConfig,
    #[serde(default)]
    pub splash: SplashConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub read_timeout_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub write_timeout_secs: u64,
    #[serde(default)]
    pub tls: TlsConfig,
}

/// Trust settings for the internal picking server
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TlsConfig {
    /// PEM file of the internal CA that signed the server certificate
    pub ca_cert_path: Option<String>,
    /// Disables certificate validation entirely. Only for servers whose CA
    /// cannot be exported to the device
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImagesConfig {
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SplashConfig {
    pub delay_ms: u64,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self { delay_ms: 2000 }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct NotificationsConfig {
    /// Addresses that receive missing-material reports
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub sender: String,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[backend]
base_url = "https://192.168.0.10:8443/api"
username = "separacao"
password = "separacao"

[backend.tls]
accept_invalid_certs = false

[images]
dir = "target/images"

[splash]
delay_ms = 2000

[notifications]
recipients = ["almoxarifado@empresa.local"]
sender = "separacao@empresa.local"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return load_config_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
    Ok(config)
}

/// Get the image cache directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_images_dir(config: &Config) -> PathBuf {
    resolve_relative_to_exe(&config.images.dir)
}

/// Get the internal CA path, resolved the same way as the image directory
pub fn get_ca_cert_path(config: &Config) -> Option<PathBuf> {
    config
        .backend
        .tls
        .ca_cert_path
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(resolve_relative_to_exe)
}

fn resolve_relative_to_exe(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(path_str)
}

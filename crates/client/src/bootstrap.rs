//! Process-wide services shared by all screens

use crate::integrations::shortage_notifier::{ShortageNotifier, TracingShortageNotifier};
use crate::shared::api::{HttpPickingGateway, PickingGateway};
use crate::shared::config::{self, Config};
use crate::shared::image_store::LocalImageStore;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Duration;

static APP: OnceCell<AppContext> = OnceCell::new();

/// Everything a screen needs to talk to the outside world
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub gateway: Arc<dyn PickingGateway>,
    pub images: LocalImageStore,
    pub notifier: Arc<dyn ShortageNotifier>,
}

impl AppContext {
    /// Build the HTTP gateway and the local image cache from configuration
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let ca_cert_path = config::get_ca_cert_path(&config);
        let gateway = HttpPickingGateway::new(&config.backend, ca_cert_path.as_deref())?;
        tracing::info!("Picking server: {}", gateway.base_url());

        let images_dir = config::get_images_dir(&config);
        std::fs::create_dir_all(&images_dir).map_err(|e| {
            anyhow::anyhow!("Cannot create image directory {}: {}", images_dir.display(), e)
        })?;
        tracing::info!("Product images cached in {}", images_dir.display());

        Ok(Self {
            config,
            gateway: Arc::new(gateway),
            images: LocalImageStore::new(images_dir),
            notifier: Arc::new(TracingShortageNotifier),
        })
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.config.splash.delay_ms)
    }
}

/// Initialize logging, load configuration and publish the shared context.
/// Must run once, before the first screen is shown.
pub fn start() -> anyhow::Result<&'static AppContext> {
    crate::system::tracing::initialize()?;
    tracing::info!("Starting order picking client");

    let config = config::load_config()?;
    initialize(config)
}

pub fn initialize(config: Config) -> anyhow::Result<&'static AppContext> {
    let context = AppContext::from_config(config)?;
    APP.set(context)
        .map_err(|_| anyhow::anyhow!("Application context already initialized"))?;
    app()
}

pub fn app() -> anyhow::Result<&'static AppContext> {
    APP.get()
        .ok_or_else(|| anyhow::anyhow!("Application context has not been initialized"))
}

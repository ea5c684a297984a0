mod backend;
mod frontend;
mod utils;

use crate::backend::services::SessionStore;
use crate::backend::utils::config::AppConfig;
use crate::backend::utils::paths::{CONFIG_FILE, get_data_dir};
use crate::backend::utils::preferences::FilePreferenceStore;
use crate::frontend::app::{AppRoot, Bootstrap};
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let data_dir = get_data_dir().unwrap_or_else(|_| PathBuf::from("EventPulse"));
    let config_path = data_dir.join(CONFIG_FILE);

    let (config, config_error) = match AppConfig::load(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Logging setup
    utils::logging::init(&config.log_filter);

    match config_error {
        Some(e) => log::warn!("{e}, using defaults"),
        None if !config_path.exists() => {
            if let Err(e) = config.save(&config_path) {
                log::warn!("Failed to write default config: {e}");
            }
        }
        None => {}
    }
    log::info!("Using data directory {}", data_dir.display());

    // Restore the saved session before the first render so guarded pages
    // don't bounce through the login page.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let session_store = SessionStore::new(data_dir.join(&config.storage.session_file));
    let restored = runtime.block_on(session_store.load());
    drop(runtime);

    frontend::app::install(Bootstrap {
        preferences: Arc::new(FilePreferenceStore::open(
            data_dir.join(&config.storage.preferences_file),
        )),
        session_store,
        restored,
    });

    let size = LogicalSize::new(config.window.width, config.window.height);
    let desktop = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(config.window.title.clone())
                .with_inner_size(size)
                .with_resizable(config.window.resizable),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(desktop).launch(AppRoot);
    Ok(())
}

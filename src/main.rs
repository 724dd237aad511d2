//! Site header demo - Main Entry Point
//!
//! Serves the Dioxus app (header + placeholder pages) in fullstack mode,
//! or launches it directly in the browser / as a native window.

use site_header::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting site header server...");

    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Site header - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match native::load_header_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Falling back to default header config: {:#}", e);
            site_header::config::HeaderConfig::default()
        }
    };

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
mod native {
    use anyhow::Context;
    use std::path::PathBuf;

    use site_header::config::HeaderConfig;
    use site_header::shared::constants::HEADER_CONFIG_ENV;
    use site_header::shared::logging::log_config_loaded;

    /// Header config from the file named by `HEADER_CONFIG`, or the defaults
    pub fn load_header_config() -> anyhow::Result<HeaderConfig> {
        let Some(path) = std::env::var_os(HEADER_CONFIG_ENV).map(PathBuf::from) else {
            let config = HeaderConfig::default();
            log_config_loaded("defaults", &config.site_name, config.sticky_threshold_px);
            return Ok(config);
        };

        let config = HeaderConfig::load(&path)
            .with_context(|| format!("failed to load header config from {}", path.display()))?;
        log_config_loaded(&path.display().to_string(), &config.site_name, config.sticky_threshold_px);
        Ok(config)
    }
}

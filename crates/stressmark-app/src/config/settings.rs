//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use super::types::{Settings, DEFAULT_TIMEOUT_MS};
use stressmark_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "stressmark";

/// Default config file location (`~/.config/stressmark/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing or unreadable file, or one that fails to parse, yields
/// defaults. Startup never fails because of configuration. A zero
/// `timeout_ms` would fail every request, so it falls back to the default.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                sanitize(settings)
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

fn sanitize(mut settings: Settings) -> Settings {
    if settings.server.timeout_ms == 0 {
        warn!(
            "server.timeout_ms = 0 is not usable, using {}ms",
            DEFAULT_TIMEOUT_MS
        );
        settings.server.timeout_ms = DEFAULT_TIMEOUT_MS;
    }
    settings
}

/// Write a commented default config file if none exists yet
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let default_content = r#"# stressmark configuration

[server]
base_url = "http://localhost:4000"   # /api/v1/get-stress is appended
timeout_ms = 10000

[render]
marker = "nbsp"          # "nbsp" (U+00A0) or "html_entity" (&nbsp;)

[behavior]
show_errors = true       # false = failed requests are only logged

[ui]
token_separator = "·"    # drawn between sub-word tokens; "" to disable
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(())
}

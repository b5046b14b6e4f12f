use std::path::Path;

use fix_exceptions_common::state::{Config, APP_NAME};

/// Reads the user's config file if there is one. Never creates it.
pub fn load() -> Config {
    match confy::get_configuration_file_path(APP_NAME, None) {
        Ok(path) => load_from(&path),
        Err(e) => {
            tracing::error!(error = %e, "Could not locate config file, using defaults");
            Config::default()
        }
    }
}

pub fn load_from(path: &Path) -> Config {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Config::default();
    }

    tracing::info!(path = %path.display(), "Loading config from file");

    match confy::load_path(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Invalid config file, using defaults");
            Config::default()
        }
    }
}

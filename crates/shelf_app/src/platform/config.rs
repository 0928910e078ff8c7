use std::fs;
use std::path::Path;

use anyhow::Context;
use shelf_core::ShelfConfig;
use shelf_logging::{shelf_info, shelf_warn};

/// Reads the RON config at `path`. A missing file yields defaults; an
/// unreadable or unparsable one is logged and also yields defaults.
pub(crate) fn load_config(path: &Path) -> ShelfConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return ShelfConfig::default();
        }
        Err(err) => {
            shelf_warn!("Failed to read config from {:?}: {}", path, err);
            return ShelfConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            shelf_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            shelf_warn!("Failed to parse config from {:?}: {}", path, err);
            ShelfConfig::default()
        }
    }
}

/// Config file plus command-line overrides, validated.
pub(crate) fn resolve_config(path: &Path, page_size: Option<usize>) -> anyhow::Result<ShelfConfig> {
    let mut config = load_config(path);
    if let Some(page_size) = page_size {
        config.page_size = page_size;
    }
    config
        .validate()
        .with_context(|| format!("invalid configuration (from {})", path.display()))?;
    Ok(config)
}

use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::PowermapConfig;
use super::thresholds::{AuditConfig, RankingConfig};

pub const CONFIG_FILE_NAME: &str = ".powermap.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string, replacing invalid sections with defaults
pub fn parse_and_validate_config(contents: &str) -> Result<PowermapConfig, String> {
    let mut config = toml::from_str::<PowermapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(ref ranking) = config.ranking {
        if let Err(e) = ranking.validate() {
            log::warn!("Invalid [ranking] settings: {}. Using defaults.", e);
            config.ranking = Some(RankingConfig::default());
        }
    }

    if let Some(ref audit) = config.audit {
        if let Err(e) = audit.validate() {
            log::warn!("Invalid [audit] settings: {}. Using defaults.", e);
            config.audit = Some(AuditConfig::default());
        }
    }

    Ok(config)
}

/// Load an explicitly requested config file; unlike discovery, a missing
/// or unparsable file is an error.
pub fn load_config_from(path: &Path) -> anyhow::Result<PowermapConfig> {
    let contents = read_config_file(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    let config = parse_and_validate_config(&contents).map_err(anyhow::Error::msg)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a discovered path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<PowermapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn discover_config(start: PathBuf) -> Option<PowermapConfig> {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

pub fn load_config() -> PowermapConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return PowermapConfig::default();
        }
    };

    discover_config(current).unwrap_or_else(|| {
        log::debug!("No {} found. Using default config.", CONFIG_FILE_NAME);
        PowermapConfig::default()
    })
}

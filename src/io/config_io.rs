use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::cell::SLOTS_PER_DAY;
use crate::model::config::GridConfig;

/// File name looked up when no config path is given
pub const CONFIG_FILE: &str = "shiftgrid.toml";

/// Largest rate whose doubled day total still fits in a `u64`
pub const MAX_REVENUE_PER_SLOT: u64 = u64::MAX / (2 * SLOTS_PER_DAY as u64);

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not parse config template: {0}")]
    TemplateError(#[from] toml_edit::TomlError),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),
}

/// Walk up from `start` looking for shiftgrid.toml.
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Read, parse and validate a config file.
pub fn read_config(path: &Path) -> Result<GridConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: GridConfig = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Load the explicit path if given, else the discovered file, else built-in defaults.
/// Returns the path the config came from, if any.
pub fn load_config(
    explicit: Option<&Path>,
    cwd: &Path,
) -> Result<(GridConfig, Option<PathBuf>), ConfigError> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => discover_config(cwd),
    };
    match path {
        Some(p) => {
            let config = read_config(&p)?;
            tracing::info!(path = %p.display(), "loaded config");
            Ok((config, Some(p)))
        }
        None => {
            tracing::info!("no {} found, using built-in defaults", CONFIG_FILE);
            Ok((GridConfig::default(), None))
        }
    }
}

/// Reject configs the grid cannot run with.
pub fn validate_config(config: &GridConfig) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for row in &config.staff {
        if row.id.trim().is_empty() {
            return Err(ConfigError::Invalid("staff row with empty id".into()));
        }
        if !seen.insert(row.id.as_str()) {
            return Err(ConfigError::Invalid(format!("duplicate staff id \"{}\"", row.id)));
        }
    }

    let mut seen = HashSet::new();
    for item in &config.work_items {
        if item.id.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "work item \"{}\" has an empty id",
                item.label
            )));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "duplicate work item id \"{}\"",
                item.id
            )));
        }
    }

    if config.scheduling.first_visible_slot >= SLOTS_PER_DAY {
        return Err(ConfigError::Invalid(format!(
            "first_visible_slot must be below {}",
            SLOTS_PER_DAY
        )));
    }
    if config.scheduling.revenue_per_slot == 0 {
        return Err(ConfigError::Invalid("revenue_per_slot must be positive".into()));
    }
    if config.scheduling.revenue_per_slot > MAX_REVENUE_PER_SLOT {
        return Err(ConfigError::Invalid(format!(
            "revenue_per_slot must be at most {}",
            MAX_REVENUE_PER_SLOT
        )));
    }
    Ok(())
}

/// Set `[store].name` in a config document, creating the table if needed
pub fn set_store_name(doc: &mut toml_edit::DocumentMut, name: &str) {
    if !doc.contains_key("store") {
        doc["store"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    doc["store"]["name"] = toml_edit::value(name);
}

/// Write a config document, refusing to clobber an existing file unless `force`.
pub fn write_config(path: &Path, doc: &toml_edit::DocumentMut, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    fs::write(path, doc.to_string()).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::paths;

/// Root configuration structure for primext.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PrimextConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via primext.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    #[serde(default = "default_strings")]
    pub strings: StringDefaults,

    #[serde(default = "default_sentences")]
    pub sentences: SentenceDefaults,

    #[serde(default = "default_keys")]
    pub keys: KeyDefaults,

    #[serde(default = "default_temp_dirs")]
    pub temp_dirs: TempDirDefaults,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            strings: default_strings(),
            sentences: default_sentences(),
            keys: default_keys(),
            temp_dirs: default_temp_dirs(),
        }
    }
}

/// Defaults for string helpers (truthiness, indentation, truncation)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringDefaults {
    #[serde(default = "default_truthy_values")]
    pub truthy_values: Vec<String>,

    #[serde(default = "default_indent_pad")]
    pub indent_pad: String,

    #[serde(default = "default_ellipsis")]
    pub trim_trailer: String,

    #[serde(default = "default_ellipsis")]
    pub trim_gap: String,
}

/// Defaults for turning lists into sentences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceDefaults {
    #[serde(default = "default_conjunction")]
    pub conjunction: String,

    #[serde(default = "default_sentence_delimiter")]
    pub delimiter: String,
}

/// Defaults for key flattening
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDefaults {
    #[serde(default = "default_flatten_delimiter")]
    pub flatten_delimiter: String,
}

/// Defaults for temporary directory names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TempDirDefaults {
    #[serde(default = "default_temp_prefix")]
    pub prefix: String,

    #[serde(default)]
    pub suffix: String,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_strings() -> StringDefaults {
    StringDefaults {
        truthy_values: default_truthy_values(),
        indent_pad: default_indent_pad(),
        trim_trailer: default_ellipsis(),
        trim_gap: default_ellipsis(),
    }
}

fn default_truthy_values() -> Vec<String> {
    ["true", "yes", "on", "t", "y", "1"]
        .iter()
        .map(|value| value.to_string())
        .collect()
}

fn default_indent_pad() -> String {
    "  ".to_string()
}

fn default_ellipsis() -> String {
    "...".to_string()
}

fn default_sentences() -> SentenceDefaults {
    SentenceDefaults {
        conjunction: default_conjunction(),
        delimiter: default_sentence_delimiter(),
    }
}

fn default_conjunction() -> String {
    "and".to_string()
}

fn default_sentence_delimiter() -> String {
    ", ".to_string()
}

fn default_keys() -> KeyDefaults {
    KeyDefaults {
        flatten_delimiter: default_flatten_delimiter(),
    }
}

fn default_flatten_delimiter() -> String {
    "_".to_string()
}

fn default_temp_dirs() -> TempDirDefaults {
    TempDirDefaults {
        prefix: default_temp_prefix(),
        suffix: String::new(),
    }
}

fn default_temp_prefix() -> String {
    "temp-".to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Process-wide defaults, loaded once on first use.
pub fn defaults() -> &'static Defaults {
    static DEFAULTS: OnceLock<Defaults> = OnceLock::new();
    DEFAULTS.get_or_init(load_defaults)
}

/// Load defaults, merging file config with built-in defaults.
/// If primext.json is missing or invalid, returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full primext.json config, falling back to defaults on any error.
pub fn load_config() -> PrimextConfig {
    match paths::primext_json() {
        Ok(path) => load_config_at(&path),
        Err(err) => {
            crate::log_status!("config", "Ignoring primext.json: {}", err);
            PrimextConfig::default()
        }
    }
}

/// Load config from `path`, falling back to defaults when it is missing or invalid.
pub fn load_config_at(path: &Path) -> PrimextConfig {
    match load_config_from_file(path) {
        Ok(Some(config)) => config,
        Ok(None) => PrimextConfig::default(),
        Err(err) => {
            crate::log_status!("config", "Ignoring {}: {}", path.display(), err);
            PrimextConfig::default()
        }
    }
}

/// Attempt to load config from `path`; `None` when the file is absent.
fn load_config_from_file(path: &Path) -> crate::Result<Option<PrimextConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| {
        crate::Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    let config: PrimextConfig = serde_json::from_str(&content)
        .map_err(|e| crate::Error::config_invalid_json(path.display().to_string(), e))?;

    Ok(Some(config))
}

/// Save config to primext.json file (creates if missing).
pub fn save_config(config: &PrimextConfig) -> crate::Result<()> {
    save_config_at(&paths::primext_json()?, config)
}

/// Save config to `path`, creating parent directories as needed.
pub fn save_config_at(path: &Path, config: &PrimextConfig) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
        })?;
    }

    let content = serde_json::to_string_pretty(config).map_err(|e| {
        crate::Error::internal_json(e.to_string(), Some("serialize primext.json".to_string()))
    })?;

    fs::write(path, content).map_err(|e| {
        crate::Error::internal_io(e.to_string(), Some(format!("write {}", path.display())))
    })?;

    Ok(())
}

/// Check if primext.json file exists
pub fn config_exists() -> bool {
    paths::primext_json()
        .map(|p| config_exists_at(&p))
        .unwrap_or(false)
}

pub fn config_exists_at(path: &Path) -> bool {
    path.exists()
}

/// Delete primext.json file (reset to defaults)
pub fn reset_config() -> crate::Result<bool> {
    reset_config_at(&paths::primext_json()?)
}

/// Delete the config at `path`; `false` when there was nothing to delete.
pub fn reset_config_at(path: &Path) -> crate::Result<bool> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get the path to primext.json (for display purposes)
pub fn config_path() -> crate::Result<String> {
    Ok(paths::primext_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}

//! Site configuration resolved from build-time environment variables.
//!
//! A static WASM bundle has no process environment at runtime, so values are
//! captured by `option_env!` when the crate is compiled:
//!
//! - `FOLIO_BASE_PATH`: path prefix the site is served under (default `/`)
//! - `FOLIO_STORAGE_PREFIX`: namespace for preference keys (default `wanil`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::preferences::StorageKeys;

pub const DEFAULT_BASE_PATH: &str = "/";
pub const DEFAULT_STORAGE_PREFIX: &str = "wanil";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("base path must start with '/': {0:?}")]
    RelativeBasePath(String),
    #[error("storage prefix must be non-empty without whitespace: {0:?}")]
    InvalidStoragePrefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Always starts and ends with `/`.
    pub base_path: String,
    pub storage_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_owned(),
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Config baked in at compile time; invalid values fall back to defaults.
    pub fn from_build_env() -> Self {
        match Self::from_values(option_env!("FOLIO_BASE_PATH"), option_env!("FOLIO_STORAGE_PREFIX")) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid build configuration, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Validate and normalize raw values. `None` selects the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a relative base path or an empty /
    /// whitespace-containing storage prefix.
    pub fn from_values(base_path: Option<&str>, storage_prefix: Option<&str>) -> Result<Self, ConfigError> {
        let base_path = normalize_base_path(base_path.unwrap_or(DEFAULT_BASE_PATH))?;
        let storage_prefix = storage_prefix.unwrap_or(DEFAULT_STORAGE_PREFIX);
        if storage_prefix.is_empty() || storage_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidStoragePrefix(storage_prefix.to_owned()));
        }
        Ok(Self { base_path, storage_prefix: storage_prefix.to_owned() })
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::with_prefix(&self.storage_prefix)
    }

    /// Site-relative path for a static file under the base path.
    pub fn asset_path(&self, relative: &str) -> String {
        format!("{}{}", self.base_path, relative.trim_start_matches('/'))
    }
}

fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('/') {
        return Err(ConfigError::RelativeBasePath(raw.to_owned()));
    }
    if trimmed.ends_with('/') {
        Ok(trimmed.to_owned())
    } else {
        Ok(format!("{trimmed}/"))
    }
}

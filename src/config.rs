/// Application configuration
///
/// The classification service base URL is deploy-time configuration and is
/// never hardcoded. Values are layered, later sources winning:
/// - built-in defaults
/// - JSON file at `<config dir>/plastic-finder/config.json`
/// - `CLASSIFIER_API_BASE_URL` captured at build time
/// - runtime environment variables

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Supported image file extensions for the picker filter and drag-and-drop
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

pub const API_BASE_URL_VAR: &str = "CLASSIFIER_API_BASE_URL";
pub const CATALOG_URL_VAR: &str = "PRODUCT_CATALOG_URL";
pub const TIMEOUT_VAR: &str = "CLASSIFIER_TIMEOUT_SECS";

pub const DEFAULT_CATALOG_URL: &str = "https://www.plasticlist.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// On-disk config file; every field optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    pub api_base_url: Option<String>,
    pub catalog_base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Read the config file; a missing file is an empty config
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let file_error = |reason: String| ConfigError::File {
            path: path.display().to_string(),
            reason,
        };

        let raw = fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| file_error(e.to_string()))
    }
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Classification service base, without trailing slash
    pub api_base_url: String,
    /// Product catalog host used to build the product page URL
    pub catalog_base_url: String,
    /// Upper bound for one classify request
    pub request_timeout: Duration,
}

impl Config {
    /// Load from all sources for the running process
    pub fn load() -> Result<Self, ConfigError> {
        let file = match Self::config_path() {
            Some(path) => {
                log::debug!("Looking for config file at {}", path.display());
                FileConfig::read(&path)?
            }
            None => FileConfig::default(),
        };

        Self::resolve(file, option_env!("CLASSIFIER_API_BASE_URL"), |key| {
            std::env::var(key).ok()
        })
    }

    /// Get the path where the config file is expected
    /// - Linux: ~/.config/plastic-finder/config.json
    /// - macOS: ~/Library/Application Support/plastic-finder/config.json
    /// - Windows: %APPDATA%\plastic-finder\config.json
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("plastic-finder");
        path.push("config.json");
        Some(path)
    }

    /// Merge the layers; `env` is injected so tests stay off the real environment
    pub fn resolve(
        file: FileConfig,
        build_api_base_url: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        // Empty values count as unset
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let present = |v: &String| !v.trim().is_empty();

        let api_base_url = lookup(API_BASE_URL_VAR)
            .or_else(|| build_api_base_url.map(str::to_string).filter(present))
            .or_else(|| file.api_base_url.filter(present))
            .ok_or(ConfigError::MissingApiBaseUrl)?;

        let catalog_base_url = lookup(CATALOG_URL_VAR)
            .or_else(|| file.catalog_base_url.filter(present))
            .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout(raw))?,
            None => match file.request_timeout_secs {
                Some(0) => return Err(ConfigError::InvalidTimeout("0".to_string())),
                Some(secs) => secs,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };

        Ok(Self {
            api_base_url: normalize_url("api_base_url", &api_base_url)?,
            catalog_base_url: normalize_url("catalog_base_url", &catalog_base_url)?,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Full URL of the classify endpoint
    pub fn classify_endpoint(&self) -> String {
        format!("{}/classify", self.api_base_url)
    }

    /// Product page for an identifier; the identifier is used verbatim
    pub fn product_url(&self, identifier: &str) -> String {
        format!("{}/product/{}", self.catalog_base_url, identifier)
    }
}

/// Check that `value` is an absolute http(s) URL and strip trailing slashes
fn normalize_url(field: &'static str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    let invalid = |reason: String| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        reason,
    };

    let url = reqwest::Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    // Paths are appended to the base, so it cannot carry a query or fragment
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }

    Ok(value.trim_end_matches('/').to_string())
}

/// Whether a path looks like an image we can preview and upload
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

use serde::Deserialize;
use std::path::Path;

/// Server configuration loaded from an optional YAML file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Origins allowed to call the API from a browser. `"*"` allows any.
    pub allowed_origins: Vec<String>,

    /// Maximum request body size in bytes
    pub max_upload_bytes: usize,

    /// Largest output image (width * height) a pad or resize may produce
    pub max_output_pixels: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            max_upload_bytes: 32 * 1024 * 1024,
            max_output_pixels: 100_000_000,
        }
    }
}

impl ServerConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load configuration from `path`, falling back to defaults when no path
    /// is given or the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("No config file set, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        origins = config.allowed_origins.len(),
                        max_upload_bytes = config.max_upload_bytes,
                        max_output_pixels = config.max_output_pixels,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Well-known resource names
// =============================================================================

/// Properties resource carrying the framework version
pub const DEFAULT_PROPERTIES_RESOURCE: &str = "metaDescriptor.properties";

/// Key of the framework version inside the properties resource
pub const DEFAULT_FRAMEWORK_VERSION_KEY: &str = "apolloVersion";

/// Path of jar manifests on the classpath
pub const DEFAULT_MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// Manifest main attribute carrying the service version
pub const DEFAULT_VERSION_ATTRIBUTE: &str = "Implementation-Version";

/// Error type for loading configuration files
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolver configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MetaConfig {
    pub properties_resource: String,
    pub framework_version_key: String,
    pub manifest_path: String,
    pub version_attribute: String,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            properties_resource: DEFAULT_PROPERTIES_RESOURCE.to_string(),
            framework_version_key: DEFAULT_FRAMEWORK_VERSION_KEY.to_string(),
            manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
            version_attribute: DEFAULT_VERSION_ATTRIBUTE.to_string(),
        }
    }
}

impl MetaConfig {
    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: display,
            source,
        })
    }
}

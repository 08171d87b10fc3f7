//! Version resolution with fallback
//!
//! The framework version comes from a properties resource, the service
//! version from the first jar manifest that declares one. Neither lookup can
//! fail the caller: errors are logged and replaced by [`FALLBACK_VERSION`].

use std::io::Read;

use tracing::{debug, error, warn};

use crate::config::MetaConfig;
use crate::meta::descriptor::{FALLBACK_VERSION, MetaDescriptor, ServiceDescriptor};
use crate::meta::error::MetaError;
use crate::meta::loader::{Resource, ResourceLoader};
use crate::meta::manifest::Manifest;
use crate::meta::properties::parse_properties;

/// Resolve a descriptor using the default resource names
pub fn read_meta_descriptor(service_name: &str, loader: &dyn ResourceLoader) -> MetaDescriptor {
    MetaResolver::default().resolve(service_name, loader)
}

/// Reads version metadata from the resources named in its [`MetaConfig`]
#[derive(Debug, Clone, Default)]
pub struct MetaResolver {
    config: MetaConfig,
}

impl MetaResolver {
    pub fn new(config: MetaConfig) -> Self {
        Self { config }
    }

    /// Build the descriptor for `service_name`
    ///
    /// Always returns a value. Both versions are non-empty: either the value
    /// found in the resources or [`FALLBACK_VERSION`].
    pub fn resolve(&self, service_name: &str, loader: &dyn ResourceLoader) -> MetaDescriptor {
        let framework_version = match self.load_framework_version(loader) {
            Ok(Some(version)) => version,
            Ok(None) => {
                debug!(
                    "No '{}' in {}, using fallback",
                    self.config.framework_version_key, self.config.properties_resource
                );
                FALLBACK_VERSION.to_string()
            }
            Err(e) => {
                warn!("Failed to load framework version: {}", e);
                FALLBACK_VERSION.to_string()
            }
        };

        // Errors were already logged by load_service_version
        let service_version = self
            .load_service_version(loader)
            .ok()
            .flatten()
            .unwrap_or_else(|| {
                debug!(
                    "No '{}' found for {}, using fallback",
                    self.config.version_attribute, service_name
                );
                FALLBACK_VERSION.to_string()
            });

        MetaDescriptor::new(
            ServiceDescriptor::new(service_name, service_version),
            framework_version,
        )
    }

    /// Read the framework version from the properties resource
    ///
    /// # Returns
    /// * `Ok(Some(version))` - The key is present with a non-blank value
    /// * `Ok(None)` - The resource or key is missing, or the value is blank
    /// * `Err(MetaError)` - The resource could not be read or parsed
    pub fn load_framework_version(
        &self,
        loader: &dyn ResourceLoader,
    ) -> Result<Option<String>, MetaError> {
        let name = self.config.properties_resource.as_str();

        let Some(reader) = loader
            .open_resource(name)
            .map_err(|e| MetaError::io(name, e))?
        else {
            return Ok(None);
        };
        let bytes = read_all(reader, name)?;

        let properties = parse_properties(&bytes)?;
        Ok(non_blank(
            properties
                .get(&self.config.framework_version_key)
                .map(String::as_str),
        ))
    }

    /// Read the service version from the first manifest that declares one
    ///
    /// Manifests are visited in loader order and the first non-blank value
    /// wins, so with several candidates the result depends on that order.
    /// Any read failure stops the scan; it is logged here and returned.
    pub fn load_service_version(
        &self,
        loader: &dyn ResourceLoader,
    ) -> Result<Option<String>, MetaError> {
        self.scan_manifests(loader)
            .inspect_err(|e| error!("Failed to read manifest: {}", e))
    }

    fn scan_manifests(&self, loader: &dyn ResourceLoader) -> Result<Option<String>, MetaError> {
        let path = self.config.manifest_path.as_str();
        let resources = loader.resources(path).map_err(|e| MetaError::io(path, e))?;

        for resource in resources {
            let manifest = read_manifest(resource.as_ref())?;
            if let Some(version) = non_blank(manifest.main_attribute(&self.config.version_attribute))
            {
                debug!("Found service version {} in {}", version, resource.location());
                return Ok(Some(version));
            }
        }

        Ok(None)
    }
}

fn read_manifest(resource: &dyn Resource) -> Result<Manifest, MetaError> {
    let location = resource.location();
    let reader = resource.open().map_err(|e| MetaError::io(location, e))?;
    let bytes = read_all(reader, location)?;
    Manifest::parse(&bytes, location)
}

/// Drain and drop the stream before anything else is opened
fn read_all(mut reader: Box<dyn Read>, location: &str) -> Result<Vec<u8>, MetaError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| MetaError::io(location, e))?;
    Ok(bytes)
}

/// Blank values count as absent; anything else is returned unchanged
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

//! Immutable descriptor values produced by the resolver

use std::fmt;

use serde::Serialize;

/// Version reported when no real version can be determined
pub const FALLBACK_VERSION: &str = "0.0.0-UNKNOWN";

/// Name and version of the deployed service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    service_name: String,
    service_version: String,
}

impl ServiceDescriptor {
    pub fn new(service_name: impl Into<String>, service_version: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: service_version.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn service_version(&self) -> &str {
        &self.service_version
    }
}

/// Service descriptor together with the version of the hosting framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDescriptor {
    descriptor: ServiceDescriptor,
    framework_version: String,
}

impl MetaDescriptor {
    pub fn new(descriptor: ServiceDescriptor, framework_version: impl Into<String>) -> Self {
        Self {
            descriptor,
            framework_version: framework_version.into(),
        }
    }

    pub fn descriptor(&self) -> &ServiceDescriptor {
        &self.descriptor
    }

    pub fn framework_version(&self) -> &str {
        &self.framework_version
    }
}

impl fmt::Display for MetaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (framework {})",
            self.descriptor.service_name, self.descriptor.service_version, self.framework_version
        )
    }
}

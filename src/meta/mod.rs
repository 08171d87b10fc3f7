//! Service metadata resolution
//!
//! This module locates the version of the running service and the version of
//! the hosting framework by reading resources visible to a [`ResourceLoader`].
//! Resolution never fails: anything that cannot be determined becomes
//! [`FALLBACK_VERSION`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Loader    │────▶│  Resolver   │────▶│ Descriptor  │
//! │ (resources) │     │ (fallbacks) │     │  (output)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   Loaders   │     │   Readers   │
//! │ (classpath) │     │(props, mf)  │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`descriptor`]: Immutable `ServiceDescriptor` / `MetaDescriptor` values
//! - [`loader`]: Resource capability traits consumed by the resolver
//! - [`loaders`]: Concrete loaders (directories and jar archives)
//! - [`properties`]: `.properties` reader for the framework version
//! - [`manifest`]: Jar manifest reader for the service version
//! - [`resolver`]: Version resolution with fallback
//! - [`error`]: Error type for loading and parsing

pub mod descriptor;
pub mod error;
pub mod loader;
pub mod loaders;
pub mod manifest;
pub mod properties;
pub mod resolver;

pub use descriptor::{FALLBACK_VERSION, MetaDescriptor, ServiceDescriptor};
pub use error::MetaError;
pub use loader::{Resource, ResourceLoader};
pub use resolver::{MetaResolver, read_meta_descriptor};

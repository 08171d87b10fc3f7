//! Resource capability consumed by the resolver

use std::io::{self, Read};

#[cfg(test)]
use mockall::automock;

/// A single resource found while enumerating a loader
pub trait Resource {
    /// Human-readable location used in logs and errors
    fn location(&self) -> &str;

    /// Opens a fresh stream over the resource contents
    fn open(&self) -> io::Result<Box<dyn Read>>;
}

/// Trait for looking up named resources (e.g. across classpath entries)
#[cfg_attr(test, automock)]
pub trait ResourceLoader {
    /// Opens the first visible resource with the given name
    ///
    /// # Returns
    /// * `Ok(Some(reader))` - The resource exists
    /// * `Ok(None)` - No resource with that name is visible
    /// * `Err(io::Error)` - The lookup itself failed
    fn open_resource(&self, name: &str) -> io::Result<Option<Box<dyn Read>>>;

    /// Enumerates every visible resource with the given name
    ///
    /// Resources are returned in the loader's own order. Callers that stop at
    /// the first match inherit that order.
    fn resources(&self, name: &str) -> io::Result<Vec<Box<dyn Resource>>>;
}

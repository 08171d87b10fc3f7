//! In-memory resource loader for testing

use std::io::{self, Cursor, Read};

use meta_descriptor::meta::{Resource, ResourceLoader};

/// Resource loader backed by an ordered list of named entries
///
/// Enumeration returns entries in insertion order, which lets tests pin the
/// order a real classpath would otherwise decide.
#[derive(Default)]
pub struct StaticLoader {
    entries: Vec<StaticEntry>,
    fail_enumeration: bool,
}

struct StaticEntry {
    name: String,
    location: String,
    content: Option<Vec<u8>>,
}

impl StaticLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, location: &str, name: &str, content: &str) -> Self {
        self.entries.push(StaticEntry {
            name: name.to_string(),
            location: location.to_string(),
            content: Some(content.as_bytes().to_vec()),
        });
        self
    }

    /// Add a resource that is listed but fails when opened
    pub fn with_unreadable(mut self, location: &str, name: &str) -> Self {
        self.entries.push(StaticEntry {
            name: name.to_string(),
            location: location.to_string(),
            content: None,
        });
        self
    }

    pub fn with_manifest(self, location: &str, content: &str) -> Self {
        self.with_resource(location, "META-INF/MANIFEST.MF", content)
    }

    pub fn with_properties(self, content: &str) -> Self {
        self.with_resource("framework.jar", "metaDescriptor.properties", content)
    }

    pub fn failing_enumeration(mut self) -> Self {
        self.fail_enumeration = true;
        self
    }
}

struct StaticResource {
    location: String,
    content: Option<Vec<u8>>,
}

impl Resource for StaticResource {
    fn location(&self) -> &str {
        &self.location
    }

    fn open(&self) -> io::Result<Box<dyn Read>> {
        match &self.content {
            Some(content) => Ok(Box::new(Cursor::new(content.clone()))),
            None => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("cannot open {}", self.location),
            )),
        }
    }
}

impl ResourceLoader for StaticLoader {
    fn open_resource(&self, name: &str) -> io::Result<Option<Box<dyn Read>>> {
        let Some(entry) = self.entries.iter().find(|e| e.name == name) else {
            return Ok(None);
        };
        match &entry.content {
            Some(content) => Ok(Some(Box::new(Cursor::new(content.clone())))),
            None => Err(io::Error::other(format!("cannot open {}", entry.location))),
        }
    }

    fn resources(&self, name: &str) -> io::Result<Vec<Box<dyn Resource>>> {
        if self.fail_enumeration {
            return Err(io::Error::other("enumeration failed"));
        }
        Ok(self
            .entries
            .iter()
            .filter(|e| e.name == name)
            .map(|e| {
                Box::new(StaticResource {
                    location: e.location.clone(),
                    content: e.content.clone(),
                }) as Box<dyn Resource>
            })
            .collect())
    }
}

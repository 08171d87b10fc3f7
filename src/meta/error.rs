use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetaError {
    #[error("I/O error reading {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid properties: {0}")]
    Properties(String),

    #[error("Invalid manifest {location}: {message}")]
    Manifest { location: String, message: String },
}

impl MetaError {
    pub fn io(location: impl Into<String>, source: std::io::Error) -> Self {
        MetaError::Io {
            location: location.into(),
            source,
        }
    }
}

use std::io;

use thiserror::Error;

/// Failure to read a level's passage resource.
///
/// Callers never abort on this: the affected level degrades to zero lines.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("passage resource `{resource}` is missing")]
    Missing {
        resource: String,
        #[source]
        source: io::Error,
    },
    #[error("passage resource `{resource}` is not valid UTF-8")]
    NotUtf8 { resource: String },
}

impl LoadError {
    pub fn resource(&self) -> &str {
        match self {
            LoadError::Missing { resource, .. } | LoadError::NotUtf8 { resource } => resource,
        }
    }
}

//! Document sources used by the binary. None of this is needed to parse or
//! render a recipe that is already in memory.

use async_trait::async_trait;

use crate::config::Settings;
use crate::error::ReciformatError;

mod path;
mod url;

pub use self::path::PathReader;
pub use self::url::UrlReader;

#[async_trait]
pub trait Reader: Send + Sync {
    /// Whether this reader knows how to read from `location`
    fn handles(&self, location: &str) -> bool;

    async fn read(&self, location: &str) -> Result<String, ReciformatError>;
}

/// Readers in the order they are asked
pub fn default_readers(settings: &Settings) -> Vec<Box<dyn Reader>> {
    vec![Box::new(UrlReader::new(settings)), Box::new(PathReader)]
}

/// Read the document at `location` with the first reader that handles it
pub async fn read_document(location: &str, settings: &Settings) -> Result<String, ReciformatError> {
    for reader in default_readers(settings) {
        if reader.handles(location) {
            return reader.read(location).await;
        }
    }
    Err(ReciformatError::UnsupportedLocation(location.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_location_is_unsupported() {
        let err = read_document("", &Settings::default()).await.unwrap_err();
        assert!(matches!(err, ReciformatError::UnsupportedLocation(_)));
    }
}

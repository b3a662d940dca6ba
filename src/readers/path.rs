use std::io::{Error, ErrorKind};
use std::path::Path;

use async_trait::async_trait;
use log::debug;

use super::Reader;
use crate::error::ReciformatError;

/// Reads documents from the local filesystem
pub struct PathReader;

#[async_trait]
impl Reader for PathReader {
    fn handles(&self, location: &str) -> bool {
        !location.trim().is_empty() && !location.contains('\n')
    }

    async fn read(&self, location: &str) -> Result<String, ReciformatError> {
        let path = Path::new(location);
        if !tokio::fs::metadata(path).await.is_ok_and(|m| m.is_file()) {
            return Err(Error::new(ErrorKind::NotFound, format!("Not a file: {location}")).into());
        }
        debug!("Reading {}", path.display());
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

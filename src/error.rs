use thiserror::Error;

/// Errors that can occur while turning a document into a formatted recipe
#[derive(Error, Debug)]
pub enum ReciformatError {
    /// No JSON-LD payload in the document describes a `Recipe`
    #[error("No recipe found in document")]
    NoRecipeFound,

    /// No reader knows how to read from this location
    #[error("Don't know how to read from: {0}")]
    UnsupportedLocation(String),

    /// Failed to fetch document from URL
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Failed to read a document or write the formatted output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl ReciformatError {
    /// True when the document was read fine but holds no recipe.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReciformatError::NoRecipeFound)
    }
}

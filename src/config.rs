use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// JSON-LD extraction configuration
    #[serde(default)]
    pub extract: ExtractConfig,
    /// Field normalization configuration
    #[serde(default)]
    pub normalize: NormalizeConfig,
    /// Directory the binary writes formatted recipes into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            extract: ExtractConfig::default(),
            normalize: NormalizeConfig::default(),
            output_dir: default_output_dir(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for locating the recipe payload
#[derive(Debug, Deserialize, Clone)]
pub struct ExtractConfig {
    /// Upper bound on HTML entity decoding passes per payload.
    /// Decoding stops early once the text no longer changes.
    #[serde(default = "default_max_unescape_passes")]
    pub max_unescape_passes: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_unescape_passes: default_max_unescape_passes(),
        }
    }
}

/// Configuration for recipe field normalization
#[derive(Debug, Deserialize, Clone)]
pub struct NormalizeConfig {
    /// `chrono` strftime pattern for published/modified dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

// Default value functions
fn default_max_unescape_passes() -> usize {
    3
}

fn default_date_format() -> String {
    "%d/%m/%Y, %H:%M:%S".to_string()
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIFORMAT__ prefix
    /// 2. reciformat.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIFORMAT__NORMALIZE__DATE_FORMAT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`Settings::load`] for the source priority.
pub fn load_config() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("reciformat").required(false))
        // Use double underscore for nested: RECIFORMAT__EXTRACT__MAX_UNESCAPE_PASSES
        .add_source(
            Environment::with_prefix("RECIFORMAT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

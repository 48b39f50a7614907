//! Configuration structures for the translation gateway.
//!
//! This module provides TOML-based configuration. The configuration system
//! supports:
//! - Bundled defaults (include_str! from padauk.toml)
//! - User overrides (./padauk.toml or ~/.config/padauk/padauk.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use padauk_error::{ConfigError, PadaukError, PadaukResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Request-pipeline tuning knobs.
///
/// All fields have bundled defaults, so a partial `[gateway]` table is fine:
///
/// ```toml
/// [gateway]
/// cooldown_seconds = 15
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_builder::Builder,
)]
pub struct GatewayConfig {
    /// Minimum spacing between a caller's billable translations, in seconds
    #[serde(default = "default_cooldown_seconds")]
    #[builder(default = "default_cooldown_seconds()")]
    pub cooldown_seconds: u64,

    /// How long a cached translation stays valid, in seconds
    #[serde(default = "default_cache_ttl_seconds")]
    #[builder(default = "default_cache_ttl_seconds()")]
    pub cache_ttl_seconds: u64,

    /// Minimum input length in characters
    #[serde(default = "default_min_len")]
    #[builder(default = "default_min_len()")]
    pub min_len: usize,

    /// Maximum input length in characters
    #[serde(default = "default_max_len")]
    #[builder(default = "default_max_len()")]
    pub max_len: usize,

    /// Initial retry backoff delay in milliseconds
    #[serde(default = "default_retry_base_delay_ms")]
    #[builder(default = "default_retry_base_delay_ms()")]
    pub retry_base_delay_ms: u64,

    /// Upper bound on a single retry delay in milliseconds
    #[serde(default = "default_retry_max_delay_ms")]
    #[builder(default = "default_retry_max_delay_ms()")]
    pub retry_max_delay_ms: u64,

    /// Retries after the initial attempt
    #[serde(default = "default_max_retries")]
    #[builder(default = "default_max_retries()")]
    pub max_retries: usize,
}

fn default_cooldown_seconds() -> u64 {
    5
}

fn default_cache_ttl_seconds() -> u64 {
    86_400 // 24 hours
}

fn default_min_len() -> usize {
    1
}

fn default_max_len() -> usize {
    2000
}

fn default_retry_base_delay_ms() -> u64 {
    1000
}

fn default_retry_max_delay_ms() -> u64 {
    10_000
}

fn default_max_retries() -> usize {
    3
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: default_cooldown_seconds(),
            cache_ttl_seconds: default_cache_ttl_seconds(),
            min_len: default_min_len(),
            max_len: default_max_len(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
            retry_max_delay_ms: default_retry_max_delay_ms(),
            max_retries: default_max_retries(),
        }
    }
}

/// Connection settings for the external key-value backend.
///
/// When `url` is unset the gateway runs on the in-process store instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct StoreConfig {
    /// Base URL of the REST key-value service
    #[serde(default)]
    pub url: Option<String>,

    /// Bearer token for the service
    #[serde(default)]
    pub token: Option<String>,
}

impl StoreConfig {
    /// Whether an external backend is configured.
    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}

/// Upstream provider selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Provider name ("ollama" or "gemini")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model identifier passed to the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Provider host override (Ollama server URL)
    #[serde(default)]
    pub host: Option<String>,
}

fn default_provider() -> String {
    "ollama".to_string()
}

fn default_model() -> String {
    "deepseek-v3.1:671b-cloud".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            host: None,
        }
    }
}

/// Top-level Padauk configuration.
///
/// Loads configuration from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from padauk.toml)
/// 2. User override (./padauk.toml or ~/.config/padauk/padauk.toml)
///
/// # Example
///
/// ```no_run
/// use padauk_core::PadaukConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PadaukConfig::load()?;
/// println!("cooldown: {}s", config.gateway.cooldown_seconds);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct PadaukConfig {
    /// Request-pipeline settings
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// External key-value backend settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Upstream provider settings
    #[serde(default)]
    pub model: ModelConfig,
}

impl PadaukConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> PadaukResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                PadaukError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                PadaukError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (padauk.toml shipped with the library)
    /// 2. User config in home directory (~/.config/padauk/padauk.toml)
    /// 3. User config in current directory (./padauk.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    #[instrument]
    pub fn load() -> PadaukResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../padauk.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/padauk/padauk.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("padauk").required(false));

        builder
            .build()
            .map_err(|e| {
                PadaukError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                PadaukError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

//! Application and server configuration.
//!
//! [`AppConfig`] is compiled into the browser bundle and composes the
//! library configs with their defaults. [`ServeConfig`] is loaded by the
//! static server binary via the `config` crate from environment variables.

use daily_verse_routing::GuardConfig;
use daily_verse_session::SessionConfig;
#[cfg(feature = "serve")]
use serde::Deserialize;

/// Browser application configuration composed from library configs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Navigation guard configuration.
    pub guard: GuardConfig,

    /// Session marker configuration.
    pub session: SessionConfig,
}

/// Static server configuration.
#[cfg(feature = "serve")]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServeConfig {
    /// Address to listen on.
    #[serde(default = "default_site_addr")]
    pub site_addr: String,

    /// Directory holding the built bundle and its `index.html`.
    #[serde(default = "default_site_root")]
    pub site_root: std::path::PathBuf,
}

#[cfg(feature = "serve")]
fn default_site_addr() -> String {
    "127.0.0.1:3000".to_string()
}

#[cfg(feature = "serve")]
fn default_site_root() -> std::path::PathBuf {
    std::path::PathBuf::from("target/site")
}

#[cfg(feature = "serve")]
impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            site_addr: default_site_addr(),
            site_root: default_site_root(),
        }
    }
}

#[cfg(feature = "serve")]
impl ServeConfig {
    /// Loads configuration from `DAILY_VERSE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(
            config::Config::builder().add_source(
                config::Environment::with_prefix("DAILY_VERSE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
        )
    }

    fn load(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }
}

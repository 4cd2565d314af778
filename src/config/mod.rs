//! Application configuration resolved from the environment.
//!
//! Every setting is optional. Values are read once (see [`AppConfig::from_env`]) and the
//! resulting struct is passed to whatever needs it; nothing re-reads the environment later.

use std::fmt;

use url::Url;

use crate::core::client::DEFAULT_API_BASE_URL;
use crate::core::error::ConfigError;

/// Environment variable holding the API base URL.
pub const ENV_API_BASE_URL: &str = "COINFRONT_API_BASE_URL";
/// Environment variable holding the deployment environment name.
pub const ENV_APP_ENV: &str = "COINFRONT_ENV";
pub const ENV_ENABLE_ANALYTICS: &str = "COINFRONT_ENABLE_ANALYTICS";
pub const ENV_ENABLE_DARK_MODE: &str = "COINFRONT_ENABLE_DARK_MODE";
pub const ENV_ENABLE_TESTNET: &str = "COINFRONT_ENABLE_TESTNET";
/// Environment variable holding the error-tracking endpoint (DSN).
pub const ENV_ERROR_TRACKING_DSN: &str = "COINFRONT_ERROR_TRACKING_DSN";

/// Deployment environment.
///
/// Names are matched exactly; anything other than the three known names is kept as
/// [`Environment::Other`], which behaves as a non-development deployment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Local development; the domain service answers from mock data.
    #[default]
    Development,
    Staging,
    Production,
    /// An unrecognized name, e.g. `test` or `preview`.
    Other(String),
}

impl Environment {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Environment {
    fn from(s: &str) -> Self {
        match s {
            "development" => Self::Development,
            "staging" => Self::Staging,
            "production" => Self::Production,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Named feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Analytics,
    DarkMode,
    Testnet,
}

/// Feature flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    pub enable_analytics: bool,
    pub enable_dark_mode: bool,
    pub enable_testnet: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_analytics: true,
            enable_dark_mode: true,
            enable_testnet: false,
        }
    }
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub environment: Environment,
    pub features: FeatureFlags,
    /// Error-tracking endpoint; `None` when unset or empty.
    pub error_tracking_dsn: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default base URL is valid"),
            environment: Environment::default(),
            features: FeatureFlags::default(),
            error_tracking_dsn: None,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration from an arbitrary key/value source.
    ///
    /// Empty values count as unset. Flags accept exactly `true` or `false`; anything else
    /// keeps the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = FeatureFlags::default();

        let api_base_url = match get(ENV_API_BASE_URL) {
            Some(raw) => Url::parse(&raw)?,
            None => Url::parse(DEFAULT_API_BASE_URL)?,
        };

        let environment = get(ENV_APP_ENV)
            .map(|raw| Environment::from(raw.as_str()))
            .unwrap_or_default();

        let flag = |key: &str, default: bool| match get(key).as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => default,
        };

        let features = FeatureFlags {
            enable_analytics: flag(ENV_ENABLE_ANALYTICS, defaults.enable_analytics),
            enable_dark_mode: flag(ENV_ENABLE_DARK_MODE, defaults.enable_dark_mode),
            enable_testnet: flag(ENV_ENABLE_TESTNET, defaults.enable_testnet),
        };

        let config = Self {
            api_base_url,
            environment,
            features,
            error_tracking_dsn: get(ENV_ERROR_TRACKING_DSN),
        };
        tracing::debug!(
            environment = %config.environment,
            api_base_url = %config.api_base_url,
            "configuration resolved"
        );
        Ok(config)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    #[must_use]
    pub fn is_staging(&self) -> bool {
        self.environment == Environment::Staging
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    #[must_use]
    pub const fn is_feature_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Analytics => self.features.enable_analytics,
            Feature::DarkMode => self.features.enable_dark_mode,
            Feature::Testnet => self.features.enable_testnet,
        }
    }
}

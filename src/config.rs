//! Process-wide strictness and failure-mode switches.
//!
//! The configuration is resolved exactly once: either explicitly through
//! [`init`], or lazily on first use from the environment
//! (`STRICT_RESULT_CHECKS`, `STRICT_RESULT_ON_MISUSE`). Afterwards it is
//! immutable for the life of the process.

use core::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Environment variable selecting the [`CheckMode`].
pub const CHECKS_ENV: &str = "STRICT_RESULT_CHECKS";
/// Environment variable selecting the [`FailureMode`].
pub const ON_MISUSE_ENV: &str = "STRICT_RESULT_ON_MISUSE";

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Whether `clone()` and `take()` validate that the source is still live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Copying or moving a consumed result is a misuse fault.
    #[default]
    Strict,
    /// Copying or moving a consumed result transfers the consumed state.
    Permissive,
}

/// What a misuse fault does to the running program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Unwind with the fault as the panic payload; catchable.
    #[default]
    Unwind,
    /// Print the diagnostic and abort the process.
    Abort,
}

impl CheckMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "permissive" => Some(Self::Permissive),
            _ => None,
        }
    }
}

impl FailureMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unwind" | "panic" => Some(Self::Unwind),
            "abort" | "terminate" => Some(Self::Abort),
            _ => None,
        }
    }
}

/// The resolved switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Validation performed by `clone()` / `take()`.
    pub checks: CheckMode,
    /// Behaviour of a misuse fault.
    pub on_misuse: FailureMode,
}

impl Config {
    /// The default configuration: strict checks, unwinding faults.
    pub const fn strict() -> Self {
        Self {
            checks: CheckMode::Strict,
            on_misuse: FailureMode::Unwind,
        }
    }

    /// Permissive checks, unwinding faults.
    pub const fn permissive() -> Self {
        Self {
            checks: CheckMode::Permissive,
            on_misuse: FailureMode::Unwind,
        }
    }

    /// Returns `true` if `clone()` / `take()` must reject consumed sources.
    #[inline(always)]
    pub const fn is_strict(&self) -> bool {
        matches!(self.checks, CheckMode::Strict)
    }

    /// Builds a configuration from a key lookup.
    ///
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for an unrecognised value.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(CHECKS_ENV) {
            config.checks = CheckMode::parse(&raw).ok_or(ConfigError::InvalidValue {
                key: CHECKS_ENV,
                value: raw,
            })?;
        }
        if let Some(raw) = lookup(ON_MISUSE_ENV) {
            config.on_misuse = FailureMode::parse(&raw).ok_or(ConfigError::InvalidValue {
                key: ON_MISUSE_ENV,
                value: raw,
            })?;
        }
        Ok(config)
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for an unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parses a JSON document such as `{"checks": "permissive"}`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Errors produced while resolving the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration was already resolved to a different value.
    AlreadyInitialized(Config),
    /// An environment key held an unrecognised value.
    InvalidValue {
        /// The offending key.
        key: &'static str,
        /// The raw value.
        value: String,
    },
    /// A JSON document could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized(current) => {
                write!(f, "configuration already initialized as {current:?}")
            }
            Self::InvalidValue { key, value } => write!(f, "invalid value {value:?} for {key}"),
            Self::Parse(msg) => write!(f, "malformed configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Installs `config` as the process-wide configuration.
///
/// Re-installing an identical configuration is a no-op.
///
/// # Errors
/// Returns [`ConfigError::AlreadyInitialized`] if a different configuration
/// was already resolved, explicitly or from the environment.
pub fn init(config: Config) -> Result<(), ConfigError> {
    let current = CONFIG.get_or_init(|| {
        #[cfg(feature = "tracing")]
        tracing::debug!(?config, "result configuration initialized");
        config
    });
    if *current == config {
        Ok(())
    } else {
        Err(ConfigError::AlreadyInitialized(*current))
    }
}

/// Returns the process-wide configuration, resolving it from the
/// environment on first use.
#[inline]
pub fn get() -> &'static Config {
    CONFIG.get_or_init(resolve_from_env)
}

#[cold]
fn resolve_from_env() -> Config {
    match Config::from_env() {
        Ok(config) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(?config, "result configuration resolved from environment");
            config
        }
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, "ignoring invalid result configuration");
            Config::default()
        }
    }
}

// crates/xassert/src/config.rs
// ============================================================================
// Module: Asserter Configuration
// Description: TOML configuration for sink mode, tolerances and failure logs.
// Purpose: Build a runtime-selected asserter from a strict, validated file.
// Dependencies: crate::{asserter, sink, tolerance}, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! A test suite can pick its failure signaling, default deltas and evaluation
//! log from a TOML file instead of code:
//!
//! ```toml
//! [sink]
//! mode = "panic"
//!
//! [tolerance]
//! f64_delta = 1e-9
//!
//! [log]
//! path = "target/xassert.jsonl"
//! failures_only = true
//! ```
//!
//! The file path resolves from an explicit argument, then the
//! `XASSERT_CONFIG` environment variable, then `xassert.toml` in the working
//! directory. Unknown keys, oversized files and invalid values are rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::fs::OpenOptions;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::asserter::Asserter;
use crate::asserter::DynAsserter;
use crate::sink::FailureSink;
use crate::sink::LogSink;
use crate::sink::PanicSink;
use crate::sink::ResultSink;
use crate::tolerance::Tolerances;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "xassert.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "XASSERT_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Top-level asserter configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssertConfig {
    /// Failure signaling.
    #[serde(default)]
    pub sink: SinkConfig,
    /// Default deltas for the two-argument tolerance predicates.
    #[serde(default)]
    pub tolerance: Tolerances,
    /// Optional JSON-lines evaluation log.
    #[serde(default)]
    pub log: Option<LogConfig>,
}

/// Failure signaling configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SinkConfig {
    /// How failures are signaled.
    #[serde(default)]
    pub mode: SinkMode,
}

/// Failure signaling mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkMode {
    /// Failures return `Err(AssertionFailed)`.
    #[default]
    Result,
    /// Failures panic.
    Panic,
}

/// Evaluation log configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// File the records are appended to; created when missing.
    pub path: String,
    /// Whether passing evaluations are skipped.
    #[serde(default)]
    pub failures_only: bool,
}

impl AssertConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path, env::var(CONFIG_ENV_VAR).ok())?;
        check_path_limits("config path", &resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_delta("tolerance.f32_delta", f64::from(self.tolerance.f32_delta))?;
        validate_delta("tolerance.f64_delta", self.tolerance.f64_delta)?;
        if let Some(log) = &self.log {
            validate_log_path(&log.path)?;
        }
        Ok(())
    }

    /// Builds an asserter with the configured sink, deltas and log.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the log file cannot be opened.
    pub fn build_asserter(&self) -> Result<DynAsserter, ConfigError> {
        let base: Box<dyn FailureSink> = match self.sink.mode {
            SinkMode::Result => Box::new(ResultSink),
            SinkMode::Panic => Box::new(PanicSink),
        };
        let sink: Box<dyn FailureSink> = match &self.log {
            None => base,
            Some(log) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(log.path.trim())
                    .map_err(|err| ConfigError::Io(err.to_string()))?;
                if log.failures_only {
                    Box::new(LogSink::failures_only(file, base))
                } else {
                    Box::new(LogSink::new(file, base))
                }
            }
        };
        Ok(Asserter::new(sink).with_tolerances(self.tolerance))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration or opening the log.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Picks the config path: the explicit argument, then the value of
/// [`CONFIG_ENV_VAR`], then [`DEFAULT_CONFIG_NAME`].
fn resolve_path(path: Option<&Path>, env_path: Option<String>) -> Result<PathBuf, ConfigError> {
    match (path, env_path) {
        (Some(path), _) => Ok(path.to_path_buf()),
        (None, Some(env_path)) => {
            check_path_limits(CONFIG_ENV_VAR, Path::new(&env_path))?;
            Ok(PathBuf::from(env_path))
        }
        (None, None) => Ok(PathBuf::from(DEFAULT_CONFIG_NAME)),
    }
}

/// Checks total and per-component length of a path named by `field`.
fn check_path_limits(field: &str, path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    let too_long = path
        .components()
        .any(|component| component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH);
    if too_long {
        return Err(ConfigError::Invalid(format!("{field} path component too long")));
    }
    Ok(())
}

/// Validates the `[log] path` value: non-blank, then within path limits.
fn validate_log_path(value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid("log.path must be non-empty".to_string()));
    }
    check_path_limits("log.path", Path::new(trimmed))
}

/// Validates that a delta is finite and non-negative.
fn validate_delta(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::Invalid(format!("{field} must be finite")));
    }
    if value < 0.0 {
        return Err(ConfigError::Invalid(format!("{field} must be non-negative")));
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AssertConfig::from_toml_str("").unwrap();
        assert_eq!(config, AssertConfig::default());
        assert_eq!(config.sink.mode, SinkMode::Result);
        assert_eq!(config.tolerance, Tolerances::DEFAULT);
        assert!(config.log.is_none());
    }

    #[test]
    fn parses_every_section() {
        let config = AssertConfig::from_toml_str(
            r#"
            [sink]
            mode = "panic"

            [tolerance]
            f32_delta = 0.5
            f64_delta = 0.25

            [log]
            path = "out/evaluations.jsonl"
            failures_only = true
            "#,
        )
        .unwrap();
        assert_eq!(config.sink.mode, SinkMode::Panic);
        assert_eq!(config.tolerance.f32_delta, 0.5);
        assert_eq!(config.tolerance.f64_delta, 0.25);
        let log = config.log.unwrap();
        assert_eq!(log.path, "out/evaluations.jsonl");
        assert!(log.failures_only);
    }

    #[test]
    fn partial_tolerance_keeps_other_default() {
        let config = AssertConfig::from_toml_str("[tolerance]\nf64_delta = 1e-9\n").unwrap();
        assert_eq!(config.tolerance.f64_delta, 1e-9);
        assert_eq!(config.tolerance.f32_delta, Tolerances::DEFAULT.f32_delta);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = AssertConfig::from_toml_str("[sink]\nmode = \"result\"\nloud = true\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "unexpected error: {err}");
    }

    #[test]
    fn rejects_unknown_sink_mode() {
        let err = AssertConfig::from_toml_str("[sink]\nmode = \"abort\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "unexpected error: {err}");
    }

    #[test]
    fn rejects_negative_delta() {
        let err = AssertConfig::from_toml_str("[tolerance]\nf32_delta = -0.1\n").unwrap_err();
        assert!(err.to_string().contains("tolerance.f32_delta must be non-negative"));
    }

    #[test]
    fn rejects_non_finite_delta() {
        let err = AssertConfig::from_toml_str("[tolerance]\nf64_delta = inf\n").unwrap_err();
        assert!(err.to_string().contains("tolerance.f64_delta must be finite"));
        let err = AssertConfig::from_toml_str("[tolerance]\nf64_delta = nan\n").unwrap_err();
        assert!(err.to_string().contains("must be finite"));
    }

    #[test]
    fn rejects_blank_log_path() {
        let err = AssertConfig::from_toml_str("[log]\npath = \"   \"\n").unwrap_err();
        assert!(err.to_string().contains("log.path must be non-empty"));
    }

    #[test]
    fn log_path_requires_path_key() {
        let err = AssertConfig::from_toml_str("[log]\nfailures_only = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "unexpected error: {err}");
    }

    #[test]
    fn log_path_rejects_component_too_long() {
        let path = format!("./{}", "a".repeat(MAX_PATH_COMPONENT_LENGTH + 1));
        let err = validate_log_path(&path).unwrap_err();
        assert!(err.to_string().contains("log.path path component too long"));
    }

    #[test]
    fn log_path_accepts_component_at_max() {
        let path = format!("./{}", "a".repeat(MAX_PATH_COMPONENT_LENGTH));
        assert!(validate_log_path(&path).is_ok());
    }

    #[test]
    fn path_limits_reject_exceeds_max_length() {
        let long_path = PathBuf::from("a/".repeat(MAX_TOTAL_PATH_LENGTH / 2 + 1));
        let err = check_path_limits("config path", &long_path).unwrap_err();
        assert!(err.to_string().contains("config path exceeds max length"));
    }

    #[test]
    fn explicit_path_wins_resolution() {
        let resolved =
            resolve_path(Some(Path::new("custom.toml")), Some("from-env.toml".to_string()))
                .unwrap();
        assert_eq!(resolved, PathBuf::from("custom.toml"));
    }

    #[test]
    fn env_path_used_without_explicit_path() {
        let resolved = resolve_path(None, Some("from-env.toml".to_string())).unwrap();
        assert_eq!(resolved, PathBuf::from("from-env.toml"));
    }

    #[test]
    fn env_path_over_max_length_is_rejected() {
        let env_path = "a".repeat(MAX_TOTAL_PATH_LENGTH + 1);
        let err = resolve_path(None, Some(env_path)).unwrap_err();
        assert!(err.to_string().contains("XASSERT_CONFIG exceeds max length"));
    }

    #[test]
    fn env_path_at_max_length_is_accepted() {
        let env_path = "a/".repeat(MAX_TOTAL_PATH_LENGTH / 2);
        assert_eq!(env_path.len(), MAX_TOTAL_PATH_LENGTH);
        let resolved = resolve_path(None, Some(env_path.clone())).unwrap();
        assert_eq!(resolved, PathBuf::from(env_path));
    }

    #[test]
    fn default_name_used_without_explicit_or_env_path() {
        let resolved = resolve_path(None, None).unwrap();
        assert_eq!(resolved, PathBuf::from(DEFAULT_CONFIG_NAME));
        assert_eq!(resolved, PathBuf::from("xassert.toml"));
    }

    #[test]
    fn build_asserter_applies_tolerances() {
        let config = AssertConfig::from_toml_str("[tolerance]\nf64_delta = 0.5\n").unwrap();
        let check = config.build_asserter().unwrap();
        assert_eq!(check.tolerances().f64_delta, 0.5);
        assert!(check.approx_equal(1.0_f64, 1.4).is_ok());
        assert!(check.approx_equal(1.0_f64, 1.6).is_err());
    }
}

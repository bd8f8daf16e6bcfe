//! Bless policy types.
//!
//! A policy describes how an audit result should gate a pipeline. The
//! fields exist so callers and config files can carry one around today,
//! but the engine's pass/fail decision does not consult them yet; see
//! [`crate::Engine::bless`].

use serde::{Deserialize, Serialize};

use miette::Diagnostic;
use thiserror::Error;

use crate::finding::Severity;

/// Named rule profile a policy is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyProfile {
    /// Checks modeled on MDN's accessibility guidance.
    Mdn,
    /// A lighter WCAG-derived subset.
    WcagLite,
    /// Project-specific profile.
    Project,
}

/// Policy controlling how `bless` should judge an audit report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlessPolicy {
    /// The profile this policy is based on.
    pub profile: PolicyProfile,
    /// Finding codes to tolerate. Declared, not yet consulted.
    #[serde(default)]
    pub allow_codes: Vec<String>,
    /// Finding codes that always fail. Declared, not yet consulted.
    #[serde(default)]
    pub deny_codes: Vec<String>,
    /// Severity threshold for failure. Declared, not yet consulted.
    #[serde(default)]
    pub fail_on: Option<Severity>,
}

impl BlessPolicy {
    /// Creates a policy for the given profile with no code lists.
    #[must_use]
    pub fn new(profile: PolicyProfile) -> Self {
        Self {
            profile,
            allow_codes: Vec::new(),
            deny_codes: Vec::new(),
            fail_on: None,
        }
    }

    /// Parses a policy from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or fields fail validation.
    pub fn parse(content: &str) -> Result<Self, PolicyError> {
        toml::from_str(content).map_err(|e| PolicyError::Parse {
            message: e.to_string(),
        })
    }

    /// Loads a policy from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path).map_err(|e| PolicyError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }
}

/// Errors raised while loading a [`BlessPolicy`].
#[derive(Debug, Error, Diagnostic)]
pub enum PolicyError {
    /// IO error reading the policy file.
    #[error("failed to read policy from {path}")]
    #[diagnostic(code(a11y_lint::policy::io))]
    Io {
        /// Path that failed to read.
        path: std::path::PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML content.
    #[error("invalid policy: {message}")]
    #[diagnostic(code(a11y_lint::policy::parse))]
    Parse {
        /// Parser error message.
        message: String,
    },
}

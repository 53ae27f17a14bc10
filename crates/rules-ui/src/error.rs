//! Error types for the rule table controller.

use thiserror::Error;

/// Page-supplied configuration was missing or blank.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required value was absent or empty after trimming.
    #[error("page configuration value '{name}' is missing")]
    Missing {
        /// Name of the missing value.
        name: &'static str,
    },
}

/// Failures surfaced while submitting the rule assignment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Another submission has not completed yet.
    #[error("a rule submission is already in flight")]
    InFlight,
    /// The request body could not be built.
    #[error("failed to encode rule submission: {0}")]
    Encode(String),
    /// The request never produced a response.
    #[error("rule submission transport failed: {0}")]
    Transport(String),
}

/// Failures while attaching the controller to the page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MountError {
    /// Browser globals were unavailable.
    #[error("document unavailable")]
    Document,
    /// No element carries the expected table id.
    #[error("table '#{id}' not found")]
    MissingTable {
        /// Expected element id.
        id: &'static str,
    },
    /// The element with the table id is not a `<table>`.
    #[error("element '#{id}' is not a table")]
    NotATable {
        /// Offending element id.
        id: &'static str,
    },
    /// Page configuration was incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

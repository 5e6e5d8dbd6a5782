use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// The distinguished ways turning one notation into a graph can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    Structure,
    Validation,
    ForceFieldAssignment,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Structure => "structure",
                Self::Validation => "validation",
                Self::ForceFieldAssignment => "force-field-assignment",
            }
        )
    }
}

/// Failure to build an attributed graph from a single notation string.
///
/// These are per-candidate failures: curation logs them and moves on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// No structure could be generated for the notation, or the generated structure
    /// is internally inconsistent.
    #[error("Structure generation failed: {0}")]
    Structure(String),

    /// The notation itself was rejected (e.g., malformed syntax).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No consistent force-field typing exists for the structure.
    #[error("Force-field assignment failed: {0}")]
    ForceFieldAssignment(String),
}

impl BuildError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Structure(_) => FailureKind::Structure,
            Self::Validation(_) => FailureKind::Validation,
            Self::ForceFieldAssignment(_) => FailureKind::ForceFieldAssignment,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Structure(m) | Self::Validation(m) | Self::ForceFieldAssignment(m) => m,
        }
    }

    pub fn structure(message: impl Into<String>) -> Self {
        Self::Structure(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn force_field(message: impl Into<String>) -> Self {
        Self::ForceFieldAssignment(message.into())
    }

    pub fn of_kind(kind: FailureKind, message: impl Into<String>) -> Self {
        match kind {
            FailureKind::Structure => Self::structure(message),
            FailureKind::Validation => Self::validation(message),
            FailureKind::ForceFieldAssignment => Self::force_field(message),
        }
    }
}

//! # Errors
//!
//! Failures that abort a compile. Recoverable per-command problems are not errors; they are
//! reported as [`Diagnostic`](crate::painter::Diagnostic)s and the compile carries on.

use thiserror::Error;

/// Errors raised by the shape compiler.
#[derive(Error, Debug)]
pub enum CompileError {
    /// A configuration value makes tessellation or the glow effect undefined.
    #[error("Invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// A shape's parameters cannot produce any geometry (e.g. a polygon with no vertices).
    #[error("Invalid geometry in {kind}: {reason}")]
    InvalidGeometry { kind: &'static str, reason: String },

    /// A scene document could not be read or written.
    #[error("Scene serialization error: {0}")]
    Scene(#[from] serde_json::Error),
}

impl CompileError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn geometry(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            kind,
            reason: reason.into(),
        }
    }
}

//! Error type shared by the numeric operations.

use thiserror::Error;

/// Errors returned by the toolkit.
///
/// There is exactly one kind: an argument outside the operation's domain.
/// Every other operation in the workspace is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    #[error("{operation}({value}): {reason}")]
    InvalidArgument {
        operation: &'static str,
        value: i64,
        reason: &'static str,
    },
}

impl ToolkitError {
    /// Builds an [`ToolkitError::InvalidArgument`].
    ///
    /// # Example
    /// ```
    /// use sampler_common::ToolkitError;
    ///
    /// let err = ToolkitError::invalid_argument("factorial", -1, "factorial is not defined for negative numbers");
    /// assert_eq!(err.to_string(), "factorial(-1): factorial is not defined for negative numbers");
    /// ```
    #[must_use]
    pub fn invalid_argument(operation: &'static str, value: i64, reason: &'static str) -> Self {
        Self::InvalidArgument {
            operation,
            value,
            reason,
        }
    }

    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// The human-readable reason, without the operation prefix.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidArgument { reason, .. } => reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolkitError>;

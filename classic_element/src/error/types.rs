//! Primary error enum for component and element operations.

use thiserror::Error;

/// Errors that can occur while invoking members or converting prop data.
///
/// Composition, element construction and cloning never fail; these variants
/// cover the dynamic edges of the model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClassicError {
    /// The composed prototype does not define the requested member.
    #[error("component has no member named '{name}'")]
    MissingMember {
        /// Member name that was looked up.
        name: String,
    },

    /// The member exists but holds data rather than a method.
    #[error("member '{name}' is not callable")]
    NotCallable {
        /// Member name that was invoked.
        name: String,
    },

    /// A built-in member received arguments it cannot use.
    #[error("invalid argument for '{name}': {message}")]
    InvalidArgument {
        /// Member that rejected the arguments.
        name: String,
        /// Human-readable explanation of the rejection.
        message: String,
    },

    /// A children value did not hold exactly one child.
    #[error("expected exactly one child, found {count}")]
    OnlyChild {
        /// Number of children that were found.
        count: usize,
    },

    /// A prop value has no plain-data representation.
    #[error("value at '{path}' cannot be represented as data: {kind}")]
    NotData {
        /// Dotted path of the offending value.
        path: String,
        /// Kind of value that was found.
        kind: &'static str,
    },

    /// Serialising or deserialising prop data failed.
    #[error("failed to convert prop data: {0}")]
    Conversion(#[from] serde_json::Error),
}

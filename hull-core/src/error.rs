//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
///
/// Construction-time variants ([`HullError::TypeMismatch`],
/// [`HullError::ValidationError`], [`HullError::ShapeMismatch`]) are fatal to
/// building a wrapper chain. [`HullError::SizeMismatch`] is raised per call
/// at runtime and leaves the wrapper state untouched.
#[derive(Error, Debug)]
pub enum HullError {
    /// A wrapper was given a space kind it does not support.
    #[error("unsupported space kind: {0}")]
    TypeMismatch(String),

    /// An invalid construction parameter.
    #[error("invalid parameter: {0}")]
    ValidationError(String),

    /// Two arrays that must agree in shape do not.
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// The shape required by the target space.
        expected: Vec<usize>,
        /// The shape actually supplied.
        actual: Vec<usize>,
    },

    /// An action vector of the wrong size was passed to `step`.
    #[error("expected action of size {expected}, got {actual}")]
    SizeMismatch {
        /// The number of elements the wrapper expects.
        expected: usize,
        /// The number of elements actually supplied.
        actual: usize,
    },

    /// Info key error.
    #[error("info key error: {0}")]
    InfoKeyError(String),

    /// Info value type error.
    #[error("info value type error: {0}")]
    InfoValueTypeError(String),
}

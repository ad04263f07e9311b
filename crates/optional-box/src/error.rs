//! Failures raised by `OptionalBox` operations.

use thiserror::Error;

/// The two contract violations an `OptionalBox` can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum OptionalError {
    /// A value was required but the caller supplied (or a mapper produced) none.
    #[error("missing value where a value is required")]
    NullValue,
    /// `get` on an absent box.
    #[error("no value present")]
    NoSuchElement,
}

pub type Result<T, E = OptionalError> = core::result::Result<T, E>;

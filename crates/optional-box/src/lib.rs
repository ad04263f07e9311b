//! optional-box: a value that may or may not be present, with the usual
//! filter / map / flat_map / fallback combinators over it.

#[macro_use]
mod trace;

pub mod error;
pub mod optional;
pub mod convert;

pub use error::{OptionalError, Result};
pub use optional::OptionalBox;

//! Error handling for field construction and arithmetic
//!
//! The error taxonomy itself lives in `mpcfield-api`; this module re-exports
//! it and adds the validation helpers used throughout the field code.

pub use mpcfield_api::error::{Error, Result, ResultExt};

pub mod validate;

//! Public API traits and types for the mpcfield library
//!
//! This crate provides the public API surface shared by both field
//! families: the error taxonomy and the `Field` / `FieldElement` /
//! `WireCodec` traits implemented by the descriptors in
//! `mpcfield-algorithms`.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::{Field, FieldElement, WireCodec};

// Re-export trait modules for direct access
pub use traits::{field, serialize};

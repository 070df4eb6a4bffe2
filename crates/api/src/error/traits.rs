//! Error handling traits

use super::types::{Error, Result};

/// Extension trait for Result types
pub trait ResultExt<T>: Sized {
    /// Replace the context of an error when converting to Error
    fn with_context(self, context: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for core::result::Result<T, E>
where
    E: Into<Error>,
{
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}

//! Error type definitions for field construction and arithmetic

use std::borrow::Cow;
use thiserror::Error as ThisError;

/// Primary error type for field operations
///
/// All variants are local, synchronous failures. None of them is retried
/// inside this library.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A field could not be built from the requested parameters
    /// (non-prime modulus, reducible polynomial, bad search arguments),
    /// or a value is out of range for the requested representation.
    #[error("{context}: invalid parameter: {message}")]
    InvalidParameter {
        /// Where the parameter was rejected
        context: &'static str,
        /// Why it was rejected
        message: Cow<'static, str>,
    },

    /// Reciprocal or division of the additive identity
    #[error("{context}: division by zero")]
    DivisionByZero {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// An operator received an operand kind it does not handle.
    ///
    /// This is a recoverable signal: a caller-side dispatcher may retry
    /// the operation with another interpretation of the operands.
    #[error("unsupported operand for {operation}: {operand}")]
    UnsupportedOperand {
        /// Operator name, e.g. `"add"`
        operation: &'static str,
        /// Kind of the rejected operand, e.g. `"float"`
        operand: &'static str,
    },

    /// Byte buffer inconsistent with its declared record width
    #[error("{context}: malformed encoding: {message}")]
    MalformedEncoding {
        /// Decoder that rejected the buffer
        context: &'static str,
        /// What was wrong with it
        message: Cow<'static, str>,
    },
}

/// Result type for field operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param<M: Into<Cow<'static, str>>>(context: &'static str, message: M) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a `MalformedEncoding` error
    pub fn encoding<M: Into<Cow<'static, str>>>(context: &'static str, message: M) -> Self {
        Error::MalformedEncoding {
            context,
            message: message.into(),
        }
    }

    /// Whether this is the recoverable operand-kind mismatch
    pub fn is_unsupported_operand(&self) -> bool {
        matches!(self, Error::UnsupportedOperand { .. })
    }

    /// Replace the context of an existing error
    ///
    /// `UnsupportedOperand` carries an operator name instead of a context
    /// and is returned unchanged.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::MalformedEncoding { message, .. } => Self::MalformedEncoding { context, message },
            err @ Self::UnsupportedOperand { .. } => err,
        }
    }
}

// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Failures surfaced by every fallible operation in this crate.
///
/// Results that are too small to represent are not errors: the exponential
/// functions clamp them to zero.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedPointError {
    /// An intermediate or final value exceeds the representable range
    #[error("arithmetic overflow")]
    Overflow,
    /// Input outside of the mathematical domain of the function
    #[error("input outside of the function domain")]
    DomainError,
    #[error("division by zero")]
    DivisionByZero,
    /// A wide integer did not fit into the narrower target type
    #[error("integer conversion error")]
    IntegerConversionError,
    /// Malformed decimal string
    #[error("invalid decimal string")]
    ParseError,
}

pub type FixedPointResult<T> = Result<T, FixedPointError>;

impl FixedPointError {
    #[cold]
    pub(crate) fn overflow(op: &'static str) -> Self {
        Self::Overflow.traced(op)
    }

    #[cold]
    pub(crate) fn domain(op: &'static str) -> Self {
        Self::DomainError.traced(op)
    }

    #[cold]
    pub(crate) fn division_by_zero(op: &'static str) -> Self {
        Self::DivisionByZero.traced(op)
    }

    #[cold]
    pub(crate) fn parse(op: &'static str) -> Self {
        Self::ParseError.traced(op)
    }

    #[inline]
    fn traced(self, op: &'static str) -> Self {
        tracing::trace!(op, error = %self, "fixed-point operation failed");
        self
    }
}

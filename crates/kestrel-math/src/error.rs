// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for the checked accessors of the math kernel.
//!
//! Arithmetic never fails; only positional access and slice conversion can.

use thiserror::Error;

/// Failure reported by the `try_*` accessors and slice conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A vector component index was outside `0..arity`.
    #[error("component index {index} out of range for a vector of arity {arity}")]
    ComponentOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of components of the vector.
        arity: usize,
    },
    /// A matrix `(row, column)` pair was outside `[0, 4) × [0, 4)`.
    #[error("element ({row}, {column}) out of range for a 4x4 matrix")]
    ElementOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
    /// A slice did not have exactly as many elements as the target type.
    #[error("expected {expected} components, got {actual}")]
    LengthMismatch {
        /// Number of components the target type holds.
        expected: usize,
        /// Length of the provided slice.
        actual: usize,
    },
}

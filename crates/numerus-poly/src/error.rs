//! Polynomial errors.

use thiserror::Error;

/// Errors that can occur in polynomial division and inversion.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The divisor is the zero polynomial.
    #[error("polynomial division by zero")]
    DivisionByZero,

    /// A coefficient that must be a unit is not.
    #[error("coefficient {0} is not invertible")]
    NotInvertible(String),
}

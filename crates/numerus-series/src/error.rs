//! Power series errors.

use numerus_poly::PolyError;
use thiserror::Error;

/// Errors that can occur in power series functions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// `exp` needs a series with zero constant term.
    #[error("exp requires a zero constant term")]
    NonZeroConstantTerm,

    /// `ln` needs a series with constant term one.
    #[error("ln requires a constant term equal to one")]
    NonUnitConstantTerm,

    /// The series (or its lowest coefficient) has no inverse.
    #[error("series is not invertible")]
    NotInvertible,

    /// The underlying polynomial operation failed.
    #[error(transparent)]
    Poly(#[from] PolyError),
}

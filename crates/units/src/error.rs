use thiserror::Error;

use crate::quantity::Dimension;

/// Errors raised when working with dynamically dimensioned quantities.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// Two quantities of incompatible dimension were combined, or a quantity
    /// was rescaled into a unit of another dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        expected: Dimension,
        found: Dimension,
    },

    #[error("cannot parse {input:?} as {expected}")]
    Parse {
        input: String,
        expected: &'static str,
    },
}

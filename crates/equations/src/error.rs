use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquationError {
    /// More than one variable slot was left empty at construction.
    #[error("{relation} can solve for one unknown, but {unknowns:?} were all missing")]
    Underdetermined {
        relation: &'static str,
        unknowns: Vec<&'static str>,
    },

    /// The rearrangement for `variable` has no real, finite solution for the
    /// supplied values (negative radicand, arcsine out of range, division by
    /// zero).
    #[error("{relation} has no real solution for {variable} with the given values")]
    Domain {
        relation: &'static str,
        variable: &'static str,
    },
}

use crate::error::EquationError;

/// Common surface of every relation: a fixed set of named variable slots of
/// which at most one is unknown.
pub trait Relation {
    /// Short name used in errors and logs, e.g. `"KeplersThirdLaw"`.
    fn name(&self) -> &'static str;

    /// Symbols of the variable slots, in constructor order.
    fn variables(&self) -> &'static [&'static str];

    /// Symbol of the slot left empty at construction, if any.
    fn unknown(&self) -> Option<&'static str>;
}

/// Checks the construction invariant and returns the single unknown slot.
pub(crate) fn single_unknown(
    relation: &'static str,
    slots: &[(&'static str, bool)],
) -> Result<Option<&'static str>, EquationError> {
    let unknowns: Vec<&'static str> = slots
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    match unknowns.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(*only)),
        _ => Err(EquationError::Underdetermined { relation, unknowns }),
    }
}

/// Reads a slot that a derivation depends on.
pub(crate) fn given<T>(
    relation: &'static str,
    variable: &'static str,
    value: Option<T>,
) -> Result<T, EquationError> {
    value.ok_or_else(|| EquationError::Underdetermined {
        relation,
        unknowns: vec![variable],
    })
}

/// Slot accessor policy. The stored value is returned while some other slot
/// is the unknown; otherwise the slot is derived from the rest, which also
/// covers the fully specified case.
pub(crate) fn solve<T>(
    unknown: Option<&'static str>,
    variable: &'static str,
    stored: Option<T>,
    derive: impl FnOnce() -> Result<T, EquationError>,
) -> Result<T, EquationError> {
    match (stored, unknown) {
        (Some(value), Some(missing)) if missing != variable => Ok(value),
        _ => derive(),
    }
}

/// Rejects NaN and infinite results.
pub(crate) fn finite(
    relation: &'static str,
    variable: &'static str,
    value: f64,
) -> Result<f64, EquationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EquationError::Domain { relation, variable })
    }
}

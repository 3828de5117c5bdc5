//! Provenance flags recording which values were estimated rather than read
//! from the catalogue.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stellar::Band;

use crate::error::CatalogueError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Flag {
    CalculatedTemperature,
    EstimatedMass,
    CalculatedSma,
    /// Set on generated example objects.
    Fake,
    EstimatedDistance,
    CalculatedPeriod,
    EstimatedMagnitude(Band),
}

impl Flag {
    /// Every flag in the vocabulary.
    pub fn all() -> impl Iterator<Item = Flag> {
        [
            Flag::CalculatedTemperature,
            Flag::EstimatedMass,
            Flag::CalculatedSma,
            Flag::Fake,
            Flag::EstimatedDistance,
            Flag::CalculatedPeriod,
        ]
        .into_iter()
        .chain(Band::ALL.into_iter().map(Flag::EstimatedMagnitude))
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Flag::CalculatedTemperature => write!(f, "Calculated Temperature"),
            Flag::EstimatedMass => write!(f, "Estimated Mass"),
            Flag::CalculatedSma => write!(f, "Calculated SMA"),
            Flag::Fake => write!(f, "Fake"),
            Flag::EstimatedDistance => write!(f, "Estimated Distance"),
            Flag::CalculatedPeriod => write!(f, "Calculated Period"),
            Flag::EstimatedMagnitude(band) => write!(f, "Estimated mag{}", band),
        }
    }
}

impl FromStr for Flag {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flag::all()
            .find(|flag| flag.to_string() == s)
            .ok_or_else(|| CatalogueError::UnknownFlag(s.to_string()))
    }
}

impl TryFrom<String> for Flag {
    type Error = CatalogueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Flag> for String {
    fn from(flag: Flag) -> Self {
        flag.to_string()
    }
}

/// The flags attached to one entity.
///
/// Flags are added while derived properties are read through shared
/// references, so the set lives in a `RefCell`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagSet(RefCell<BTreeSet<Flag>>);

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, flag: Flag) {
        self.0.borrow_mut().insert(flag);
    }

    /// Adds a flag by its catalogue label, e.g. `"Estimated magK"`.
    pub fn add_label(&self, label: &str) -> Result<(), CatalogueError> {
        self.add(label.parse()?);
        Ok(())
    }

    /// Removes a flag, returning whether it was set.
    pub fn remove(&self, flag: Flag) -> bool {
        self.0.borrow_mut().remove(&flag)
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.0.borrow().contains(&flag)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// A snapshot of the current flags in sorted order.
    pub fn to_vec(&self) -> Vec<Flag> {
        self.0.borrow().iter().copied().collect()
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let labels: Vec<String> = self.to_vec().iter().map(Flag::to_string).collect();
        write!(f, "Flags({})", labels.join(", "))
    }
}

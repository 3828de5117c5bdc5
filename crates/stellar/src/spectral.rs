use std::fmt;

use serde::{Deserialize, Serialize};

/// Single-letter spectral classes: main sequence, brown dwarfs, carbon and
/// S stars, Wolf-Rayet and the non-stellar P and Q types.
pub const SINGLE_LETTER_CLASSES: [&str; 15] = [
    "O", "B", "A", "F", "G", "K", "M", "L", "T", "Y", "C", "S", "W", "P", "Q",
];

/// Multi-letter classes, matched before the single letters.
pub const MULTI_LETTER_CLASSES: [&str; 24] = [
    // Wolf-Rayet
    "WNE", "WNL", "WCE", "WCL", "WO", "WR", "WN", "WC",
    // Intermediate carbon classes
    "MS", "MC",
    // White dwarfs, extended and variable designations first
    "DAB", "DAO", "DAZ", "DBZ", "DAV", "DBV", "DCV", "DA", "DB", "DO", "DQ", "DZ", "DC",
    "DX",
];

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuminosityClass {
    Ia0, // Hypergiants
    Ia,  // Luminous supergiants
    Iab, // Intermediate supergiants
    Ib,  // Less luminous supergiants
    II,  // Bright giants
    III, // Normal giants
    IV,  // Subgiants
    V,   // Main sequence
}

impl LuminosityClass {
    /// Order in which classes are matched against the front of a type string.
    /// Longer forms come first so "III" is never read as "II".
    const MATCH_ORDER: [LuminosityClass; 8] = [
        LuminosityClass::III,
        LuminosityClass::II,
        LuminosityClass::Iab,
        LuminosityClass::Ia0,
        LuminosityClass::Ia,
        LuminosityClass::Ib,
        LuminosityClass::IV,
        LuminosityClass::V,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LuminosityClass::Ia0 => "Ia0",
            LuminosityClass::Ia => "Ia",
            LuminosityClass::Iab => "Iab",
            LuminosityClass::Ib => "Ib",
            LuminosityClass::II => "II",
            LuminosityClass::III => "III",
            LuminosityClass::IV => "IV",
            LuminosityClass::V => "V",
        }
    }

    /// Column of this class in the absolute magnitude table.
    pub fn column(&self) -> usize {
        match self {
            LuminosityClass::V => 0,
            LuminosityClass::IV => 1,
            LuminosityClass::III => 2,
            LuminosityClass::II => 3,
            LuminosityClass::Ib => 4,
            LuminosityClass::Iab => 5,
            LuminosityClass::Ia => 6,
            LuminosityClass::Ia0 => 7,
        }
    }

    fn match_prefix(text: &str) -> Option<Self> {
        Self::MATCH_ORDER
            .into_iter()
            .find(|class| text.starts_with(class.as_str()))
    }
}

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed spectral type such as `K1.5III`.
///
/// Parsing is lenient: only the first of several alternatives is read
/// (`K0/K1V`, `F8-G0`), spaces are ignored and trailing remarks like `V+` or
/// `pecul.` are dropped. Strings that do not start with a known class, or
/// that have a class letter followed by free text, parse to an empty type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpectralType {
    original: String,
    class_letter: String,
    class_number: Option<f64>,
    luminosity_class: Option<LuminosityClass>,
}

impl SpectralType {
    pub fn parse(text: &str) -> Self {
        let mut spectral = SpectralType {
            original: text.to_string(),
            ..Default::default()
        };

        if let Some((letter, number, luminosity_class)) = parse_components(text) {
            spectral.class_letter = letter.to_string();
            spectral.class_number = number;
            spectral.luminosity_class = luminosity_class;
        }

        spectral
    }

    /// Builds a type from already separated parts.
    pub fn new(
        class_letter: &str,
        class_number: Option<f64>,
        luminosity_class: Option<LuminosityClass>,
    ) -> Self {
        let mut spectral = SpectralType {
            original: String::new(),
            class_letter: class_letter.to_string(),
            class_number,
            luminosity_class,
        };
        spectral.original = spectral.spec_type();
        spectral
    }

    /// The text this type was parsed from.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn class_letter(&self) -> Option<&str> {
        (!self.class_letter.is_empty()).then_some(self.class_letter.as_str())
    }

    pub fn class_number(&self) -> Option<f64> {
        self.class_number
    }

    pub fn luminosity_class(&self) -> Option<LuminosityClass> {
        self.luminosity_class
    }

    pub fn is_empty(&self) -> bool {
        self.class_letter.is_empty()
    }

    /// Class number rounded half to even, so M8.5 becomes 8 and K1.5 becomes 2.
    pub fn rounded_class_number(&self) -> Option<u8> {
        self.class_number.map(|n| n.round_ties_even() as u8)
    }

    /// Letter and number, e.g. `K1.5` for `K1.5III`.
    pub fn spec_class(&self) -> String {
        match self.class_number {
            Some(number) => format!("{}{}", self.class_letter, number),
            None => self.class_letter.clone(),
        }
    }

    /// Letter, number and luminosity class, e.g. `K1.5III`.
    pub fn spec_type(&self) -> String {
        format!("{}{}", self.spec_class(), self.luminosity_suffix())
    }

    /// Spectral class with the number rounded, e.g. `K2` for `K1.5III`.
    pub fn rounded_spec_class(&self) -> String {
        match self.rounded_class_number() {
            Some(number) => format!("{}{}", self.class_letter, number),
            None => self.class_letter.clone(),
        }
    }

    /// Spectral type with the number rounded, e.g. `K2III` for `K1.5III`.
    pub fn rounded_spec_type(&self) -> String {
        format!("{}{}", self.rounded_spec_class(), self.luminosity_suffix())
    }

    fn luminosity_suffix(&self) -> &'static str {
        self.luminosity_class.map_or("", |class| class.as_str())
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.spec_type())
    }
}

fn class_letter_prefix(text: &str) -> Option<&'static str> {
    [3, 2, 1].into_iter().find_map(|len| {
        let prefix = text.get(..len)?;
        MULTI_LETTER_CLASSES
            .iter()
            .chain(SINGLE_LETTER_CLASSES.iter())
            .find(|class| **class == prefix)
            .copied()
    })
}

type Components = (&'static str, Option<f64>, Option<LuminosityClass>);

fn parse_components(text: &str) -> Option<Components> {
    if text.is_empty() || text == "nan" {
        return None;
    }

    let cleaned: String = text
        .chars()
        .filter(|c| *c != ' ')
        .map(|c| if c == '-' || c == '\\' { '/' } else { c })
        .collect();
    let first = cleaned.split('/').next().unwrap_or_default();

    let letter = class_letter_prefix(first)?;
    let rest = &first[letter.len()..];

    let (number, mut remainder) = match rest.chars().next() {
        None => return Some((letter, None, None)),
        Some(c) if c.is_ascii_digit() => (Some(&rest[..1]), &rest[1..]),
        Some(_) => (None, rest),
    };

    let mut class_number = number.and_then(|digit| digit.parse::<f64>().ok());

    if let (Some(digit), Some(fraction)) = (number, remainder.strip_prefix('.')) {
        let decimals_len = fraction
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(fraction.len());
        if decimals_len > 0 {
            let decimals = &fraction[..decimals_len];
            class_number = format!("{digit}.{decimals}").parse::<f64>().ok();
        }
        remainder = &fraction[decimals_len..];
    }

    if remainder.is_empty() {
        return Some((letter, class_number, None));
    }

    match LuminosityClass::match_prefix(remainder) {
        Some(class) => Some((letter, class_number, Some(class))),
        // A bare letter followed by free text is a name, not a type
        None if class_number.is_none() => None,
        None => Some((letter, class_number, None)),
    }
}

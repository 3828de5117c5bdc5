use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::error::UnitError;

/// An angle using f64 precision, stored in degrees.
///
/// Inclinations, arguments of periastron and sky coordinates are catalogued
/// in degrees. Trigonometry always goes through [`Angle::to_radians`].
///
/// # Examples
///
/// ```rust
/// use units::Angle;
///
/// let inclination = Angle::from_degrees(89.2);
/// assert!(inclination.to_radians().cos() < 0.014);
///
/// let ra = Angle::parse_hours("01 02 03").unwrap();
/// assert!((ra.to_degrees() - 15.5125).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64); // Base unit: Degrees

impl Angle {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Edge-on orbit
    pub fn right() -> Self {
        Self(90.0)
    }

    pub fn from_degrees(value: f64) -> Self {
        Self(value)
    }

    pub fn from_radians(value: f64) -> Self {
        Self(value.to_degrees())
    }

    /// Creates an angle from hours of right ascension (1 h = 15°).
    pub fn from_hours(value: f64) -> Self {
        Self(value * 15.0)
    }

    pub fn to_degrees(&self) -> f64 {
        self.0
    }

    pub fn to_radians(&self) -> f64 {
        self.0.to_radians()
    }

    pub fn to_hours(&self) -> f64 {
        self.0 / 15.0
    }

    /// Parses a sexagesimal right ascension such as `"01 02 03.5"` (hours,
    /// minutes, seconds). Fields may be separated by spaces or colons;
    /// trailing fields may be omitted.
    pub fn parse_hours(text: &str) -> Result<Self, UnitError> {
        let (sign, value) = parse_sexagesimal(text, "sexagesimal hours")?;
        Ok(Self::from_hours(sign * value))
    }

    /// Parses a sexagesimal declination such as `"-04 05 06"` (degrees,
    /// arcminutes, arcseconds).
    ///
    /// The sign is read from the text rather than from the degree field, so
    /// `"-00 30 00"` is correctly half a degree south.
    pub fn parse_degrees(text: &str) -> Result<Self, UnitError> {
        let (sign, value) = parse_sexagesimal(text, "sexagesimal degrees")?;
        Ok(Self::from_degrees(sign * value))
    }

    /// Returns true when the underlying value is finite
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

fn parse_sexagesimal(text: &str, expected: &'static str) -> Result<(f64, f64), UnitError> {
    let parse_error = || UnitError::Parse {
        input: text.to_string(),
        expected,
    };

    let trimmed = text.trim();
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let fields: Vec<&str> = body
        .split(|c: char| c.is_whitespace() || c == ':')
        .filter(|field| !field.is_empty())
        .collect();
    if fields.is_empty() || fields.len() > 3 {
        return Err(parse_error());
    }

    let mut value = 0.0;
    let mut scale = 1.0;
    for field in fields {
        let component: f64 = field.parse().map_err(|_| parse_error())?;
        if component < 0.0 {
            return Err(parse_error());
        }
        value += component / scale;
        scale *= 60.0;
    }

    Ok((sign, value))
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    fn div(self, rhs: f64) -> Angle {
        Angle(self.0 / rhs)
    }
}

//! Absolute visual magnitude by spectral type, after Schmid-Kaler (1982).

use tracing::debug;

use crate::spectral::{LuminosityClass, SpectralType};

const NAN: f64 = f64::NAN;

/// Class number assumed when a type gives only a letter.
pub const DEFAULT_CLASS_NUMBER: f64 = 5.0;

/// Rows of (class letter, class number, M_V per luminosity class). Columns
/// are ordered V, IV, III, II, Ib, Iab, Ia, Ia0 (see [`LuminosityClass::column`]).
/// NaN marks combinations that do not occur.
#[rustfmt::skip]
static ABSOLUTE_MAGNITUDES: &[(&str, u8, [f64; 8])] = &[
    ("O", 5, [-5.7, NAN, -6.3, -6.5, -6.6, -6.8, -7.0, NAN]),
    ("O", 6, [-5.5, NAN, -5.9, -6.2, -6.4, -6.6, -6.9, NAN]),
    ("O", 7, [-5.2, NAN, -5.7, -6.0, -6.2, -6.5, -6.8, NAN]),
    ("O", 8, [-4.9, NAN, -5.5, -5.9, -6.1, -6.4, -6.7, NAN]),
    ("O", 9, [-4.5, -4.9, -5.3, -5.8, -6.1, -6.4, -6.6, NAN]),
    ("B", 0, [-4.0, -4.5, -5.1, -5.4, -5.8, -6.1, -6.4, -8.5]),
    ("B", 1, [-3.2, -3.9, -4.4, -5.0, -5.7, -6.0, -6.4, -8.4]),
    ("B", 2, [-2.4, -3.0, -3.6, -4.5, -5.7, -6.1, -6.4, -8.2]),
    ("B", 3, [-1.6, -2.3, -2.9, -4.3, -5.6, -6.1, -6.3, -8.1]),
    ("B", 5, [-1.2, -1.7, -2.2, -4.0, -5.7, -6.2, -7.0, -8.0]),
    ("B", 6, [-0.9, -1.4, -1.9, -3.9, -5.6, -6.2, -7.0, -8.0]),
    ("B", 7, [-0.6, -1.1, -1.6, -3.9, -5.6, -6.2, -7.0, -8.1]),
    ("B", 8, [-0.2, -0.8, -1.4, -3.7, -5.6, -6.2, -7.1, -8.2]),
    ("B", 9, [ 0.2, -0.4, -0.8, -3.5, -5.5, -6.2, -7.1, -8.3]),
    ("A", 0, [ 0.6,  0.1,  0.0, -3.2, -5.2, -6.3, -7.1, -8.4]),
    ("A", 1, [ 1.0,  0.4,  0.2, -3.0, -5.0, -6.4, -7.1, -8.5]),
    ("A", 2, [ 1.3,  0.7,  0.3, -2.8, -4.8, -6.5, -7.3, -8.6]),
    ("A", 3, [ 1.5,  0.9,  0.5, -2.6, -4.8, -6.5, -7.4, -8.6]),
    ("A", 5, [ 1.95, 1.3,  0.7, -2.4, -4.7, -6.6, -7.6, -8.7]),
    ("A", 7, [ 2.2,  1.6,  1.1, -2.2, -4.6,  NAN, -7.8, -8.8]),
    ("F", 0, [ 2.7,  1.9,  1.5, -2.1, -4.6, -6.6, -8.0, -8.9]),
    ("F", 2, [ 3.0,  2.1,  1.6, -2.1, -4.6, -6.6, -8.0, -8.9]),
    ("F", 5, [ 3.5,  2.2,  1.6, -2.1, -4.4, -6.6, -8.0, -9.0]),
    ("F", 8, [ 4.0,  2.4,  0.9, -2.1, -4.3, -6.5, -8.0, -9.0]),
    ("G", 0, [ 4.4,  2.8,  0.7, -2.1, -4.2, -6.4, -8.0, -9.0]),
    ("G", 2, [ 4.7,  3.0,  0.6, -2.1, -4.1, -6.3, -8.0, -9.0]),
    ("G", 5, [ 5.1,  3.1,  0.4, -2.1, -4.1, -6.3, -8.0, -9.0]),
    ("G", 8, [ 5.5,  3.2,  0.3, -2.1, -4.1, -6.2, -8.0, -9.0]),
    ("K", 0, [ 5.9,  3.2,  0.2, -2.1, -4.1, -6.1, -8.0, -9.0]),
    ("K", 1, [ 6.1,  NAN,  0.1, -2.1, -4.1, -6.0, -8.0, -9.0]),
    ("K", 2, [ 6.4,  NAN,  0.1, -2.1, -4.1, -5.9, -8.0, -9.0]),
    ("K", 3, [ 6.65, NAN,  0.0, -2.1, -4.1, -5.8, -8.0, -9.0]),
    ("K", 4, [ 7.0,  NAN, -0.2, -2.1, -4.1, -5.7, -8.0, -9.0]),
    ("K", 5, [ 7.35, NAN, -0.3, -2.2, -4.2, -5.6, -8.0, -9.0]),
    ("K", 7, [ 8.1,  NAN, -0.4, -2.3, -4.3, -5.6, -8.0,  NAN]),
    ("M", 0, [ 8.8,  NAN, -0.4, -2.4, -4.5, -5.6, -8.0,  NAN]),
    ("M", 1, [ 9.3,  NAN, -0.5, -2.4, -4.6, -5.6, -7.9,  NAN]),
    ("M", 2, [ 9.9,  NAN, -0.6, -2.4, -4.6, -5.6, -7.8,  NAN]),
    ("M", 3, [10.4,  NAN, -0.7, -2.5, -4.7, -5.7, -7.7,  NAN]),
    ("M", 4, [11.3,  NAN, -0.75, NAN,  NAN,  NAN,  NAN,  NAN]),
    ("M", 5, [12.3,  NAN, -0.8,  NAN,  NAN,  NAN,  NAN,  NAN]),
    ("M", 6, [13.5,  NAN,  NAN,  NAN,  NAN,  NAN,  NAN,  NAN]),
    ("M", 7, [14.3,  NAN,  NAN,  NAN,  NAN,  NAN,  NAN,  NAN]),
    ("M", 8, [16.0,  NAN,  NAN,  NAN,  NAN,  NAN,  NAN,  NAN]),
];

/// Estimates the absolute V magnitude of a star from its spectral type.
///
/// A missing class number is taken as 5 and a missing luminosity class as
/// main sequence. Class numbers between tabulated rows are interpolated
/// linearly, and numbers beyond the first or last row take that row's value.
/// Returns `None` when the class letter is not tabulated or the combination
/// does not occur.
pub fn estimate_absolute_magnitude(spectral_type: &SpectralType) -> Option<f64> {
    let letter = spectral_type.class_letter()?;
    let number = spectral_type
        .class_number()
        .unwrap_or(DEFAULT_CLASS_NUMBER);
    let column = spectral_type
        .luminosity_class()
        .unwrap_or(LuminosityClass::V)
        .column();

    let rows: Vec<(f64, f64)> = ABSOLUTE_MAGNITUDES
        .iter()
        .filter(|(row_letter, _, _)| *row_letter == letter)
        .map(|(_, row_number, values)| (f64::from(*row_number), values[column]))
        .collect();

    let magnitude = interpolate(&rows, number)?;
    debug!(
        spectral_type = %spectral_type,
        magnitude, "estimated absolute magnitude"
    );
    magnitude.is_finite().then_some(magnitude)
}

/// Piecewise-linear interpolation over points sorted by x, clamped at the ends.
fn interpolate(points: &[(f64, f64)], x: f64) -> Option<f64> {
    let (first, last) = (points.first()?, points.last()?);

    if x <= first.0 {
        return Some(first.1);
    }
    if x >= last.0 {
        return Some(last.1);
    }

    points.windows(2).find_map(|pair| {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        if x == x0 {
            Some(y0)
        } else if x > x0 && x < x1 {
            Some(y0 + (y1 - y0) * (x - x0) / (x1 - x0))
        } else {
            None
        }
    })
}

use units::Length;

use crate::error::EquationError;
use crate::relation::finite;

/// Distance from the distance modulus, `d = 10^((m - M + 5 - A_V) / 5)` pc.
///
/// `apparent` and `absolute` are magnitudes in the same band and `extinction`
/// is the absorption along the line of sight in that band.
///
/// ```rust
/// use equations::estimate_distance;
///
/// let d = estimate_distance(10.0, 5.0, 0.0).unwrap();
/// assert!((d.to_parsecs() - 100.0).abs() < 1e-9);
/// ```
pub fn estimate_distance(
    apparent: f64,
    absolute: f64,
    extinction: f64,
) -> Result<Length, EquationError> {
    let modulus = (apparent - absolute + 5.0 - extinction) / 5.0;
    let parsecs = finite("DistanceModulus", "d", 10f64.powf(modulus))?;
    Ok(Length::from_parsecs(parsecs))
}

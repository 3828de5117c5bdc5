//! Chains the relations the way a transmission-spectroscopy estimate does:
//! equilibrium temperature and surface gravity feed the scale height, which
//! feeds the terminator signal and finally the planet SNR.

use approx::assert_relative_eq;
use equations::{
    ratio_terminator_to_star, snr_planet, MeanPlanetTemp, ScaleHeight, SurfaceGravity,
    DEFAULT_EPSILON,
};
use units::{Length, Mass, MolecularWeight, Temperature};

#[test]
fn hot_jupiter_signal_chain() {
    let stellar_radius = Length::from_solar_radii(0.95);
    let planet_radius = Length::from_jupiter_radii(0.92);

    let temperature = MeanPlanetTemp::new(
        Some(0.1),
        Some(Temperature::from_kelvin(5370.0)),
        Some(stellar_radius),
        Some(Length::from_au(0.449)),
        Some(DEFAULT_EPSILON),
        None,
    )
    .unwrap()
    .planet_temperature()
    .unwrap();
    assert_relative_eq!(temperature.to_kelvin(), 401.08, epsilon = 0.01);

    let gravity = SurfaceGravity::new(Some(Mass::from_jupiter_masses(3.9)), Some(planet_radius), None)
        .unwrap()
        .gravity()
        .unwrap();

    let scale_height = ScaleHeight::new(
        Some(temperature),
        Some(MolecularWeight::from_amu(2.0)),
        Some(gravity),
        None,
    )
    .unwrap()
    .scale_height()
    .unwrap();

    let ratio = ratio_terminator_to_star(scale_height, planet_radius, stellar_radius);
    let snr = snr_planet(400.0, ratio, 200.0, 5.0, 1.0);

    // A heavy, cool giant has a thin atmosphere and a weak signal
    assert!(scale_height.to_km() > 10.0 && scale_height.to_km() < 100.0);
    assert!(ratio > 0.0 && ratio < 1e-4);
    assert!(snr > 0.0 && snr < 1.0);
}

#[test]
fn inverted_relations_agree_with_forward_ones() {
    let mass = Mass::from_earth_masses(5.0);
    let radius = Length::from_earth_radii(1.6);

    let g = SurfaceGravity::new(Some(mass), Some(radius), None)
        .unwrap()
        .gravity()
        .unwrap();
    let mass_back = SurfaceGravity::new(None, Some(radius), Some(g))
        .unwrap()
        .mass()
        .unwrap();

    assert_relative_eq!(mass_back.to_earth_masses(), 5.0, max_relative = 1e-12);
}

//! Physical constants in SI units (CODATA 2018, IAU 2015 nominal values).

/// Newtonian constant of gravitation, m³ kg⁻¹ s⁻²
pub const G: f64 = 6.674_30e-11;

/// Stefan-Boltzmann constant, W m⁻² K⁻⁴
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;

/// Boltzmann constant, J K⁻¹
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// Unified atomic mass unit, kg
pub const ATOMIC_MASS_UNIT_KG: f64 = 1.660_539_066_60e-27;

/// Nominal solar luminosity, W
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

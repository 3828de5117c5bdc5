mod tests {
    use approx::{assert_relative_eq, relative_eq};
    use proptest::prelude::*;
    use units::{Acceleration, Length, MolecularWeight, Temperature};

    use crate::atmosphere::{ratio_terminator_to_star, snr_planet, ScaleHeight};
    use crate::error::EquationError;

    #[test]
    fn test_scale_height_earth() {
        let earth = ScaleHeight::new(
            Some(Temperature::from_kelvin(290.0)),
            Some(MolecularWeight::from_amu(28.964)),
            Some(Acceleration::from_m_per_s2(9.81)),
            None,
        )
        .unwrap();

        assert_relative_eq!(earth.scale_height().unwrap().to_m(), 8486.03, epsilon = 0.01);
    }

    #[test]
    fn test_scale_height_zero_gravity_is_domain_error() {
        let flat = ScaleHeight::new(
            Some(Temperature::from_kelvin(290.0)),
            Some(MolecularWeight::from_amu(2.3)),
            Some(Acceleration::from_m_per_s2(0.0)),
            None,
        )
        .unwrap();

        assert_eq!(
            flat.scale_height(),
            Err(EquationError::Domain {
                relation: "ScaleHeight",
                variable: "H",
            })
        );
    }

    #[test]
    fn test_ratio_terminator_to_star_earth_sun() {
        let ratio = ratio_terminator_to_star(
            Length::from_meters(8500.0),
            Length::from_earth_radii(1.0),
            Length::from_solar_radii(1.0),
        );
        assert_relative_eq!(ratio, 1.1226e-6, max_relative = 1e-4);
    }

    #[test]
    fn test_snr_planet() {
        let snr = snr_planet(400.0, 1.12e-6, 200.0, 5.0, 1.0);
        assert_relative_eq!(snr, 0.01417, epsilon = 1e-5);
    }

    proptest! {
        #[test]
        fn scale_height_round_trips(
            t in 1.0f64..20_000.0,
            mu in 0.5f64..100.0,
            g in 0.1f64..1_000.0,
        ) {
            let t = Temperature::from_kelvin(t);
            let mu = MolecularWeight::from_amu(mu);
            let g = Acceleration::from_m_per_s2(g);

            let h = ScaleHeight::new(Some(t), Some(mu), Some(g), None).unwrap().scale_height().unwrap();

            let g_back = ScaleHeight::new(Some(t), Some(mu), None, Some(h)).unwrap().gravity().unwrap();
            let mu_back = ScaleHeight::new(Some(t), None, Some(g), Some(h)).unwrap().mean_molecular_weight().unwrap();
            let t_back = ScaleHeight::new(None, Some(mu), Some(g), Some(h)).unwrap().temperature().unwrap();

            prop_assert!(relative_eq!(g_back.to_m_per_s2(), g.to_m_per_s2(), max_relative = 1e-9));
            prop_assert!(relative_eq!(mu_back.to_amu(), mu.to_amu(), max_relative = 1e-9));
            prop_assert!(relative_eq!(t_back.to_kelvin(), t.to_kelvin(), max_relative = 1e-9));
        }
    }
}

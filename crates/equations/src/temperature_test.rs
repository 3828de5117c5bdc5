mod tests {
    use approx::{assert_relative_eq, relative_eq};
    use proptest::prelude::*;
    use units::{Length, Mass, Temperature};

    use crate::error::EquationError;
    use crate::temperature::{estimate_stellar_temperature, MeanPlanetTemp, DEFAULT_EPSILON};

    fn mars() -> MeanPlanetTemp {
        MeanPlanetTemp::new(
            Some(0.25),
            Some(Temperature::from_kelvin(5800.0)),
            Some(Length::from_solar_radii(1.0)),
            Some(Length::from_au(1.524)),
            Some(DEFAULT_EPSILON),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_mean_planet_temp_mars() {
        let t = mars().planet_temperature().unwrap();
        assert_relative_eq!(t.to_kelvin(), 230.49, epsilon = 0.01);
    }

    #[test]
    fn test_semi_major_axis_from_temperature() {
        let t_p = mars().planet_temperature().unwrap();
        let orbit = MeanPlanetTemp::new(
            Some(0.25),
            Some(Temperature::from_kelvin(5800.0)),
            Some(Length::from_solar_radii(1.0)),
            None,
            Some(DEFAULT_EPSILON),
            Some(t_p),
        )
        .unwrap();

        assert_relative_eq!(orbit.semi_major_axis().unwrap().to_au(), 1.524, max_relative = 1e-12);
    }

    #[test]
    fn test_albedo_above_one_is_domain_error() {
        let impossible = MeanPlanetTemp::new(
            Some(1.5),
            Some(Temperature::from_kelvin(5800.0)),
            Some(Length::from_solar_radii(1.0)),
            Some(Length::from_au(1.0)),
            Some(DEFAULT_EPSILON),
            None,
        )
        .unwrap();

        assert_eq!(
            impossible.planet_temperature(),
            Err(EquationError::Domain {
                relation: "MeanPlanetTemp",
                variable: "T_p",
            })
        );
    }

    #[test]
    fn test_estimate_stellar_temperature() {
        let sun = estimate_stellar_temperature(Mass::from_solar_masses(1.0));
        assert_relative_eq!(sun.to_kelvin(), 5800.0);

        // HD 189733 is measured at 4939 K
        let hd189 = estimate_stellar_temperature(Mass::from_solar_masses(0.846));
        assert!((hd189.to_kelvin() - 4939.0).abs() < 300.0);
    }

    proptest! {
        #[test]
        fn mean_planet_temp_round_trips(
            albedo in 0.0f64..0.95,
            t_s in 2_000.0f64..50_000.0,
            r_s in 0.1f64..100.0,
            a in 0.01f64..100.0,
            epsilon in 0.1f64..1.0,
        ) {
            let t_s = Temperature::from_kelvin(t_s);
            let r_s = Length::from_solar_radii(r_s);
            let a = Length::from_au(a);

            let t_p = MeanPlanetTemp::new(Some(albedo), Some(t_s), Some(r_s), Some(a), Some(epsilon), None)
                .unwrap()
                .planet_temperature()
                .unwrap();

            let eps_back = MeanPlanetTemp::new(Some(albedo), Some(t_s), Some(r_s), Some(a), None, Some(t_p))
                .unwrap().epsilon().unwrap();
            let a_back = MeanPlanetTemp::new(Some(albedo), Some(t_s), Some(r_s), None, Some(epsilon), Some(t_p))
                .unwrap().semi_major_axis().unwrap();
            let r_back = MeanPlanetTemp::new(Some(albedo), Some(t_s), None, Some(a), Some(epsilon), Some(t_p))
                .unwrap().stellar_radius().unwrap();
            let t_s_back = MeanPlanetTemp::new(Some(albedo), None, Some(r_s), Some(a), Some(epsilon), Some(t_p))
                .unwrap().stellar_temperature().unwrap();
            let albedo_back = MeanPlanetTemp::new(None, Some(t_s), Some(r_s), Some(a), Some(epsilon), Some(t_p))
                .unwrap().albedo().unwrap();

            prop_assert!(relative_eq!(eps_back, epsilon, max_relative = 1e-9));
            prop_assert!(relative_eq!(a_back.to_au(), a.to_au(), max_relative = 1e-9));
            prop_assert!(relative_eq!(r_back.to_solar_radii(), r_s.to_solar_radii(), max_relative = 1e-9));
            prop_assert!(relative_eq!(t_s_back.to_kelvin(), t_s.to_kelvin(), max_relative = 1e-9));
            prop_assert!(relative_eq!(albedo_back, albedo, epsilon = 1e-9, max_relative = 1e-9));
        }
    }
}

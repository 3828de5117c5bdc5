mod tests {
    use approx::{assert_relative_eq, relative_eq};
    use proptest::prelude::*;
    use units::{Length, Mass};

    use crate::error::EquationError;
    use crate::gravity::{Logg, SurfaceGravity};

    #[test]
    fn test_surface_gravity_earth() {
        let earth = SurfaceGravity::new(
            Some(Mass::from_earth_masses(1.0)),
            Some(Length::from_earth_radii(1.0)),
            None,
        )
        .unwrap();

        assert_relative_eq!(earth.gravity().unwrap().to_m_per_s2(), 9.820, epsilon = 1e-3);
    }

    #[test]
    fn test_logg_wasp10() {
        // Christian et al. 2009 quote 4.51
        let wasp10 = Logg::new(
            Some(Mass::from_solar_masses(0.703)),
            Some(Length::from_solar_radii(0.775)),
            None,
        )
        .unwrap();

        assert_relative_eq!(wasp10.logg().unwrap(), 4.51, epsilon = 0.01);
    }

    #[test]
    fn test_logg_of_massless_body_is_domain_error() {
        let nothing = Logg::new(Some(Mass::zero()), Some(Length::from_au(1.0)), None).unwrap();
        assert_eq!(
            nothing.logg(),
            Err(EquationError::Domain {
                relation: "Logg",
                variable: "logg",
            })
        );
    }

    proptest! {
        #[test]
        fn surface_gravity_round_trips(m in 0.0001f64..10_000.0, r in 0.0001f64..10_000.0) {
            let m = Mass::from_jupiter_masses(m);
            let r = Length::from_jupiter_radii(r);

            let g = SurfaceGravity::new(Some(m), Some(r), None).unwrap().gravity().unwrap();

            let r_back = SurfaceGravity::new(Some(m), None, Some(g)).unwrap().radius().unwrap();
            let m_back = SurfaceGravity::new(None, Some(r), Some(g)).unwrap().mass().unwrap();

            prop_assert!(relative_eq!(r_back.to_jupiter_radii(), r.to_jupiter_radii(), max_relative = 1e-9));
            prop_assert!(relative_eq!(m_back.to_jupiter_masses(), m.to_jupiter_masses(), max_relative = 1e-9));
        }

        #[test]
        fn logg_round_trips(m in 0.0001f64..10_000.0, r in 0.0001f64..10_000.0) {
            let m = Mass::from_jupiter_masses(m);
            let r = Length::from_jupiter_radii(r);

            let logg = Logg::new(Some(m), Some(r), None).unwrap().logg().unwrap();

            let r_back = Logg::new(Some(m), None, Some(logg)).unwrap().radius().unwrap();
            let m_back = Logg::new(None, Some(r), Some(logg)).unwrap().mass().unwrap();

            prop_assert!(relative_eq!(r_back.to_jupiter_radii(), r.to_jupiter_radii(), max_relative = 1e-9));
            prop_assert!(relative_eq!(m_back.to_jupiter_masses(), m.to_jupiter_masses(), max_relative = 1e-9));
        }
    }
}

mod tests {
    use approx::{assert_relative_eq, relative_eq};
    use proptest::prelude::*;
    use units::{Length, Mass, Time};

    use crate::error::EquationError;
    use crate::kepler::KeplersThirdLaw;

    #[test]
    fn test_period_gj1214() {
        let orbit = KeplersThirdLaw::new(
            Some(Length::from_au(0.014)),
            Some(Mass::from_solar_masses(0.153)),
            None,
            Some(Mass::zero()),
        )
        .unwrap();

        assert_relative_eq!(orbit.period().unwrap().to_days(), 1.546, epsilon = 1e-3);
    }

    #[test]
    fn test_semi_major_axis_from_period() {
        let orbit = KeplersThirdLaw::new(
            None,
            Some(Mass::from_solar_masses(0.98)),
            Some(Time::from_days(111.2)),
            Some(Mass::zero()),
        )
        .unwrap();

        assert_relative_eq!(orbit.semi_major_axis().unwrap().to_au(), 0.4495, epsilon = 1e-4);
    }

    #[test]
    fn test_companion_mass_shortens_period() {
        let light = KeplersThirdLaw::new(
            Some(Length::from_au(1.0)),
            Some(Mass::from_solar_masses(1.0)),
            None,
            Some(Mass::zero()),
        )
        .unwrap();
        let heavy = KeplersThirdLaw::new(
            Some(Length::from_au(1.0)),
            Some(Mass::from_solar_masses(1.0)),
            None,
            Some(Mass::from_jupiter_masses(10.0)),
        )
        .unwrap();

        assert!(heavy.period().unwrap() < light.period().unwrap());
    }

    #[test]
    fn test_zero_total_mass_is_domain_error() {
        let massless = KeplersThirdLaw::new(
            Some(Length::from_au(1.0)),
            Some(Mass::zero()),
            None,
            Some(Mass::zero()),
        )
        .unwrap();

        assert_eq!(
            massless.period(),
            Err(EquationError::Domain {
                relation: "KeplersThirdLaw",
                variable: "P",
            })
        );
    }

    proptest! {
        #[test]
        fn kepler_round_trips(
            a in 0.001f64..1_000.0,
            m_s in 0.01f64..100.0,
            m_p in 0.0f64..10.0,
        ) {
            let a = Length::from_au(a);
            let m_s = Mass::from_solar_masses(m_s);
            let m_p = Mass::from_jupiter_masses(m_p);

            let p = KeplersThirdLaw::new(Some(a), Some(m_s), None, Some(m_p)).unwrap().period().unwrap();

            let a_back = KeplersThirdLaw::new(None, Some(m_s), Some(p), Some(m_p)).unwrap().semi_major_axis().unwrap();
            let m_s_back = KeplersThirdLaw::new(Some(a), None, Some(p), Some(m_p)).unwrap().primary_mass().unwrap();
            let m_p_back = KeplersThirdLaw::new(Some(a), Some(m_s), Some(p), None).unwrap().companion_mass().unwrap();

            prop_assert!(relative_eq!(a_back.to_au(), a.to_au(), max_relative = 1e-9));
            prop_assert!(relative_eq!(m_s_back.to_solar_masses(), m_s.to_solar_masses(), max_relative = 1e-9));
            prop_assert!(relative_eq!(m_p_back.to_jupiter_masses(), m_p.to_jupiter_masses(), epsilon = 1e-6));
        }
    }
}

mod tests {
    use approx::{assert_relative_eq, relative_eq};
    use proptest::prelude::*;
    use units::{Density as BulkDensity, Length, Mass};

    use crate::density::Density;

    #[test]
    fn test_density_unit_sphere() {
        let sphere = Density::new(Some(Mass::from_kg(1.0)), Some(Length::from_meters(1.0)), None).unwrap();
        assert_relative_eq!(sphere.density().unwrap().to_kg_per_m3(), 0.2387, epsilon = 1e-4);
    }

    #[test]
    fn test_density_hd189733b() {
        let hd189 = Density::new(
            Some(Mass::from_jupiter_masses(1.144)),
            Some(Length::from_jupiter_radii(1.138)),
            None,
        )
        .unwrap();

        assert_relative_eq!(hd189.density().unwrap().to_grams_per_cm3(), 1.0294, epsilon = 1e-3);
    }

    #[test]
    fn test_mass_from_jupiter_density() {
        let jupiter = Density::new(
            None,
            Some(Length::from_meters(6.9911e7)),
            Some(BulkDensity::from_grams_per_cm3(1.326)),
        )
        .unwrap();

        assert_relative_eq!(jupiter.mass().unwrap().to_kg(), 1.898e27, max_relative = 1e-3);
    }

    proptest! {
        #[test]
        fn density_round_trips(m in 0.0001f64..10_000.0, r in 0.0001f64..10_000.0) {
            let m = Mass::from_kg(m);
            let r = Length::from_meters(r);

            let rho = Density::new(Some(m), Some(r), None).unwrap().density().unwrap();

            let r_back = Density::new(Some(m), None, Some(rho)).unwrap().radius().unwrap();
            let m_back = Density::new(None, Some(r), Some(rho)).unwrap().mass().unwrap();

            prop_assert!(relative_eq!(r_back.to_m(), r.to_m(), max_relative = 1e-9));
            prop_assert!(relative_eq!(m_back.to_kg(), m.to_kg(), max_relative = 1e-9));
        }
    }
}

mod tests {
    use approx::assert_relative_eq;

    use crate::temperature::{Temperature, SOLAR_TEMPERATURE_K};

    #[test]
    fn test_temperature_conversions() {
        let freezing = Temperature::from_kelvin(273.15);
        assert_relative_eq!(freezing.to_celsius(), 0.0, epsilon = 1e-12);

        let boiling = Temperature::from_celsius(100.0);
        assert_relative_eq!(boiling.to_kelvin(), 373.15, epsilon = 1e-12);

        let sun = Temperature::from_kelvin(SOLAR_TEMPERATURE_K);
        assert_relative_eq!(sun.to_solar(), 1.0);
    }

    #[test]
    fn test_temperature_powers() {
        let t = Temperature::from_kelvin(10.0);
        assert_relative_eq!(t.powi(4), 10_000.0);
        assert_relative_eq!(t.powf(0.5), 10.0_f64.sqrt());
    }

    #[test]
    fn test_temperature_arithmetic() {
        let star = Temperature::from_kelvin(5370.0);
        let planet = Temperature::from_kelvin(537.0);

        assert_relative_eq!(planet / star, 0.1);
        assert_relative_eq!((star - planet).to_kelvin(), 4833.0);
        assert_relative_eq!((star + planet).to_kelvin(), 5907.0);
        assert_relative_eq!((planet * 2.0).to_kelvin(), 1074.0);
        assert_relative_eq!((0.5 * planet).to_kelvin(), 268.5);
        assert_relative_eq!((star / 2.0).to_kelvin(), 2685.0);
    }

    #[test]
    fn test_temperature_serializes_as_bare_number() {
        let t = Temperature::from_kelvin(339.6);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "339.6");

        let back: Temperature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}

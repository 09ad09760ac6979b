use pf_atmosphere::{AtmosphereModel, IsaAtmosphere};
use pf_core::units::m;
use proptest::prelude::*;

proptest! {
    #[test]
    fn pressure_and_density_fall_with_altitude(h in 0.0_f64..19_900.0, dh in 1.0_f64..100.0) {
        let isa = IsaAtmosphere::new();
        let low = isa.state(m(h)).unwrap();
        let high = isa.state(m(h + dh)).unwrap();
        prop_assert!(high.pressure_pa() < low.pressure_pa());
        prop_assert!(high.density_kg_m3() < low.density_kg_m3());
        prop_assert!(high.temperature_k() <= low.temperature_k());
    }

    #[test]
    fn lookups_are_repeatable(h in 0.0_f64..20_000.0) {
        let isa = IsaAtmosphere::new();
        prop_assert_eq!(isa.state(m(h)).unwrap(), isa.state(m(h)).unwrap());
    }

    #[test]
    fn density_obeys_ideal_gas(h in 0.0_f64..20_000.0) {
        let isa = IsaAtmosphere::new();
        let s = isa.state(m(h)).unwrap();
        let rho = s.pressure_pa() / (isa.gas_constant() * s.temperature_k());
        prop_assert!((s.density_kg_m3() - rho).abs() < 1e-12);
    }
}

#[test]
fn pressure_nearly_continuous_across_tropopause() {
    let isa = IsaAtmosphere::new();
    let below = isa.pressure(m(11_000.0)).unwrap().value;
    let above = isa.pressure(m(11_000.001)).unwrap().value;
    assert!(above < below);
    assert!((below - above).abs() / below < 1e-6);
}

#[test]
fn converters_reexported() {
    let isa = IsaAtmosphere::new();
    let a = isa.speed_of_sound(m(0.0)).unwrap().value;
    // sea level speed of sound is about 661 kt
    assert!((pf_atmosphere::mps_to_knots(a) - 661.5).abs() < 1.0);
    assert!((pf_atmosphere::meters_to_feet(11_000.0) - 36_089.0).abs() < 1.0);
}

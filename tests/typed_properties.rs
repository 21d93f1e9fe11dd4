//! `Quantity<U>::convert`(타입 경로)에 대해 성립해야 하는 변환 성질.
use approx::assert_relative_eq;
use converto::units::*;
use converto::{conversion, Quantity};

const MAGNITUDES: [f64; 7] = [1.0, 0.5, -40.0, 123.456, 1e-6, 1e6, 98_765.4321];

fn check_round_trip<U: Unit>() {
    for &from in U::ALL {
        for &to in U::ALL {
            for m in MAGNITUDES {
                let there = Quantity::new(m, from).convert(to);
                assert_eq!(there.unit(), to);
                let back = there.convert(from);
                assert_relative_eq!(back.value(), m, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }
}

fn check_identity_is_exact<U: Unit>() {
    for &unit in U::ALL {
        for m in MAGNITUDES.into_iter().chain([0.0, -0.0, f64::MAX, f64::MIN_POSITIVE]) {
            let q = unit.of(m).convert(unit);
            assert_eq!(q.value().to_bits(), m.to_bits(), "{unit} {m}");
        }
    }
}

fn check_base_rule<U: Unit>() {
    for &unit in U::ALL {
        for m in MAGNITUDES {
            let q = unit.of(m).to_base_unit();
            assert_eq!(q.unit(), U::BASE);
            assert_eq!(q.value(), unit.conversion().to_base(m), "{unit} {m}");
        }
    }
}

fn check_matches_runtime_path<U: Unit>() {
    for &from in U::ALL {
        for &to in U::ALL {
            let typed = from.of(123.456).convert(to).value();
            let runtime = conversion::convert(123.456, from.into(), to.into()).unwrap();
            assert_eq!(typed.to_bits(), runtime.to_bits(), "{from} -> {to}");
        }
    }
}

fn check_all<U: Unit>() {
    check_round_trip::<U>();
    check_identity_is_exact::<U>();
    check_base_rule::<U>();
    check_matches_runtime_path::<U>();
}

#[test]
fn typed_conversions_hold_for_every_dimension() {
    check_all::<LengthUnit>();
    check_all::<AngleUnit>();
    check_all::<AreaUnit>();
    check_all::<PressureUnit>();
    check_all::<VolumeUnit>();
    check_all::<DispersionUnit>();
    check_all::<ConcentrationOfMassUnit>();
    check_all::<MassUnit>();
    check_all::<DurationUnit>();
    check_all::<AccelerationUnit>();
    check_all::<SpeedUnit>();
    check_all::<IlluminanceUnit>();
    check_all::<TemperatureUnit>();
    check_all::<FuelEfficiencyUnit>();
    check_all::<EnergyUnit>();
    check_all::<FrequencyUnit>();
    check_all::<ElectricCurrentUnit>();
    check_all::<ElectricResistanceUnit>();
    check_all::<ElectricPotentialUnit>();
    check_all::<PowerUnit>();
    check_all::<ElectricChargeUnit>();
}

#[test]
fn typed_non_finite_values_propagate() {
    let nan = Quantity::new(f64::NAN, TemperatureUnit::Celsius).convert(TemperatureUnit::Fahrenheit);
    assert!(nan.value().is_nan());
    let inf = LengthUnit::Kilometers.of(f64::INFINITY).convert(LengthUnit::Meters);
    assert_eq!(inf.value(), f64::INFINITY);
}

//! 모든 단위에 대해 성립해야 하는 변환 성질.
use approx::assert_relative_eq;
use converto::conversion::{self, ConversionError};
use converto::{AnyQuantity, AnyUnit, Dimension};

const MAGNITUDES: [f64; 7] = [1.0, 0.5, -40.0, 123.456, 1e-6, 1e6, 98_765.4321];

fn all_units() -> Vec<AnyUnit> {
    Dimension::ALL.iter().flat_map(|d| d.units()).collect()
}

#[test]
fn round_trip_between_every_pair_in_a_dimension() {
    for &dim in Dimension::ALL {
        let units = dim.units();
        for &from in &units {
            for &to in &units {
                for m in MAGNITUDES {
                    let there = conversion::convert(m, from, to).unwrap();
                    let back = conversion::convert(there, to, from).unwrap();
                    assert_relative_eq!(back, m, epsilon = 1e-9, max_relative = 1e-9);
                }
            }
        }
    }
}

#[test]
fn identity_conversion_is_exact() {
    for unit in all_units() {
        for m in MAGNITUDES.into_iter().chain([0.0, -0.0, f64::MAX, f64::MIN_POSITIVE]) {
            let q = AnyQuantity::new(m, unit).convert(unit).unwrap();
            assert_eq!(q.value.to_bits(), m.to_bits(), "{unit} {m}");
            assert_eq!(q.unit, unit);
        }
    }
}

#[test]
fn converting_to_base_applies_the_unit_rule() {
    for unit in all_units() {
        let base = unit.dimension().base_unit();
        for m in MAGNITUDES {
            let q = AnyQuantity::new(m, unit).convert(base).unwrap();
            assert_eq!(q.value, unit.conversion().to_base(m), "{unit} {m}");
        }
    }
}

#[test]
fn every_cross_dimension_pair_is_rejected() {
    for &a in Dimension::ALL {
        for &b in Dimension::ALL {
            if a == b {
                continue;
            }
            for from in a.units() {
                let to = b.base_unit();
                match conversion::convert(1.0, from, to) {
                    Err(ConversionError::DimensionMismatch {
                        from_dimension,
                        to_dimension,
                        ..
                    }) => {
                        assert_eq!(from_dimension, a);
                        assert_eq!(to_dimension, b);
                    }
                    other => panic!("{from} -> {to}: expected mismatch, got {other:?}"),
                }
            }
        }
    }
}

#[test]
fn non_finite_values_propagate() {
    let km: AnyUnit = "km".parse().unwrap();
    let m: AnyUnit = "m".parse().unwrap();
    assert!(conversion::convert(f64::NAN, km, m).unwrap().is_nan());
    assert_eq!(conversion::convert(f64::INFINITY, km, m).unwrap(), f64::INFINITY);
    assert_eq!(
        conversion::convert(f64::NEG_INFINITY, km, m).unwrap(),
        f64::NEG_INFINITY
    );

    let c: AnyUnit = "degC".parse().unwrap();
    let f: AnyUnit = "degF".parse().unwrap();
    assert!(conversion::convert(f64::NAN, c, f).unwrap().is_nan());
    assert_eq!(conversion::convert(f64::INFINITY, c, f).unwrap(), f64::INFINITY);
}

#[test]
fn negative_absolute_temperature_is_accepted() {
    let k: AnyUnit = "K".parse().unwrap();
    let c: AnyUnit = "celsius".parse().unwrap();
    let v = conversion::convert(-10.0, k, c).unwrap();
    assert_relative_eq!(v, -283.15, epsilon = 1e-9);
}

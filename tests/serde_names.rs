//! serde 식별자와 카탈로그 이름이 일치하는지 확인한다.
use converto::units::*;
use serde::Serialize;

#[derive(Serialize)]
struct Wrapper<U> {
    unit: U,
}

fn check<U: Unit + Serialize + serde::de::DeserializeOwned>() {
    for &unit in U::ALL {
        let text = toml::to_string(&Wrapper { unit }).unwrap();
        assert_eq!(text.trim(), format!("unit = \"{}\"", unit.name()));
        let back: U = toml::Value::String(unit.name().to_string()).try_into().unwrap();
        assert_eq!(back, unit);
    }
}

#[test]
fn every_unit_serializes_by_name() {
    check::<LengthUnit>();
    check::<AngleUnit>();
    check::<AreaUnit>();
    check::<PressureUnit>();
    check::<VolumeUnit>();
    check::<DispersionUnit>();
    check::<ConcentrationOfMassUnit>();
    check::<MassUnit>();
    check::<DurationUnit>();
    check::<AccelerationUnit>();
    check::<SpeedUnit>();
    check::<IlluminanceUnit>();
    check::<TemperatureUnit>();
    check::<FuelEfficiencyUnit>();
    check::<EnergyUnit>();
    check::<FrequencyUnit>();
    check::<ElectricCurrentUnit>();
    check::<ElectricResistanceUnit>();
    check::<ElectricPotentialUnit>();
    check::<PowerUnit>();
    check::<ElectricChargeUnit>();
}

#[test]
fn quantity_serializes_with_unit_name() {
    let q = converto::Quantity::new(2, MassUnit::OuncesTroy);
    let text = toml::to_string(&q).unwrap();
    assert!(text.contains("unit = \"ounces-troy\""), "{text}");
    assert!(text.contains("value = 2.0"), "{text}");
}

//! CLI 명령 처리와 설정 파일 연동 테스트.
use approx::assert_relative_eq;
use converto::app::{self, AppError};
use converto::config::{Config, UnitSystem};
use converto::units::*;
use converto::{AnyUnit, ConversionError, Dimension};

#[test]
fn explicit_target_unit_wins() {
    let cfg = Config::default();
    let q = app::convert(&cfg, 1.0, "mi".parse().unwrap(), Some("km".parse().unwrap())).unwrap();
    assert_relative_eq!(q.value, 1.609344, max_relative = 1e-12);
    assert_eq!(q.unit, AnyUnit::Length(LengthUnit::Kilometers));
}

#[test]
fn missing_target_uses_preferred_unit() {
    let cfg = Config::for_system(UnitSystem::UsCustomary);
    let q = app::convert(&cfg, 100.0, "degC".parse().unwrap(), None).unwrap();
    assert_eq!(q.unit, AnyUnit::Temperature(TemperatureUnit::Fahrenheit));
    assert_relative_eq!(q.value, 212.0, epsilon = 1e-9);

    let metric = Config::default();
    let q = app::convert(&metric, 10.0, "gal".parse().unwrap(), None).unwrap();
    assert_eq!(q.unit, AnyUnit::Volume(VolumeUnit::Liters));
}

#[test]
fn mismatched_target_is_reported() {
    let cfg = Config::default();
    let err = app::convert(&cfg, 1.0, "kg".parse().unwrap(), Some("m".parse().unwrap()))
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Conversion(ConversionError::DimensionMismatch { .. })
    ));
}

#[test]
fn unit_listing_marks_base_unit() {
    let lines = app::unit_lines(Dimension::Temperature);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("* K"), "{lines:?}");
    assert!(lines[1].starts_with("  degC"), "{lines:?}");
    assert!(lines[2].ends_with("fahrenheit"), "{lines:?}");
}

#[test]
fn dimension_listing_names_base_units() {
    let lines = app::dimension_lines();
    assert_eq!(lines.len(), Dimension::ALL.len());
    assert_eq!(lines[0], "length (m)");
    assert!(lines.contains(&"electric-charge (C)".to_string()));
}

#[test]
fn config_file_is_created_then_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("converto.toml");

    let created = Config::load_or_default(&path).unwrap();
    assert!(path.exists());
    assert_eq!(created, Config::default());

    let mut edited = Config::for_system(UnitSystem::Imperial);
    edited.preferred.length = LengthUnit::NauticalMiles;
    edited.save(&path).unwrap();

    let reloaded = Config::load_or_default(&path).unwrap();
    assert_eq!(reloaded, edited);
    assert_eq!(
        reloaded.preferred.for_dimension(Dimension::Length),
        AnyUnit::Length(LengthUnit::NauticalMiles)
    );
}

#[test]
fn broken_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("converto.toml");
    std::fs::write(&path, "unit_system = 42\n").unwrap();
    assert!(Config::load_or_default(&path).is_err());
}

#[test]
fn system_only_config_file_drives_fallback_units() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("converto.toml");
    std::fs::write(&path, "unit_system = \"imperial\"\n").unwrap();

    let cfg = Config::load_or_default(&path).unwrap();
    let q = app::convert(&cfg, 100.0, "degC".parse().unwrap(), None).unwrap();
    assert_eq!(q.unit, AnyUnit::Temperature(TemperatureUnit::Fahrenheit));
    assert_relative_eq!(q.value, 212.0, epsilon = 1e-9);
    let q = app::convert(&cfg, 1.0, "L".parse().unwrap(), None).unwrap();
    assert_eq!(q.unit, AnyUnit::Volume(VolumeUnit::ImperialGallons));
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::dimension::Dimension;
use crate::units::*;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "converto.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitSystem {
    /// SI 미터법. 기본값.
    #[default]
    Metric,
    /// 영국 단위(영국 갤런, 스톤 등)
    Imperial,
    /// 미국 관습 단위
    UsCustomary,
}

/// 목표 단위를 지정하지 않았을 때 쓸 차원별 선호 단위.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredUnits {
    pub length: LengthUnit,
    pub angle: AngleUnit,
    pub area: AreaUnit,
    pub pressure: PressureUnit,
    pub volume: VolumeUnit,
    pub dispersion: DispersionUnit,
    pub concentration_of_mass: ConcentrationOfMassUnit,
    pub mass: MassUnit,
    pub duration: DurationUnit,
    pub acceleration: AccelerationUnit,
    pub speed: SpeedUnit,
    pub illuminance: IlluminanceUnit,
    pub temperature: TemperatureUnit,
    pub fuel_efficiency: FuelEfficiencyUnit,
    pub energy: EnergyUnit,
    pub frequency: FrequencyUnit,
    pub electric_current: ElectricCurrentUnit,
    pub electric_resistance: ElectricResistanceUnit,
    pub electric_potential: ElectricPotentialUnit,
    pub power: PowerUnit,
    pub electric_charge: ElectricChargeUnit,
}

impl PreferredUnits {
    /// 단위 시스템 프리셋에 맞는 선호 단위를 만든다.
    pub fn for_system(system: UnitSystem) -> Self {
        let metric = Self {
            length: LengthUnit::Meters,
            angle: AngleUnit::Degrees,
            area: AreaUnit::SquareMeters,
            pressure: PressureUnit::Kilopascals,
            volume: VolumeUnit::Liters,
            dispersion: DispersionUnit::PartsPerMillion,
            concentration_of_mass: ConcentrationOfMassUnit::GramsPerLiter,
            mass: MassUnit::Kilograms,
            duration: DurationUnit::Seconds,
            acceleration: AccelerationUnit::MetersPerSecondSquared,
            speed: SpeedUnit::KilometersPerHour,
            illuminance: IlluminanceUnit::Lux,
            temperature: TemperatureUnit::Celsius,
            fuel_efficiency: FuelEfficiencyUnit::LitersPer100Kilometers,
            energy: EnergyUnit::Kilojoules,
            frequency: FrequencyUnit::Hertz,
            electric_current: ElectricCurrentUnit::Amperes,
            electric_resistance: ElectricResistanceUnit::Ohms,
            electric_potential: ElectricPotentialUnit::Volts,
            power: PowerUnit::Kilowatts,
            electric_charge: ElectricChargeUnit::AmpereHours,
        };
        match system {
            UnitSystem::Metric => metric,
            UnitSystem::Imperial => Self {
                length: LengthUnit::Feet,
                area: AreaUnit::SquareFeet,
                pressure: PressureUnit::PoundsForcePerSquareInch,
                volume: VolumeUnit::ImperialGallons,
                mass: MassUnit::Stones,
                speed: SpeedUnit::MilesPerHour,
                temperature: TemperatureUnit::Fahrenheit,
                fuel_efficiency: FuelEfficiencyUnit::MilesPerImperialGallon,
                power: PowerUnit::Horsepower,
                ..metric
            },
            UnitSystem::UsCustomary => Self {
                length: LengthUnit::Feet,
                area: AreaUnit::SquareFeet,
                pressure: PressureUnit::PoundsForcePerSquareInch,
                volume: VolumeUnit::Gallons,
                mass: MassUnit::Pounds,
                speed: SpeedUnit::MilesPerHour,
                temperature: TemperatureUnit::Fahrenheit,
                fuel_efficiency: FuelEfficiencyUnit::MilesPerGallon,
                power: PowerUnit::Horsepower,
                ..metric
            },
        }
    }

    /// 차원에 해당하는 선호 단위.
    pub fn for_dimension(&self, dimension: Dimension) -> AnyUnit {
        match dimension {
            Dimension::Length => self.length.into(),
            Dimension::Angle => self.angle.into(),
            Dimension::Area => self.area.into(),
            Dimension::Pressure => self.pressure.into(),
            Dimension::Volume => self.volume.into(),
            Dimension::Dispersion => self.dispersion.into(),
            Dimension::ConcentrationOfMass => self.concentration_of_mass.into(),
            Dimension::Mass => self.mass.into(),
            Dimension::Duration => self.duration.into(),
            Dimension::Acceleration => self.acceleration.into(),
            Dimension::Speed => self.speed.into(),
            Dimension::Illuminance => self.illuminance.into(),
            Dimension::Temperature => self.temperature.into(),
            Dimension::FuelEfficiency => self.fuel_efficiency.into(),
            Dimension::Energy => self.energy.into(),
            Dimension::Frequency => self.frequency.into(),
            Dimension::ElectricCurrent => self.electric_current.into(),
            Dimension::ElectricResistance => self.electric_resistance.into(),
            Dimension::ElectricPotential => self.electric_potential.into(),
            Dimension::Power => self.power.into(),
            Dimension::ElectricCharge => self.electric_charge.into(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
///
/// 파일의 `[preferred]` 표에 빠진 항목은 `unit_system` 프리셋의 단위로 채운다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile")]
pub struct Config {
    pub unit_system: UnitSystem,
    pub preferred: PreferredUnits,
}

/// 디스크에 적힌 그대로의 설정. 모든 항목이 생략될 수 있다.
#[derive(Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    unit_system: UnitSystem,
    preferred: toml::Table,
}

impl TryFrom<ConfigFile> for Config {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let mut merged = toml::Table::try_from(PreferredUnits::for_system(file.unit_system))?;
        merged.extend(file.preferred);
        let preferred: PreferredUnits = toml::Value::Table(merged).try_into()?;
        Ok(Self {
            unit_system: file.unit_system,
            preferred,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::for_system(UnitSystem::Metric)
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// 프리셋 단위 시스템으로 설정을 만든다.
    pub fn for_system(unit_system: UnitSystem) -> Self {
        Self {
            unit_system,
            preferred: PreferredUnits::for_system(unit_system),
        }
    }

    /// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let cfg: Config = toml::from_str(&content)?;
            debug!(path = %path.display(), system = ?cfg.unit_system, "loaded config");
            Ok(cfg)
        } else {
            let cfg = Config::default();
            cfg.save(path)?;
            debug!(path = %path.display(), "wrote default config");
            Ok(cfg)
        }
    }

    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_system_preset() {
        let cfg: Config = toml::from_str(
            r#"
            unit_system = "us-customary"

            [preferred]
            length = "miles"
            temperature = "kelvin"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.unit_system, UnitSystem::UsCustomary);
        assert_eq!(cfg.preferred.length, LengthUnit::Miles);
        assert_eq!(cfg.preferred.temperature, TemperatureUnit::Kelvin);
        assert_eq!(cfg.preferred.mass, MassUnit::Pounds);
        assert_eq!(cfg.preferred.volume, VolumeUnit::Gallons);
    }

    #[test]
    fn unit_system_alone_selects_its_preset() {
        let cfg: Config = toml::from_str("unit_system = \"imperial\"\n").unwrap();
        assert_eq!(cfg, Config::for_system(UnitSystem::Imperial));
        assert_eq!(cfg.preferred.temperature, TemperatureUnit::Fahrenheit);
        assert_eq!(cfg.preferred.length, LengthUnit::Feet);
        assert_eq!(cfg.preferred.mass, MassUnit::Stones);

        let empty: Config = toml::from_str("").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn serialized_config_reads_back() {
        let cfg = Config::for_system(UnitSystem::Imperial);
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert!(text.contains("volume = \"imperial-gallons\""), "{text}");
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn preferred_unit_belongs_to_requested_dimension() {
        for system in [UnitSystem::Metric, UnitSystem::Imperial, UnitSystem::UsCustomary] {
            let prefs = PreferredUnits::for_system(system);
            for &dim in Dimension::ALL {
                assert_eq!(prefs.for_dimension(dim).dimension(), dim);
            }
        }
    }

    #[test]
    fn unknown_unit_name_is_a_parse_error() {
        let err = toml::from_str::<Config>("[preferred]\nlength = \"cubits\"\n").unwrap_err();
        assert!(err.to_string().contains("cubits"));
    }
}

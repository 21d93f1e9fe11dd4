//! 차원(물리량 종류) 레지스트리.
//!
//! 차원 집합은 닫혀 있으며, 각 차원은 하나의 기준 단위와 표시 순서가 정해진 단위 목록을 가진다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;
use crate::units::*;

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Length,
    Angle,
    Area,
    Pressure,
    Volume,
    Dispersion,
    ConcentrationOfMass,
    Mass,
    Duration,
    Acceleration,
    Speed,
    Illuminance,
    Temperature,
    FuelEfficiency,
    Energy,
    Frequency,
    ElectricCurrent,
    ElectricResistance,
    ElectricPotential,
    Power,
    ElectricCharge,
}

fn erased<U: Unit>() -> Vec<AnyUnit> {
    U::ALL.iter().copied().map(Into::into).collect()
}

fn find_in<U: Unit>(s: &str) -> Option<AnyUnit> {
    U::ALL
        .iter()
        .find(|u| u.symbol() == s || u.name() == s)
        .map(|&u| u.into())
}

impl Dimension {
    pub const ALL: &'static [Dimension] = &[
        Dimension::Length,
        Dimension::Angle,
        Dimension::Area,
        Dimension::Pressure,
        Dimension::Volume,
        Dimension::Dispersion,
        Dimension::ConcentrationOfMass,
        Dimension::Mass,
        Dimension::Duration,
        Dimension::Acceleration,
        Dimension::Speed,
        Dimension::Illuminance,
        Dimension::Temperature,
        Dimension::FuelEfficiency,
        Dimension::Energy,
        Dimension::Frequency,
        Dimension::ElectricCurrent,
        Dimension::ElectricResistance,
        Dimension::ElectricPotential,
        Dimension::Power,
        Dimension::ElectricCharge,
    ];

    /// serde 식별자와 같은 kebab-case 이름.
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Angle => "angle",
            Dimension::Area => "area",
            Dimension::Pressure => "pressure",
            Dimension::Volume => "volume",
            Dimension::Dispersion => "dispersion",
            Dimension::ConcentrationOfMass => "concentration-of-mass",
            Dimension::Mass => "mass",
            Dimension::Duration => "duration",
            Dimension::Acceleration => "acceleration",
            Dimension::Speed => "speed",
            Dimension::Illuminance => "illuminance",
            Dimension::Temperature => "temperature",
            Dimension::FuelEfficiency => "fuel-efficiency",
            Dimension::Energy => "energy",
            Dimension::Frequency => "frequency",
            Dimension::ElectricCurrent => "electric-current",
            Dimension::ElectricResistance => "electric-resistance",
            Dimension::ElectricPotential => "electric-potential",
            Dimension::Power => "power",
            Dimension::ElectricCharge => "electric-charge",
        }
    }

    /// 이 차원의 단위를 표시 순서대로 돌려준다. 순서에 의미는 없다.
    pub fn units(self) -> Vec<AnyUnit> {
        match self {
            Dimension::Length => erased::<LengthUnit>(),
            Dimension::Angle => erased::<AngleUnit>(),
            Dimension::Area => erased::<AreaUnit>(),
            Dimension::Pressure => erased::<PressureUnit>(),
            Dimension::Volume => erased::<VolumeUnit>(),
            Dimension::Dispersion => erased::<DispersionUnit>(),
            Dimension::ConcentrationOfMass => erased::<ConcentrationOfMassUnit>(),
            Dimension::Mass => erased::<MassUnit>(),
            Dimension::Duration => erased::<DurationUnit>(),
            Dimension::Acceleration => erased::<AccelerationUnit>(),
            Dimension::Speed => erased::<SpeedUnit>(),
            Dimension::Illuminance => erased::<IlluminanceUnit>(),
            Dimension::Temperature => erased::<TemperatureUnit>(),
            Dimension::FuelEfficiency => erased::<FuelEfficiencyUnit>(),
            Dimension::Energy => erased::<EnergyUnit>(),
            Dimension::Frequency => erased::<FrequencyUnit>(),
            Dimension::ElectricCurrent => erased::<ElectricCurrentUnit>(),
            Dimension::ElectricResistance => erased::<ElectricResistanceUnit>(),
            Dimension::ElectricPotential => erased::<ElectricPotentialUnit>(),
            Dimension::Power => erased::<PowerUnit>(),
            Dimension::ElectricCharge => erased::<ElectricChargeUnit>(),
        }
    }

    /// 이 차원에서 기호나 이름이 `s`와 정확히 같은 단위를 찾는다.
    pub fn find_unit(self, s: &str) -> Option<AnyUnit> {
        match self {
            Dimension::Length => find_in::<LengthUnit>(s),
            Dimension::Angle => find_in::<AngleUnit>(s),
            Dimension::Area => find_in::<AreaUnit>(s),
            Dimension::Pressure => find_in::<PressureUnit>(s),
            Dimension::Volume => find_in::<VolumeUnit>(s),
            Dimension::Dispersion => find_in::<DispersionUnit>(s),
            Dimension::ConcentrationOfMass => find_in::<ConcentrationOfMassUnit>(s),
            Dimension::Mass => find_in::<MassUnit>(s),
            Dimension::Duration => find_in::<DurationUnit>(s),
            Dimension::Acceleration => find_in::<AccelerationUnit>(s),
            Dimension::Speed => find_in::<SpeedUnit>(s),
            Dimension::Illuminance => find_in::<IlluminanceUnit>(s),
            Dimension::Temperature => find_in::<TemperatureUnit>(s),
            Dimension::FuelEfficiency => find_in::<FuelEfficiencyUnit>(s),
            Dimension::Energy => find_in::<EnergyUnit>(s),
            Dimension::Frequency => find_in::<FrequencyUnit>(s),
            Dimension::ElectricCurrent => find_in::<ElectricCurrentUnit>(s),
            Dimension::ElectricResistance => find_in::<ElectricResistanceUnit>(s),
            Dimension::ElectricPotential => find_in::<ElectricPotentialUnit>(s),
            Dimension::Power => find_in::<PowerUnit>(s),
            Dimension::ElectricCharge => find_in::<ElectricChargeUnit>(s),
        }
    }

    /// 이 차원의 기준 단위.
    pub fn base_unit(self) -> AnyUnit {
        match self {
            Dimension::Length => LengthUnit::BASE.into(),
            Dimension::Angle => AngleUnit::BASE.into(),
            Dimension::Area => AreaUnit::BASE.into(),
            Dimension::Pressure => PressureUnit::BASE.into(),
            Dimension::Volume => VolumeUnit::BASE.into(),
            Dimension::Dispersion => DispersionUnit::BASE.into(),
            Dimension::ConcentrationOfMass => ConcentrationOfMassUnit::BASE.into(),
            Dimension::Mass => MassUnit::BASE.into(),
            Dimension::Duration => DurationUnit::BASE.into(),
            Dimension::Acceleration => AccelerationUnit::BASE.into(),
            Dimension::Speed => SpeedUnit::BASE.into(),
            Dimension::Illuminance => IlluminanceUnit::BASE.into(),
            Dimension::Temperature => TemperatureUnit::BASE.into(),
            Dimension::FuelEfficiency => FuelEfficiencyUnit::BASE.into(),
            Dimension::Energy => EnergyUnit::BASE.into(),
            Dimension::Frequency => FrequencyUnit::BASE.into(),
            Dimension::ElectricCurrent => ElectricCurrentUnit::BASE.into(),
            Dimension::ElectricResistance => ElectricResistanceUnit::BASE.into(),
            Dimension::ElectricPotential => ElectricPotentialUnit::BASE.into(),
            Dimension::Power => PowerUnit::BASE.into(),
            Dimension::ElectricCharge => ElectricChargeUnit::BASE.into(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| ConversionError::UnknownDimension(s.to_string()))
    }
}

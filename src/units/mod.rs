//! 단위 정의 및 변환 모듈 모음.
//!
//! 물리량(차원)마다 하나의 단위 enum을 두고, 각 단위는 그 차원의 기준 단위로 가는
//! 변환 규칙([`Conversion`])을 가진다. 서로 다른 단위 사이의 변환은 항상
//! 기준 단위를 거쳐 두 단계로 이루어진다.

use std::fmt;

use crate::dimension::Dimension;
use crate::quantity::{Magnitude, Quantity};

/// 단위 enum과 [`Unit`] 구현을 표 한 장으로 생성한다.
///
/// 각 행은 `Variant => ("기호", "이름", 변환 규칙)` 형태이며, 이름은 serde 식별자로도 쓰인다.
macro_rules! unit_catalog {
    (
        $(#[$meta:meta])*
        pub enum $ty:ident in $dim:ident, base $base:ident {
            $( $variant:ident => ($symbol:literal, $name:literal, $conv:expr), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $ty {
            $(
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl $crate::units::Unit for $ty {
            const DIMENSION: $crate::dimension::Dimension = $crate::dimension::Dimension::$dim;
            const BASE: Self = $ty::$base;
            const ALL: &'static [Self] = &[$($ty::$variant,)+];

            fn conversion(self) -> $crate::units::Conversion {
                match self {
                    $($ty::$variant => $conv,)+
                }
            }

            fn symbol(self) -> &'static str {
                match self {
                    $($ty::$variant => $symbol,)+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }

            fn from_any(unit: $crate::units::AnyUnit) -> Option<Self> {
                match unit {
                    $crate::units::AnyUnit::$dim(u) => Some(u),
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }

        impl From<$ty> for $crate::units::AnyUnit {
            fn from(unit: $ty) -> Self {
                $crate::units::AnyUnit::$dim(unit)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::units::Unit::symbol(*self))
            }
        }
    };
}

pub mod acceleration;
pub mod angle;
pub mod area;
pub mod concentration;
pub mod dispersion;
pub mod duration;
pub mod electric_charge;
pub mod electric_current;
pub mod electric_potential;
pub mod electric_resistance;
pub mod energy;
pub mod frequency;
pub mod fuel_efficiency;
pub mod illuminance;
pub mod length;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod volume;

pub use acceleration::AccelerationUnit;
pub use angle::AngleUnit;
pub use area::AreaUnit;
pub use concentration::ConcentrationOfMassUnit;
pub use dispersion::DispersionUnit;
pub use duration::DurationUnit;
pub use electric_charge::ElectricChargeUnit;
pub use electric_current::ElectricCurrentUnit;
pub use electric_potential::ElectricPotentialUnit;
pub use electric_resistance::ElectricResistanceUnit;
pub use energy::EnergyUnit;
pub use frequency::FrequencyUnit;
pub use fuel_efficiency::FuelEfficiencyUnit;
pub use illuminance::IlluminanceUnit;
pub use length::LengthUnit;
pub use mass::MassUnit;
pub use power::PowerUnit;
pub use pressure::PressureUnit;
pub use speed::SpeedUnit;
pub use temperature::TemperatureUnit;
pub use volume::VolumeUnit;

/// 한 단위의 값을 기준 단위 값으로 옮기는 규칙.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// `base = value * factor`
    Linear { factor: f64 },
    /// `base = value * factor + offset`. 온도처럼 영점이 다른 척도에 쓴다.
    Affine { factor: f64, offset: f64 },
    /// `base = numerator / value`. 기준 단위에 반비례하는 척도(mpg 등)에 쓴다.
    Reciprocal { numerator: f64 },
}

impl Conversion {
    /// 기준 단위 자신의 규칙.
    pub const IDENTITY: Conversion = Conversion::Linear { factor: 1.0 };

    pub const fn linear(factor: f64) -> Self {
        Conversion::Linear { factor }
    }

    pub const fn affine(factor: f64, offset: f64) -> Self {
        Conversion::Affine { factor, offset }
    }

    pub const fn reciprocal(numerator: f64) -> Self {
        Conversion::Reciprocal { numerator }
    }

    /// 이 단위의 값을 기준 단위 값으로 변환한다.
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            Conversion::Linear { factor } => value * factor,
            Conversion::Affine { factor, offset } => value * factor + offset,
            Conversion::Reciprocal { numerator } => numerator / value,
        }
    }

    /// 기준 단위 값을 이 단위의 값으로 변환한다.
    pub fn from_base(self, base: f64) -> f64 {
        match self {
            Conversion::Linear { factor } => base / factor,
            Conversion::Affine { factor, offset } => (base - offset) / factor,
            Conversion::Reciprocal { numerator } => numerator / base,
        }
    }

    pub fn is_identity(self) -> bool {
        self == Conversion::IDENTITY
    }
}

/// 하나의 차원에 속한 단위 집합.
///
/// 차원마다 별도의 타입이 이 trait을 구현하므로, `Quantity<LengthUnit>`을
/// `MassUnit`으로 변환하는 코드는 컴파일되지 않는다.
pub trait Unit:
    Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + Into<AnyUnit> + 'static
{
    /// 이 단위들이 속한 차원.
    const DIMENSION: Dimension;
    /// 차원의 기준 단위. 모든 변환은 이 단위를 거친다.
    const BASE: Self;
    /// 표시 순서대로 나열한 전체 단위.
    const ALL: &'static [Self];

    fn conversion(self) -> Conversion;

    fn symbol(self) -> &'static str;

    /// serde 식별자와 같은 kebab-case 이름.
    fn name(self) -> &'static str;

    /// 차원 정보가 지워진 단위에서 이 타입의 단위를 꺼낸다. 차원이 다르면 `None`.
    fn from_any(unit: AnyUnit) -> Option<Self>;

    fn to_base(self, value: f64) -> f64 {
        self.conversion().to_base(value)
    }

    fn from_base(self, base: f64) -> f64 {
        self.conversion().from_base(base)
    }

    /// 원시 숫자를 이 단위의 [`Quantity`]로 감싼다.
    fn of<M: Magnitude>(self, value: M) -> Quantity<Self> {
        Quantity::new(value, self)
    }
}

/// 같은 차원의 두 단위 사이에서 값을 변환한다.
///
/// 두 단위가 같으면 값을 그대로 돌려준다.
pub fn convert_value<U: Unit>(value: f64, from: U, to: U) -> f64 {
    via_base(value, from.conversion(), to.conversion(), from == to)
}

/// 기준 단위를 거치는 두 단계 변환. 타입 경로와 런타임 경로가 함께 쓴다.
///
/// `same_unit`이면 산술 없이 입력을 비트 그대로 돌려준다. 차원 검사는 호출자 몫이다.
pub(crate) fn via_base(value: f64, from: Conversion, to: Conversion, same_unit: bool) -> f64 {
    if same_unit {
        return value;
    }
    to.from_base(from.to_base(value))
}

/// 차원 정보를 값으로 들고 다니는 단위. 런타임에 단위를 고르는 경로(CLI, 설정)에서 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyUnit {
    Length(LengthUnit),
    Angle(AngleUnit),
    Area(AreaUnit),
    Pressure(PressureUnit),
    Volume(VolumeUnit),
    Dispersion(DispersionUnit),
    ConcentrationOfMass(ConcentrationOfMassUnit),
    Mass(MassUnit),
    Duration(DurationUnit),
    Acceleration(AccelerationUnit),
    Speed(SpeedUnit),
    Illuminance(IlluminanceUnit),
    Temperature(TemperatureUnit),
    FuelEfficiency(FuelEfficiencyUnit),
    Energy(EnergyUnit),
    Frequency(FrequencyUnit),
    ElectricCurrent(ElectricCurrentUnit),
    ElectricResistance(ElectricResistanceUnit),
    ElectricPotential(ElectricPotentialUnit),
    Power(PowerUnit),
    ElectricCharge(ElectricChargeUnit),
}

/// 각 variant 안의 구체 단위에 같은 식을 적용한다.
macro_rules! with_unit {
    ($any:expr, $u:ident => $body:expr) => {
        match $any {
            AnyUnit::Length($u) => $body,
            AnyUnit::Angle($u) => $body,
            AnyUnit::Area($u) => $body,
            AnyUnit::Pressure($u) => $body,
            AnyUnit::Volume($u) => $body,
            AnyUnit::Dispersion($u) => $body,
            AnyUnit::ConcentrationOfMass($u) => $body,
            AnyUnit::Mass($u) => $body,
            AnyUnit::Duration($u) => $body,
            AnyUnit::Acceleration($u) => $body,
            AnyUnit::Speed($u) => $body,
            AnyUnit::Illuminance($u) => $body,
            AnyUnit::Temperature($u) => $body,
            AnyUnit::FuelEfficiency($u) => $body,
            AnyUnit::Energy($u) => $body,
            AnyUnit::Frequency($u) => $body,
            AnyUnit::ElectricCurrent($u) => $body,
            AnyUnit::ElectricResistance($u) => $body,
            AnyUnit::ElectricPotential($u) => $body,
            AnyUnit::Power($u) => $body,
            AnyUnit::ElectricCharge($u) => $body,
        }
    };
}

/// 구체 단위 타입의 정적 정보를 꺼낸다.
fn dimension_of<U: Unit>(_unit: U) -> Dimension {
    U::DIMENSION
}

impl AnyUnit {
    pub fn dimension(self) -> Dimension {
        with_unit!(self, u => dimension_of(u))
    }

    pub fn conversion(self) -> Conversion {
        with_unit!(self, u => u.conversion())
    }

    pub fn symbol(self) -> &'static str {
        with_unit!(self, u => u.symbol())
    }

    pub fn name(self) -> &'static str {
        with_unit!(self, u => u.name())
    }

    pub fn to_base(self, value: f64) -> f64 {
        self.conversion().to_base(value)
    }

    pub fn from_base(self, base: f64) -> f64 {
        self.conversion().from_base(base)
    }

    /// 이 단위가 자기 차원의 기준 단위인지 확인한다.
    pub fn is_base(self) -> bool {
        self.dimension().base_unit() == self
    }
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

//! 단위가 붙은 값(Quantity).
//!
//! `Quantity<U>`는 차원별 단위 타입 `U`로 매개변수화되어 있어서, 같은 차원의 단위로만
//! 변환할 수 있다. 서로 다른 차원 사이의 변환은 컴파일되지 않는다.
//!
//! ```compile_fail
//! use converto::units::{LengthUnit, TemperatureUnit};
//! use converto::Quantity;
//!
//! let d = Quantity::new(1.0, LengthUnit::Meters);
//! let _ = d.convert(TemperatureUnit::Kelvin);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conversion::{self, ConversionError};
use crate::dimension::Dimension;
use crate::units::{convert_value, AnyUnit, Unit};

/// `Quantity` 생성자가 받는 원시 숫자. 내부에서는 항상 `f64`로 넓혀 저장한다.
pub trait Magnitude: Copy {
    fn into_f64(self) -> f64;
}

macro_rules! impl_magnitude {
    ($($t:ty),*) => {
        $(
            impl Magnitude for $t {
                #[inline]
                fn into_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_magnitude!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// 크기와 단위의 불변 쌍.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity<U> {
    value: f64,
    unit: U,
}

impl<U: Unit> Quantity<U> {
    /// NaN, 무한대, 음수도 그대로 받는다. 물리적 타당성은 검사하지 않는다.
    pub fn new<M: Magnitude>(value: M, unit: U) -> Self {
        Self {
            value: value.into_f64(),
            unit,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// `f32`로 좁힌 크기. 정밀도 손실은 호출자가 감수한다.
    pub fn value_f32(&self) -> f32 {
        self.value as f32
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn dimension(&self) -> Dimension {
        U::DIMENSION
    }

    /// 같은 차원의 다른 단위로 표현한 새 값을 만든다.
    ///
    /// 기준 단위를 거쳐 변환하며, 대상 단위가 현재 단위와 같으면 크기를 그대로 유지한다.
    pub fn convert(self, to: U) -> Self {
        Self {
            value: convert_value(self.value, self.unit, to),
            unit: to,
        }
    }

    /// 차원의 기준 단위로 변환한다.
    pub fn to_base_unit(self) -> Self {
        self.convert(U::BASE)
    }

    /// 차원 정보를 값으로 옮긴 [`AnyQuantity`]를 만든다.
    pub fn erase(self) -> AnyQuantity {
        AnyQuantity {
            value: self.value,
            unit: self.unit.into(),
        }
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// 런타임에 단위가 정해지는 값. 차원 불일치는 변환 시점에 오류로 돌려준다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnyQuantity {
    pub value: f64,
    pub unit: AnyUnit,
}

impl AnyQuantity {
    pub fn new<M: Magnitude>(value: M, unit: AnyUnit) -> Self {
        Self {
            value: value.into_f64(),
            unit,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    pub fn convert(self, to: AnyUnit) -> Result<Self, ConversionError> {
        let value = conversion::convert(self.value, self.unit, to)?;
        Ok(Self { value, unit: to })
    }

    /// 차원별 타입의 [`Quantity`]로 되돌린다. 차원이 다르면 `DimensionMismatch`.
    pub fn downcast<U: Unit>(self) -> Result<Quantity<U>, ConversionError> {
        match U::from_any(self.unit) {
            Some(unit) => Ok(Quantity {
                value: self.value,
                unit,
            }),
            None => Err(ConversionError::DimensionMismatch {
                from: self.unit,
                from_dimension: self.unit.dimension(),
                to: U::BASE.into(),
                to_dimension: U::DIMENSION,
            }),
        }
    }
}

impl fmt::Display for AnyQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl<U: Unit> From<Quantity<U>> for AnyQuantity {
    fn from(q: Quantity<U>) -> Self {
        q.erase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{LengthUnit, MassUnit};

    #[test]
    fn narrower_numbers_are_widened() {
        assert_eq!(Quantity::new(3_i32, LengthUnit::Feet).value(), 3.0);
        assert_eq!(Quantity::new(2.5_f32, LengthUnit::Feet).value(), 2.5);
        assert_eq!(Quantity::new(7_u64, LengthUnit::Feet).value(), 7.0);
        assert_eq!(LengthUnit::Miles.of(1_usize).value(), 1.0);
    }

    #[test]
    fn downcast_checks_dimension() {
        let q = AnyQuantity::new(5, LengthUnit::Kilometers.into());
        let typed = q.downcast::<LengthUnit>().unwrap();
        assert_eq!(typed.unit(), LengthUnit::Kilometers);
        assert!(matches!(
            q.downcast::<MassUnit>(),
            Err(ConversionError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(Quantity::new(12.5, MassUnit::Pounds).to_string(), "12.5 lb");
    }
}

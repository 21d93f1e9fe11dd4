//! 가속도 단위. 내부 기준은 m/s²이다.

use super::Conversion;

/// 표준 중력가속도.
pub(crate) const STANDARD_GRAVITY: f64 = 9.806_65;

unit_catalog! {
    /// 가속도 단위.
    pub enum AccelerationUnit in Acceleration, base MetersPerSecondSquared {
        MetersPerSecondSquared => ("m/s2", "meters-per-second-squared", Conversion::IDENTITY),
        Gravity => ("gn", "gravity", Conversion::linear(STANDARD_GRAVITY)),
    }
}

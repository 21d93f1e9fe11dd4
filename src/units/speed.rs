//! 속도 단위. 내부 기준은 m/s이다.

use super::duration::SECONDS_PER_HOUR;
use super::length::{MILE_M, NAUTICAL_MILE_M};
use super::Conversion;

unit_catalog! {
    /// 속도 단위.
    pub enum SpeedUnit in Speed, base MetersPerSecond {
        MetersPerSecond => ("m/s", "meters-per-second", Conversion::IDENTITY),
        KilometersPerHour => ("km/h", "kilometers-per-hour", Conversion::linear(1e3 / SECONDS_PER_HOUR)),
        MilesPerHour => ("mph", "miles-per-hour", Conversion::linear(MILE_M / SECONDS_PER_HOUR)),
        Knots => ("kn", "knots", Conversion::linear(NAUTICAL_MILE_M / SECONDS_PER_HOUR)),
    }
}

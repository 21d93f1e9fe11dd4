//! 시간 단위. 내부 기준은 초이다.

use super::Conversion;

pub(crate) const SECONDS_PER_HOUR: f64 = 3600.0;

unit_catalog! {
    /// 시간 단위.
    pub enum DurationUnit in Duration, base Seconds {
        Seconds => ("s", "seconds", Conversion::IDENTITY),
        Minutes => ("min", "minutes", Conversion::linear(60.0)),
        Hours => ("h", "hours", Conversion::linear(SECONDS_PER_HOUR)),
    }
}

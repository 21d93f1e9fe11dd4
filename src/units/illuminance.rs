//! 조도 단위. 내부 기준은 럭스이다.

use super::Conversion;

unit_catalog! {
    /// 조도 단위.
    pub enum IlluminanceUnit in Illuminance, base Lux {
        Lux => ("lx", "lux", Conversion::IDENTITY),
    }
}

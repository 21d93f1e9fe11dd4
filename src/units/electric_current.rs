//! 전류 단위. 내부 기준은 암페어이다.

use super::Conversion;

unit_catalog! {
    /// 전류 단위.
    pub enum ElectricCurrentUnit in ElectricCurrent, base Amperes {
        Megaamperes => ("MA", "megaamperes", Conversion::linear(1e6)),
        Kiloamperes => ("kA", "kiloamperes", Conversion::linear(1e3)),
        Amperes => ("A", "amperes", Conversion::IDENTITY),
        Milliamperes => ("mA", "milliamperes", Conversion::linear(1e-3)),
        Microamperes => ("µA", "microamperes", Conversion::linear(1e-6)),
    }
}

//! 주파수 단위. 내부 기준은 Hz이다.

use super::Conversion;

unit_catalog! {
    /// 주파수 단위.
    pub enum FrequencyUnit in Frequency, base Hertz {
        Terahertz => ("THz", "terahertz", Conversion::linear(1e12)),
        Gigahertz => ("GHz", "gigahertz", Conversion::linear(1e9)),
        Megahertz => ("MHz", "megahertz", Conversion::linear(1e6)),
        Kilohertz => ("kHz", "kilohertz", Conversion::linear(1e3)),
        Hertz => ("Hz", "hertz", Conversion::IDENTITY),
        Millihertz => ("mHz", "millihertz", Conversion::linear(1e-3)),
        Microhertz => ("µHz", "microhertz", Conversion::linear(1e-6)),
        Nanohertz => ("nHz", "nanohertz", Conversion::linear(1e-9)),
    }
}

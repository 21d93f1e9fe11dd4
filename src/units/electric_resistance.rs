//! 전기 저항 단위. 내부 기준은 옴이다.

use super::Conversion;

unit_catalog! {
    /// 전기 저항 단위.
    pub enum ElectricResistanceUnit in ElectricResistance, base Ohms {
        Megaohms => ("MΩ", "megaohms", Conversion::linear(1e6)),
        Kiloohms => ("kΩ", "kiloohms", Conversion::linear(1e3)),
        Ohms => ("Ω", "ohms", Conversion::IDENTITY),
        Milliohms => ("mΩ", "milliohms", Conversion::linear(1e-3)),
        Microohms => ("µΩ", "microohms", Conversion::linear(1e-6)),
    }
}

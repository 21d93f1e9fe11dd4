//! 전위차(전압) 단위. 내부 기준은 볼트이다.

use super::Conversion;

unit_catalog! {
    /// 전압 단위.
    pub enum ElectricPotentialUnit in ElectricPotential, base Volts {
        Megavolts => ("MV", "megavolts", Conversion::linear(1e6)),
        Kilovolts => ("kV", "kilovolts", Conversion::linear(1e3)),
        Volts => ("V", "volts", Conversion::IDENTITY),
        Millivolts => ("mV", "millivolts", Conversion::linear(1e-3)),
        Microvolts => ("µV", "microvolts", Conversion::linear(1e-6)),
    }
}

//! 일률(전력) 단위. 내부 기준은 와트이다.

use super::acceleration::STANDARD_GRAVITY;
use super::length::FOOT_M;
use super::mass::POUND_KG;
use super::Conversion;

/// 기계식 마력 = 550 ft·lbf/s
const HORSEPOWER_W: f64 = 550.0 * FOOT_M * POUND_KG * STANDARD_GRAVITY;

unit_catalog! {
    /// 일률 단위.
    pub enum PowerUnit in Power, base Watts {
        Terawatts => ("TW", "terawatts", Conversion::linear(1e12)),
        Gigawatts => ("GW", "gigawatts", Conversion::linear(1e9)),
        Megawatts => ("MW", "megawatts", Conversion::linear(1e6)),
        Kilowatts => ("kW", "kilowatts", Conversion::linear(1e3)),
        Watts => ("W", "watts", Conversion::IDENTITY),
        Milliwatts => ("mW", "milliwatts", Conversion::linear(1e-3)),
        Microwatts => ("µW", "microwatts", Conversion::linear(1e-6)),
        Nanowatts => ("nW", "nanowatts", Conversion::linear(1e-9)),
        Picowatts => ("pW", "picowatts", Conversion::linear(1e-12)),
        Femtowatts => ("fW", "femtowatts", Conversion::linear(1e-15)),
        Horsepower => ("hp", "horsepower", Conversion::linear(HORSEPOWER_W)),
    }
}

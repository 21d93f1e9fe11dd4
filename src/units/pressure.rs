//! 압력 단위. 내부 기준은 N/m²(Pa)이다.

use super::acceleration::STANDARD_GRAVITY;
use super::length::INCH_M;
use super::mass::POUND_KG;
use super::Conversion;

/// 0 °C 수은 1 mm 기둥의 압력.
const MMHG_PA: f64 = 133.322_387_415;
/// 수은 1 in 기둥의 압력(32 °F 기준).
const INHG_PA: f64 = 3386.389;

unit_catalog! {
    /// 압력 단위.
    pub enum PressureUnit in Pressure, base NewtonsPerMetersSquared {
        NewtonsPerMetersSquared => ("N/m2", "newtons-per-meters-squared", Conversion::IDENTITY),
        Gigapascals => ("GPa", "gigapascals", Conversion::linear(1e9)),
        Megapascals => ("MPa", "megapascals", Conversion::linear(1e6)),
        Kilopascals => ("kPa", "kilopascals", Conversion::linear(1e3)),
        Hectopascals => ("hPa", "hectopascals", Conversion::linear(1e2)),
        InchesOfMercury => ("inHg", "inches-of-mercury", Conversion::linear(INHG_PA)),
        Bars => ("bar", "bars", Conversion::linear(1e5)),
        Millibars => ("mbar", "millibars", Conversion::linear(1e2)),
        MillimetersOfMercury => ("mmHg", "millimeters-of-mercury", Conversion::linear(MMHG_PA)),
        PoundsForcePerSquareInch => (
            "psi",
            "pounds-force-per-square-inch",
            Conversion::linear(POUND_KG * STANDARD_GRAVITY / (INCH_M * INCH_M))
        ),
    }
}

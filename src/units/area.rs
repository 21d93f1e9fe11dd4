//! 면적 단위. 내부 기준은 제곱미터이다.

use super::length::{FOOT_M, INCH_M, MILE_M, YARD_M};
use super::Conversion;

unit_catalog! {
    /// 면적 단위.
    pub enum AreaUnit in Area, base SquareMeters {
        SquareMegameters => ("Mm2", "square-megameters", Conversion::linear(1e12)),
        SquareKilometers => ("km2", "square-kilometers", Conversion::linear(1e6)),
        SquareMeters => ("m2", "square-meters", Conversion::IDENTITY),
        SquareCentimeters => ("cm2", "square-centimeters", Conversion::linear(1e-4)),
        SquareMillimeters => ("mm2", "square-millimeters", Conversion::linear(1e-6)),
        SquareMicrometers => ("µm2", "square-micrometers", Conversion::linear(1e-12)),
        SquareNanometers => ("nm2", "square-nanometers", Conversion::linear(1e-18)),
        SquareInches => ("in2", "square-inches", Conversion::linear(INCH_M * INCH_M)),
        SquareFeet => ("ft2", "square-feet", Conversion::linear(FOOT_M * FOOT_M)),
        SquareYards => ("yd2", "square-yards", Conversion::linear(YARD_M * YARD_M)),
        SquareMiles => ("mi2", "square-miles", Conversion::linear(MILE_M * MILE_M)),
        // 1 acre = 4840 yd²
        Acres => ("ac", "acres", Conversion::linear(4840.0 * YARD_M * YARD_M)),
        Ares => ("a", "ares", Conversion::linear(1e2)),
        Hectares => ("ha", "hectares", Conversion::linear(1e4)),
    }
}

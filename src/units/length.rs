//! 길이 단위. 내부 기준은 미터이다.

use std::f64::consts::PI;

use super::Conversion;

/// 국제 인치(1959).
pub(crate) const INCH_M: f64 = 0.0254;
pub(crate) const FOOT_M: f64 = 0.3048;
pub(crate) const YARD_M: f64 = 0.9144;
pub(crate) const MILE_M: f64 = 1609.344;
pub(crate) const NAUTICAL_MILE_M: f64 = 1852.0;
const ASTRONOMICAL_UNIT_M: f64 = 149_597_870_700.0;
/// 율리우스년(365.25일) 동안 빛이 진행한 거리.
const LIGHT_YEAR_M: f64 = 9_460_730_472_580_800.0;

unit_catalog! {
    /// 길이 단위.
    pub enum LengthUnit in Length, base Meters {
        Megameters => ("Mm", "megameters", Conversion::linear(1e6)),
        Kilometers => ("km", "kilometers", Conversion::linear(1e3)),
        Hectometers => ("hm", "hectometers", Conversion::linear(1e2)),
        Decameters => ("dam", "decameters", Conversion::linear(1e1)),
        Meters => ("m", "meters", Conversion::IDENTITY),
        Decimeters => ("dm", "decimeters", Conversion::linear(1e-1)),
        Centimeters => ("cm", "centimeters", Conversion::linear(1e-2)),
        Millimeters => ("mm", "millimeters", Conversion::linear(1e-3)),
        Micrometers => ("µm", "micrometers", Conversion::linear(1e-6)),
        Nanometers => ("nm", "nanometers", Conversion::linear(1e-9)),
        Picometers => ("pm", "picometers", Conversion::linear(1e-12)),
        Inches => ("in", "inches", Conversion::linear(INCH_M)),
        Feet => ("ft", "feet", Conversion::linear(FOOT_M)),
        Yards => ("yd", "yards", Conversion::linear(YARD_M)),
        Miles => ("mi", "miles", Conversion::linear(MILE_M)),
        ScandinavianMiles => ("smi", "scandinavian-miles", Conversion::linear(10_000.0)),
        Lightyears => ("ly", "lightyears", Conversion::linear(LIGHT_YEAR_M)),
        NauticalMiles => ("NM", "nautical-miles", Conversion::linear(NAUTICAL_MILE_M)),
        Fathoms => ("ftm", "fathoms", Conversion::linear(6.0 * FOOT_M)),
        Furlongs => ("fur", "furlongs", Conversion::linear(220.0 * YARD_M)),
        AstronomicalUnits => ("ua", "astronomical-units", Conversion::linear(ASTRONOMICAL_UNIT_M)),
        // 1 pc = 648000/π au
        Parsecs => ("pc", "parsecs", Conversion::linear(ASTRONOMICAL_UNIT_M * 648_000.0 / PI)),
    }
}

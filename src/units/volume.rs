//! 체적 단위. 내부 기준은 리터이다.
//!
//! 미국 관습 단위는 갤런(231 in³)에서, 영국 단위는 영국 갤런(4.54609 L)에서 나눠 정의한다.

use super::length::{FOOT_M, INCH_M, MILE_M, YARD_M};
use super::Conversion;

pub(crate) const US_GALLON_L: f64 = 3.785_411_784;
pub(crate) const IMPERIAL_GALLON_L: f64 = 4.546_09;

const US_FLUID_OUNCE_L: f64 = US_GALLON_L / 128.0;
const IMPERIAL_FLUID_OUNCE_L: f64 = IMPERIAL_GALLON_L / 160.0;
/// 1 m³ = 1000 L
const CUBIC_METER_L: f64 = 1e3;
/// 1 acre·ft = 43560 ft³
const ACRE_FOOT_FT3: f64 = 43_560.0;
/// 미국 부셸 = 2150.42 in³
const BUSHEL_IN3: f64 = 2150.42;

fn cubic(length_m: f64) -> Conversion {
    Conversion::linear(length_m * length_m * length_m * CUBIC_METER_L)
}

unit_catalog! {
    /// 체적 단위.
    pub enum VolumeUnit in Volume, base Liters {
        Megaliters => ("ML", "megaliters", Conversion::linear(1e6)),
        Kiloliters => ("kL", "kiloliters", Conversion::linear(1e3)),
        Liters => ("L", "liters", Conversion::IDENTITY),
        Deciliters => ("dL", "deciliters", Conversion::linear(1e-1)),
        Centiliters => ("cL", "centiliters", Conversion::linear(1e-2)),
        Milliliters => ("mL", "milliliters", Conversion::linear(1e-3)),
        CubicKilometers => ("km3", "cubic-kilometers", Conversion::linear(1e12)),
        CubicMeters => ("m3", "cubic-meters", Conversion::linear(CUBIC_METER_L)),
        CubicDecimeters => ("dm3", "cubic-decimeters", Conversion::IDENTITY),
        CubicCentimeters => ("cm3", "cubic-centimeters", Conversion::linear(1e-3)),
        CubicMillimeters => ("mm3", "cubic-millimeters", Conversion::linear(1e-6)),
        CubicInches => ("in3", "cubic-inches", cubic(INCH_M)),
        CubicFeet => ("ft3", "cubic-feet", cubic(FOOT_M)),
        CubicYards => ("yd3", "cubic-yards", cubic(YARD_M)),
        CubicMiles => ("mi3", "cubic-miles", cubic(MILE_M)),
        AcreFeet => (
            "af",
            "acre-feet",
            Conversion::linear(ACRE_FOOT_FT3 * FOOT_M * FOOT_M * FOOT_M * CUBIC_METER_L)
        ),
        Bushels => (
            "bsh",
            "bushels",
            Conversion::linear(BUSHEL_IN3 * INCH_M * INCH_M * INCH_M * CUBIC_METER_L)
        ),
        Teaspoons => ("tsp", "teaspoons", Conversion::linear(US_FLUID_OUNCE_L / 6.0)),
        Tablespoons => ("tbsp", "tablespoons", Conversion::linear(US_FLUID_OUNCE_L / 2.0)),
        FluidOunces => ("floz", "fluid-ounces", Conversion::linear(US_FLUID_OUNCE_L)),
        Cups => ("cup", "cups", Conversion::linear(US_GALLON_L / 16.0)),
        Pints => ("pt", "pints", Conversion::linear(US_GALLON_L / 8.0)),
        Quarts => ("qt", "quarts", Conversion::linear(US_GALLON_L / 4.0)),
        Gallons => ("gal", "gallons", Conversion::linear(US_GALLON_L)),
        // 영국 큰술 = 5/8 fl oz, 작은술 = 큰술의 1/3
        ImperialTeaspoons => (
            "tsp-imp",
            "imperial-teaspoons",
            Conversion::linear(IMPERIAL_FLUID_OUNCE_L * 5.0 / 24.0)
        ),
        ImperialTablespoons => (
            "tbsp-imp",
            "imperial-tablespoons",
            Conversion::linear(IMPERIAL_FLUID_OUNCE_L * 5.0 / 8.0)
        ),
        ImperialFluidOunces => ("floz-imp", "imperial-fluid-ounces", Conversion::linear(IMPERIAL_FLUID_OUNCE_L)),
        ImperialPints => ("pt-imp", "imperial-pints", Conversion::linear(IMPERIAL_GALLON_L / 8.0)),
        ImperialQuarts => ("qt-imp", "imperial-quarts", Conversion::linear(IMPERIAL_GALLON_L / 4.0)),
        ImperialGallons => ("gal-imp", "imperial-gallons", Conversion::linear(IMPERIAL_GALLON_L)),
        MetricCups => ("mcup", "metric-cups", Conversion::linear(0.25)),
    }
}

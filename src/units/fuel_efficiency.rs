//! 연비 단위. 내부 기준은 L/100km이다.
//!
//! mpg 계열은 기준 단위에 반비례하므로 역수 변환을 한다.

use super::length::MILE_M;
use super::volume::{IMPERIAL_GALLON_L, US_GALLON_L};
use super::Conversion;

/// `x` mi/gal 에 해당하는 L/100km 값은 `100 km × gal / (x × mi)` 이다.
fn miles_per(gallon_l: f64) -> Conversion {
    Conversion::reciprocal(100.0 * gallon_l * 1e3 / MILE_M)
}

unit_catalog! {
    /// 연비 단위.
    pub enum FuelEfficiencyUnit in FuelEfficiency, base LitersPer100Kilometers {
        LitersPer100Kilometers => ("L/100km", "liters-per-100-kilometers", Conversion::IDENTITY),
        MilesPerImperialGallon => ("mpg-imp", "miles-per-imperial-gallon", miles_per(IMPERIAL_GALLON_L)),
        MilesPerGallon => ("mpg", "miles-per-gallon", miles_per(US_GALLON_L)),
    }
}

//! 질량 단위. 내부 기준은 kg이다.

use super::acceleration::STANDARD_GRAVITY;
use super::length::FOOT_M;
use super::Conversion;

/// 국제 파운드(1959).
pub(crate) const POUND_KG: f64 = 0.453_592_37;
const TROY_OUNCE_KG: f64 = 0.031_103_476_8;

unit_catalog! {
    /// 질량 단위.
    pub enum MassUnit in Mass, base Kilograms {
        Kilograms => ("kg", "kilograms", Conversion::IDENTITY),
        Grams => ("g", "grams", Conversion::linear(1e-3)),
        Decigrams => ("dg", "decigrams", Conversion::linear(1e-4)),
        Centigrams => ("cg", "centigrams", Conversion::linear(1e-5)),
        Milligrams => ("mg", "milligrams", Conversion::linear(1e-6)),
        Micrograms => ("µg", "micrograms", Conversion::linear(1e-9)),
        Nanograms => ("ng", "nanograms", Conversion::linear(1e-12)),
        Picograms => ("pg", "picograms", Conversion::linear(1e-15)),
        Ounces => ("oz", "ounces", Conversion::linear(POUND_KG / 16.0)),
        Pounds => ("lb", "pounds", Conversion::linear(POUND_KG)),
        Stones => ("st", "stones", Conversion::linear(14.0 * POUND_KG)),
        MetricTons => ("t", "metric-tons", Conversion::linear(1e3)),
        ShortTons => ("ton", "short-tons", Conversion::linear(2000.0 * POUND_KG)),
        Carats => ("ct", "carats", Conversion::linear(2e-4)),
        OuncesTroy => ("ozt", "ounces-troy", Conversion::linear(TROY_OUNCE_KG)),
        // 1 lbf 의 힘으로 1 ft/s² 가속되는 질량
        Slugs => ("slug", "slugs", Conversion::linear(POUND_KG * STANDARD_GRAVITY / FOOT_M)),
    }
}

//! 온도 단위. 내부 기준은 켈빈이다.
//!
//! 섭씨와 화씨는 영점이 켈빈과 다르므로 배율과 오프셋을 함께 쓰는 affine 변환을 한다.

use super::Conversion;

/// 0 °C 의 켈빈 값.
const CELSIUS_ZERO_K: f64 = 273.15;
/// 절대영도의 화씨 값(-459.67 °F).
const FAHRENHEIT_ABSOLUTE_ZERO: f64 = 459.67;
const FAHRENHEIT_DEGREE_K: f64 = 5.0 / 9.0;

unit_catalog! {
    /// 온도 단위.
    pub enum TemperatureUnit in Temperature, base Kelvin {
        Kelvin => ("K", "kelvin", Conversion::IDENTITY),
        Celsius => ("degC", "celsius", Conversion::affine(1.0, CELSIUS_ZERO_K)),
        // K = (°F + 459.67) × 5/9
        Fahrenheit => (
            "degF",
            "fahrenheit",
            Conversion::affine(FAHRENHEIT_DEGREE_K, FAHRENHEIT_ABSOLUTE_ZERO * FAHRENHEIT_DEGREE_K)
        ),
    }
}

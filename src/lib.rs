//! 물리량에 단위를 붙이고 같은 차원의 단위 사이에서 변환하는 라이브러리.
//!
//! ```
//! use converto::units::{LengthUnit, TemperatureUnit, Unit};
//!
//! let mile = LengthUnit::Miles.of(1);
//! assert_eq!(mile.convert(LengthUnit::Meters).value(), 1609.344);
//!
//! let freezing = TemperatureUnit::Celsius.of(0.0);
//! assert_eq!(freezing.convert(TemperatureUnit::Kelvin).value(), 273.15);
//! ```
//!
//! 핵심 계산 로직은 라이브러리에 두고, CLI 바이너리는 설정과 출력만 담당한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod dimension;
pub mod quantity;
pub mod units;

pub use conversion::ConversionError;
pub use dimension::Dimension;
pub use quantity::{AnyQuantity, Magnitude, Quantity};
pub use units::{AnyUnit, Conversion, Unit};

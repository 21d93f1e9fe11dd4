//! 분산(농도비) 단위. 내부 기준은 ppm이다.

use super::Conversion;

unit_catalog! {
    /// 분산 단위.
    pub enum DispersionUnit in Dispersion, base PartsPerMillion {
        PartsPerMillion => ("ppm", "parts-per-million", Conversion::IDENTITY),
    }
}

//! 질량 농도 단위. 내부 기준은 g/L이다.

use super::Conversion;

unit_catalog! {
    /// 질량 농도 단위.
    pub enum ConcentrationOfMassUnit in ConcentrationOfMass, base GramsPerLiter {
        GramsPerLiter => ("g/L", "grams-per-liter", Conversion::IDENTITY),
        // 1 mg/dL = 1e-3 g / 0.1 L
        MilligramsPerDeciliter => ("mg/dL", "milligrams-per-deciliter", Conversion::linear(1e-2)),
    }
}

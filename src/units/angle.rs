//! 각도 단위. 내부 기준은 도(°)이다.

use std::f64::consts::PI;

use super::Conversion;

unit_catalog! {
    /// 각도 단위.
    pub enum AngleUnit in Angle, base Degrees {
        Degrees => ("deg", "degrees", Conversion::IDENTITY),
        ArcMinutes => ("arcmin", "arc-minutes", Conversion::linear(1.0 / 60.0)),
        ArcSeconds => ("arcsec", "arc-seconds", Conversion::linear(1.0 / 3600.0)),
        Radians => ("rad", "radians", Conversion::linear(180.0 / PI)),
        Gradians => ("grad", "gradians", Conversion::linear(0.9)),
        Revolutions => ("rev", "revolutions", Conversion::linear(360.0)),
    }
}

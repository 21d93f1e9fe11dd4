//! 전하량 단위. 내부 기준은 쿨롱이다.
//!
//! 암페어시 계열은 전류 단위와 1시간의 곱(A × 3600 s)으로 정의한다.

use super::{Conversion, DurationUnit, ElectricCurrentUnit, Unit};

fn current_for_an_hour(current: ElectricCurrentUnit) -> Conversion {
    Conversion::linear(current.to_base(1.0) * DurationUnit::Hours.to_base(1.0))
}

unit_catalog! {
    /// 전하량 단위.
    pub enum ElectricChargeUnit in ElectricCharge, base Coulombs {
        Coulombs => ("C", "coulombs", Conversion::IDENTITY),
        MegaampereHours => ("MAh", "megaampere-hours", current_for_an_hour(ElectricCurrentUnit::Megaamperes)),
        KiloampereHours => ("kAh", "kiloampere-hours", current_for_an_hour(ElectricCurrentUnit::Kiloamperes)),
        AmpereHours => ("Ah", "ampere-hours", current_for_an_hour(ElectricCurrentUnit::Amperes)),
        MilliampereHours => ("mAh", "milliampere-hours", current_for_an_hour(ElectricCurrentUnit::Milliamperes)),
        MicroampereHours => ("µAh", "microampere-hours", current_for_an_hour(ElectricCurrentUnit::Microamperes)),
    }
}

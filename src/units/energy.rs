//! 에너지 단위. 내부 기준은 줄(J)이다.

use super::duration::SECONDS_PER_HOUR;
use super::Conversion;

/// 열화학 칼로리.
const CALORIE_J: f64 = 4.184;

unit_catalog! {
    /// 에너지 단위.
    pub enum EnergyUnit in Energy, base Joules {
        Kilojoules => ("kJ", "kilojoules", Conversion::linear(1e3)),
        Joules => ("J", "joules", Conversion::IDENTITY),
        Kilocalories => ("kcal", "kilocalories", Conversion::linear(1e3 * CALORIE_J)),
        Calories => ("cal", "calories", Conversion::linear(CALORIE_J)),
        KilowattHours => ("kWh", "kilowatt-hours", Conversion::linear(1e3 * SECONDS_PER_HOUR)),
    }
}

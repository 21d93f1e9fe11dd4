use thiserror::Error;
use tracing::debug;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::dimension::Dimension;
use crate::quantity::AnyQuantity;
use crate::units::AnyUnit;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
}

/// `from` 단위의 값을 `to`로 변환한다. `to`가 없으면 설정의 선호 단위를 쓴다.
pub fn convert(
    config: &Config,
    value: f64,
    from: AnyUnit,
    to: Option<AnyUnit>,
) -> Result<AnyQuantity, AppError> {
    let target = match to {
        Some(unit) => unit,
        None => {
            let preferred = config.preferred.for_dimension(from.dimension());
            debug!(%from, %preferred, "no target unit given, using preferred unit");
            preferred
        }
    };
    let result = AnyQuantity::new(value, from).convert(target)?;
    Ok(result)
}

/// 차원의 단위를 `기호  이름` 형식의 줄로 나열한다. 기준 단위에는 `*`를 붙인다.
pub fn unit_lines(dimension: Dimension) -> Vec<String> {
    let width = dimension
        .units()
        .iter()
        .map(|u| u.symbol().chars().count())
        .max()
        .unwrap_or(0);
    dimension
        .units()
        .into_iter()
        .map(|u| {
            let mark = if u.is_base() { '*' } else { ' ' };
            let pad = width - u.symbol().chars().count();
            format!("{mark} {}{}  {}", u.symbol(), " ".repeat(pad), u.name())
        })
        .collect()
}

/// 차원 목록을 `이름 (기준 단위)` 형식의 줄로 나열한다.
pub fn dimension_lines() -> Vec<String> {
    Dimension::ALL
        .iter()
        .map(|d| format!("{} ({})", d.name(), d.base_unit().symbol()))
        .collect()
}

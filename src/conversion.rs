//! 런타임 단위 변환.
//!
//! 단위를 값으로만 알고 있는 경로(CLI, 설정 파일)에서 쓰는 변환이다. 타입으로 차원을 알 수 있는
//! 코드는 [`crate::Quantity::convert`]를 쓰면 차원 불일치가 컴파일 단계에서 걸러진다.

use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::dimension::Dimension;
use crate::units::{via_base, AnyUnit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 서로 다른 차원의 단위 사이의 변환
    #[error("차원 불일치: {from}({from_dimension}) → {to}({to_dimension}) 변환은 허용되지 않습니다")]
    DimensionMismatch {
        from: AnyUnit,
        from_dimension: Dimension,
        to: AnyUnit,
        to_dimension: Dimension,
    },
    /// 카탈로그에 없는 단위 식별자
    #[error("알 수 없는 단위: {0}")]
    InvalidUnit(String),
    /// 카탈로그에 없는 차원 이름
    #[error("알 수 없는 물리량: {0}")]
    UnknownDimension(String),
}

/// 값을 `from` 단위에서 `to` 단위로 환산한다.
///
/// 두 단위는 같은 차원이어야 한다. NaN과 무한대는 IEEE-754 규칙대로 그대로 전파된다.
pub fn convert(value: f64, from: AnyUnit, to: AnyUnit) -> Result<f64, ConversionError> {
    let from_dimension = from.dimension();
    let to_dimension = to.dimension();
    if from_dimension != to_dimension {
        return Err(ConversionError::DimensionMismatch {
            from,
            from_dimension,
            to,
            to_dimension,
        });
    }
    let result = via_base(value, from.conversion(), to.conversion(), from == to);
    trace!(%from, %to, value, result, "converted via base unit");
    Ok(result)
}

impl AnyUnit {
    /// 카탈로그 식별자(기호 `mi` 또는 이름 `miles`)로 단위를 찾는다. 대소문자를 구분한다.
    pub fn from_symbol(s: &str) -> Result<Self, ConversionError> {
        Dimension::ALL
            .iter()
            .find_map(|d| d.find_unit(s))
            .ok_or_else(|| ConversionError::InvalidUnit(s.to_string()))
    }
}

impl FromStr for AnyUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnyUnit::from_symbol(s)
    }
}

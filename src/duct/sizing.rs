//! 풍량으로부터 원형 덕트 직경을 추천하는 계산 모듈.
//!
//! 기준 풍속 1000/1200/1500 FPM 각각에 대해 필요한 단면적을 구하고,
//! 그 단면적을 갖는 원형 덕트 직경[in]을 2인치 단위로 맞춘다.

use std::f64::consts::PI;

use crate::quantity::AirflowAmount;
use crate::units::{tonnage_to_cfm, AirflowUnit};

/// 제작 가능한 최소 덕트 직경 [in]
pub const MIN_DUCT_IN: u32 = 4;
/// 제작 가능한 최대 덕트 직경 [in]
pub const MAX_DUCT_IN: u32 = 118;
/// 제곱피트 → 제곱인치
const SQ_IN_PER_SQ_FT: f64 = 144.0;

/// 기준 풍속별 적용 조건.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuctCondition {
    /// 1000 FPM. 소음에 민감한 공간.
    SoundSensitive,
    /// 1200 FPM. 가까운 곳에 엘보/방향 전환이 있는 경우.
    FittingsNearby,
    /// 1500 FPM. 직관 구간.
    StraightDuct,
}

impl DuctCondition {
    /// 추천 순서(높은 풍속 → 낮은 풍속).
    pub const ALL: [DuctCondition; 3] = [
        DuctCondition::StraightDuct,
        DuctCondition::FittingsNearby,
        DuctCondition::SoundSensitive,
    ];

    /// 조건에 대응하는 기준 풍속 [FPM].
    pub fn velocity_fpm(&self) -> u32 {
        match self {
            DuctCondition::SoundSensitive => 1_000,
            DuctCondition::FittingsNearby => 1_200,
            DuctCondition::StraightDuct => 1_500,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DuctCondition::SoundSensitive => "sound sensitive",
            DuctCondition::FittingsNearby => "fittings/direction changes nearby",
            DuctCondition::StraightDuct => "straight duct",
        }
    }

    pub fn detail(&self) -> Option<&'static str> {
        Some(match self {
            DuctCondition::SoundSensitive => {
                "Recording studios, libraries and similar spaces need lower air velocities; consider sound attenuation."
            }
            DuctCondition::FittingsNearby => {
                "Elbows or offsets within 3x the duct diameter of the fabric inlet need a lower velocity to avoid turbulence noise."
            }
            DuctCondition::StraightDuct => {
                "No fittings within 3x the duct diameter upstream of the fabric inlet."
            }
        })
    }
}

/// 추천 결과 1건.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub condition: DuctCondition,
    pub velocity_fpm: u32,
    pub duct_diameter_in: u32,
    pub label: &'static str,
    pub detail: Option<&'static str>,
}

/// 범위 제한 전 직경[in]. 단면적 A = Q/V [ft²]를 in²로 바꾼 뒤 d = sqrt(4A/π).
pub fn unclamped_duct_diameter(cfm: f64, fpm: f64) -> f64 {
    let area_sq_ft = cfm / fpm;
    (area_sq_ft * SQ_IN_PER_SQ_FT * (4.0 / PI)).sqrt().round()
}

/// 한 기준 풍속에 대한 덕트 직경을 구한다.
///
/// 4~118 in 범위로 자르고, 경계에 걸리지 않은 홀수 값은 다음 짝수로 올린다.
pub fn duct_diameter_for(cfm: f64, fpm: u32) -> u32 {
    let raw = unclamped_duct_diameter(cfm, fpm as f64);
    if raw.is_nan() || raw < MIN_DUCT_IN as f64 {
        MIN_DUCT_IN
    } else if raw > MAX_DUCT_IN as f64 {
        MAX_DUCT_IN
    } else {
        let d = raw as u32;
        if d % 2 != 0 {
            d + 1
        } else {
            d
        }
    }
}

fn recommend(cfm: f64, condition: DuctCondition) -> Recommendation {
    let velocity_fpm = condition.velocity_fpm();
    Recommendation {
        condition,
        velocity_fpm,
        duct_diameter_in: duct_diameter_for(cfm, velocity_fpm),
        label: condition.label(),
        detail: condition.detail(),
    }
}

/// 풍량(CFM 또는 톤)으로 세 가지 추천 직경을 계산한다.
///
/// 결과는 항상 3건이며 `[1500, 1200, 1000]` FPM 순서다.
pub fn recommended_duct_sizes(amount: f64, unit: AirflowUnit) -> [Recommendation; 3] {
    let cfm = match unit {
        AirflowUnit::Cfm => amount,
        AirflowUnit::Tonnage => tonnage_to_cfm(amount),
    };
    DuctCondition::ALL.map(|condition| recommend(cfm, condition))
}

/// [`AirflowAmount`]에 대한 추천.
pub fn recommend_for(amount: &AirflowAmount) -> [Recommendation; 3] {
    recommended_duct_sizes(amount.value(), amount.unit())
}

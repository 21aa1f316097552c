use serde::{Deserialize, Serialize};

/// 허용 최소 풍량 [CFM]
pub const MIN_CFM: f64 = 50.0;
/// 허용 최대 풍량 [CFM]
pub const MAX_CFM: f64 = 80_000.0;
/// 냉방 1톤당 공칭 풍량 [CFM/ton]
pub const CFM_PER_TON: f64 = 400.0;

/// 풍량 입력 단위. 계산 내부 기준은 CFM이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AirflowUnit {
    /// 분당 입방피트
    #[default]
    Cfm,
    /// HVAC 냉방 톤
    Tonnage,
}

impl AirflowUnit {
    /// 화면/로그 표기용 약어.
    pub fn symbol(&self) -> &'static str {
        match self {
            AirflowUnit::Cfm => "cfm",
            AirflowUnit::Tonnage => "tonnage",
        }
    }

    /// 반대 단위를 돌려준다.
    pub fn toggled(&self) -> Self {
        match self {
            AirflowUnit::Cfm => AirflowUnit::Tonnage,
            AirflowUnit::Tonnage => AirflowUnit::Cfm,
        }
    }

    /// 해당 단위에서의 최소값.
    pub fn min(&self) -> f64 {
        from_cfm(MIN_CFM, *self)
    }

    /// 해당 단위에서의 최대값.
    pub fn max(&self) -> f64 {
        from_cfm(MAX_CFM, *self)
    }
}

/// 톤을 CFM으로 환산한다. 상한(MAX_CFM)만 적용하고 하한은 호출자가 처리한다.
pub fn tonnage_to_cfm(tonnage: f64) -> f64 {
    (tonnage * CFM_PER_TON).min(MAX_CFM)
}

/// CFM을 톤으로 환산한다. 정수 톤으로 반올림하며 최소 1톤이다.
pub fn cfm_to_tonnage(cfm: f64) -> f64 {
    (cfm / CFM_PER_TON).round().max(1.0)
}

fn to_cfm(value: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::Cfm => value,
        AirflowUnit::Tonnage => tonnage_to_cfm(value),
    }
}

fn from_cfm(cfm: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::Cfm => cfm,
        AirflowUnit::Tonnage => cfm_to_tonnage(cfm),
    }
}

/// 풍량을 다른 단위로 변환한다.
pub fn convert_airflow(value: f64, from: AirflowUnit, to: AirflowUnit) -> f64 {
    if from == to {
        return value;
    }
    from_cfm(to_cfm(value, from), to)
}

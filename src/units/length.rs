use serde::{Deserialize, Serialize};

/// 덕트 직경 표시 단위. 내부 기준은 인치이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    Inch,
    Millimeter,
}

impl LengthUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Inch => "\"",
            LengthUnit::Millimeter => " mm",
        }
    }
}

fn to_inch(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Inch => value,
        LengthUnit::Millimeter => value / 25.4,
    }
}

fn from_inch(value_in: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Inch => value_in,
        LengthUnit::Millimeter => value_in * 25.4,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let inch = to_inch(value, from);
    from_inch(inch, to)
}

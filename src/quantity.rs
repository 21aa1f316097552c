use crate::units::{convert_airflow, AirflowUnit};

/// 단위가 붙은 풍량 값.
///
/// 값과 단위를 한 덩어리로 다뤄 단위 전환 뒤 값이 다른 단위로 해석되는
/// 일을 막는다. `value`는 항상 해당 단위의 `[min, max]` 범위 안에 있다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirflowAmount {
    value: f64,
    unit: AirflowUnit,
}

impl AirflowAmount {
    /// 범위를 벗어난 값은 경계로 잘라 생성한다. NaN은 최소값으로 본다.
    pub fn new(value: f64, unit: AirflowUnit) -> Self {
        let value = if value.is_nan() {
            unit.min()
        } else {
            value.clamp(unit.min(), unit.max())
        };
        Self { value, unit }
    }

    /// 단위의 최소값.
    pub fn minimum(unit: AirflowUnit) -> Self {
        Self::new(unit.min(), unit)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> AirflowUnit {
        self.unit
    }

    /// CFM 기준 값.
    pub fn as_cfm(&self) -> f64 {
        convert_airflow(self.value, self.unit, AirflowUnit::Cfm)
    }

    /// 물리적 풍량을 유지한 채 다른 단위로 바꾼다.
    pub fn convert_to(&self, unit: AirflowUnit) -> Self {
        Self::new(convert_airflow(self.value, self.unit, unit), unit)
    }

    pub fn is_min(&self) -> bool {
        self.value <= self.unit.min()
    }

    pub fn is_max(&self) -> bool {
        self.value >= self.unit.max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(AirflowAmount::new(10.0, AirflowUnit::Cfm).value(), 50.0);
        assert_eq!(AirflowAmount::new(500.0, AirflowUnit::Tonnage).value(), 200.0);
        assert_eq!(AirflowAmount::new(f64::NAN, AirflowUnit::Tonnage).value(), 1.0);
    }

    #[test]
    fn conversion_keeps_airflow() {
        let tons = AirflowAmount::new(12.0, AirflowUnit::Tonnage);
        assert_eq!(tons.as_cfm(), 4_800.0);
        let cfm = tons.convert_to(AirflowUnit::Cfm);
        assert_eq!(cfm.value(), 4_800.0);
        assert_eq!(cfm.convert_to(AirflowUnit::Tonnage), tons);
    }
}

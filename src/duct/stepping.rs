//! 입력값 정규화 규칙: 범위 제한, 스텝 맞춤, 버튼/길게 누르기 증감.

use crate::units::{AirflowUnit, MAX_CFM, MIN_CFM};

/// CFM 단일 스텝
pub const CFM_STEP: f64 = 50.0;
/// 톤 단일 스텝
pub const TONNAGE_STEP: f64 = 1.0;

/// 증감 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    More,
    Less,
}

/// 단위별 범위와 스텝 크기.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRule {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// 길게 누르고 있을 때 반복 적용되는 스텝
    pub accelerated_step: f64,
}

impl StepRule {
    /// 단위에 맞는 규칙을 돌려준다.
    pub fn for_unit(unit: AirflowUnit) -> Self {
        match unit {
            AirflowUnit::Cfm => StepRule {
                min: MIN_CFM,
                max: MAX_CFM,
                step: CFM_STEP,
                accelerated_step: CFM_STEP * 2.0,
            },
            AirflowUnit::Tonnage => StepRule {
                min: AirflowUnit::Tonnage.min(),
                max: AirflowUnit::Tonnage.max(),
                step: TONNAGE_STEP,
                accelerated_step: TONNAGE_STEP * 5.0,
            },
        }
    }

    fn bound(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// 버튼을 한 번 눌렀을 때의 값.
    ///
    /// 값이 없으면 증가는 최소값, 감소는 최대값을 기준으로 한 스텝 움직인다.
    pub fn press(&self, current: Option<f64>, direction: StepDirection) -> f64 {
        match direction {
            StepDirection::More => self.bound(current.unwrap_or(self.min) + self.step),
            StepDirection::Less => self.bound(current.unwrap_or(self.max) - self.step),
        }
    }

    /// 길게 누르기 시작 시의 첫 값. 값이 없으면 최소값에서 출발한다.
    pub fn long_press_start(&self, current: Option<f64>, direction: StepDirection) -> f64 {
        let base = current.unwrap_or(self.min);
        match direction {
            StepDirection::More => self.bound(base + self.step),
            StepDirection::Less => self.bound(base - self.step),
        }
    }

    /// 길게 누르는 동안 반복 간격마다 적용되는 값.
    pub fn long_press_tick(&self, current: f64, direction: StepDirection) -> f64 {
        match direction {
            StepDirection::More => self.bound(current + self.accelerated_step),
            StepDirection::Less => self.bound(current - self.accelerated_step),
        }
    }

    /// 길게 누르기 전체(시작 + `ticks`회 반복) 결과.
    pub fn long_press(&self, current: Option<f64>, direction: StepDirection, ticks: usize) -> f64 {
        let start = self.long_press_start(current, direction);
        (0..ticks).fold(start, |v, _| self.long_press_tick(v, direction))
    }

    /// 입력 확정(blur) 시 정규화.
    pub fn normalize(&self, value: f64) -> f64 {
        clamp_and_snap(value, self.min, self.max, self.step)
    }

    /// 입력 칸에 허용되는 최대 자릿수.
    pub fn max_input_len(&self) -> usize {
        format!("{}", self.max as u64).len()
    }

    /// 자유 입력 문자열을 해석한다.
    ///
    /// 숫자 이외 문자는 제거한다. 빈 문자열이나 숫자가 하나도 없는
    /// 문자열은 "값 없음"(None)이다.
    pub fn parse_input(&self, text: &str) -> Option<f64> {
        let digits: String = text
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(self.max_input_len())
            .collect();
        digits.parse::<u64>().ok().map(|v| v as f64)
    }
}

/// 값을 `[min, max]`로 자르고 `step`의 배수에 맞춘다.
///
/// 나머지가 `step / 2` 이상이면 올리고 미만이면 내린다. 올린 값이 `max`를
/// 넘으면 내림 쪽을 택한다.
pub fn clamp_and_snap(value: f64, min: f64, max: f64, step: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    let v = value.max(min).min(max);
    if step <= 0.0 {
        return v;
    }
    let delta = v.rem_euclid(step);
    if delta == 0.0 {
        return v;
    }
    let up = v + (step - delta);
    let down = v - delta;
    let snapped = if delta >= step / 2.0 { up } else { down };
    if snapped > max {
        down
    } else if snapped < min {
        up
    } else {
        snapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_non_digits() {
        let rule = StepRule::for_unit(AirflowUnit::Cfm);
        assert_eq!(rule.parse_input("1,250 cfm"), Some(1250.0));
        assert_eq!(rule.parse_input(""), None);
        assert_eq!(rule.parse_input("abc"), None);
        assert_eq!(rule.parse_input(" - "), None);
    }

    #[test]
    fn parse_limits_digit_count() {
        let rule = StepRule::for_unit(AirflowUnit::Tonnage);
        assert_eq!(rule.max_input_len(), 3);
        assert_eq!(rule.parse_input("12345"), Some(123.0));
    }

    #[test]
    fn snap_below_half_rounds_down() {
        assert_eq!(clamp_and_snap(60.0, 50.0, 80_000.0, 50.0), 50.0);
        assert_eq!(clamp_and_snap(75.0, 50.0, 80_000.0, 50.0), 100.0);
    }
}

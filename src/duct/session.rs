//! 덕트 계산기 화면 한 번의 사용 상태.
//!
//! 화면 계층은 누르기/길게 누르기/자유 입력/확정/단위 전환만 호출하고,
//! 매번 [`CalculatorSession::recommendations`]로 결과 3건을 받아 그린다.

use tracing::debug;

use super::sizing::{recommend_for, Recommendation};
use super::stepping::{StepDirection, StepRule};
use crate::preferences::{PreferenceStore, CFM_KEY};
use crate::quantity::AirflowAmount;
use crate::units::AirflowUnit;

/// 계산기 세션. 현재 단위와 입력값(없을 수 있음)을 보관한다.
#[derive(Debug)]
pub struct CalculatorSession<S: PreferenceStore> {
    store: S,
    unit: AirflowUnit,
    /// 현재 단위 기준 입력값. 자유 입력 직후에는 범위를 벗어날 수 있고
    /// 확정(blur) 시 정규화된다.
    entry: Option<f64>,
}

impl<S: PreferenceStore> CalculatorSession<S> {
    /// 저장된 CFM 값을 복원해 세션을 연다. 없으면 단위 최소값에서 시작한다.
    pub fn open(store: S, unit: AirflowUnit) -> Self {
        let restored = store.get(CFM_KEY).map(|cfm| {
            let cfm = StepRule::for_unit(AirflowUnit::Cfm).normalize(cfm);
            AirflowAmount::new(cfm, AirflowUnit::Cfm)
                .convert_to(unit)
                .value()
        });
        debug!(?restored, unit = unit.symbol(), "calculator session opened");
        Self {
            store,
            unit,
            entry: Some(restored.unwrap_or_else(|| unit.min())),
        }
    }

    pub fn unit(&self) -> AirflowUnit {
        self.unit
    }

    pub fn rule(&self) -> StepRule {
        StepRule::for_unit(self.unit)
    }

    /// 입력 칸의 원시 값.
    pub fn entry(&self) -> Option<f64> {
        self.entry
    }

    /// 범위 안으로 잘린 현재 풍량. 값이 없으면 None.
    pub fn amount(&self) -> Option<AirflowAmount> {
        self.entry.map(|v| AirflowAmount::new(v, self.unit))
    }

    /// 계산에 쓰이는 풍량. 값이 없으면 단위 최소값을 대신 쓴다.
    pub fn effective_amount(&self) -> AirflowAmount {
        self.amount()
            .unwrap_or_else(|| AirflowAmount::minimum(self.unit))
    }

    /// 현재 값에 대한 추천 3건.
    pub fn recommendations(&self) -> [Recommendation; 3] {
        recommend_for(&self.effective_amount())
    }

    pub fn can_decrease(&self) -> bool {
        self.amount().map_or(true, |a| !a.is_min())
    }

    pub fn can_increase(&self) -> bool {
        self.amount().map_or(true, |a| !a.is_max())
    }

    /// 버튼 한 번 누르기.
    pub fn press(&mut self, direction: StepDirection) {
        let next = self.rule().press(self.entry, direction);
        self.update(Some(next));
    }

    /// 길게 누르기. 첫 스텝 이후 `ticks`회 가속 스텝을 적용한다.
    pub fn long_press(&mut self, direction: StepDirection, ticks: usize) {
        let next = self.rule().long_press(self.entry, direction, ticks);
        self.update(Some(next));
    }

    /// 자유 입력 문자열 반영. 정규화는 [`Self::commit`]에서 한다.
    pub fn edit_text(&mut self, text: &str) {
        let parsed = self.rule().parse_input(text);
        self.update(parsed);
    }

    /// 입력 확정. 범위 제한과 스텝 맞춤을 적용한다.
    pub fn commit(&mut self) {
        if let Some(v) = self.entry {
            let normalized = self.rule().normalize(v);
            self.update(Some(normalized));
        }
    }

    /// 단위를 바꾼다. 물리적 풍량을 유지하도록 값을 환산한다.
    pub fn set_unit(&mut self, unit: AirflowUnit) {
        if unit == self.unit {
            return;
        }
        let converted = self.amount().map(|a| a.convert_to(unit).value());
        debug!(from = self.unit.symbol(), to = unit.symbol(), ?converted, "unit switched");
        self.unit = unit;
        self.update(converted);
    }

    pub fn toggle_unit(&mut self) {
        self.set_unit(self.unit.toggled());
    }

    fn update(&mut self, entry: Option<f64>) {
        self.entry = entry;
        if let Some(amount) = self.amount() {
            self.store.set(CFM_KEY, amount.as_cfm());
        }
    }

    /// 세션을 닫고 저장소를 돌려준다.
    pub fn into_store(self) -> S {
        self.store
    }
}

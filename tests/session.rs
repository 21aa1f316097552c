//! 계산기 세션: 입력 규칙, 단위 전환, 선호값 저장/복원.
use ductulator::duct::{CalculatorSession, StepDirection};
use ductulator::preferences::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, CFM_KEY,
};
use ductulator::units::AirflowUnit;

fn diameters<S: PreferenceStore>(session: &CalculatorSession<S>) -> Vec<u32> {
    session
        .recommendations()
        .iter()
        .map(|r| r.duct_diameter_in)
        .collect()
}

#[test]
fn empty_store_starts_at_minimum() {
    let session = CalculatorSession::open(MemoryPreferenceStore::new(), AirflowUnit::Cfm);
    assert_eq!(session.entry(), Some(50.0));
    assert_eq!(diameters(&session), vec![4, 4, 4]);
    assert!(!session.can_decrease());
}

#[test]
fn stored_cfm_is_restored_and_snapped() {
    let mut store = MemoryPreferenceStore::new();
    store.set(CFM_KEY, 1_230.0);
    let session = CalculatorSession::open(store, AirflowUnit::Cfm);
    assert_eq!(session.entry(), Some(1_250.0));
}

#[test]
fn stored_cfm_is_restored_in_tonnage() {
    let mut store = MemoryPreferenceStore::new();
    store.set(CFM_KEY, 1_200.0);
    let session = CalculatorSession::open(store, AirflowUnit::Tonnage);
    assert_eq!(session.entry(), Some(3.0));
}

#[test]
fn changes_are_persisted_as_cfm() {
    let mut session = CalculatorSession::open(MemoryPreferenceStore::new(), AirflowUnit::Tonnage);
    session.press(StepDirection::More);
    session.press(StepDirection::More);
    assert_eq!(session.entry(), Some(3.0));
    let store = session.into_store();
    assert_eq!(store.get(CFM_KEY), Some(1_200.0));
}

#[test]
fn unit_switch_preserves_airflow() {
    let mut session = CalculatorSession::open(MemoryPreferenceStore::new(), AirflowUnit::Cfm);
    session.edit_text("1000");
    session.commit();
    session.toggle_unit();
    assert_eq!(session.unit(), AirflowUnit::Tonnage);
    assert_eq!(session.entry(), Some(3.0));
    session.toggle_unit();
    assert_eq!(session.entry(), Some(1_200.0));
}

#[test]
fn unit_switch_at_bounds() {
    let mut session = CalculatorSession::open(MemoryPreferenceStore::new(), AirflowUnit::Cfm);
    session.toggle_unit();
    assert_eq!(session.entry(), Some(1.0));
    session.toggle_unit();
    assert_eq!(session.entry(), Some(400.0));

    session.edit_text("80000");
    session.toggle_unit();
    assert_eq!(session.entry(), Some(200.0));
    assert!(!session.can_increase());
    session.toggle_unit();
    assert_eq!(session.entry(), Some(80_000.0));
}

#[test]
fn empty_text_means_no_value() {
    let mut session = CalculatorSession::open(MemoryPreferenceStore::new(), AirflowUnit::Cfm);
    session.edit_text("2400");
    session.edit_text("");
    session.commit();
    assert_eq!(session.entry(), None);
    assert!(session.amount().is_none());
    // 계산은 최소값으로 대신한다.
    assert_eq!(session.effective_amount().value(), 50.0);
    assert_eq!(diameters(&session), vec![4, 4, 4]);
    // 마지막 유효값만 저장되어 있다.
    assert_eq!(session.into_store().get(CFM_KEY), Some(2_400.0));
}

#[test]
fn typed_value_is_normalized_on_commit() {
    let mut session = CalculatorSession::open(MemoryPreferenceStore::new(), AirflowUnit::Cfm);
    session.edit_text("77");
    assert_eq!(session.entry(), Some(77.0));
    session.commit();
    assert_eq!(session.entry(), Some(100.0));

    session.edit_text("99,999");
    session.commit();
    assert_eq!(session.entry(), Some(80_000.0));
}

#[test]
fn unit_switch_without_value_keeps_it_empty() {
    let mut session = CalculatorSession::open(MemoryPreferenceStore::new(), AirflowUnit::Cfm);
    session.edit_text("");
    session.set_unit(AirflowUnit::Tonnage);
    assert_eq!(session.entry(), None);
    session.press(StepDirection::More);
    assert_eq!(session.entry(), Some(2.0));
}

#[test]
fn broken_store_does_not_block_calculation() {
    let dir = tempfile::tempdir().unwrap();
    // 디렉터리를 파일 경로로 지정해 읽기/쓰기가 모두 실패하게 한다.
    let store = FilePreferenceStore::new(dir.path());
    let mut session = CalculatorSession::open(store, AirflowUnit::Cfm);
    assert_eq!(session.entry(), Some(50.0));
    session.long_press(StepDirection::More, 2);
    assert_eq!(session.entry(), Some(300.0));
    assert_eq!(diameters(&session).len(), 3);
}

#[test]
fn file_store_restores_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs").join("preferences.toml");
    let mut session = CalculatorSession::open(FilePreferenceStore::new(&path), AirflowUnit::Cfm);
    session.edit_text("5000");
    session.commit();
    drop(session);

    let session = CalculatorSession::open(FilePreferenceStore::new(&path), AirflowUnit::Cfm);
    assert_eq!(session.entry(), Some(5_000.0));
}

#[test]
fn text_without_digits_means_no_value() {
    let mut session = CalculatorSession::open(MemoryPreferenceStore::new(), AirflowUnit::Cfm);
    session.edit_text("2400");
    session.commit();
    session.edit_text("abc");
    session.commit();
    assert_eq!(session.entry(), None);
    assert_eq!(diameters(&session), vec![4, 4, 4]);
    // 저장된 값은 덮어쓰지 않는다.
    assert_eq!(session.into_store().get(CFM_KEY), Some(2_400.0));
}

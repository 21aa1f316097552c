//! 추천 직경 계산 회귀 테스트.
use ductulator::duct::{
    duct_diameter_for, recommended_duct_sizes, unclamped_duct_diameter, DuctCondition,
    MAX_DUCT_IN, MIN_DUCT_IN,
};
use ductulator::units::{cfm_to_tonnage, tonnage_to_cfm, AirflowUnit, MAX_CFM, MIN_CFM};
use proptest::prelude::*;

fn diameters(amount: f64, unit: AirflowUnit) -> Vec<u32> {
    recommended_duct_sizes(amount, unit)
        .iter()
        .map(|r| r.duct_diameter_in)
        .collect()
}

#[test]
fn results_are_ordered_highest_velocity_first() {
    let recs = recommended_duct_sizes(1_000.0, AirflowUnit::Cfm);
    let fpm: Vec<u32> = recs.iter().map(|r| r.velocity_fpm).collect();
    assert_eq!(fpm, vec![1_500, 1_200, 1_000]);
    assert_eq!(recs[0].condition, DuctCondition::StraightDuct);
    assert_eq!(recs[2].label, "sound sensitive");
    assert!(recs.iter().all(|r| r.detail.is_some()));
}

#[test]
fn thousand_cfm() {
    assert_eq!(diameters(1_000.0, AirflowUnit::Cfm), vec![12, 12, 14]);
}

#[test]
fn minimum_airflow_clamps_to_smallest_duct() {
    assert_eq!(diameters(MIN_CFM, AirflowUnit::Cfm), vec![4, 4, 4]);
    assert_eq!(duct_diameter_for(MIN_CFM, 1_500), MIN_DUCT_IN);
}

#[test]
fn maximum_airflow_clamps_to_largest_duct() {
    assert_eq!(diameters(MAX_CFM, AirflowUnit::Cfm), vec![100, 112, 118]);
    assert_eq!(duct_diameter_for(MAX_CFM, 1_000), MAX_DUCT_IN);
}

#[test]
fn odd_raw_diameter_is_bumped_to_even() {
    // sqrt(10000/1200 * 144 * 4/pi) = 39.09 -> 39 -> 40
    assert_eq!(unclamped_duct_diameter(10_000.0, 1_200.0), 39.0);
    assert_eq!(duct_diameter_for(10_000.0, 1_200), 40);
    // sqrt(40000/1000 * 144 * 4/pi) = 85.64 -> 86
    assert_eq!(duct_diameter_for(40_000.0, 1_000), 86);
}

#[test]
fn tonnage_is_converted_before_sizing() {
    assert_eq!(diameters(10.0, AirflowUnit::Tonnage), vec![22, 26, 28]);
    assert_eq!(
        diameters(10.0, AirflowUnit::Tonnage),
        diameters(4_000.0, AirflowUnit::Cfm)
    );
    // 250톤은 80,000 CFM에서 잘린다.
    assert_eq!(
        diameters(250.0, AirflowUnit::Tonnage),
        diameters(MAX_CFM, AirflowUnit::Cfm)
    );
}

#[test]
fn unit_bounds_survive_conversion() {
    assert_eq!(cfm_to_tonnage(MIN_CFM), 1.0);
    assert_eq!(cfm_to_tonnage(MAX_CFM), 200.0);
    assert_eq!(tonnage_to_cfm(1.0), 400.0);
    assert_eq!(diameters(1.0, AirflowUnit::Tonnage).len(), 3);
    assert_eq!(diameters(200.0, AirflowUnit::Tonnage).len(), 3);
}

proptest! {
    #[test]
    fn diameters_are_in_range_and_even(cfm in MIN_CFM..=MAX_CFM) {
        let recs = recommended_duct_sizes(cfm, AirflowUnit::Cfm);
        prop_assert_eq!(recs.len(), 3);
        for rec in recs {
            let d = rec.duct_diameter_in;
            prop_assert!((MIN_DUCT_IN..=MAX_DUCT_IN).contains(&d));
            prop_assert!(d == MIN_DUCT_IN || d == MAX_DUCT_IN || d % 2 == 0);
        }
    }

    #[test]
    fn raw_diameter_is_monotonic(a in MIN_CFM..=MAX_CFM, b in MIN_CFM..=MAX_CFM) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for fpm in [1_000.0, 1_200.0, 1_500.0] {
            prop_assert!(unclamped_duct_diameter(lo, fpm) <= unclamped_duct_diameter(hi, fpm));
        }
    }

    #[test]
    fn one_round_trip_stabilises(tons in 1u32..=1_000) {
        let cfm = tonnage_to_cfm(tons as f64);
        prop_assert_eq!(tonnage_to_cfm(cfm_to_tonnage(cfm)), cfm);
    }
}

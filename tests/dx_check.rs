//! Developer-experience checks: the fluent surfaces should accept plain
//! integers, floats, strings and `Decimal` interchangeably.

use cushion::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_mixed_input_types() {
    let config = PlannerConfig::default();
    let report = AffordabilityPlanner::default()
        .cash("5000")
        .income(4800.0)
        .expenses(dec!(3200))
        .purchase(1200u32)
        .assess(&config)
        .unwrap();

    assert_eq!(report.cushion_months, dec!(1.1875));
}

#[test]
fn test_inputs_constructor_mixed_types() {
    let inputs = PlannerInputs::new("2500.50", 4000, dec!(1800), 300.0).unwrap();
    assert_eq!(inputs.cash_balance, dec!(2500.50));
    assert_eq!(inputs.monthly_income, dec!(4000));
}

#[test]
fn test_invalid_string_input_is_ignored_by_setter() {
    // Setters keep the previous value when conversion fails; the strict
    // constructor surfaces the error instead.
    let planner = AffordabilityPlanner::default().cash("not a number");
    assert_eq!(planner.inputs.cash_balance, Decimal::ZERO);

    assert!(PlannerInputs::new("not a number", 0, 0, 0).is_err());
}

#[test]
fn test_config_builder_roundtrip() {
    let config = PlannerConfig::builder()
        .policy(InputPolicy::Strict)
        .locale(PlannerLocale::EnGB)
        .field_ceiling(200000)
        .build()
        .unwrap();

    assert_eq!(config.policy, InputPolicy::Strict);
    assert_eq!(config.locale, PlannerLocale::EnGB);
    assert_eq!(config.field_ceiling, Some(dec!(200000)));

    let json = serde_json::to_string(&config).unwrap();
    let parsed: PlannerConfig = json.parse().unwrap();
    assert_eq!(parsed.policy, InputPolicy::Strict);
}

#[test]
fn test_planner_ids_are_stable_per_instance() {
    let planner = AffordabilityPlanner::default().cash(100);
    let id = AssessAffordability::get_id(&planner);
    let planner = planner.income(200);
    assert_eq!(AssessAffordability::get_id(&planner), id);

    let other = AffordabilityPlanner::default();
    assert_ne!(AssessAffordability::get_id(&other), id);
}

#[cfg(feature = "async")]
#[tokio::test]
async fn test_async_assessment_matches_sync() {
    let config = PlannerConfig::default();
    let planner = AffordabilityPlanner::default()
        .cash(5000)
        .income(4800)
        .expenses(3200)
        .purchase(1200);

    let sync_report = planner.assess(&config).unwrap();
    let async_report = planner.assess_async(&config).await.unwrap();
    assert_eq!(sync_report, async_report);
}

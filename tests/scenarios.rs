//! End-to-end scenarios covering the documented behavioral contract:
//! derived statistics, zone boundaries, meter scaling and display
//! formatting.

use cushion::prelude::*;
use rust_decimal_macros::dec;

#[test]
fn test_typical_tight_purchase() {
    let config = PlannerConfig::default();
    let report = AffordabilityPlanner::default()
        .cash(5000)
        .income(4800)
        .expenses(3200)
        .purchase(1200)
        .assess(&config)
        .unwrap();

    assert_eq!(report.projected_cash, dec!(3800));
    assert_eq!(report.monthly_net, dec!(1600));
    assert_eq!(report.cushion_months, dec!(1.1875));
    assert_eq!(report.zone, ZoneKey::Tight);
    assert_eq!(report.meter_progress, 40);
    assert_eq!(report.cushion_display(), "1.2");
    assert_eq!(report.projected_cash_display(PlannerLocale::EnUS), "$3,800");
}

#[test]
fn test_zero_expenses_is_risky_with_empty_meter() {
    let config = PlannerConfig::default();
    let report = AffordabilityPlanner::default()
        .cash(1000)
        .income(0)
        .expenses(0)
        .purchase(200)
        .assess(&config)
        .unwrap();

    assert_eq!(report.cushion_months, dec!(0));
    assert_eq!(report.zone, ZoneKey::Risky);
    assert_eq!(report.meter_progress, 0);
}

#[test]
fn test_zone_partition_boundaries() {
    assert_eq!(classify_zone(dec!(2.0)), ZoneKey::Tight);
    assert_eq!(classify_zone(dec!(1.0)), ZoneKey::Tight);
    assert_eq!(classify_zone(dec!(0.999)), ZoneKey::Risky);
    assert_eq!(classify_zone(dec!(2.0001)), ZoneKey::Healthy);
    assert_eq!(classify_zone(dec!(-10)), ZoneKey::Risky);
}

#[test]
fn test_meter_scale_contract() {
    assert_eq!(clamp_meter_progress(dec!(0)), 0);
    assert_eq!(clamp_meter_progress(dec!(1.5)), 50);
    assert_eq!(clamp_meter_progress(dec!(3)), 100);
    assert_eq!(clamp_meter_progress(dec!(6)), 100);
}

#[test]
fn test_meter_saturates_above_healthy_cutoff() {
    // Classification saturates at >2 months but the meter keeps headroom
    // until 3; a healthy plan need not show a full meter.
    let config = PlannerConfig::default();
    let report = AffordabilityPlanner::default()
        .cash(10000)
        .income(5000)
        .expenses(3000)
        .purchase(2500)
        .assess(&config)
        .unwrap();

    assert_eq!(report.zone, ZoneKey::Healthy);
    assert_eq!(report.cushion_months, dec!(2.5));
    assert_eq!(report.meter_progress, 83);
}

#[test]
fn test_currency_formatting_contract() {
    assert_eq!(PlannerLocale::EnUS.format_currency(dec!(1234.6)), "$1,235");
    assert_eq!(PlannerLocale::EnUS.format_currency(dec!(999999.5)), "$1,000,000");
}

#[test]
fn test_cushion_formatting_contract() {
    assert_eq!(format_cushion_months(dec!(9.95)), "10.0");
    assert_eq!(format_cushion_months(dec!(10.04)), "10");
    assert_eq!(format_cushion_months(dec!(-3)), "0");
    assert_eq!(format_cushion_months(dec!(1.1875)), "1.2");
}

#[test]
fn test_tip_pool_membership_per_zone() {
    let mut rng = rand::thread_rng();
    let config = PlannerConfig::default();
    let report = AffordabilityPlanner::default()
        .cash(5000)
        .income(4800)
        .expenses(3200)
        .purchase(1200)
        .assess(&config)
        .unwrap();

    let tip = select_tip(report.zone, &mut rng);
    assert!(tip_pool(ZoneKey::Tight).contains(&tip));
}

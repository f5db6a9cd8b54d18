use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Stable key for an affordability zone.
///
/// The serialized form ("healthy" / "tight" / "risky") is part of the
/// webhook payload contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKey {
    Healthy,
    Tight,
    Risky,
}

impl ZoneKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneKey::Healthy => "healthy",
            ZoneKey::Tight => "tight",
            ZoneKey::Risky => "risky",
        }
    }

    /// Looks up the static profile for this zone.
    pub fn profile(&self) -> &'static ZoneProfile {
        match self {
            ZoneKey::Healthy => &ZONE_TABLE[0],
            ZoneKey::Tight => &ZONE_TABLE[1],
            ZoneKey::Risky => &ZONE_TABLE[2],
        }
    }
}

impl std::fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata for one affordability zone: display label, the longer
/// result-card message, and the cushion floor used for classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneProfile {
    pub key: ZoneKey,
    pub label: &'static str,
    pub message: &'static str,
    /// Lowest cushion (in months) belonging to this zone. Exclusive for
    /// Healthy, inclusive for Tight; Risky is open-ended downwards.
    pub floor: Decimal,
}

/// The three zones, ordered highest floor first. Built once at startup and
/// never mutated.
pub static ZONE_TABLE: Lazy<[ZoneProfile; 3]> = Lazy::new(|| {
    [
        ZoneProfile {
            key: ZoneKey::Healthy,
            label: "Healthy",
            message: "This purchase leaves you with a comfortable cash cushion. \
                      Your runway stays above two months of expenses.",
            floor: dec!(2),
        },
        ZoneProfile {
            key: ZoneKey::Tight,
            label: "Tight",
            message: "You can make this purchase, but your cushion lands between \
                      one and two months of expenses. Keep an eye on the budget.",
            floor: dec!(1),
        },
        ZoneProfile {
            key: ZoneKey::Risky,
            label: "Risky",
            message: "This purchase would leave you with less than one month of \
                      expenses in reserve. Consider waiting or saving first.",
            floor: Decimal::MIN,
        },
    ]
});

/// Classifies a cushion figure into a zone.
///
/// Thresholds are evaluated highest to lowest and the boundaries belong to
/// Tight: strictly more than two months is Healthy, one through two months
/// inclusive is Tight, everything below one month (including negative
/// cushions) is Risky. Total over all inputs; there is no error path.
pub fn classify_zone(cushion_months: Decimal) -> ZoneKey {
    if cushion_months > ZoneKey::Healthy.profile().floor {
        ZoneKey::Healthy
    } else if cushion_months >= ZoneKey::Tight.profile().floor {
        ZoneKey::Tight
    } else {
        ZoneKey::Risky
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_two_belongs_to_tight() {
        assert_eq!(classify_zone(dec!(2.0)), ZoneKey::Tight);
        assert_eq!(classify_zone(dec!(2.001)), ZoneKey::Healthy);
    }

    #[test]
    fn test_boundary_one_belongs_to_tight() {
        assert_eq!(classify_zone(dec!(1.0)), ZoneKey::Tight);
        assert_eq!(classify_zone(dec!(0.999)), ZoneKey::Risky);
    }

    #[test]
    fn test_negative_cushion_is_risky() {
        assert_eq!(classify_zone(dec!(-5)), ZoneKey::Risky);
    }

    #[test]
    fn test_large_cushion_is_healthy() {
        assert_eq!(classify_zone(dec!(36)), ZoneKey::Healthy);
    }

    #[test]
    fn test_table_order_matches_keys() {
        assert_eq!(ZONE_TABLE[0].key, ZoneKey::Healthy);
        assert_eq!(ZONE_TABLE[1].key, ZoneKey::Tight);
        assert_eq!(ZONE_TABLE[2].key, ZoneKey::Risky);
        assert!(ZONE_TABLE[0].floor > ZONE_TABLE[1].floor);
    }

    #[test]
    fn test_stable_keys() {
        assert_eq!(ZoneKey::Healthy.as_str(), "healthy");
        assert_eq!(
            serde_json::to_string(&ZoneKey::Risky).unwrap(),
            "\"risky\""
        );
    }
}

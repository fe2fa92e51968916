//! Stock status classification and progress ratio.

use serde::{Deserialize, Serialize};

use stockroom_core::ValueObject;

use crate::item::InventoryItem;
use crate::numeric::{finite, positive};

/// Derived tri-state stock classification. Never persisted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Critical,
    Warning,
    Healthy,
}

impl StockStatus {
    /// Fixed sort priority: critical first.
    pub fn priority(self) -> u8 {
        match self {
            StockStatus::Critical => 0,
            StockStatus::Warning => 1,
            StockStatus::Healthy => 2,
        }
    }

    /// Critical or warning.
    pub fn is_low(self) -> bool {
        !matches!(self, StockStatus::Healthy)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::Critical => "critical",
            StockStatus::Warning => "warning",
            StockStatus::Healthy => "healthy",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValueObject for StockStatus {}

/// Classify an item's stock level.
///
/// The warning threshold is checked before the par level, whatever their
/// relative magnitude; an unset or non-positive threshold is skipped.
pub fn classify(item: &InventoryItem) -> StockStatus {
    let Some(quantity) = finite(item.quantity) else {
        return StockStatus::Healthy;
    };

    if positive(item.warning_quantity).is_some_and(|w| quantity <= w) {
        return StockStatus::Critical;
    }
    if positive(item.recommended_quantity).is_some_and(|r| quantity <= r) {
        return StockStatus::Warning;
    }
    StockStatus::Healthy
}

/// Percentage of par level on hand, clamped to `0..=100`.
///
/// Overstock reads as 100. Items without a par level read 100 when any stock
/// is on hand and 0 otherwise.
pub fn progress_ratio(item: &InventoryItem) -> u8 {
    let Some(quantity) = finite(item.quantity) else {
        return 0;
    };

    let Some(recommended) = positive(item.recommended_quantity) else {
        return if quantity > 0.0 { 100 } else { 0 };
    };

    let pct = (quantity / recommended * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockroom_core::ItemId;

    fn item(quantity: f64, warning: f64, recommended: f64) -> InventoryItem {
        InventoryItem::new(ItemId::new(1), "item").with_levels(quantity, warning, recommended)
    }

    #[test]
    fn below_warning_threshold_is_critical() {
        let i = item(2.0, 5.0, 10.0);
        assert_eq!(classify(&i), StockStatus::Critical);
        assert_eq!(progress_ratio(&i), 20);
    }

    #[test]
    fn between_thresholds_is_warning() {
        let i = item(8.0, 5.0, 10.0);
        assert_eq!(classify(&i), StockStatus::Warning);
        assert_eq!(progress_ratio(&i), 80);
    }

    #[test]
    fn overstock_is_healthy_and_clamped() {
        let i = item(12.0, 5.0, 10.0);
        assert_eq!(classify(&i), StockStatus::Healthy);
        assert_eq!(progress_ratio(&i), 100);
    }

    #[test]
    fn zero_thresholds_are_unset() {
        let i = item(0.0, 0.0, 0.0);
        assert_eq!(classify(&i), StockStatus::Healthy);
        assert_eq!(progress_ratio(&i), 0);
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(classify(&item(5.0, 5.0, 10.0)), StockStatus::Critical);
        assert_eq!(classify(&item(10.0, 5.0, 10.0)), StockStatus::Warning);
    }

    #[test]
    fn warning_threshold_wins_even_when_inverted() {
        // warning above par: the tighter rule is still evaluated first
        let i = item(12.0, 15.0, 10.0);
        assert_eq!(classify(&i), StockStatus::Critical);
    }

    #[test]
    fn unset_or_non_finite_values_fall_back() {
        let mut i = item(3.0, 5.0, 10.0);
        i.warning_quantity = Some(f64::NAN);
        assert_eq!(classify(&i), StockStatus::Warning);

        i.recommended_quantity = None;
        assert_eq!(classify(&i), StockStatus::Healthy);
        assert_eq!(progress_ratio(&i), 100);

        i.quantity = Some(f64::INFINITY);
        assert_eq!(classify(&i), StockStatus::Healthy);
        assert_eq!(progress_ratio(&i), 0);

        i.quantity = None;
        assert_eq!(progress_ratio(&i), 0);
    }

    #[test]
    fn ratio_rounds_half_away_from_zero() {
        assert_eq!(progress_ratio(&item(1.0, 0.0, 8.0)), 13); // 12.5
        assert_eq!(progress_ratio(&item(1.0, 0.0, 3.0)), 33);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn at_or_below_warning_is_always_critical(
            warning in 1u32..10_000,
            below in 0u32..10_000,
            recommended in prop::option::of(0u32..10_000),
        ) {
            let quantity = warning.saturating_sub(below % (warning + 1));
            let mut i = item(quantity as f64, warning as f64, 0.0);
            i.recommended_quantity = recommended.map(f64::from);
            prop_assert_eq!(classify(&i), StockStatus::Critical);
        }

        #[test]
        fn without_warning_threshold_par_level_decides(
            quantity in 0u32..10_000,
            recommended in 1u32..10_000,
        ) {
            let i = item(quantity as f64, 0.0, recommended as f64);
            let expected = if quantity <= recommended {
                StockStatus::Warning
            } else {
                StockStatus::Healthy
            };
            prop_assert_eq!(classify(&i), expected);
        }

        #[test]
        fn ratio_is_bounded_and_monotonic(
            a in 0u32..100_000,
            b in 0u32..100_000,
            recommended in 1u32..10_000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let r_lo = progress_ratio(&item(lo as f64, 0.0, recommended as f64));
            let r_hi = progress_ratio(&item(hi as f64, 0.0, recommended as f64));
            prop_assert!(r_lo <= 100 && r_hi <= 100);
            prop_assert!(r_lo <= r_hi);
        }
    }
}

//! Category and collection aggregates.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::ValueObject;

use crate::item::InventoryItem;
use crate::status::{classify, StockStatus};

/// Counts over all items sharing a category label.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub total: usize,
    pub low_stock_count: usize,
    pub critical_count: usize,
}

impl CategorySummary {
    fn record(&mut self, status: StockStatus) {
        self.total += 1;
        if status.is_low() {
            self.low_stock_count += 1;
        }
        if status == StockStatus::Critical {
            self.critical_count += 1;
        }
    }
}

impl ValueObject for CategorySummary {}

/// Summarize items per resolved category.
///
/// Keys are sorted by label so the result does not depend on input order.
pub fn summarize<'a, I>(items: I) -> BTreeMap<String, CategorySummary>
where
    I: IntoIterator<Item = &'a InventoryItem>,
{
    let mut summaries: BTreeMap<String, CategorySummary> = BTreeMap::new();
    for item in items {
        summaries
            .entry(item.resolved_category().to_string())
            .or_default()
            .record(classify(item));
    }
    summaries
}

/// Most at-risk categories first: by critical count, then low-stock count,
/// then total, all descending. Ties keep label order.
pub fn rank_categories(
    summaries: &BTreeMap<String, CategorySummary>,
) -> Vec<(String, CategorySummary)> {
    let mut ranked: Vec<(String, CategorySummary)> = summaries
        .iter()
        .map(|(name, summary)| (name.clone(), *summary))
        .collect();

    ranked.sort_by(|(_, a), (_, b)| {
        b.critical_count
            .cmp(&a.critical_count)
            .then(b.low_stock_count.cmp(&a.low_stock_count))
            .then(b.total.cmp(&a.total))
    });
    ranked
}

/// Collection-wide figures for the dashboard header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryOverview {
    pub total: usize,
    pub critical_count: usize,
    pub warning_count: usize,
    pub healthy_count: usize,
    pub low_stock_count: usize,
    pub category_count: usize,
    /// Sum of `quantity × price` over items where both are known. Saturates
    /// at `Decimal::MAX`.
    pub stock_value: Decimal,
}

impl ValueObject for InventoryOverview {}

pub fn overview<'a, I>(items: I) -> InventoryOverview
where
    I: IntoIterator<Item = &'a InventoryItem>,
{
    let mut out = InventoryOverview::default();
    let mut categories: BTreeSet<&str> = BTreeSet::new();

    for item in items {
        out.total += 1;
        match classify(item) {
            StockStatus::Critical => out.critical_count += 1,
            StockStatus::Warning => out.warning_count += 1,
            StockStatus::Healthy => out.healthy_count += 1,
        }
        if let Some(value) = item.stock_value() {
            out.stock_value = out.stock_value.saturating_add(value);
        }
        categories.insert(item.resolved_category());
    }

    out.low_stock_count = out.critical_count + out.warning_count;
    out.category_count = categories.len();
    out
}

/// Items needing attention: critical first, then warning, input order kept
/// within each group.
pub fn low_stock_items(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    let mut low: Vec<(StockStatus, &InventoryItem)> = items
        .iter()
        .map(|item| (classify(item), item))
        .filter(|(status, _)| status.is_low())
        .collect();
    low.sort_by_key(|(status, _)| status.priority());
    low.into_iter().map(|(_, item)| item).collect()
}

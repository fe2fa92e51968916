//! One-shot dashboard report over an exported item collection.

use std::path::Path;

use anyhow::Context;

use stockroom_auth::Role;
use stockroom_inventory::{InventoryItem, ItemFilter, SortDirection, SortKey};

use crate::settings::UiSettings;
use crate::view::{Dashboard, DashboardSnapshot};

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub role: Role,
    pub sort: Option<SortKey>,
    pub direction: SortDirection,
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Read a JSON array of items, as returned by the backend's list endpoint.
pub fn load_items(path: &Path) -> anyhow::Result<Vec<InventoryItem>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read items from {}", path.display()))?;
    let items: Vec<InventoryItem> = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse items in {}", path.display()))?;
    tracing::info!(count = items.len(), path = %path.display(), "items loaded");
    Ok(items)
}

/// Run the items through the same state the dashboard keeps and snapshot it.
pub fn build_report(
    items: Vec<InventoryItem>,
    options: &ReportOptions,
    settings: UiSettings,
) -> DashboardSnapshot {
    let mut dashboard = Dashboard::new(options.role.clone(), settings);
    dashboard.load_items(items);

    let mut filter = ItemFilter::new(options.search.clone().unwrap_or_default());
    if let Some(category) = &options.category {
        filter = filter.with_category(category.clone());
    }
    dashboard.set_filter(filter);

    if let Some(key) = options.sort {
        dashboard.toggle_sort(key);
        if options.direction == SortDirection::Descending {
            dashboard.toggle_sort(key);
        }
    }

    dashboard.snapshot()
}

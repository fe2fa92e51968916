//! Dashboard state and the snapshot handed to rendering code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_auth::{authorize, capabilities, Capabilities, Capability, Role};
use stockroom_core::{DomainError, DomainResult, ItemId};
use stockroom_inventory::{
    categories, classify, overview, progress_ratio, rank_categories, summarize, CategorySummary,
    InventoryItem, InventoryOverview, ItemCatalog, ItemDraft, ItemFilter, SortKey, SortState,
    StockStatus, UpdateRequest,
};

use crate::settings::UiSettings;

/// One table row: the item plus its derived columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRow {
    pub item: InventoryItem,
    pub status: StockStatus,
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCategory {
    pub name: String,
    #[serde(flatten)]
    pub summary: CategorySummary,
}

/// Everything one render pass needs. Rebuilt from scratch on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub role: Role,
    pub capabilities: Capabilities,
    pub settings: UiSettings,
    pub overview: InventoryOverview,
    pub categories: Vec<RankedCategory>,
    pub category_options: Vec<String>,
    pub filter: ItemFilter,
    pub sort: SortState,
    pub rows: Vec<ItemRow>,
}

/// Client-side dashboard state for one signed-in user.
#[derive(Debug, Clone)]
pub struct Dashboard {
    role: Role,
    settings: UiSettings,
    catalog: ItemCatalog,
    filter: ItemFilter,
    sort: SortState,
}

impl Dashboard {
    pub fn new(role: Role, settings: UiSettings) -> Self {
        Self {
            role,
            settings,
            catalog: ItemCatalog::default(),
            filter: ItemFilter::default(),
            sort: SortState::new(),
        }
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn capabilities(&self) -> Capabilities {
        capabilities(&self.role)
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// New settings after the user changed a preference.
    pub fn set_settings(&mut self, settings: UiSettings) {
        self.settings = settings;
    }

    /// Load the collection fetched from the backend.
    pub fn load_items(&mut self, items: Vec<InventoryItem>) {
        self.catalog.replace_all(items);
    }

    pub fn set_filter(&mut self, filter: ItemFilter) {
        self.filter = filter;
    }

    /// Column header click.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
    }

    /// Build the item the backend should receive for this draft, checking the
    /// role may make the change. Threshold edits need their own capability.
    pub fn prepare_save(&self, draft: &ItemDraft, now: DateTime<Utc>) -> DomainResult<InventoryItem> {
        let existing = draft.id.and_then(|id| self.catalog.get(&id));
        match existing {
            Some(current) => {
                authorize(&self.role, Capability::EditItems)?;
                let before = ItemDraft::from_item(current);
                if before.warning_quantity() != draft.warning_quantity()
                    || before.recommended_quantity() != draft.recommended_quantity()
                {
                    authorize(&self.role, Capability::EditThresholds)?;
                }
            }
            None => authorize(&self.role, Capability::CreateItems)?,
        }
        draft.apply_to(now)
    }

    /// Record a save the backend accepted.
    pub fn confirm_saved(&mut self, item: InventoryItem) {
        self.catalog.upsert(item);
    }

    /// Check the role may delete `id` before calling the backend.
    pub fn prepare_delete(&self, id: &ItemId) -> DomainResult<&InventoryItem> {
        authorize(&self.role, Capability::DeleteItems)?;
        self.catalog.get(id).ok_or(DomainError::NotFound)
    }

    /// Record a delete the backend accepted.
    pub fn confirm_deleted(&mut self, id: &ItemId) -> DomainResult<InventoryItem> {
        self.catalog.remove(id).ok_or(DomainError::NotFound)
    }

    /// Write an approved request's quantity into the local copy.
    pub fn apply_approved_request(&mut self, request: &UpdateRequest) -> DomainResult<()> {
        let (item_id, quantity) = request
            .approved_quantity()
            .ok_or_else(|| DomainError::conflict("request is not approved"))?;
        if self.catalog.set_quantity(&item_id, quantity as f64) {
            Ok(())
        } else {
            Err(DomainError::NotFound)
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let items = self.catalog.items();

        let categories_ranked = rank_categories(&summarize(items))
            .into_iter()
            .map(|(name, summary)| RankedCategory { name, summary })
            .collect();

        let visible: Vec<InventoryItem> = self.filter.apply(items).into_iter().cloned().collect();
        let rows = self
            .sort
            .apply(&visible)
            .into_iter()
            .map(|item| ItemRow {
                item: item.clone(),
                status: classify(item),
                progress: progress_ratio(item),
            })
            .collect();

        DashboardSnapshot {
            role: self.role.clone(),
            capabilities: self.capabilities(),
            settings: self.settings,
            overview: overview(items),
            categories: categories_ranked,
            category_options: categories(items),
            filter: self.filter.clone(),
            sort: self.sort,
            rows,
        }
    }
}

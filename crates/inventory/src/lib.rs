//! Inventory dashboard domain logic.
//!
//! Everything here is deterministic and free of IO: items come in as plain
//! records (as fetched from the backend), derived values (stock status,
//! progress, category summaries, sort order) are recomputed on every pass.

pub mod catalog;
pub mod draft;
pub mod filter;
pub mod item;
pub mod numeric;
pub mod request;
pub mod sort;
pub mod status;
pub mod summary;

pub use catalog::ItemCatalog;
pub use draft::ItemDraft;
pub use filter::{categories, ItemFilter, ALL_CATEGORIES};
pub use item::{InventoryItem, UNCATEGORIZED};
pub use request::{
    ApproveRequest, RejectRequest, RequestDecided, RequestStatus, RequestSubmitted,
    SubmitRequest, UpdateRequest, UpdateRequestCommand, UpdateRequestEvent,
};
pub use sort::{sort_items, SortDirection, SortKey, SortState};
pub use status::{classify, progress_ratio, StockStatus};
pub use summary::{
    low_stock_items, overview, rank_categories, summarize, CategorySummary, InventoryOverview,
};

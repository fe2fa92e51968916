//! `stockroom-dashboard` — view layer state for the inventory dashboard.
//!
//! Wires the pure inventory logic to the bits of process state the dashboard
//! keeps: injected UI settings, the signed-in role, filter and sort state.

pub mod config;
pub mod report;
pub mod settings;
pub mod view;

pub use config::{ConfigError, DashboardConfig};
pub use report::{build_report, load_items, ReportOptions};
pub use settings::{
    InMemorySettingsStore, JsonFileSettingsStore, SettingsError, SettingsHandle, SettingsStore,
    Theme, UiSettings,
};
pub use view::{Dashboard, DashboardSnapshot, ItemRow, RankedCategory};

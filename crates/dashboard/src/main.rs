use std::path::PathBuf;

use clap::Parser;

use stockroom_auth::Role;
use stockroom_dashboard::{
    build_report, load_items, DashboardConfig, JsonFileSettingsStore, ReportOptions,
    SettingsHandle,
};
use stockroom_inventory::{SortDirection, SortKey};

#[derive(Parser)]
#[command(name = "stockroom-report")]
#[command(about = "Print the inventory dashboard view for an exported item list", long_about = None)]
struct Cli {
    /// JSON array of items, as returned by the inventory API
    items: PathBuf,

    /// Column to sort by (e.g. status, quantity, price, last_updated)
    #[arg(short, long)]
    sort: Option<SortKey>,

    /// Sort descending instead of ascending
    #[arg(long)]
    desc: bool,

    /// Case-insensitive name search
    #[arg(long)]
    search: Option<String>,

    /// Only show items in this category
    #[arg(long)]
    category: Option<String>,

    /// Role to render capabilities for
    #[arg(long, default_value = "employee")]
    role: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = DashboardConfig::from_env()?;
    stockroom_observability::init_with(config.log_format);

    let settings = SettingsHandle::load(JsonFileSettingsStore::new(&config.settings_path));
    let items = load_items(&cli.items)?;

    let options = ReportOptions {
        role: Role::new(cli.role),
        sort: cli.sort,
        direction: if cli.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        },
        search: cli.search,
        category: cli.category,
    };

    let snapshot = build_report(items, &options, settings.current());
    tracing::info!(
        rows = snapshot.rows.len(),
        low_stock = snapshot.overview.low_stock_count,
        "report built"
    );

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

//! End-to-end: exported JSON in, dashboard snapshot out.

use serde_json::json;

use stockroom_auth::Role;
use stockroom_dashboard::{build_report, load_items, ReportOptions, Theme, UiSettings};
use stockroom_inventory::{SortDirection, SortKey, StockStatus};

fn write_fixture(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("items.json");
    let items = json!([
        {
            "id": 1,
            "name": "Shampoo",
            "category": "A",
            "quantity": 2,
            "warning_quantity": 5,
            "recommended_quantity": 10,
            "price": "1.25",
            "last_updated": "2024-02-01T09:00:00Z"
        },
        {
            "id": 2,
            "name": "Conditioner",
            "category": "A",
            "quantity": "40",
            "warningQuantity": 5,
            "recommendedQuantity": 10,
            "price": 2
        },
        {
            "id": 3,
            "name": "Light bulb",
            "category": "B",
            "quantity": 8,
            "warning_quantity": 5,
            "recommended_quantity": 10,
            "price": "0.80"
        },
        {
            "id": 4,
            "name": "Mystery box",
            "category": null,
            "quantity": "lots",
            "price": null
        }
    ]);
    std::fs::write(&path, serde_json::to_vec(&items).unwrap()).unwrap();
    path
}

#[test]
fn report_ranks_categories_and_sorts_rows() {
    let dir = tempfile::tempdir().unwrap();
    let items = load_items(&write_fixture(&dir)).unwrap();
    assert_eq!(items.len(), 4);

    let options = ReportOptions {
        role: Role::MANAGER,
        sort: Some(SortKey::Price),
        direction: SortDirection::Descending,
        ..ReportOptions::default()
    };
    let settings = UiSettings { theme: Theme::Dark, sidebar_expanded: false };
    let snap = build_report(items, &options, settings);

    let ranked: Vec<(&str, usize, usize, usize)> = snap
        .categories
        .iter()
        .map(|c| {
            (
                c.name.as_str(),
                c.summary.total,
                c.summary.low_stock_count,
                c.summary.critical_count,
            )
        })
        .collect();
    assert_eq!(
        ranked,
        vec![("A", 2, 1, 1), ("B", 1, 1, 0), ("Uncategorized", 1, 0, 0)]
    );

    let names: Vec<&str> = snap.rows.iter().map(|r| r.item.name.as_str()).collect();
    assert_eq!(names, vec!["Conditioner", "Shampoo", "Light bulb", "Mystery box"]);

    let mystery = &snap.rows[3];
    assert_eq!(mystery.status, StockStatus::Healthy);
    assert_eq!(mystery.progress, 0);

    assert_eq!(snap.settings.theme, Theme::Dark);
    assert!(snap.capabilities.can_decide_requests);
}

#[test]
fn report_serializes_for_the_view_layer() {
    let dir = tempfile::tempdir().unwrap();
    let items = load_items(&write_fixture(&dir)).unwrap();

    let options = ReportOptions {
        search: Some("sham".to_string()),
        ..ReportOptions::default()
    };
    let snap = build_report(items, &options, UiSettings::default());
    let value = serde_json::to_value(&snap).unwrap();

    assert_eq!(value["role"], "employee");
    assert_eq!(value["capabilities"]["can_delete_items"], false);
    assert_eq!(value["rows"].as_array().unwrap().len(), 1);
    assert_eq!(value["rows"][0]["status"], "critical");
    assert_eq!(value["rows"][0]["progress"], 20);
    assert_eq!(value["categories"][0]["name"], "A");
    assert_eq!(value["categories"][0]["critical_count"], 1);
    assert_eq!(value["settings"]["theme"], "light");
    assert_eq!(value["overview"]["total"], 4);
}

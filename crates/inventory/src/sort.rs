//! Column sorting for the item table.

use core::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::item::InventoryItem;
use crate::numeric::finite;
use crate::status::classify;

/// Sortable column. `Status` sorts by stock-status priority.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Id,
    Name,
    Category,
    Quantity,
    RecommendedQuantity,
    WarningQuantity,
    Price,
    LastUpdated,
    Status,
}

impl core::str::FromStr for SortKey {
    type Err = String;

    /// Accepts snake_case and camelCase column names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim() {
            "id" => SortKey::Id,
            "name" => SortKey::Name,
            "category" => SortKey::Category,
            "quantity" => SortKey::Quantity,
            "recommended_quantity" | "recommendedQuantity" => SortKey::RecommendedQuantity,
            "warning_quantity" | "warningQuantity" => SortKey::WarningQuantity,
            "price" => SortKey::Price,
            "last_updated" | "lastUpdated" => SortKey::LastUpdated,
            "status" => SortKey::Status,
            other => return Err(format!("unknown sort key '{other}'")),
        };
        Ok(key)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Comparable projection of one cell. Every key yields a single variant.
#[derive(Debug, PartialEq)]
enum SortValue<'a> {
    Key(u64),
    Number(f64),
    Price(Decimal),
    Time(DateTime<Utc>),
    Text(&'a str),
}

impl SortValue<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Key(a), SortValue::Key(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Price(a), SortValue::Price(b)) => a.cmp(b),
            (SortValue::Time(a), SortValue::Time(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

fn sort_value(item: &InventoryItem, key: SortKey) -> Option<SortValue<'_>> {
    match key {
        SortKey::Id => Some(SortValue::Key(item.id.get())),
        SortKey::Name => Some(SortValue::Text(item.name.as_str())),
        // blank labels count as missing, like everywhere else
        SortKey::Category => item
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(SortValue::Text),
        SortKey::Quantity => finite(item.quantity).map(SortValue::Number),
        SortKey::RecommendedQuantity => finite(item.recommended_quantity).map(SortValue::Number),
        SortKey::WarningQuantity => finite(item.warning_quantity).map(SortValue::Number),
        SortKey::Price => item.price.map(SortValue::Price),
        SortKey::LastUpdated => item.last_updated.map(SortValue::Time),
        SortKey::Status => Some(SortValue::Number(f64::from(classify(item).priority()))),
    }
}

/// Return `items` ordered by `key`.
///
/// Missing values go last in both directions; equal values keep input order.
/// The input slice is left untouched.
pub fn sort_items<'a>(
    items: &'a [InventoryItem],
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a InventoryItem> {
    let mut keyed: Vec<(Option<SortValue<'_>>, &InventoryItem)> = items
        .iter()
        .map(|item| (sort_value(item, key), item))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => a.compare(b),
            SortDirection::Descending => b.compare(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Table sort state: which column, which way.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header click: same column flips direction, new column starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Apply the current state. With no active column, input order is kept.
    pub fn apply<'a>(&self, items: &'a [InventoryItem]) -> Vec<&'a InventoryItem> {
        match self.key {
            Some(key) => sort_items(items, key, self.direction),
            None => items.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use stockroom_core::ItemId;

    fn named(name: &str) -> InventoryItem {
        InventoryItem::new(ItemId::new(1), name)
    }

    fn names<'a>(items: &[&'a InventoryItem]) -> Vec<&'a str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn sorts_text_columns_lexically() {
        let items = vec![named("pillows"), named("bleach"), named("mops")];
        let asc = sort_items(&items, SortKey::Name, SortDirection::Ascending);
        assert_eq!(names(&asc), vec!["bleach", "mops", "pillows"]);
        let desc = sort_items(&items, SortKey::Name, SortDirection::Descending);
        assert_eq!(names(&desc), vec!["pillows", "mops", "bleach"]);
        // input untouched
        assert_eq!(items[0].name, "pillows");
    }

    #[test]
    fn ids_sort_numerically() {
        let items: Vec<InventoryItem> = [10, 9, 100]
            .into_iter()
            .map(|id| InventoryItem::new(ItemId::new(id), format!("#{id}")))
            .collect();
        let asc = sort_items(&items, SortKey::Id, SortDirection::Ascending);
        assert_eq!(names(&asc), vec!["#9", "#10", "#100"]);
    }

    #[test]
    fn blank_categories_sort_with_missing_ones() {
        let items = vec![
            named("blank").with_category("  "),
            named("linen").with_category(" Linen"),
            named("none"),
            named("bath").with_category("Bath"),
        ];
        let asc = sort_items(&items, SortKey::Category, SortDirection::Ascending);
        assert_eq!(names(&asc), vec!["bath", "linen", "blank", "none"]);
        let desc = sort_items(&items, SortKey::Category, SortDirection::Descending);
        assert_eq!(names(&desc), vec!["linen", "bath", "blank", "none"]);
    }

    #[test]
    fn missing_values_sort_last_both_ways() {
        let mut a = named("a").with_price(Decimal::from(5));
        let b = named("b");
        let c = named("c").with_price(Decimal::from(1));
        a.quantity = Some(3.0);
        let items = vec![b, a, c];

        let asc = sort_items(&items, SortKey::Price, SortDirection::Ascending);
        assert_eq!(names(&asc), vec!["c", "a", "b"]);
        let desc = sort_items(&items, SortKey::Price, SortDirection::Descending);
        assert_eq!(names(&desc), vec!["a", "c", "b"]);
    }

    #[test]
    fn prices_compare_numerically_not_lexically() {
        let items = vec![
            named("ten").with_price(Decimal::from(10)),
            named("nine").with_price(Decimal::from(9)),
        ];
        let asc = sort_items(&items, SortKey::Price, SortDirection::Ascending);
        assert_eq!(names(&asc), vec!["nine", "ten"]);
    }

    #[test]
    fn status_sorts_by_priority() {
        let items = vec![
            named("healthy").with_levels(50.0, 5.0, 10.0),
            named("warning").with_levels(8.0, 5.0, 10.0),
            named("critical").with_levels(1.0, 5.0, 10.0),
        ];
        let asc = sort_items(&items, SortKey::Status, SortDirection::Ascending);
        assert_eq!(names(&asc), vec!["critical", "warning", "healthy"]);
    }

    #[test]
    fn timestamps_compare_chronologically() {
        let t = |d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap();
        let items = vec![
            named("mid").with_last_updated(t(15)),
            named("never"),
            named("old").with_last_updated(t(1)),
        ];
        let desc = sort_items(&items, SortKey::LastUpdated, SortDirection::Descending);
        assert_eq!(names(&desc), vec!["mid", "old", "never"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec![
            named("first").with_category("Linen"),
            named("second").with_category("Linen"),
            named("third").with_category("Bath"),
        ];
        let asc = sort_items(&items, SortKey::Category, SortDirection::Ascending);
        assert_eq!(names(&asc), vec!["third", "first", "second"]);
        let desc = sort_items(&items, SortKey::Category, SortDirection::Descending);
        assert_eq!(names(&desc), vec!["first", "second", "third"]);
    }

    #[test]
    fn parses_column_names() {
        assert_eq!("lastUpdated".parse::<SortKey>(), Ok(SortKey::LastUpdated));
        assert_eq!("warning_quantity".parse::<SortKey>(), Ok(SortKey::WarningQuantity));
        assert!("colour".parse::<SortKey>().is_err());
    }

    #[test]
    fn state_machine_flips_and_resets() {
        let mut state = SortState::new();
        assert_eq!(state.key, None);
        assert_eq!(state.direction, SortDirection::Ascending);

        state.toggle(SortKey::Name);
        assert_eq!((state.key, state.direction), (Some(SortKey::Name), SortDirection::Ascending));

        state.toggle(SortKey::Name);
        assert_eq!(state.direction, SortDirection::Descending);

        state.toggle(SortKey::Price);
        assert_eq!((state.key, state.direction), (Some(SortKey::Price), SortDirection::Ascending));
    }

    #[test]
    fn initial_state_preserves_input_order() {
        let items = vec![named("z"), named("a"), named("m")];
        assert_eq!(names(&SortState::new().apply(&items)), vec!["z", "a", "m"]);
    }

    proptest! {
        #[test]
        fn sorting_is_idempotent_and_reversible(
            quantities in prop::collection::vec(prop::option::of(0u32..50), 0..30),
        ) {
            let items: Vec<InventoryItem> = quantities
                .iter()
                .enumerate()
                .map(|(i, q)| {
                    let mut item = named(&format!("item-{i}"));
                    item.quantity = q.map(f64::from);
                    item
                })
                .collect();

            let once = sort_items(&items, SortKey::Quantity, SortDirection::Ascending);
            let again = sort_items(&items, SortKey::Quantity, SortDirection::Ascending);
            prop_assert_eq!(names(&once), names(&again));

            // present values come before missing ones and are non-decreasing
            let present: Vec<f64> = once.iter().filter_map(|i| i.quantity).collect();
            prop_assert!(present.windows(2).all(|w| w[0] <= w[1]));
            let first_missing = once.iter().position(|i| i.quantity.is_none()).unwrap_or(once.len());
            prop_assert!(once[first_missing..].iter().all(|i| i.quantity.is_none()));
        }

        #[test]
        fn descending_reverses_distinct_keys(
            values in prop::collection::btree_set(0u32..1_000, 0..30),
            seed in any::<u64>(),
        ) {
            let mut values: Vec<u32> = values.into_iter().collect();
            if !values.is_empty() {
                let k = (seed as usize) % values.len();
                values.rotate_left(k);
            }
            let items: Vec<InventoryItem> = values
                .iter()
                .map(|v| named(&v.to_string()).with_levels(f64::from(*v), 0.0, 0.0))
                .collect();

            let asc = sort_items(&items, SortKey::Quantity, SortDirection::Ascending);
            let mut desc = sort_items(&items, SortKey::Quantity, SortDirection::Descending);
            desc.reverse();
            prop_assert_eq!(names(&asc), names(&desc));
        }
    }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId};

use crate::numeric;

/// Category label used for items with no (or a blank) category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// The client's copy of a stocked item.
///
/// Field names follow the backend's snake_case shape; camelCase aliases are
/// accepted too. Counts are numeric-coercible and may be unset (see
/// [`crate::numeric`]), thresholds of 0 mean "no threshold".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub quantity: Option<f64>,
    #[serde(
        default,
        alias = "recommendedQuantity",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub recommended_quantity: Option<f64>,
    #[serde(
        default,
        alias = "warningQuantity",
        deserialize_with = "numeric::lenient_f64"
    )]
    pub warning_quantity: Option<f64>,
    #[serde(default, deserialize_with = "numeric::lenient_decimal")]
    pub price: Option<Decimal>,
    #[serde(
        default,
        alias = "lastUpdated",
        deserialize_with = "numeric::lenient_timestamp"
    )]
    pub last_updated: Option<DateTime<Utc>>,
}

impl InventoryItem {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            quantity: Some(0.0),
            recommended_quantity: None,
            warning_quantity: None,
            price: None,
            last_updated: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set quantity, warning threshold and par level in one go.
    pub fn with_levels(mut self, quantity: f64, warning: f64, recommended: f64) -> Self {
        self.quantity = Some(quantity);
        self.warning_quantity = Some(warning);
        self.recommended_quantity = Some(recommended);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_last_updated(mut self, at: DateTime<Utc>) -> Self {
        self.last_updated = Some(at);
        self
    }

    /// Category label with blanks folded into [`UNCATEGORIZED`].
    pub fn resolved_category(&self) -> &str {
        match self.category.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => UNCATEGORIZED,
        }
    }

    /// On-hand value (`quantity × price`), when both are known and the
    /// product fits in a `Decimal`.
    pub fn stock_value(&self) -> Option<Decimal> {
        let quantity = numeric::finite(self.quantity)?;
        let quantity = Decimal::from_f64_retain(quantity)?;
        quantity.checked_mul(self.price?)
    }

    /// Price as `f64`, for callers that chart it.
    pub fn price_f64(&self) -> Option<f64> {
        self.price.and_then(|p| p.to_f64())
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

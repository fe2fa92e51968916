//! Edit-form state for one item.
//!
//! The form keeps `warning_quantity <= recommended_quantity` while the user
//! types, without a server round-trip. The backend is not assumed to enforce
//! the same rule, so classification never relies on it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ItemId};

use crate::item::InventoryItem;
use crate::numeric::finite;

/// Editable copy of an item's fields.
///
/// The threshold setters clamp as the user types. A draft built any other way
/// (deserialized from a saved form, say) is held to the same rule by
/// [`ItemDraft::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub id: Option<ItemId>,
    pub name: String,
    pub category: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<Decimal>,
    recommended_quantity: f64,
    warning_quantity: f64,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            category: None,
            quantity: Some(0.0),
            price: None,
            recommended_quantity: 0.0,
            warning_quantity: 0.0,
        }
    }
}

impl ItemDraft {
    /// Start a blank draft for a new item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing an existing item. Unset thresholds become 0 and an
    /// inverted pair is normalised on the way in.
    pub fn from_item(item: &InventoryItem) -> Self {
        let recommended = finite(item.recommended_quantity).unwrap_or(0.0).max(0.0);
        let warning = finite(item.warning_quantity).unwrap_or(0.0).max(0.0);
        Self {
            id: Some(item.id),
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: finite(item.quantity),
            price: item.price,
            recommended_quantity: recommended,
            warning_quantity: warning.min(recommended),
        }
    }

    pub fn recommended_quantity(&self) -> f64 {
        self.recommended_quantity
    }

    pub fn warning_quantity(&self) -> f64 {
        self.warning_quantity
    }

    /// Set the alert threshold, clamped to the current par level.
    pub fn set_warning_quantity(&mut self, value: f64) {
        let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
        self.warning_quantity = value.min(self.recommended_quantity);
    }

    /// Set the par level, pulling the alert threshold down with it.
    pub fn set_recommended_quantity(&mut self, value: f64) {
        let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
        self.recommended_quantity = value;
        if self.warning_quantity > value {
            self.warning_quantity = value;
        }
    }

    /// Check the draft before it is sent to the backend.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        match self.quantity {
            None => return Err(DomainError::validation("quantity is required")),
            Some(q) if !q.is_finite() || q < 0.0 => {
                return Err(DomainError::validation("quantity cannot be negative"));
            }
            Some(q) if q.fract() != 0.0 => {
                return Err(DomainError::validation("quantity must be a whole number"));
            }
            Some(_) => {}
        }

        let thresholds = [self.recommended_quantity, self.warning_quantity];
        if thresholds.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return Err(DomainError::validation("thresholds cannot be negative"));
        }
        if self.warning_quantity > self.recommended_quantity {
            return Err(DomainError::validation(
                "warning quantity cannot exceed recommended quantity",
            ));
        }

        match self.price {
            None => Err(DomainError::validation("price is required")),
            Some(p) if p.is_sign_negative() && !p.is_zero() => {
                Err(DomainError::validation("price cannot be negative"))
            }
            Some(_) => Ok(()),
        }
    }

    /// Validate and build the item the catalog should hold once the backend
    /// accepts the edit. New drafts carry [`ItemId::UNASSIGNED`] until the
    /// backend assigns a key.
    pub fn apply_to(&self, now: DateTime<Utc>) -> DomainResult<InventoryItem> {
        self.validate()?;

        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(InventoryItem {
            id: self.id.unwrap_or(ItemId::UNASSIGNED),
            name: self.name.trim().to_string(),
            category,
            quantity: self.quantity,
            recommended_quantity: Some(self.recommended_quantity),
            warning_quantity: Some(self.warning_quantity),
            price: self.price,
            last_updated: Some(now),
        })
    }
}

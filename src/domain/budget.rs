//! Budget entities and the pricing rules that keep them coherent.
//!
//! A budget stores its customer and product references twice on purpose:
//! the raw id (live reference, resolved again at read time) and a name
//! snapshot taken when the budget was written. Snapshots are never re-synced
//! with later entity edits; the unit value, by contrast, is only seeded from
//! the catalog and stays independently editable.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::customer::Customer;
use crate::domain::product::Product;
use crate::domain::types::TypeConstraintError;

/// Budget workflow status. Any status may be set to any other; there is no
/// enforced transition graph.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    #[default]
    Open,
    Accepted,
    Finalized,
    Refused,
}

impl BudgetStatus {
    pub const ALL: [BudgetStatus; 4] = [
        BudgetStatus::Open,
        BudgetStatus::Accepted,
        BudgetStatus::Finalized,
        BudgetStatus::Refused,
    ];
}

impl Display for BudgetStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetStatus::Open => write!(f, "open"),
            BudgetStatus::Accepted => write!(f, "accepted"),
            BudgetStatus::Finalized => write!(f, "finalized"),
            BudgetStatus::Refused => write!(f, "refused"),
        }
    }
}

impl FromStr for BudgetStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(BudgetStatus::Open),
            "accepted" => Ok(BudgetStatus::Accepted),
            "finalized" => Ok(BudgetStatus::Finalized),
            "refused" => Ok(BudgetStatus::Refused),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown budget status: {other}"
            ))),
        }
    }
}

/// One line of a budget: a product reference with a quantity and a price.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BudgetItem {
    pub product_id: i32,
    /// Name snapshot taken when the item was written.
    pub product_name: String,
    pub quantity: i32,
    /// Seeded from the catalog at selection time, then independently
    /// editable. Catalog price changes never touch stored items.
    pub unit_value: f64,
}

impl BudgetItem {
    /// Derived line total. Never stored.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_value
    }
}

/// Sum of `quantity * unit_value` over all items.
///
/// The single pricing algorithm shared by every write path, so the stored
/// total can never drift from the item list. An empty slice yields 0.0, but
/// validation rejects empty budgets before a total is ever trusted.
#[must_use]
pub fn compute_total(items: &[BudgetItem]) -> f64 {
    items.iter().map(BudgetItem::subtotal).sum()
}

/// A budget as persisted: live references plus write-time name snapshots.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: i32,
    pub customer_id: i32,
    /// Name snapshot taken when the budget was written.
    pub customer_name: String,
    pub items: Vec<BudgetItem>,
    pub total: f64,
    pub status: BudgetStatus,
    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewBudget {
    pub customer_id: i32,
    pub customer_name: String,
    pub items: Vec<BudgetItem>,
    pub total: f64,
    pub status: BudgetStatus,
    pub expires_at: NaiveDateTime,
}

impl NewBudget {
    /// Builds a new budget payload, deriving the total from the items.
    #[must_use]
    pub fn new(
        customer_id: i32,
        customer_name: String,
        items: Vec<BudgetItem>,
        status: BudgetStatus,
        expires_at: NaiveDateTime,
    ) -> Self {
        let total = compute_total(&items);
        Self {
            customer_id,
            customer_name,
            items,
            total,
            status,
            expires_at,
        }
    }
}

/// Wholesale replacement payload for an existing budget. There is no partial
/// patch: items, status and expiry are always written together.
#[derive(Clone, Debug)]
pub struct UpdateBudget {
    pub customer_id: i32,
    pub customer_name: String,
    pub items: Vec<BudgetItem>,
    pub total: f64,
    pub status: BudgetStatus,
    pub expires_at: NaiveDateTime,
}

impl UpdateBudget {
    /// Builds an update payload, deriving the total from the items.
    #[must_use]
    pub fn new(
        customer_id: i32,
        customer_name: String,
        items: Vec<BudgetItem>,
        status: BudgetStatus,
        expires_at: NaiveDateTime,
    ) -> Self {
        let total = compute_total(&items);
        Self {
            customer_id,
            customer_name,
            items,
            total,
            status,
            expires_at,
        }
    }
}

/// A budget line with its product reference resolved to the live record.
///
/// `quantity` and `unit_value` stay frozen from the stored item; the product
/// carries the live name/unit/photo for display.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct HydratedBudgetItem {
    pub product: Product,
    pub quantity: i32,
    pub unit_value: f64,
}

impl HydratedBudgetItem {
    /// Derived line total. Never stored.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_value
    }
}

/// Read-time projection of a [`Budget`] with every reference resolved.
///
/// This is the sole contract the list views and the PDF template rely on.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct HydratedBudget {
    pub id: i32,
    pub customer: Customer,
    pub items: Vec<HydratedBudgetItem>,
    pub total: f64,
    pub status: BudgetStatus,
    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

/// Catalog snapshot used to seed a new line item when a product is selected.
///
/// Seeds, not binds: the form may edit the unit value afterwards.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ItemSeed {
    pub product_id: i32,
    pub product_name: String,
    pub unit_value: f64,
}

impl From<&Product> for ItemSeed {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            unit_value: product.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: i32, quantity: i32, unit_value: f64) -> BudgetItem {
        BudgetItem {
            product_id,
            product_name: format!("Product #{product_id}"),
            quantity,
            unit_value,
        }
    }

    #[test]
    fn compute_total_sums_pairwise_products() {
        let items = vec![item(1, 2, 100.0), item(2, 3, 250.0), item(3, 1, 0.01)];
        assert_eq!(compute_total(&items), 950.01);
    }

    #[test]
    fn compute_total_is_commutative_under_reordering() {
        let mut items = vec![item(1, 5, 19.9), item(2, 2, 3.5), item(3, 7, 120.0)];
        let total = compute_total(&items);
        items.reverse();
        assert_eq!(compute_total(&items), total);
        items.swap(0, 1);
        assert_eq!(compute_total(&items), total);
    }

    #[test]
    fn compute_total_of_empty_sequence_is_zero() {
        assert_eq!(compute_total(&[]), 0.0);
    }

    #[test]
    fn new_budget_derives_total_from_items() {
        let budget = NewBudget::new(
            1,
            "Ana".to_string(),
            vec![item(1, 3, 250.0)],
            BudgetStatus::Open,
            chrono::Utc::now().naive_utc(),
        );
        assert_eq!(budget.total, 750.0);
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in BudgetStatus::ALL {
            assert_eq!(status.to_string().parse::<BudgetStatus>().unwrap(), status);
        }
        assert!("pending".parse::<BudgetStatus>().is_err());
    }

    #[test]
    fn item_seed_copies_current_catalog_values() {
        let product = Product {
            id: 7,
            name: "Consulting".to_string(),
            value: 250.0,
            ..Product::default()
        };
        let seed = ItemSeed::from(&product);
        assert_eq!(seed.product_id, 7);
        assert_eq!(seed.product_name, "Consulting");
        assert_eq!(seed.unit_value, 250.0);
    }
}

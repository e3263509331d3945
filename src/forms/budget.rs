use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::budget::BudgetStatus;

fn validate_status(status: &str) -> Result<(), ValidationError> {
    status.parse::<BudgetStatus>().map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("status");
        error.message = Some("Unknown status".into());
        error
    })
}

/// Item rows arrive as parallel vectors (one form field repeated per row);
/// every violated rule across all rows is reported, not just the first.
fn validate_items(form: &BudgetForm) -> Result<(), ValidationError> {
    let mut problems: Vec<String> = Vec::new();

    if form.product_id.is_empty() {
        problems.push("Budget must have at least one item".to_string());
    }
    if form.product_id.len() != form.quantity.len()
        || form.product_id.len() != form.unit_value.len()
    {
        problems.push("Item rows are incomplete".to_string());
    } else {
        for (index, ((product_id, quantity), unit_value)) in form
            .product_id
            .iter()
            .zip(form.quantity.iter())
            .zip(form.unit_value.iter())
            .enumerate()
        {
            let row = index + 1;
            if *product_id < 1 {
                problems.push(format!("Item {row}: select a product"));
            }
            if *quantity < 1 {
                problems.push(format!("Item {row}: quantity must be at least 1"));
            }
            if *unit_value < 0.01 {
                problems.push(format!("Item {row}: unit value must be positive"));
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        let mut error = ValidationError::new("items");
        error.message = Some(problems.join(", ").into());
        Err(error)
    }
}

#[derive(Deserialize, Validate)]
// skip_on_field_errors would hide the item problems whenever another field
// is also invalid; the aggregate must list every violated rule at once.
#[validate(schema(function = validate_items, skip_on_field_errors = false))]
/// Form data for creating or updating a budget.
pub struct BudgetForm {
    #[validate(range(min = 1, message = "Customer is required"))]
    pub customer_id: i32,
    #[validate(custom(function = validate_status))]
    pub status: String,
    /// Expiry date as `YYYY-MM-DD`.
    #[validate(length(min = 1, message = "Expiry date is required"))]
    pub expires_at: String,
    #[serde(default)]
    pub product_id: Vec<i32>,
    #[serde(default)]
    pub quantity: Vec<i32>,
    #[serde(default)]
    pub unit_value: Vec<f64>,
}

impl BudgetForm {
    /// Parsed status. Guarded by validate().
    #[must_use]
    pub fn status(&self) -> BudgetStatus {
        self.status.parse().unwrap_or_default()
    }

    /// Parses the expiry date into a timestamp at midnight.
    pub fn expires_at(&self) -> Result<NaiveDateTime, ValidationError> {
        NaiveDate::parse_from_str(&self.expires_at, "%Y-%m-%d")
            .map(|date| date.and_hms_opt(0, 0, 0).unwrap_or_default())
            .map_err(|_| {
                let mut error = ValidationError::new("expires_at");
                error.message = Some("Invalid expiry date".into());
                error
            })
    }

    /// The raw item rows as `(product_id, quantity, unit_value)` triples,
    /// in form order. Guarded by validate().
    #[must_use]
    pub fn item_rows(&self) -> Vec<(i32, i32, f64)> {
        self.product_id
            .iter()
            .zip(self.quantity.iter())
            .zip(self.unit_value.iter())
            .map(|((product_id, quantity), unit_value)| (*product_id, *quantity, *unit_value))
            .collect()
    }
}

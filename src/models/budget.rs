use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::budget::{
    Budget as DomainBudget, BudgetItem as DomainBudgetItem, BudgetStatus,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::budgets)]
/// Diesel model for the `budgets` row. Items live in their own table and
/// are assembled into [`crate::domain::budget::Budget`] by the repository.
pub struct Budget {
    pub id: i32,
    pub customer_id: i32,
    pub customer_name: String,
    pub total: f64,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(table_name = crate::schema::budget_items)]
#[diesel(belongs_to(Budget, foreign_key = budget_id))]
/// Diesel model for one `budget_items` row.
pub struct BudgetItem {
    pub id: i32,
    pub budget_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_value: f64,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::budgets)]
/// Insertable form of [`Budget`].
pub struct NewBudget<'a> {
    pub customer_id: i32,
    pub customer_name: &'a str,
    pub total: f64,
    pub status: String,
    pub expires_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::budget_items)]
/// Insertable form of [`BudgetItem`].
pub struct NewBudgetItem<'a> {
    pub budget_id: i32,
    pub product_id: i32,
    pub product_name: &'a str,
    pub quantity: i32,
    pub unit_value: f64,
    pub position: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::budgets)]
/// Data used when updating a [`Budget`] row. `created_at` stays immutable.
pub struct UpdateBudget<'a> {
    pub customer_id: i32,
    pub customer_name: &'a str,
    pub total: f64,
    pub status: String,
    pub expires_at: NaiveDateTime,
}

impl From<BudgetItem> for DomainBudgetItem {
    fn from(item: BudgetItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            unit_value: item.unit_value,
        }
    }
}

impl Budget {
    /// Assemble the domain budget from the row plus its ordered items.
    /// An unknown `status` text is a decode failure.
    pub fn into_domain(
        self,
        items: Vec<BudgetItem>,
    ) -> Result<DomainBudget, TypeConstraintError> {
        let status: BudgetStatus = self.status.parse()?;
        Ok(DomainBudget {
            id: self.id,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            items: items.into_iter().map(Into::into).collect(),
            total: self.total,
            status,
            created_at: self.created_at,
            expires_at: self.expires_at,
        })
    }
}

//! Repository implementation for budgets.
//!
//! A budget spans two tables (`budgets` + ordered `budget_items`); every
//! write touches both inside one transaction, and updates replace the item
//! list wholesale.

use diesel::prelude::*;

use crate::{
    domain::{
        budget::{Budget, BudgetItem, NewBudget, UpdateBudget},
        types::BudgetId,
    },
    models::budget::{
        Budget as DbBudget, BudgetItem as DbBudgetItem, NewBudget as DbNewBudget,
        NewBudgetItem as DbNewBudgetItem, UpdateBudget as DbUpdateBudget,
    },
    repository::{
        BudgetReader, BudgetWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn insertable_items<'a>(budget_id: i32, items: &'a [BudgetItem]) -> Vec<DbNewBudgetItem<'a>> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| DbNewBudgetItem {
            budget_id,
            product_id: item.product_id,
            product_name: item.product_name.as_str(),
            quantity: item.quantity,
            unit_value: item.unit_value,
            position: position as i32,
        })
        .collect()
}

fn load_items(
    conn: &mut crate::db::DbConnection,
    budget: &DbBudget,
) -> Result<Vec<DbBudgetItem>, diesel::result::Error> {
    use crate::schema::budget_items;

    DbBudgetItem::belonging_to(budget)
        .order(budget_items::position.asc())
        .load::<DbBudgetItem>(conn)
}

impl BudgetReader for DieselRepository {
    fn get_budget_by_id(&self, id: BudgetId) -> RepositoryResult<Option<Budget>> {
        use crate::schema::budgets;

        let mut conn = self.conn()?;
        let row = budgets::table
            .find(id.get())
            .first::<DbBudget>(&mut conn)
            .optional()?;

        match row {
            Some(row) => {
                let items = load_items(&mut conn, &row)?;
                Ok(Some(row.into_domain(items).map_err(RepositoryError::from)?))
            }
            None => Ok(None),
        }
    }

    fn list_budgets(&self) -> RepositoryResult<Vec<Budget>> {
        use crate::schema::{budget_items, budgets};

        let mut conn = self.conn()?;
        // Newest first; id breaks ties within the same timestamp.
        let rows = budgets::table
            .order((budgets::created_at.desc(), budgets::id.desc()))
            .load::<DbBudget>(&mut conn)?;

        let items = DbBudgetItem::belonging_to(&rows)
            .order(budget_items::position.asc())
            .load::<DbBudgetItem>(&mut conn)?
            .grouped_by(&rows);

        rows.into_iter()
            .zip(items)
            .map(|(row, items)| row.into_domain(items).map_err(RepositoryError::from))
            .collect()
    }
}

impl BudgetWriter for DieselRepository {
    fn create_budget(&self, new_budget: &NewBudget) -> RepositoryResult<Budget> {
        use crate::schema::{budget_items, budgets};

        let mut conn = self.conn()?;

        let row = conn.transaction::<DbBudget, diesel::result::Error, _>(|conn| {
            let db_new_budget = DbNewBudget {
                customer_id: new_budget.customer_id,
                customer_name: new_budget.customer_name.as_str(),
                total: new_budget.total,
                status: new_budget.status.to_string(),
                expires_at: new_budget.expires_at,
            };

            let row = diesel::insert_into(budgets::table)
                .values(&db_new_budget)
                .get_result::<DbBudget>(conn)?;

            diesel::insert_into(budget_items::table)
                .values(insertable_items(row.id, &new_budget.items))
                .execute(conn)?;

            Ok(row)
        })?;

        let items = load_items(&mut conn, &row)?;
        row.into_domain(items).map_err(RepositoryError::from)
    }

    fn update_budget(&self, id: BudgetId, updates: &UpdateBudget) -> RepositoryResult<Budget> {
        use crate::schema::{budget_items, budgets};

        let mut conn = self.conn()?;

        let row = conn.transaction::<DbBudget, diesel::result::Error, _>(|conn| {
            let db_updates = DbUpdateBudget {
                customer_id: updates.customer_id,
                customer_name: updates.customer_name.as_str(),
                total: updates.total,
                status: updates.status.to_string(),
                expires_at: updates.expires_at,
            };

            let row = diesel::update(budgets::table.find(id.get()))
                .set(&db_updates)
                .get_result::<DbBudget>(conn)?;

            diesel::delete(budget_items::table.filter(budget_items::budget_id.eq(row.id)))
                .execute(conn)?;
            diesel::insert_into(budget_items::table)
                .values(insertable_items(row.id, &updates.items))
                .execute(conn)?;

            Ok(row)
        })?;

        let items = load_items(&mut conn, &row)?;
        row.into_domain(items).map_err(RepositoryError::from)
    }

    fn delete_budget(&self, id: BudgetId) -> RepositoryResult<()> {
        use crate::schema::{budget_items, budgets};

        let mut conn = self.conn()?;

        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            diesel::delete(budget_items::table.filter(budget_items::budget_id.eq(id.get())))
                .execute(conn)?;
            diesel::delete(budgets::table.find(id.get())).execute(conn)?;
            Ok(())
        })?;

        Ok(())
    }
}

//! Budget services: the pricing and hydration pipeline.
//!
//! Write paths stamp customer/product name snapshots and derive the stored
//! total from the item list; read paths resolve the stored references back
//! into full records. Hydration is all-or-nothing per budget: a dangling
//! reference fails the whole record rather than dropping a line.

use std::collections::HashMap;

use chrono::Utc;
use validator::Validate;

use crate::domain::budget::{
    Budget, BudgetItem, HydratedBudget, HydratedBudgetItem, ItemSeed, NewBudget, UpdateBudget,
};
use crate::domain::types::{BudgetId, CustomerId, ProductId};
use crate::forms::budget::BudgetForm;
use crate::forms::collect_errors;
use crate::repository::errors::RepositoryError;
use crate::repository::{BudgetReader, BudgetWriter, CustomerReader, ProductReader};
use crate::services::{ServiceError, ServiceResult};

/// Resolves a stored budget into the shape every display surface consumes.
///
/// The customer and all products are looked up again (products in one
/// batched query); item order is preserved. Any reference that no longer
/// resolves fails the whole record.
pub fn hydrate_budget<R>(repo: &R, budget: &Budget) -> ServiceResult<HydratedBudget>
where
    R: CustomerReader + ProductReader + ?Sized,
{
    let customer = repo
        .get_customer_by_id(CustomerId::new(budget.customer_id)?)?
        .ok_or_else(|| {
            ServiceError::DanglingReference(format!(
                "budget {} references missing customer {}",
                budget.id, budget.customer_id
            ))
        })?;

    let ids: Vec<i32> = budget.items.iter().map(|item| item.product_id).collect();
    let products: HashMap<i32, _> = repo
        .list_products_by_ids(&ids)?
        .into_iter()
        .map(|product| (product.id, product))
        .collect();

    let items = budget
        .items
        .iter()
        .map(|item| {
            let product = products.get(&item.product_id).cloned().ok_or_else(|| {
                ServiceError::DanglingReference(format!(
                    "budget {} references missing product {}",
                    budget.id, item.product_id
                ))
            })?;
            Ok(HydratedBudgetItem {
                product,
                quantity: item.quantity,
                unit_value: item.unit_value,
            })
        })
        .collect::<ServiceResult<Vec<_>>>()?;

    Ok(HydratedBudget {
        id: budget.id,
        customer,
        items,
        total: budget.total,
        status: budget.status,
        created_at: budget.created_at,
        expires_at: budget.expires_at,
    })
}

/// Lists budgets newest first, hydrated.
///
/// A record with a dangling reference is dropped from the list with a
/// warning instead of breaking the whole view; store failures still abort.
pub fn list_budgets<R>(repo: &R) -> ServiceResult<Vec<HydratedBudget>>
where
    R: BudgetReader + CustomerReader + ProductReader + ?Sized,
{
    let budgets = repo.list_budgets().map_err(|err| {
        log::error!("Failed to list budgets: {err}");
        err
    })?;

    let mut hydrated = Vec::with_capacity(budgets.len());
    for budget in &budgets {
        match hydrate_budget(repo, budget) {
            Ok(result) => hydrated.push(result),
            Err(ServiceError::DanglingReference(reason)) => {
                log::warn!("Skipping budget {} in list view: {reason}", budget.id);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(hydrated)
}

/// Fetches and hydrates one budget. Unlike the list view, a dangling
/// reference propagates: the record cannot currently be displayed.
pub fn get_budget<R>(repo: &R, id: i32) -> ServiceResult<HydratedBudget>
where
    R: BudgetReader + CustomerReader + ProductReader + ?Sized,
{
    let budget = repo
        .get_budget_by_id(BudgetId::new(id)?)?
        .ok_or(ServiceError::NotFound)?;

    hydrate_budget(repo, &budget)
}

/// Returns the catalog's current name/price snapshot used to seed a line
/// item when the user selects a product. Seeds only: the unit value stays
/// independently editable afterwards.
pub fn select_product_for_item<R>(repo: &R, product_id: i32) -> ServiceResult<ItemSeed>
where
    R: ProductReader + ?Sized,
{
    let product = repo
        .get_product_by_id(ProductId::new(product_id)?)?
        .ok_or(ServiceError::NotFound)?;

    Ok(ItemSeed::from(&product))
}

/// Resolves the referenced products and stamps their current names into the
/// item rows. Quantities and unit values are taken from the form as-is.
fn stamp_items<R>(repo: &R, rows: &[(i32, i32, f64)]) -> ServiceResult<Vec<BudgetItem>>
where
    R: ProductReader + ?Sized,
{
    let ids: Vec<i32> = rows.iter().map(|(product_id, _, _)| *product_id).collect();
    let products: HashMap<i32, _> = repo
        .list_products_by_ids(&ids)?
        .into_iter()
        .map(|product| (product.id, product))
        .collect();

    rows.iter()
        .map(|(product_id, quantity, unit_value)| {
            let product = products.get(product_id).ok_or_else(|| {
                ServiceError::DanglingReference(format!("product {product_id} not found"))
            })?;
            Ok(BudgetItem {
                product_id: *product_id,
                product_name: product.name.clone(),
                quantity: *quantity,
                unit_value: *unit_value,
            })
        })
        .collect()
}

/// Validates the budget form and persists a new budget.
///
/// The customer name snapshot, the product name snapshots and the total are
/// all derived server-side at write time.
pub fn create_budget<R>(repo: &R, form: &BudgetForm) -> ServiceResult<Budget>
where
    R: BudgetWriter + CustomerReader + ProductReader + ?Sized,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(collect_errors(&errors)));
    }

    let expires_at = form
        .expires_at()
        .map_err(|err| ServiceError::Validation(err.message.unwrap_or_default().to_string()))?;
    if expires_at.date() <= Utc::now().date_naive() {
        return Err(ServiceError::Validation(
            "Expiry date must be in the future".to_string(),
        ));
    }

    let customer = repo
        .get_customer_by_id(CustomerId::new(form.customer_id)?)?
        .ok_or_else(|| {
            ServiceError::DanglingReference(format!("customer {} not found", form.customer_id))
        })?;

    let items = stamp_items(repo, &form.item_rows())?;
    let new_budget = NewBudget::new(
        customer.id,
        customer.name,
        items,
        form.status(),
        expires_at,
    );

    repo.create_budget(&new_budget).map_err(|err| {
        log::error!("Failed to create budget: {err}");
        err.into()
    })
}

/// Validates the budget form and replaces an existing budget wholesale.
/// `created_at` is immutable; the expiry check only applies at creation.
pub fn update_budget<R>(repo: &R, id: i32, form: &BudgetForm) -> ServiceResult<Budget>
where
    R: BudgetWriter + CustomerReader + ProductReader + ?Sized,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(collect_errors(&errors)));
    }

    let expires_at = form
        .expires_at()
        .map_err(|err| ServiceError::Validation(err.message.unwrap_or_default().to_string()))?;

    let customer = repo
        .get_customer_by_id(CustomerId::new(form.customer_id)?)?
        .ok_or_else(|| {
            ServiceError::DanglingReference(format!("customer {} not found", form.customer_id))
        })?;

    let items = stamp_items(repo, &form.item_rows())?;
    let updates = UpdateBudget::new(
        customer.id,
        customer.name,
        items,
        form.status(),
        expires_at,
    );

    repo.update_budget(BudgetId::new(id)?, &updates)
        .map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            err => {
                log::error!("Failed to update budget {id}: {err}");
                err.into()
            }
        })
}

/// Deletes a budget. No cascade: customers and products are untouched.
pub fn delete_budget<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: BudgetWriter + ?Sized,
{
    repo.delete_budget(BudgetId::new(id)?).map_err(|err| {
        log::error!("Failed to delete budget {id}: {err}");
        err.into()
    })
}

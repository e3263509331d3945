//! Catalog product services.

use validator::Validate;

use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::ProductId;
use crate::forms::collect_errors;
use crate::forms::product::ProductForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Products ordered by name ascending.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products().map_err(|err| {
        log::error!("Failed to list products: {err}");
        err.into()
    })
}

pub fn get_product<R>(repo: &R, id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(ProductId::new(id)?)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the product form and persists a new catalog record.
pub fn create_product<R>(repo: &R, form: &ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(collect_errors(&errors)));
    }

    let new_product = NewProduct::from(form);
    repo.create_product(&new_product).map_err(|err| {
        log::error!("Failed to create product: {err}");
        err.into()
    })
}

/// Validates the product form and updates the record in place. Existing
/// budget items keep the unit value copied when they were written.
pub fn update_product<R>(repo: &R, id: i32, form: &ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(collect_errors(&errors)));
    }

    let updates = UpdateProduct::from(form);
    repo.update_product(ProductId::new(id)?, &updates)
        .map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            err => {
                log::error!("Failed to update product {id}: {err}");
                err.into()
            }
        })
}

/// Deletes a product. No cascade: budgets referencing it become dangling
/// and fail hydration explicitly.
pub fn delete_product<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(ProductId::new(id)?).map_err(|err| {
        log::error!("Failed to delete product {id}: {err}");
        err.into()
    })
}

//! Customer services.

use validator::Validate;

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::CustomerId;
use crate::forms::collect_errors;
use crate::forms::customer::CustomerForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Customers ordered by name ascending.
pub fn list_customers<R>(repo: &R) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    repo.list_customers().map_err(|err| {
        log::error!("Failed to list customers: {err}");
        err.into()
    })
}

pub fn get_customer<R>(repo: &R, id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_id(CustomerId::new(id)?)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the customer form and persists a new record.
pub fn create_customer<R>(repo: &R, form: &CustomerForm) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(collect_errors(&errors)));
    }

    let new_customer = NewCustomer::from(form);
    repo.create_customer(&new_customer).map_err(|err| {
        log::error!("Failed to create customer: {err}");
        err.into()
    })
}

/// Validates the customer form and updates the record in place. Budgets
/// keep the name snapshot taken when they were written.
pub fn update_customer<R>(repo: &R, id: i32, form: &CustomerForm) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(collect_errors(&errors)));
    }

    let updates = UpdateCustomer::from(form);
    repo.update_customer(CustomerId::new(id)?, &updates)
        .map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            err => {
                log::error!("Failed to update customer {id}: {err}");
                err.into()
            }
        })
}

/// Deletes a customer. No cascade: budgets referencing it become dangling
/// and fail hydration explicitly.
pub fn delete_customer<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: CustomerWriter + ?Sized,
{
    repo.delete_customer(CustomerId::new(id)?).map_err(|err| {
        log::error!("Failed to delete customer {id}: {err}");
        err.into()
    })
}

//! Entity store gateway: keyed CRUD over the four collections.
//!
//! Each entity exposes a Reader/Writer trait pair so services can stay
//! storage-agnostic; [`DieselRepository`] is the SQLite implementation.
//! Writes never enforce that referenced customers/products still exist;
//! dangling references are detected at hydration time by the services.

use crate::{
    db::{DbConnection, DbPool},
    domain::{
        budget::{Budget, NewBudget, UpdateBudget},
        company::{CompanyInfo, UpdateCompanyInfo},
        customer::{Customer, NewCustomer, UpdateCustomer},
        product::{NewProduct, Product, UpdateProduct},
        types::{BudgetId, CustomerId, ProductId},
    },
    repository::errors::RepositoryResult,
};

pub mod budget;
pub mod company;
pub mod customer;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod product;

/// Diesel-backed repository owning the connection pool. Created once at
/// process start and cloned into the request handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Acquire a pooled connection.
    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    /// Customers ordered by name ascending (display contract).
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
}

pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update_customer(
        &self,
        id: CustomerId,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer>;
    /// No cascade: budgets referencing the customer are left untouched.
    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<()>;
}

pub trait ProductReader {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    /// Products ordered by name ascending (display contract).
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    /// Batched lookup used by hydration; missing ids are simply absent from
    /// the result, callers decide what a gap means.
    fn list_products_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Product>>;
}

pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, id: ProductId, updates: &UpdateProduct) -> RepositoryResult<Product>;
    /// No cascade: budgets referencing the product are left untouched.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
}

pub trait BudgetReader {
    fn get_budget_by_id(&self, id: BudgetId) -> RepositoryResult<Option<Budget>>;
    /// Budgets ordered by creation time descending (display contract).
    fn list_budgets(&self) -> RepositoryResult<Vec<Budget>>;
}

pub trait BudgetWriter {
    fn create_budget(&self, new_budget: &NewBudget) -> RepositoryResult<Budget>;
    /// Wholesale replacement of the stored item list, status and expiry.
    fn update_budget(&self, id: BudgetId, updates: &UpdateBudget) -> RepositoryResult<Budget>;
    fn delete_budget(&self, id: BudgetId) -> RepositoryResult<()>;
}

pub trait CompanyInfoReader {
    /// `Ok(None)` when the singleton has never been configured; this is an
    /// expected first-run state, not an error.
    fn get_company_info(&self) -> RepositoryResult<Option<CompanyInfo>>;
}

pub trait CompanyInfoWriter {
    /// Merge-on-write: `None` fields never clear stored values.
    fn update_company_info(&self, updates: &UpdateCompanyInfo) -> RepositoryResult<CompanyInfo>;
}

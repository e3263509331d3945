//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::budget::{Budget, NewBudget, UpdateBudget};
use crate::domain::company::{CompanyInfo, UpdateCompanyInfo};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::{BudgetId, CustomerId, ProductId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BudgetReader, BudgetWriter, CompanyInfoReader, CompanyInfoWriter, CustomerReader,
    CustomerWriter, ProductReader, ProductWriter,
};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    }

    impl CustomerWriter for Repository {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update_customer(
            &self,
            id: CustomerId,
            updates: &UpdateCustomer,
        ) -> RepositoryResult<Customer>;
        fn delete_customer(&self, id: CustomerId) -> RepositoryResult<()>;
    }

    impl ProductReader for Repository {
        fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
        fn list_products_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Product>>;
    }

    impl ProductWriter for Repository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(
            &self,
            id: ProductId,
            updates: &UpdateProduct,
        ) -> RepositoryResult<Product>;
        fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
    }

    impl BudgetReader for Repository {
        fn get_budget_by_id(&self, id: BudgetId) -> RepositoryResult<Option<Budget>>;
        fn list_budgets(&self) -> RepositoryResult<Vec<Budget>>;
    }

    impl BudgetWriter for Repository {
        fn create_budget(&self, new_budget: &NewBudget) -> RepositoryResult<Budget>;
        fn update_budget(&self, id: BudgetId, updates: &UpdateBudget) -> RepositoryResult<Budget>;
        fn delete_budget(&self, id: BudgetId) -> RepositoryResult<()>;
    }

    impl CompanyInfoReader for Repository {
        fn get_company_info(&self) -> RepositoryResult<Option<CompanyInfo>>;
    }

    impl CompanyInfoWriter for Repository {
        fn update_company_info(
            &self,
            updates: &UpdateCompanyInfo,
        ) -> RepositoryResult<CompanyInfo>;
    }
}

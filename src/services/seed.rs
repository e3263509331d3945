//! Demo data seeding, reachable from the settings page.
//!
//! Seeds each collection only when it is empty, so re-running the action on
//! a populated database is a no-op.

use chrono::{Days, Utc};

use crate::domain::budget::{BudgetItem, BudgetStatus, NewBudget};
use crate::domain::customer::NewCustomer;
use crate::domain::product::{NewProduct, ProductKind};
use crate::repository::{
    BudgetReader, BudgetWriter, CustomerReader, CustomerWriter, ProductReader, ProductWriter,
};
use crate::services::ServiceResult;

fn demo_customers() -> Vec<NewCustomer> {
    vec![
        NewCustomer::new(
            "Constructora Alfa".to_string(),
            "contato@alfa.com".to_string(),
            "(11) 98765-4321".to_string(),
            "12.345.678/0001-90".to_string(),
        ),
        NewCustomer::new(
            "João da Silva".to_string(),
            "joao.silva@email.com".to_string(),
            "(21) 99876-5432".to_string(),
            "123.456.789-00".to_string(),
        ),
        NewCustomer::new(
            "Maria Souza".to_string(),
            "maria.souza@email.com".to_string(),
            "(31) 98765-1234".to_string(),
            "987.654.321-00".to_string(),
        ),
        NewCustomer::new(
            "Escritório Beta".to_string(),
            "escritorio@beta.com".to_string(),
            "(41) 91234-5678".to_string(),
            "98.765.432/0001-10".to_string(),
        ),
    ]
}

fn demo_products() -> Vec<NewProduct> {
    vec![
        NewProduct::new(
            "Desenvolvimento de Website".to_string(),
            ProductKind::Service,
            "un".to_string(),
            5000.0,
            None,
        ),
        NewProduct::new(
            "Consultoria SEO".to_string(),
            ProductKind::Service,
            "h".to_string(),
            250.0,
            None,
        ),
        NewProduct::new(
            "Licença de Software".to_string(),
            ProductKind::Product,
            "un".to_string(),
            800.0,
            None,
        ),
        NewProduct::new(
            "Manutenção Mensal".to_string(),
            ProductKind::Service,
            "mês".to_string(),
            600.0,
            None,
        ),
        NewProduct::new(
            "Design de Logo".to_string(),
            ProductKind::Service,
            "un".to_string(),
            1200.0,
            None,
        ),
    ]
}

/// Populates empty collections with demo data.
pub fn seed_demo_data<R>(repo: &R) -> ServiceResult<()>
where
    R: CustomerReader
        + CustomerWriter
        + ProductReader
        + ProductWriter
        + BudgetReader
        + BudgetWriter
        + ?Sized,
{
    let mut customers = repo.list_customers()?;
    if customers.is_empty() {
        for new_customer in demo_customers() {
            customers.push(repo.create_customer(&new_customer)?);
        }
        log::info!("Seeded {} demo customers", customers.len());
    } else {
        log::info!("Customers already present, skipping seed");
    }

    let mut products = repo.list_products()?;
    if products.is_empty() {
        for new_product in demo_products() {
            products.push(repo.create_product(&new_product)?);
        }
        log::info!("Seeded {} demo products", products.len());
    } else {
        log::info!("Products already present, skipping seed");
    }

    if !repo.list_budgets()?.is_empty() {
        log::info!("Budgets already present, skipping seed");
        return Ok(());
    }

    // One sample budget per status, priced off the seeded catalog.
    customers.sort_by(|a, b| a.id.cmp(&b.id));
    products.sort_by(|a, b| a.id.cmp(&b.id));
    let statuses = [
        BudgetStatus::Accepted,
        BudgetStatus::Finalized,
        BudgetStatus::Open,
        BudgetStatus::Refused,
    ];
    let line_plans: [&[(usize, i32)]; 4] = [&[(0, 1), (3, 6)], &[(1, 10)], &[(4, 1)], &[(2, 5)]];

    let expires_at = (Utc::now() + Days::new(30)).naive_utc();
    for ((customer, status), plan) in customers.iter().zip(statuses).zip(line_plans) {
        let items: Vec<BudgetItem> = plan
            .iter()
            .filter_map(|(product_index, quantity)| products.get(*product_index).map(|p| (p, quantity)))
            .map(|(product, quantity)| BudgetItem {
                product_id: product.id,
                product_name: product.name.clone(),
                quantity: *quantity,
                unit_value: product.value,
            })
            .collect();

        let new_budget = NewBudget::new(
            customer.id,
            customer.name.clone(),
            items,
            status,
            expires_at,
        );
        repo.create_budget(&new_budget)?;
    }
    log::info!("Seeded demo budgets");

    Ok(())
}

use chrono::{Days, Utc};
use quotedesk::domain::budget::{BudgetItem, BudgetStatus, NewBudget, UpdateBudget, compute_total};
use quotedesk::domain::company::UpdateCompanyInfo;
use quotedesk::domain::customer::{NewCustomer, UpdateCustomer};
use quotedesk::domain::product::{NewProduct, ProductKind, UpdateProduct};
use quotedesk::domain::types::{BudgetId, CustomerId, ProductId};
use quotedesk::repository::DieselRepository;
use quotedesk::repository::{
    BudgetReader, BudgetWriter, CompanyInfoReader, CompanyInfoWriter, CustomerReader,
    CustomerWriter, ProductReader, ProductWriter,
};

mod common;

fn new_customer(name: &str) -> NewCustomer {
    NewCustomer::new(
        name.to_string(),
        format!("{}@example.com", name.to_lowercase()),
        "555-0100".to_string(),
        "123.456.789-00".to_string(),
    )
}

fn new_product(name: &str, value: f64) -> NewProduct {
    NewProduct::new(
        name.to_string(),
        ProductKind::Service,
        "h".to_string(),
        value,
        None,
    )
}

fn item(product_id: i32, name: &str, quantity: i32, unit_value: f64) -> BudgetItem {
    BudgetItem {
        product_id,
        product_name: name.to_string(),
        quantity,
        unit_value,
    }
}

#[test]
fn test_customer_repository_crud_and_ordering() {
    let test_db = common::TestDb::new("test_customer_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    // Inserted out of name order on purpose.
    let zoe = repo.create_customer(&new_customer("Zoe")).unwrap();
    let alice = repo.create_customer(&new_customer("Alice")).unwrap();
    let bob = repo.create_customer(&new_customer("Bob")).unwrap();

    let names: Vec<_> = repo
        .list_customers()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Alice", "Bob", "Zoe"]);

    let updates = UpdateCustomer::new(
        "Bobby".to_string(),
        bob.email.clone(),
        bob.phone.clone(),
        bob.document.clone(),
    );
    let updated = repo
        .update_customer(CustomerId::new(bob.id).unwrap(), &updates)
        .unwrap();
    assert_eq!(updated.name, "Bobby");

    repo.delete_customer(CustomerId::new(alice.id).unwrap())
        .unwrap();
    assert!(
        repo.get_customer_by_id(CustomerId::new(alice.id).unwrap())
            .unwrap()
            .is_none()
    );
    assert!(
        repo.get_customer_by_id(CustomerId::new(zoe.id).unwrap())
            .unwrap()
            .is_some()
    );
}

#[test]
fn test_product_repository_crud_and_batched_lookup() {
    let test_db = common::TestDb::new("test_product_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let consulting = repo.create_product(&new_product("Consulting", 250.0)).unwrap();
    let design = repo.create_product(&new_product("Design", 1200.0)).unwrap();
    assert_eq!(consulting.kind, ProductKind::Service);

    let names: Vec<_> = repo
        .list_products()
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Consulting", "Design"]);

    // Batched lookup ignores unknown ids.
    let found = repo
        .list_products_by_ids(&[consulting.id, design.id, 9999])
        .unwrap();
    assert_eq!(found.len(), 2);

    let updates = UpdateProduct::new(
        "Consulting Plus".to_string(),
        ProductKind::Service,
        "h".to_string(),
        300.0,
        None,
    );
    let updated = repo
        .update_product(ProductId::new(consulting.id).unwrap(), &updates)
        .unwrap();
    assert_eq!(updated.value, 300.0);

    repo.delete_product(ProductId::new(design.id).unwrap())
        .unwrap();
    assert!(
        repo.get_product_by_id(ProductId::new(design.id).unwrap())
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_budget_repository_round_trip_and_ordering() {
    let test_db = common::TestDb::new("test_budget_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let ana = repo.create_customer(&new_customer("Ana")).unwrap();
    let consulting = repo.create_product(&new_product("Consulting", 250.0)).unwrap();

    let expires_at = (Utc::now() + Days::new(30)).naive_utc();
    let first = repo
        .create_budget(&NewBudget::new(
            ana.id,
            ana.name.clone(),
            vec![item(consulting.id, "Consulting", 3, 250.0)],
            BudgetStatus::Open,
            expires_at,
        ))
        .unwrap();
    assert_eq!(first.total, 750.0);

    let second = repo
        .create_budget(&NewBudget::new(
            ana.id,
            ana.name.clone(),
            vec![item(consulting.id, "Consulting", 1, 250.0)],
            BudgetStatus::Accepted,
            expires_at,
        ))
        .unwrap();

    // Newest first.
    let listed = repo.list_budgets().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);

    // Items come back in submission order with snapshots intact.
    let fetched = repo
        .get_budget_by_id(BudgetId::new(first.id).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(fetched.items.len(), 1);
    assert_eq!(fetched.items[0].product_name, "Consulting");
    assert_eq!(fetched.total, compute_total(&fetched.items));

    // Wholesale item replacement; created_at is untouched.
    let updates = UpdateBudget::new(
        ana.id,
        ana.name.clone(),
        vec![
            item(consulting.id, "Consulting", 2, 250.0),
            item(consulting.id, "Consulting", 1, 100.0),
        ],
        BudgetStatus::Finalized,
        expires_at,
    );
    let updated = repo
        .update_budget(BudgetId::new(first.id).unwrap(), &updates)
        .unwrap();
    assert_eq!(updated.items.len(), 2);
    assert_eq!(updated.total, 600.0);
    assert_eq!(updated.status, BudgetStatus::Finalized);
    assert_eq!(updated.created_at, first.created_at);

    repo.delete_budget(BudgetId::new(second.id).unwrap())
        .unwrap();
    assert!(
        repo.get_budget_by_id(BudgetId::new(second.id).unwrap())
            .unwrap()
            .is_none()
    );
    assert_eq!(repo.list_budgets().unwrap().len(), 1);
}

#[test]
fn test_deleting_referenced_entities_leaves_budget_rows() {
    let test_db = common::TestDb::new("test_dangling_rows.db");
    let repo = DieselRepository::new(test_db.pool());

    let ana = repo.create_customer(&new_customer("Ana")).unwrap();
    let consulting = repo.create_product(&new_product("Consulting", 250.0)).unwrap();
    let budget = repo
        .create_budget(&NewBudget::new(
            ana.id,
            ana.name.clone(),
            vec![item(consulting.id, "Consulting", 3, 250.0)],
            BudgetStatus::Open,
            Utc::now().naive_utc(),
        ))
        .unwrap();

    repo.delete_product(ProductId::new(consulting.id).unwrap())
        .unwrap();
    repo.delete_customer(CustomerId::new(ana.id).unwrap())
        .unwrap();

    // The stored row survives with its snapshots; resolution is the
    // hydration layer's problem.
    let fetched = repo
        .get_budget_by_id(BudgetId::new(budget.id).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(fetched.customer_name, "Ana");
    assert_eq!(fetched.items[0].product_name, "Consulting");
}

#[test]
fn test_company_info_merge_on_write() {
    let test_db = common::TestDb::new("test_company_info.db");
    let repo = DieselRepository::new(test_db.pool());

    assert!(repo.get_company_info().unwrap().is_none());

    let saved = repo
        .update_company_info(&UpdateCompanyInfo::new(
            Some("Acme Ltda".to_string()),
            None,
        ))
        .unwrap();
    assert_eq!(saved.name.as_deref(), Some("Acme Ltda"));
    assert!(saved.logo_url.is_none());

    // A partial update keeps the previously stored field.
    let merged = repo
        .update_company_info(&UpdateCompanyInfo::new(
            None,
            Some("https://acme.example/logo.png".to_string()),
        ))
        .unwrap();
    assert_eq!(merged.name.as_deref(), Some("Acme Ltda"));
    assert_eq!(
        merged.logo_url.as_deref(),
        Some("https://acme.example/logo.png")
    );
}

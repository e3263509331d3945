use chrono::{Days, Utc};
use quotedesk::domain::product::ProductKind;
use quotedesk::domain::types::ProductId;
use quotedesk::forms::budget::BudgetForm;
use quotedesk::forms::customer::CustomerForm;
use quotedesk::forms::product::ProductForm;
use quotedesk::forms::settings::CompanyInfoForm;
use quotedesk::repository::{DieselRepository, ProductWriter};
use quotedesk::services::{
    ServiceError, budget as budget_service, customer as customer_service,
    product as product_service, seed as seed_service, settings as settings_service,
};

mod common;

fn customer_form(name: &str) -> CustomerForm {
    CustomerForm {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "555-0100".to_string(),
        document: "123.456.789-00".to_string(),
    }
}

fn product_form(name: &str, value: f64) -> ProductForm {
    ProductForm {
        name: name.to_string(),
        kind: "service".to_string(),
        unit: "h".to_string(),
        value,
        photo_url: None,
    }
}

fn future_date() -> String {
    (Utc::now() + Days::new(30)).format("%Y-%m-%d").to_string()
}

#[test]
fn test_create_and_hydrate_round_trip() {
    let test_db = common::TestDb::new("test_create_hydrate.db");
    let repo = DieselRepository::new(test_db.pool());

    let ana = customer_service::create_customer(&repo, &customer_form("Ana")).unwrap();
    let consulting = product_service::create_product(&repo, &product_form("Consulting", 250.0)).unwrap();

    let form = BudgetForm {
        customer_id: ana.id,
        status: "open".to_string(),
        expires_at: future_date(),
        product_id: vec![consulting.id],
        quantity: vec![3],
        unit_value: vec![250.0],
    };
    let created = budget_service::create_budget(&repo, &form).unwrap();

    // Snapshots and total are stamped server-side.
    assert_eq!(created.customer_name, "Ana");
    assert_eq!(created.items[0].product_name, "Consulting");
    assert_eq!(created.total, 750.0);

    let hydrated = budget_service::get_budget(&repo, created.id).unwrap();
    assert_eq!(hydrated.customer.id, ana.id);
    assert_eq!(hydrated.items[0].product.id, consulting.id);
    assert_eq!(hydrated.items[0].product.kind, ProductKind::Service);
    assert_eq!(hydrated.total, 750.0);
}

#[test]
fn test_round_trip_preserves_quantity_times_unit_value() {
    let test_db = common::TestDb::new("test_round_trip_total.db");
    let repo = DieselRepository::new(test_db.pool());

    let ana = customer_service::create_customer(&repo, &customer_form("Ana")).unwrap();
    let hosting = product_service::create_product(&repo, &product_form("Hosting", 100.0)).unwrap();

    let form = BudgetForm {
        customer_id: ana.id,
        status: "open".to_string(),
        expires_at: future_date(),
        product_id: vec![hosting.id],
        quantity: vec![2],
        unit_value: vec![100.0],
    };
    let created = budget_service::create_budget(&repo, &form).unwrap();
    assert_eq!(created.total, 200.0);

    let hydrated = budget_service::get_budget(&repo, created.id).unwrap();
    assert_eq!(hydrated.items[0].product.id, hosting.id);
    assert_eq!(hydrated.items[0].quantity, 2);
    assert_eq!(hydrated.total, 200.0);
}

#[test]
fn test_list_is_newest_first_and_isolates_dangling_records() {
    let test_db = common::TestDb::new("test_list_dangling.db");
    let repo = DieselRepository::new(test_db.pool());

    let ana = customer_service::create_customer(&repo, &customer_form("Ana")).unwrap();
    let consulting = product_service::create_product(&repo, &product_form("Consulting", 250.0)).unwrap();
    let design = product_service::create_product(&repo, &product_form("Design", 1200.0)).unwrap();

    let form = |product_id: i32| BudgetForm {
        customer_id: ana.id,
        status: "open".to_string(),
        expires_at: future_date(),
        product_id: vec![product_id],
        quantity: vec![1],
        unit_value: vec![100.0],
    };
    let first = budget_service::create_budget(&repo, &form(consulting.id)).unwrap();
    let second = budget_service::create_budget(&repo, &form(design.id)).unwrap();

    let listed = budget_service::list_budgets(&repo).unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);

    // Deleting a referenced product leaves the second budget dangling.
    repo.delete_product(ProductId::new(design.id).unwrap())
        .unwrap();

    // The single fetch fails loudly...
    let fetched = budget_service::get_budget(&repo, second.id);
    assert!(matches!(fetched, Err(ServiceError::DanglingReference(_))));

    // ...while the list drops only the broken record.
    let listed = budget_service::list_budgets(&repo).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, first.id);
}

#[test]
fn test_validation_aggregates_every_field_error() {
    let test_db = common::TestDb::new("test_validation.db");
    let repo = DieselRepository::new(test_db.pool());

    let form = BudgetForm {
        customer_id: 0,
        status: "bogus".to_string(),
        expires_at: String::new(),
        product_id: vec![],
        quantity: vec![],
        unit_value: vec![],
    };
    let err = budget_service::create_budget(&repo, &form).unwrap_err();

    match err {
        ServiceError::Validation(message) => {
            assert!(message.contains("Customer is required"));
            assert!(message.contains("Unknown status"));
            assert!(message.contains("Expiry date is required"));
            assert!(message.contains("Budget must have at least one item"));
            assert!(message.contains(", "));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_company_info_absent_then_merged() {
    let test_db = common::TestDb::new("test_company_merge.db");
    let repo = DieselRepository::new(test_db.pool());

    assert!(settings_service::load_company_info(&repo).unwrap().is_none());

    settings_service::save_company_info(
        &repo,
        &CompanyInfoForm {
            name: Some("Acme Ltda".to_string()),
            logo_url: None,
        },
    )
    .unwrap();

    let merged = settings_service::save_company_info(
        &repo,
        &CompanyInfoForm {
            name: None,
            logo_url: Some("logo.png".to_string()),
        },
    )
    .unwrap();

    assert_eq!(merged.name.as_deref(), Some("Acme Ltda"));
    assert_eq!(merged.logo_url.as_deref(), Some("logo.png"));
}

#[test]
fn test_seed_populates_then_noops() {
    let test_db = common::TestDb::new("test_seed.db");
    let repo = DieselRepository::new(test_db.pool());

    seed_service::seed_demo_data(&repo).unwrap();

    let customers = customer_service::list_customers(&repo).unwrap();
    let products = product_service::list_products(&repo).unwrap();
    let budgets = budget_service::list_budgets(&repo).unwrap();
    assert_eq!(customers.len(), 4);
    assert_eq!(products.len(), 5);
    assert_eq!(budgets.len(), 4);

    // Every seeded budget hydrates and carries a consistent total.
    for budget in &budgets {
        let expected: f64 = budget
            .items
            .iter()
            .map(|item| item.quantity as f64 * item.unit_value)
            .sum();
        assert_eq!(budget.total, expected);
    }

    // A second run must not duplicate anything.
    seed_service::seed_demo_data(&repo).unwrap();
    assert_eq!(customer_service::list_customers(&repo).unwrap().len(), 4);
    assert_eq!(product_service::list_products(&repo).unwrap().len(), 5);
    assert_eq!(budget_service::list_budgets(&repo).unwrap().len(), 4);
}

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::budget::BudgetStatus;
use crate::forms::budget::BudgetForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_service_error, redirect, render_template};
use crate::services::budget as budget_service;
use crate::services::customer as customer_service;
use crate::services::product as product_service;
use crate::services::settings as settings_service;

/// Inserts the customer and product pick lists the budget form needs.
fn insert_pick_lists(
    context: &mut tera::Context,
    repo: &DieselRepository,
) -> Result<(), HttpResponse> {
    let customers = customer_service::list_customers(repo).map_err(|err| {
        log::error!("Failed to list customers: {err}");
        HttpResponse::InternalServerError().finish()
    })?;
    let products = product_service::list_products(repo).map_err(|err| {
        log::error!("Failed to list products: {err}");
        HttpResponse::InternalServerError().finish()
    })?;

    context.insert("customers", &customers);
    context.insert("products", &products);
    context.insert("statuses", &BudgetStatus::ALL);
    Ok(())
}

#[get("/budgets")]
pub async fn show_budgets(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let budgets = match budget_service::list_budgets(repo.get_ref()) {
        Ok(budgets) => budgets,
        Err(err) => {
            log::error!("Failed to list budgets: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "budgets");
    context.insert("budgets", &budgets);

    render_template(&tera, "budgets/index.html", &context)
}

#[get("/budgets/new")]
pub async fn new_budget(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "budgets");
    if let Err(response) = insert_pick_lists(&mut context, repo.get_ref()) {
        return response;
    }

    render_template(&tera, "budgets/form.html", &context)
}

#[get("/budgets/{budget_id}")]
pub async fn show_budget(
    budget_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let budget = match budget_service::get_budget(repo.get_ref(), budget_id.into_inner()) {
        Ok(budget) => budget,
        Err(err) => {
            flash_service_error(&err, "show budget");
            return redirect("/budgets");
        }
    };
    let company_info = match settings_service::load_company_info(repo.get_ref()) {
        Ok(company_info) => company_info,
        Err(err) => {
            log::error!("Failed to load company info: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "budgets");
    if let Err(response) = insert_pick_lists(&mut context, repo.get_ref()) {
        return response;
    }
    context.insert("budget", &budget);
    context.insert("company_info", &company_info);

    render_template(&tera, "budgets/show.html", &context)
}

// The item rows arrive as repeated `product_id`/`quantity`/`unit_value`
// fields, which `web::Form` cannot decode into vectors; the body is parsed
// with `serde_html_form` instead.
#[post("/budgets/add")]
pub async fn add_budget(repo: web::Data<DieselRepository>, body: String) -> impl Responder {
    let form = match serde_html_form::from_str::<BudgetForm>(&body) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to parse budget form: {err}");
            FlashMessage::error("Invalid form submission.").send();
            return redirect("/budgets/new");
        }
    };

    match budget_service::create_budget(repo.get_ref(), &form) {
        Ok(budget) => {
            FlashMessage::success("Budget created.").send();
            redirect(&format!("/budgets/{}", budget.id))
        }
        Err(err) => {
            flash_service_error(&err, "create budget");
            redirect("/budgets/new")
        }
    }
}

#[post("/budgets/{budget_id}/save")]
pub async fn save_budget(
    budget_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    body: String,
) -> impl Responder {
    let budget_id = budget_id.into_inner();
    let form = match serde_html_form::from_str::<BudgetForm>(&body) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to parse budget form: {err}");
            FlashMessage::error("Invalid form submission.").send();
            return redirect(&format!("/budgets/{budget_id}"));
        }
    };

    match budget_service::update_budget(repo.get_ref(), budget_id, &form) {
        Ok(_) => {
            FlashMessage::success("Budget updated.").send();
            redirect(&format!("/budgets/{budget_id}"))
        }
        Err(err) => {
            flash_service_error(&err, "update budget");
            match err {
                crate::services::ServiceError::NotFound => redirect("/budgets"),
                _ => redirect(&format!("/budgets/{budget_id}")),
            }
        }
    }
}

#[post("/budgets/{budget_id}/delete")]
pub async fn delete_budget(
    budget_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match budget_service::delete_budget(repo.get_ref(), budget_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Budget deleted.").send();
        }
        Err(err) => flash_service_error(&err, "delete budget"),
    }

    redirect("/budgets")
}

use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::dashboard as dashboard_service;

#[get("/")]
pub async fn index(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let dashboard = match dashboard_service::load_dashboard(repo.get_ref()) {
        Ok(dashboard) => dashboard,
        Err(err) => {
            log::error!("Failed to load dashboard: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "dashboard");
    context.insert("customer_count", &dashboard.customer_count);
    context.insert("product_count", &dashboard.product_count);
    context.insert("budget_count", &dashboard.budget_count);
    context.insert("status_counts", &dashboard.status_counts);
    context.insert("recent_budgets", &dashboard.recent_budgets);

    render_template(&tera, "main/index.html", &context)
}

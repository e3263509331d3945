use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::settings::CompanyInfoForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_service_error, redirect, render_template};
use crate::services::seed as seed_service;
use crate::services::settings as settings_service;

#[get("/settings")]
pub async fn show_settings(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let company_info = match settings_service::load_company_info(repo.get_ref()) {
        Ok(company_info) => company_info,
        Err(err) => {
            log::error!("Failed to load company info: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "settings");
    context.insert("company_info", &company_info);

    render_template(&tera, "settings/index.html", &context)
}

#[post("/settings/save")]
pub async fn save_settings(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<CompanyInfoForm>,
) -> impl Responder {
    match settings_service::save_company_info(repo.get_ref(), &form) {
        Ok(_) => {
            FlashMessage::success("Company info saved.").send();
        }
        Err(err) => flash_service_error(&err, "save company info"),
    }

    redirect("/settings")
}

#[post("/settings/seed")]
pub async fn seed_demo_data(repo: web::Data<DieselRepository>) -> impl Responder {
    match seed_service::seed_demo_data(repo.get_ref()) {
        Ok(()) => {
            FlashMessage::success("Demo data seeded.").send();
        }
        Err(err) => flash_service_error(&err, "seed demo data"),
    }

    redirect("/settings")
}

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::customer::CustomerForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_service_error, redirect, render_template};
use crate::services::customer as customer_service;

#[get("/customers")]
pub async fn show_customers(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let customers = match customer_service::list_customers(repo.get_ref()) {
        Ok(customers) => customers,
        Err(err) => {
            log::error!("Failed to list customers: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "customers");
    context.insert("customers", &customers);

    render_template(&tera, "customers/index.html", &context)
}

#[post("/customers/add")]
pub async fn add_customer(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<CustomerForm>,
) -> impl Responder {
    match customer_service::create_customer(repo.get_ref(), &form) {
        Ok(customer) => {
            FlashMessage::success(format!("Customer {} added.", customer.name)).send();
        }
        Err(err) => flash_service_error(&err, "add customer"),
    }

    redirect("/customers")
}

#[post("/customers/{customer_id}/save")]
pub async fn save_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<CustomerForm>,
) -> impl Responder {
    match customer_service::update_customer(repo.get_ref(), customer_id.into_inner(), &form) {
        Ok(_) => {
            FlashMessage::success("Customer updated.").send();
        }
        Err(err) => flash_service_error(&err, "update customer"),
    }

    redirect("/customers")
}

#[post("/customers/{customer_id}/delete")]
pub async fn delete_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customer_service::delete_customer(repo.get_ref(), customer_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Customer deleted.").send();
        }
        Err(err) => flash_service_error(&err, "delete customer"),
    }

    redirect("/customers")
}

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::product::ProductForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_service_error, redirect, render_template};
use crate::services::product as product_service;

#[get("/products")]
pub async fn show_products(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let products = match product_service::list_products(repo.get_ref()) {
        Ok(products) => products,
        Err(err) => {
            log::error!("Failed to list products: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "products");
    context.insert("products", &products);

    render_template(&tera, "products/index.html", &context)
}

#[post("/products/add")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ProductForm>,
) -> impl Responder {
    match product_service::create_product(repo.get_ref(), &form) {
        Ok(product) => {
            FlashMessage::success(format!("Product {} added.", product.name)).send();
        }
        Err(err) => flash_service_error(&err, "add product"),
    }

    redirect("/products")
}

#[post("/products/{product_id}/save")]
pub async fn save_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ProductForm>,
) -> impl Responder {
    match product_service::update_product(repo.get_ref(), product_id.into_inner(), &form) {
        Ok(_) => {
            FlashMessage::success("Product updated.").send();
        }
        Err(err) => flash_service_error(&err, "update product"),
    }

    redirect("/products")
}

#[post("/products/{product_id}/delete")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match product_service::delete_product(repo.get_ref(), product_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Product deleted.").send();
        }
        Err(err) => flash_service_error(&err, "delete product"),
    }

    redirect("/products")
}

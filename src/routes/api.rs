//! JSON endpoints backing the budget form's live item rows.

use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::budget as budget_service;
use crate::services::product as product_service;

#[get("/v1/products")]
pub async fn api_v1_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match product_service::list_products(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Name and current price snapshot for seeding a new item row once a
/// product is picked.
#[get("/v1/products/{product_id}/seed")]
pub async fn api_v1_product_seed(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match budget_service::select_product_for_item(repo.get_ref(), product_id.into_inner()) {
        Ok(seed) => HttpResponse::Ok().json(seed),
        Err(ServiceError::NotFound) | Err(ServiceError::Validation(_)) => {
            HttpResponse::NotFound().json(json!({"error": "product not found"}))
        }
        Err(err) => {
            log::error!("Failed to seed item row: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

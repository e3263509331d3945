//! HTTP handlers and the small helpers they share.
//!
//! Handlers stay thin: parse the request, call a service, flash the
//! outcome, render or redirect. No pricing or hydration logic lives here.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod api;
pub mod budget;
pub mod customer;
pub mod main;
pub mod product;
pub mod settings;

/// See-other redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Maps a flash level to the CSS alert class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Builds the context shared by every page: alerts and navigation state.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

/// Renders a template or logs and returns a 500.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(e) => {
            log::error!("Failed to render template {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Flashes a service failure: validation messages verbatim, everything
/// else as a generic failure note.
pub fn flash_service_error(err: &ServiceError, action: &str) {
    match err {
        ServiceError::Validation(message) => {
            FlashMessage::error(message.clone()).send();
        }
        ServiceError::NotFound => {
            FlashMessage::error("Record not found.").send();
        }
        ServiceError::DanglingReference(reason) => {
            log::warn!("Failed to {action}: {reason}");
            FlashMessage::error("This record references data that no longer exists.").send();
        }
        ServiceError::Repository(err) => {
            log::error!("Failed to {action}: {err}");
            FlashMessage::error(format!("Failed to {action}. Try again.")).send();
        }
    }
}

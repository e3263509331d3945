//! Service layer: the logic between HTTP handlers and the repository.

pub mod budget;
pub mod customer;
pub mod dashboard;
pub mod errors;
pub mod product;
pub mod seed;
pub mod settings;

pub use errors::{ServiceError, ServiceResult};

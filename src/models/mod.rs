//! Diesel models mirroring the domain entities.

pub mod budget;
pub mod company;
#[cfg(feature = "server")]
pub mod config;
pub mod customer;
pub mod product;

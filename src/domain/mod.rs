pub mod budget;
pub mod company;
pub mod customer;
pub mod product;
pub mod types;

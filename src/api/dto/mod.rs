//! Request DTOs for the REST endpoints.

pub mod product_dto;

pub use product_dto::ProductBody;

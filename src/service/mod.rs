//! Service layer: mutation orchestration over store and emitter.

pub mod product_service;

pub use product_service::ProductService;

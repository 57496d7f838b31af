//! # catalog-service
//!
//! REST service for a product catalog backed by PostgreSQL, publishing a
//! change event to a Kafka topic for every successful mutation.
//!
//! The service accepts HTTP requests, validates and persists product state,
//! and notifies downstream consumers of state changes. The store write always
//! commits before the event is published, and a publish failure never rolls
//! back or fails the mutation — delivery is best-effort by design.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ProductService (service/)
//!     │       │
//!     │       ├── ProductStore (persistence/) ── PostgreSQL
//!     │       └── EventEmitter (emitter/) ────── Kafka topic
//!     │
//!     └── Domain model (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod emitter;
pub mod error;
pub mod persistence;
pub mod service;

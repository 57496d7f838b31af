//! Domain layer: product model, identity, and change events.
//!
//! Contains the catalog's core types: product identity, the persisted
//! product record, the validated draft used for mutations, and the change
//! events published after every successful mutation.

pub mod product;
pub mod product_event;
pub mod product_id;

pub use product::{Product, ProductDraft};
pub use product_event::{ChangeKind, ProductEvent};
pub use product_id::ProductId;

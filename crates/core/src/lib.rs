//! `stockroom-core` — shared domain building blocks.
//!
//! Identifiers, the domain error model and the small set of traits the
//! inventory crates build on. No IO lives here.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ItemId, UpdateRequestId, UserId};
pub use value_object::ValueObject;

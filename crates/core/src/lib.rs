//! `faktur-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod error;
pub mod money;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use money::{Percent, Rupiah};
pub use value_object::ValueObject;

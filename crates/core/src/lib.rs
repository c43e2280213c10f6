//! Core domain for the cat facts service: fact records, the immutable fact
//! store, configuration and the error taxonomy shared by every crate.

pub mod config;
pub mod domain;
pub mod errors;
pub mod store;

pub use domain::fact::{Fact, FactId};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use store::{FactPicker, FactStore, RandomFactPicker};

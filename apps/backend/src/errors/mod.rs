//! Error handling for the contacts backend.

pub mod domain;

pub use domain::{ConflictKind, DomainError, InfraErrorKind};

//! # Menu Core
//!
//! The domain layer of the menu manager.
//! This crate contains the dish model, input hygiene (sanitizers and
//! validators), the dish store and the session state machine. Storage and
//! rate limiting backends are reached only through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod security;
pub mod service;

pub use error::DomainError;

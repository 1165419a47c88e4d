//! # SNS Core
//!
//! The domain layer of the SNS backend.
//! This crate contains the identity and ownership rules with zero infrastructure dependencies:
//! entities, the ports infrastructure must implement, and the services built on top of them.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, ErrorKind};

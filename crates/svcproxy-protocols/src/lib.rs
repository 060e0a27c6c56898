//! # Svcproxy Protocols
//!
//! Shared definitions for the svcproxy client-proxy registry.
//! Contains the type-token abstraction and the error taxonomy - no
//! registry logic.
//!
//! ## Contents
//!
//! - [`ServiceTypeId`] - token identifying a declared client interface type
//! - [`RegistryError`] - lookup and construction failures

pub mod error;
pub mod service;

pub use error::RegistryError;
pub use service::ServiceTypeId;

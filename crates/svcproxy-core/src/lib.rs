//! # Svcproxy Core
//!
//! Grouped client-proxy registry: resolves named, typed client proxies
//! organized into groups.
//!
//! ## Components
//!
//! - [`ProxyRegistry`] - immutable registry answering the four read
//!   operations (type-only lookup, group-qualified lookup, group-name
//!   enumeration, per-group type enumeration)
//! - [`ProxyRegistryBuilder`] - the only mutation surface; assembles the
//!   group/binding structure once and freezes it into a registry
//!
//! An assembler populates a [`ProxyRegistryBuilder`] at startup and hands
//! the built [`ProxyRegistry`] to the application. The registry is an
//! immutable value after that point: all lookups are pure reads and need
//! no locking.

pub mod builder;
pub mod registry;

mod group;

pub use builder::ProxyRegistryBuilder;
pub use registry::ProxyRegistry;

// Re-export the shared protocol types callers need at every call site.
pub use svcproxy_protocols::{RegistryError, ServiceTypeId};

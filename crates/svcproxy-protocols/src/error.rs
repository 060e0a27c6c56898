//! Registry lookup and construction errors.
//!
//! Every variant carries the diagnostic context a developer needs to fix a
//! misconfigured group or type assignment; the registry surfaces these
//! conditions to the caller and never logs or swallows them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// A type-only lookup matched a client proxy in more than one group.
    #[error("No unique client of type {service}: bound in groups {groups:?}")]
    AmbiguousType { service: String, groups: Vec<String> },

    /// The requested group name does not exist.
    #[error("Group not found: {group} (known groups: {known:?})")]
    UnknownGroup { group: String, known: Vec<String> },

    /// The group exists but holds no binding of the requested type.
    #[error("No client of type {service} in group {group} (types present: {present:?})")]
    UnknownClientType {
        group: String,
        service: String,
        present: Vec<String>,
    },

    /// A second proxy of the same type was registered in one group.
    #[error("Client of type {service} already registered in group {group}")]
    DuplicateBinding { group: String, service: String },
}

//! The immutable client-proxy registry and its resolution algorithms.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use svcproxy_protocols::{RegistryError, ServiceTypeId};

use crate::builder::ProxyRegistryBuilder;
use crate::group::ProxyGroup;

/// A registry of client proxies organized into named groups.
///
/// Built once by [`ProxyRegistryBuilder`] and immutable afterward: all
/// operations are pure reads, so the registry can be shared across threads
/// without locking.
///
/// The two lookup operations fail differently on a miss, on purpose. A
/// type-only lookup is an underspecified request, so zero matches is a
/// legitimate `Ok(None)` while a match in several groups is an error. A
/// group-qualified lookup is fully specified, so any miss is a
/// configuration mistake and always surfaces as an error naming what was
/// requested and what actually exists.
pub struct ProxyRegistry {
    groups: HashMap<String, ProxyGroup>,
}

impl ProxyRegistry {
    pub(crate) fn new(groups: HashMap<String, ProxyGroup>) -> Self {
        Self { groups }
    }

    /// Start assembling a registry.
    pub fn builder() -> ProxyRegistryBuilder {
        ProxyRegistryBuilder::new()
    }

    /// Return the client proxy of type `P` from any group, as long as
    /// exactly one group binds that type.
    ///
    /// Returns `Ok(None)` if no group binds `P`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AmbiguousType`] if more than one group
    /// binds `P`, naming the conflicting groups.
    pub fn get_client<P: ?Sized + Send + Sync + 'static>(
        &self,
    ) -> Result<Option<Arc<P>>, RegistryError> {
        let service = ServiceTypeId::of::<P>();
        let matches: Vec<(&String, &ProxyGroup)> = self
            .groups
            .iter()
            .filter(|(_, bindings)| bindings.contains(&service))
            .collect();

        match matches.as_slice() {
            [] => Ok(None),
            [(_, bindings)] => Ok(bindings.resolve::<P>()),
            _ => {
                let mut groups: Vec<String> =
                    matches.iter().map(|(name, _)| (*name).clone()).collect();
                groups.sort();
                Err(RegistryError::AmbiguousType {
                    service: service.name().to_string(),
                    groups,
                })
            }
        }
    }

    /// Return the client proxy of type `P` from the named group.
    ///
    /// Unlike [`get_client`](Self::get_client) this never returns "no
    /// value": a fully qualified request that misses is always an error.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownGroup`] if no group has that name,
    /// or [`RegistryError::UnknownClientType`] if the group holds no
    /// binding of type `P`.
    pub fn get_client_in_group<P: ?Sized + Send + Sync + 'static>(
        &self,
        group: &str,
    ) -> Result<Arc<P>, RegistryError> {
        let bindings = self
            .groups
            .get(group)
            .ok_or_else(|| RegistryError::UnknownGroup {
                group: group.to_string(),
                known: self.sorted_group_names(),
            })?;

        let service = ServiceTypeId::of::<P>();
        bindings
            .resolve::<P>()
            .ok_or_else(|| RegistryError::UnknownClientType {
                group: group.to_string(),
                service: service.name().to_string(),
                present: bindings.sorted_type_names(),
            })
    }

    /// The names of all groups in the registry.
    ///
    /// Empty set for an empty registry; set semantics with no iteration
    /// order implied.
    pub fn group_names(&self) -> HashSet<String> {
        self.groups.keys().cloned().collect()
    }

    /// The interface types bound within the named group.
    ///
    /// An existing group with no bindings yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownGroup`] if no group has that name.
    pub fn client_types_in_group(
        &self,
        group: &str,
    ) -> Result<HashSet<ServiceTypeId>, RegistryError> {
        let bindings = self
            .groups
            .get(group)
            .ok_or_else(|| RegistryError::UnknownGroup {
                group: group.to_string(),
                known: self.sorted_group_names(),
            })?;
        Ok(bindings.service_types().collect())
    }

    fn sorted_group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

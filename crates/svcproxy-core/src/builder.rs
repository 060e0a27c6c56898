//! Build-once assembly surface for [`ProxyRegistry`].

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use svcproxy_protocols::{RegistryError, ServiceTypeId};

use crate::group::ProxyGroup;
use crate::registry::ProxyRegistry;

/// Assembles the group/binding structure for a [`ProxyRegistry`].
///
/// This is the registry's only mutation surface. An assembler populates it
/// once at startup, then calls [`build`](Self::build), which consumes the
/// builder and freezes the structure; the registry itself exposes no
/// add/remove methods, so a partially built registry can never be published
/// to readers.
#[derive(Default)]
pub struct ProxyRegistryBuilder {
    groups: HashMap<String, ProxyGroup>,
}

impl ProxyRegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a group, creating it empty if it does not exist yet.
    ///
    /// An empty group is a valid state; this makes it reachable without
    /// registering any proxy. Idempotent for groups that already exist.
    pub fn group(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if !self.groups.contains_key(&name) {
            debug!(group = %name, "declared proxy group");
            self.groups.insert(name, ProxyGroup::default());
        }
        self
    }

    /// Register a client proxy under its declared type in the named group,
    /// creating the group if needed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateBinding`] if the group already
    /// holds a proxy of the same type; the first binding stays intact.
    pub fn register<P: ?Sized + Send + Sync + 'static>(
        &mut self,
        group: impl Into<String>,
        proxy: Arc<P>,
    ) -> Result<(), RegistryError> {
        let group = group.into();
        let service = ServiceTypeId::of::<P>();

        let bindings = self.groups.entry(group.clone()).or_default();
        if bindings.contains(&service) {
            return Err(RegistryError::DuplicateBinding {
                group,
                service: service.name().to_string(),
            });
        }

        bindings.bind(proxy);
        debug!(group = %group, service = service.name(), "registered client proxy");
        Ok(())
    }

    /// Consume the builder and freeze the structure into a registry.
    pub fn build(self) -> ProxyRegistry {
        let bindings: usize = self.groups.values().map(ProxyGroup::len).sum();
        debug!(groups = self.groups.len(), bindings, "built proxy registry");
        ProxyRegistry::new(self.groups)
    }
}

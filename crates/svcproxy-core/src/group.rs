//! A single group's binding set.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use svcproxy_protocols::ServiceTypeId;

/// Type-erased holder for one client proxy.
///
/// Stores the `Arc<P>` itself (which is sized even when `P` is a trait
/// object) behind `dyn Any`, keyed in the owning group by
/// `ServiceTypeId::of::<P>()`. Because key and contents always agree, the
/// downcast on the lookup path cannot fail.
struct ProxyHolder(Box<dyn Any + Send + Sync>);

impl ProxyHolder {
    fn new<P: ?Sized + Send + Sync + 'static>(proxy: Arc<P>) -> Self {
        Self(Box::new(proxy))
    }

    fn downcast<P: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<P>> {
        self.0.downcast_ref::<Arc<P>>().cloned()
    }
}

/// The bindings of one group: one proxy per declared interface type.
///
/// Uniqueness of the type key within the group is enforced by the builder;
/// at lookup time every binding here has a distinct type.
#[derive(Default)]
pub(crate) struct ProxyGroup {
    bindings: HashMap<ServiceTypeId, ProxyHolder>,
}

impl ProxyGroup {
    pub(crate) fn contains(&self, service: &ServiceTypeId) -> bool {
        self.bindings.contains_key(service)
    }

    /// Bind a proxy under its declared type, replacing nothing: the builder
    /// checks for duplicates before calling this.
    pub(crate) fn bind<P: ?Sized + Send + Sync + 'static>(&mut self, proxy: Arc<P>) {
        let service = ServiceTypeId::of::<P>();
        debug_assert!(
            !self.bindings.contains_key(&service),
            "type {} already bound in this group",
            service
        );
        self.bindings.insert(service, ProxyHolder::new(proxy));
    }

    /// Resolve the binding for `P`, if present.
    pub(crate) fn resolve<P: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<P>> {
        self.bindings
            .get(&ServiceTypeId::of::<P>())
            .and_then(ProxyHolder::downcast)
    }

    pub(crate) fn service_types(&self) -> impl Iterator<Item = ServiceTypeId> + '_ {
        self.bindings.keys().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Type names present in this group, sorted for deterministic messages.
    pub(crate) fn sorted_type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .bindings
            .keys()
            .map(|service| service.name().to_string())
            .collect();
        names.sort();
        names
    }
}

//! Type tokens for client proxy lookup.

use std::any::{self, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Token identifying a declared client interface type.
///
/// Wraps [`TypeId`] for identity and the type name for diagnostics.
/// Two tokens are equal only when they name the same Rust type: a trait
/// object and a concrete type implementing that trait are distinct tokens,
/// so lookup is always an exact type match, never assignability.
#[derive(Debug, Clone, Copy)]
pub struct ServiceTypeId {
    id: TypeId,
    name: &'static str,
}

impl ServiceTypeId {
    /// Token for the type `P`.
    ///
    /// `P` may be a concrete proxy type or a `dyn Trait` object type.
    pub fn of<P: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<P>(),
            name: any::type_name::<P>(),
        }
    }

    /// The type name, for diagnostics.
    ///
    /// Not guaranteed stable across compiler versions; never used for
    /// identity.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

// Identity is the TypeId alone; the name is carried for messages only.
impl PartialEq for ServiceTypeId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ServiceTypeId {}

impl Hash for ServiceTypeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ServiceTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct WeatherClient;
    struct QuoteClient;

    trait Quotes: Send + Sync {}

    #[test]
    fn test_same_type_is_equal() {
        assert_eq!(
            ServiceTypeId::of::<WeatherClient>(),
            ServiceTypeId::of::<WeatherClient>()
        );
    }

    #[test]
    fn test_distinct_types_are_not_equal() {
        assert_ne!(
            ServiceTypeId::of::<WeatherClient>(),
            ServiceTypeId::of::<QuoteClient>()
        );
    }

    #[test]
    fn test_trait_object_is_its_own_token() {
        assert_ne!(
            ServiceTypeId::of::<dyn Quotes>(),
            ServiceTypeId::of::<QuoteClient>()
        );
    }

    #[test]
    fn test_name_mentions_the_type() {
        let token = ServiceTypeId::of::<WeatherClient>();
        assert!(token.name().contains("WeatherClient"));
        assert!(token.to_string().contains("WeatherClient"));
    }

    #[test]
    fn test_usable_as_set_member() {
        let mut set = HashSet::new();
        set.insert(ServiceTypeId::of::<WeatherClient>());
        set.insert(ServiceTypeId::of::<WeatherClient>());
        set.insert(ServiceTypeId::of::<QuoteClient>());
        assert_eq!(set.len(), 2);
        assert!(set.contains(&ServiceTypeId::of::<QuoteClient>()));
    }
}

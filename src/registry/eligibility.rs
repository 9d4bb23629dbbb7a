//! Transform-eligibility resolution.
//!
//! # Responsibilities
//! - Resolve an identifier occurrence to its owning complex type
//! - Decide once, and cache, whether the identifier may be rewritten
//! - Exempt caller-declared explicit names from transformation
//!
//! # Design Decisions
//! - The same logical binding is observed through independent metadata
//!   events (parameter pass, property pass); both must land on one cached
//!   decision or input and output naming diverge
//! - Decision cache writes go through the entry API: first writer wins,
//!   the predicate runs at most once per key, decisions are never
//!   overwritten
//! - Per key the state machine is Unseen → Resolved(owner) → Decided(bool),
//!   terminal once decided

use std::sync::Arc;

use dashmap::{DashMap, DashSet};

use crate::observability::metrics;
use crate::registry::complex::{ComplexTypeDescriptor, ComplexTypeRegistry};
use crate::registry::types::TypeId;

/// Which metadata pass observed the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataEvent {
    /// Input-binding pass.
    Parameter,
    /// Rendering/validation pass.
    Property,
}

/// Where a bound identifier's value may come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSource {
    Path,
    Query,
    Header,
    Form,
    Body,
    /// Composite binding that may draw from any source, path included.
    Composite,
}

impl BindingSource {
    /// True if a value bound from this source could have come from the
    /// route path. Only such identifiers are explicit-name candidates.
    pub fn is_path_compatible(self) -> bool {
        matches!(self, BindingSource::Path | BindingSource::Composite)
    }
}

/// Outcome of resolving one identifier occurrence.
#[derive(Debug, Clone)]
pub struct Eligibility {
    /// Whether the identifier may be rewritten.
    pub eligible: bool,
    /// The complex type the occurrence was resolved against, if any.
    pub owner: Option<Arc<ComplexTypeDescriptor>>,
}

/// Caller-injected transform hook; absent means "always transform".
pub type EligibilityPredicate = dyn Fn(&str) -> bool + Send + Sync;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct EligibilityKey {
    owner: Option<TypeId>,
    name: String,
    event: MetadataEvent,
}

/// Per-configuration resolver over the complex-type registry.
pub struct EligibilityResolver {
    registry: ComplexTypeRegistry,
    decisions: DashMap<EligibilityKey, bool>,
    explicit_names: DashSet<String>,
    preserve_explicit_names: bool,
    predicate: Option<Arc<EligibilityPredicate>>,
}

impl EligibilityResolver {
    pub fn new(registry: ComplexTypeRegistry, preserve_explicit_names: bool) -> Self {
        Self {
            registry,
            decisions: DashMap::new(),
            explicit_names: DashSet::new(),
            preserve_explicit_names,
            predicate: None,
        }
    }

    /// Install a caller "should transform" hook.
    pub fn with_predicate(mut self, predicate: Arc<EligibilityPredicate>) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn registry(&self) -> &ComplexTypeRegistry {
        &self.registry
    }

    /// Record a caller-declared bound name.
    ///
    /// Only identifiers whose binding source could plausibly supply a
    /// route parameter are recorded; the check happens once, at first
    /// observation. Returns whether the name was recorded. Once recorded,
    /// the exemption is global for this configuration's lifetime.
    pub fn record_explicit_name(&self, name: &str, source: BindingSource) -> bool {
        if !source.is_path_compatible() {
            return false;
        }
        let inserted = self.explicit_names.insert(name.to_string());
        if inserted {
            tracing::debug!(name, ?source, "explicit bound name recorded");
        }
        inserted
    }

    /// True if `name` has been recorded as an explicit bound name.
    pub fn is_explicit(&self, name: &str) -> bool {
        self.explicit_names.contains(name)
    }

    /// Resolve one identifier occurrence to a cached transform decision.
    ///
    /// Owner resolution, in order: direct member of the given owner type;
    /// for parameter events, member of any registered complex type; a type
    /// nested within a registered type's member graph; finally, a
    /// bootstrap registration of the owner type itself (hosts may surface
    /// property events before any parameter event for the same binding).
    pub fn resolve(
        &self,
        owner: Option<&TypeId>,
        name: &str,
        event: MetadataEvent,
    ) -> Eligibility {
        let resolved = self.resolve_owner(owner, name, event);

        let key = EligibilityKey {
            owner: resolved.as_ref().map(|d| d.id().clone()),
            name: name.to_string(),
            event,
        };

        if let Some(cached) = self.decisions.get(&key) {
            metrics::record_eligibility_decision(true);
            return Eligibility {
                eligible: *cached,
                owner: resolved,
            };
        }

        let eligible = *self.decisions.entry(key).or_insert_with(|| {
            metrics::record_eligibility_decision(false);
            self.decide(name)
        });

        Eligibility {
            eligible,
            owner: resolved,
        }
    }

    fn resolve_owner(
        &self,
        owner: Option<&TypeId>,
        name: &str,
        event: MetadataEvent,
    ) -> Option<Arc<ComplexTypeDescriptor>> {
        if let Some(owner_ty) = owner {
            if let Some(descriptor) = self.registry.get(owner_ty) {
                if descriptor.has_member(name) {
                    return Some(descriptor);
                }
            }
        }

        if event == MetadataEvent::Parameter {
            if let Some(descriptor) = self.registry.find_member_owner(name) {
                return Some(descriptor);
            }
        }

        let owner_ty = owner?;

        if let Some(root) = self
            .registry
            .registered()
            .into_iter()
            .find(|root| self.registry.is_nested_within(owner_ty, root.id()))
        {
            return Some(root);
        }

        // Bootstrap: the occurrence's own type may qualify as complex even
        // though no parameter event has registered it yet.
        self.registry.register(owner_ty)
    }

    fn decide(&self, name: &str) -> bool {
        if self.preserve_explicit_names && self.explicit_names.contains(name) {
            tracing::debug!(name, "explicit name exempt from transform");
            return false;
        }
        match &self.predicate {
            Some(predicate) => predicate(name),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::types::{MemberInfo, TypeIntrospector, TypeRef, TypeShape};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MapIntrospector {
        shapes: HashMap<TypeId, TypeShape>,
    }

    impl TypeIntrospector for MapIntrospector {
        fn shape(&self, ty: &TypeId) -> Option<TypeShape> {
            self.shapes.get(ty).cloned()
        }
    }

    fn user_model_registry() -> ComplexTypeRegistry {
        let mut shapes = HashMap::new();
        shapes.insert(
            TypeId::new("UserModel"),
            TypeShape::aggregate(vec![
                MemberInfo::new("UserName", TypeRef::plain("String")),
                MemberInfo::new("Address", TypeRef::plain("AddressModel")),
            ]),
        );
        shapes.insert(
            TypeId::new("AddressModel"),
            TypeShape::aggregate(vec![MemberInfo::new("ZipCode", TypeRef::plain("String"))]),
        );
        shapes.insert(TypeId::new("String"), TypeShape::scalar());
        ComplexTypeRegistry::new(Arc::new(MapIntrospector { shapes }))
    }

    #[test]
    fn test_parameter_and_property_agree() {
        let registry = user_model_registry();
        registry.register(&TypeId::new("UserModel")).unwrap();
        let resolver = EligibilityResolver::new(registry, true);

        let owner = TypeId::new("UserModel");
        let as_parameter = resolver.resolve(Some(&owner), "UserName", MetadataEvent::Parameter);
        let as_property = resolver.resolve(Some(&owner), "UserName", MetadataEvent::Property);

        assert!(as_parameter.eligible);
        assert!(as_property.eligible);
        assert_eq!(as_parameter.owner.unwrap().id(), &owner);
        assert_eq!(as_property.owner.unwrap().id(), &owner);
    }

    #[test]
    fn test_parameter_event_matches_any_registered_type() {
        let registry = user_model_registry();
        registry.register(&TypeId::new("UserModel")).unwrap();
        let resolver = EligibilityResolver::new(registry, true);

        // No owner supplied, but the name matches a registered member.
        let result = resolver.resolve(None, "UserName", MetadataEvent::Parameter);
        assert_eq!(result.owner.unwrap().id(), &TypeId::new("UserModel"));
    }

    #[test]
    fn test_nested_owner_resolution() {
        let registry = user_model_registry();
        registry.register(&TypeId::new("UserModel")).unwrap();
        let resolver = EligibilityResolver::new(registry, true);

        // AddressModel is nested within UserModel's member graph.
        let nested = TypeId::new("AddressModel");
        let result = resolver.resolve(Some(&nested), "ZipCode", MetadataEvent::Property);
        assert_eq!(result.owner.unwrap().id(), &TypeId::new("UserModel"));
    }

    #[test]
    fn test_bootstrap_registration_on_property_event() {
        let registry = user_model_registry();
        let resolver = EligibilityResolver::new(registry, true);

        // Nothing registered yet; the property pass arrives first.
        let owner = TypeId::new("UserModel");
        let result = resolver.resolve(Some(&owner), "UserName", MetadataEvent::Property);
        assert_eq!(result.owner.unwrap().id(), &owner);
        assert_eq!(resolver.registry().len(), 1);
    }

    #[test]
    fn test_decision_cached_without_predicate_rerun() {
        let registry = user_model_registry();
        registry.register(&TypeId::new("UserModel")).unwrap();

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let resolver = EligibilityResolver::new(registry, true).with_predicate(Arc::new(
            move |_: &str| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            },
        ));

        let owner = TypeId::new("UserModel");
        for _ in 0..3 {
            let result = resolver.resolve(Some(&owner), "UserName", MetadataEvent::Parameter);
            assert!(result.eligible);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_explicit_name_exemption() {
        let registry = user_model_registry();
        registry.register(&TypeId::new("UserModel")).unwrap();
        let resolver = EligibilityResolver::new(registry, true);

        assert!(resolver.record_explicit_name("UserName", BindingSource::Path));
        let owner = TypeId::new("UserModel");
        let result = resolver.resolve(Some(&owner), "UserName", MetadataEvent::Parameter);
        assert!(!result.eligible);
    }

    #[test]
    fn test_non_path_source_not_recorded() {
        let registry = user_model_registry();
        let resolver = EligibilityResolver::new(registry, true);

        assert!(!resolver.record_explicit_name("UserName", BindingSource::Header));
        assert!(!resolver.record_explicit_name("UserName", BindingSource::Body));
        assert!(!resolver.is_explicit("UserName"));

        assert!(resolver.record_explicit_name("UserName", BindingSource::Composite));
        assert!(resolver.is_explicit("UserName"));
    }

    #[test]
    fn test_exemption_disabled_by_config() {
        let registry = user_model_registry();
        registry.register(&TypeId::new("UserModel")).unwrap();
        let resolver = EligibilityResolver::new(registry, false);

        resolver.record_explicit_name("UserName", BindingSource::Path);
        let owner = TypeId::new("UserModel");
        let result = resolver.resolve(Some(&owner), "UserName", MetadataEvent::Parameter);
        assert!(result.eligible);
    }

    #[test]
    fn test_concurrent_resolution_converges() {
        let registry = user_model_registry();
        registry.register(&TypeId::new("UserModel")).unwrap();

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let resolver = Arc::new(EligibilityResolver::new(registry, true).with_predicate(
            Arc::new(move |_: &str| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            }),
        ));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let resolver = resolver.clone();
                std::thread::spawn(move || {
                    let owner = TypeId::new("UserModel");
                    resolver
                        .resolve(Some(&owner), "UserName", MetadataEvent::Parameter)
                        .eligible
                })
            })
            .collect();

        let outcomes: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(outcomes.iter().all(|&e| e));
        // First writer wins: one computation regardless of race order.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

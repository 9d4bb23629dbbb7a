//! Per-configuration convention context.
//!
//! # Responsibilities
//! - Wire config, converter, registry, and resolver into one object
//! - Expose the operations the framework-integration layer consumes
//! - Memoize parameter-transform results per template
//!
//! # Design Decisions
//! - One `CaseConvention` per configuration; no process-wide statics, so
//!   isolated configurations can coexist in one process (tests included)
//! - The custom-converter and should-transform hooks are injected at
//!   construction; absence of a hook means "style converter" and
//!   "always transform"
//! - The memo is keyed by the raw template: repeated route enumeration
//!   passes pay one rewrite per distinct template

use std::sync::Arc;

use dashmap::DashMap;

use crate::case::{CaseConverter, CaseStyle, CamelCase, KebabCase, PascalCase, SnakeCase};
use crate::config::ConventionConfig;
use crate::observability::metrics;
use crate::registry::{
    BindingSource, ComplexTypeDescriptor, ComplexTypeRegistry, Eligibility, EligibilityPredicate,
    EligibilityResolver, MetadataEvent, TypeId, TypeIntrospector,
};
use crate::template;

/// The convention engine for one active configuration.
pub struct CaseConvention {
    config: ConventionConfig,
    converter: Arc<dyn CaseConverter>,
    resolver: EligibilityResolver,
    template_memo: DashMap<String, String>,
}

impl CaseConvention {
    /// Build a convention from a configuration and the host's type
    /// introspection capability. Config-seeded exempt names are recorded
    /// as explicit bound names up front.
    pub fn new(config: ConventionConfig, introspector: Arc<dyn TypeIntrospector>) -> Self {
        let registry = ComplexTypeRegistry::new(introspector);
        let resolver = EligibilityResolver::new(registry, config.preserve_explicit_names);

        for name in &config.exempt_names {
            resolver.record_explicit_name(name, BindingSource::Path);
        }

        tracing::info!(
            style = %config.style,
            transform_parameters = config.transform_parameters,
            preserve_explicit_names = config.preserve_explicit_names,
            exempt = config.exempt_names.len(),
            "convention configured"
        );

        Self {
            converter: style_converter(config.style),
            config,
            resolver,
            template_memo: DashMap::new(),
        }
    }

    /// Replace the style-derived converter with a custom one.
    pub fn with_converter(mut self, converter: Arc<dyn CaseConverter>) -> Self {
        self.converter = converter;
        self
    }

    /// Install a caller "should transform" hook.
    pub fn with_predicate(mut self, predicate: Arc<EligibilityPredicate>) -> Self {
        self.resolver = self.resolver.with_predicate(predicate);
        self
    }

    pub fn config(&self) -> &ConventionConfig {
        &self.config
    }

    pub fn registry(&self) -> &ComplexTypeRegistry {
        self.resolver.registry()
    }

    /// Rewrite a single identifier in the active style.
    pub fn convert(&self, identifier: &str) -> String {
        self.converter.convert(identifier)
    }

    /// Rewrite the static segments of a route template.
    pub fn transform_template(&self, route: &str) -> String {
        metrics::record_template_transformed("segments");
        template::transform_template(route, self.converter.as_ref())
    }

    /// Rewrite the parameter names of a route template, consulting the
    /// eligibility resolver per name. Results are memoized per template.
    pub fn transform_parameters(&self, route: &str) -> String {
        if !self.config.transform_parameters {
            return route.to_string();
        }

        if let Some(memoized) = self.template_memo.get(route) {
            return memoized.value().clone();
        }

        let rewritten = self
            .template_memo
            .entry(route.to_string())
            .or_insert_with(|| {
                metrics::record_template_transformed("parameters");
                let eligible = |name: &str| {
                    self.resolver
                        .resolve(None, name, MetadataEvent::Parameter)
                        .eligible
                };
                template::transform_parameters(route, self.converter.as_ref(), Some(&eligible))
            })
            .clone();
        rewritten
    }

    /// Register a host type as complex; idempotent.
    pub fn register_complex_type(&self, ty: &TypeId) -> Option<Arc<ComplexTypeDescriptor>> {
        self.registry().register(ty)
    }

    /// Resolve whether one identifier occurrence may be rewritten.
    pub fn resolve_eligibility(
        &self,
        owner: Option<&TypeId>,
        name: &str,
        event: MetadataEvent,
    ) -> Eligibility {
        self.resolver.resolve(owner, name, event)
    }

    /// Record a caller-declared bound name observed with the given source.
    pub fn record_explicit_name(&self, name: &str, source: BindingSource) -> bool {
        self.resolver.record_explicit_name(name, source)
    }
}

fn style_converter(style: CaseStyle) -> Arc<dyn CaseConverter> {
    match style {
        CaseStyle::Kebab => Arc::new(KebabCase),
        CaseStyle::Snake => Arc::new(SnakeCase),
        CaseStyle::Camel => Arc::new(CamelCase),
        CaseStyle::Pascal => Arc::new(PascalCase),
    }
}

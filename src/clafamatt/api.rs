//! # API Facade
//!
//! [`Families`] is the single entry point for declaring and using class-family
//! attributes. It owns the host object model and the layer registry and
//! dispatches to the installer, resolver and introspection modules.
//!
//! ## Generic Over ObjectModel
//!
//! `Families<M: ObjectModel>` works with any host:
//! - In-process: `Families<ScopeGraph>`, with `define_class` / `define_trait` /
//!   `singleton_of` for building the graph.
//! - Embedded: any other `ObjectModel` implementation, via [`Families::with_model`].
//!
//! ## Namespaces
//!
//! Declarations always name their namespace. `read` / `write` use the facade's
//! default namespace (from [`FamiliesConfig`]); `read_in` / `write_in` take one.

use crate::config::FamiliesConfig;
use crate::error::{FamilyError, Result};
use crate::host::graph::ScopeGraph;
use crate::host::ObjectModel;
use crate::installer;
use crate::introspect;
use crate::layer::{validate_attribute_name, writer_name, Access, Layer};
use crate::model::{LayerId, Namespace, ScopeId, Value};
use crate::registry::LayerRegistry;
use crate::resolver;
use std::collections::HashMap;
use tracing::debug;

pub struct Families<M: ObjectModel> {
    model: M,
    registry: LayerRegistry,
    default_namespace: Namespace,
}

impl Default for Families<ScopeGraph> {
    fn default() -> Self {
        Self::new()
    }
}

impl Families<ScopeGraph> {
    pub fn new() -> Self {
        Self::with_model(ScopeGraph::new(), Namespace::default())
    }

    pub fn from_config(config: &FamiliesConfig) -> Result<Self> {
        config.validate()?;
        let graph = ScopeGraph::with_linearization(config.linearization);
        Ok(Self::with_model(graph, config.namespace()))
    }

    pub fn define_class(
        &mut self,
        name: impl Into<String>,
        superclass: Option<ScopeId>,
    ) -> Result<ScopeId> {
        self.model.define_class(name, superclass)
    }

    pub fn define_trait(&mut self, name: impl Into<String>) -> ScopeId {
        self.model.define_trait(name)
    }

    pub fn singleton_of(&mut self, class: ScopeId, name: impl Into<String>) -> Result<ScopeId> {
        self.model.singleton_of(class, name)
    }
}

impl<M: ObjectModel> Families<M> {
    pub fn with_model(model: M, default_namespace: Namespace) -> Self {
        Self {
            model,
            registry: LayerRegistry::new(),
            default_namespace,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Direct host access, e.g. to store values without going through a writer.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    pub fn default_namespace(&self) -> &Namespace {
        &self.default_namespace
    }

    pub fn scope_name(&self, scope: ScopeId) -> Result<&str> {
        self.model.name(scope)
    }

    /// Include a trait and make the layers it carries callable on `scope`.
    pub fn include(&mut self, scope: ScopeId, included: ScopeId) -> Result<()> {
        self.model.include(scope, included)?;
        installer::propagate(&mut self.model, scope, included)?;
        Ok(())
    }

    // --- Declarations ---

    pub fn declare_reader(
        &mut self,
        scope: ScopeId,
        namespace: &Namespace,
        names: &[&str],
    ) -> Result<LayerId> {
        self.declare(scope, namespace, names, Access::READ)
    }

    pub fn declare_writer(
        &mut self,
        scope: ScopeId,
        namespace: &Namespace,
        names: &[&str],
    ) -> Result<LayerId> {
        self.declare(scope, namespace, names, Access::WRITE)
    }

    pub fn declare_accessor(
        &mut self,
        scope: ScopeId,
        namespace: &Namespace,
        names: &[&str],
    ) -> Result<LayerId> {
        self.declare(scope, namespace, names, Access::READ_WRITE)
    }

    fn declare(
        &mut self,
        scope: ScopeId,
        namespace: &Namespace,
        names: &[&str],
        access: Access,
    ) -> Result<LayerId> {
        for name in names {
            validate_attribute_name(name)?;
        }
        let id = self
            .registry
            .find_or_create(&mut self.model, scope, namespace)?;
        let layer = self.registry.layer_mut(id)?;
        for name in names {
            if layer.declare(name, access) {
                debug!(%namespace, layer = %id, attribute = *name, ?access, "declared attribute");
            }
        }
        Ok(id)
    }

    // --- Access ---

    pub fn read(&self, scope: ScopeId, attribute: &str) -> Result<Value> {
        self.read_in(scope, &self.default_namespace, attribute)
    }

    pub fn write(&mut self, scope: ScopeId, attribute: &str, value: impl Into<Value>) -> Result<Value> {
        let namespace = self.default_namespace.clone();
        self.write_in(scope, &namespace, attribute, value)
    }

    /// Call the reader visible on `scope`; fails if no reader is reachable.
    pub fn read_in(&self, scope: ScopeId, namespace: &Namespace, attribute: &str) -> Result<Value> {
        match resolver::lookup(&self.registry, &self.model, scope, namespace, attribute)? {
            Some(_) => resolver::read(&self.registry, &self.model, scope, namespace, attribute),
            None => Err(FamilyError::NoSuchProcedure {
                scope: self.model.name(scope)?.to_string(),
                procedure: attribute.to_string(),
            }),
        }
    }

    pub fn write_in(
        &mut self,
        scope: ScopeId,
        namespace: &Namespace,
        attribute: &str,
        value: impl Into<Value>,
    ) -> Result<Value> {
        self.invoke(scope, namespace, &writer_name(attribute), &[value.into()])
    }

    pub fn invoke(
        &mut self,
        scope: ScopeId,
        namespace: &Namespace,
        procedure: &str,
        args: &[Value],
    ) -> Result<Value> {
        resolver::invoke(&self.registry, &mut self.model, scope, namespace, procedure, args)
    }

    pub fn responds_to(&self, scope: ScopeId, namespace: &Namespace, procedure: &str) -> Result<bool> {
        resolver::responds_to(&self.registry, &self.model, scope, namespace, procedure)
    }

    // --- Registry ---

    pub fn find_or_create(&mut self, scope: ScopeId, namespace: &Namespace) -> Result<LayerId> {
        self.registry
            .find_or_create(&mut self.model, scope, namespace)
    }

    pub fn find(&self, scope: ScopeId, namespace: &Namespace) -> Result<Option<LayerId>> {
        self.registry.find(&self.model, scope, namespace)
    }

    pub fn find_all_for(&self, scope: ScopeId, namespace: &Namespace) -> Result<Vec<LayerId>> {
        self.registry.find_all_for(&self.model, scope, namespace)
    }

    pub fn find_all_for_ancestors(
        &self,
        scope: ScopeId,
        namespace: &Namespace,
    ) -> Result<Vec<LayerId>> {
        self.registry
            .find_all_for_ancestors(&self.model, scope, namespace)
    }

    pub fn find_extended(&self, scope: ScopeId, namespace: &Namespace) -> Result<Vec<ScopeId>> {
        self.registry.find_extended(&self.model, scope, namespace)
    }

    pub fn layer(&self, id: LayerId) -> Result<&Layer> {
        self.registry.layer(id)
    }

    // --- Introspection ---

    pub fn ancestors_with(
        &self,
        scope: ScopeId,
        attribute: &str,
        namespace: &Namespace,
    ) -> Result<Vec<ScopeId>> {
        introspect::ancestors_with(&self.registry, &self.model, scope, namespace, attribute)
    }

    pub fn values_for(
        &self,
        scope: ScopeId,
        attribute: &str,
        namespace: &Namespace,
    ) -> Result<Vec<Value>> {
        introspect::values_for(&self.registry, &self.model, scope, namespace, attribute)
    }

    pub fn properties_for(
        &self,
        scope: ScopeId,
        attribute: &str,
        namespace: &Namespace,
    ) -> Result<HashMap<ScopeId, Value>> {
        introspect::properties_for(&self.registry, &self.model, scope, namespace, attribute)
    }
}

//! # Layer Registry
//!
//! Owns every [`Layer`] in an arena and guarantees at most one layer per
//! (scope, namespace). Lookups go through the host's extension chains, so the
//! registry never needs its own copy of ancestry.
//!
//! | Query | Walks | Returns |
//! |-------|-------|---------|
//! | `find` | `extension_chain(scope)` | the scope's own layer, if any |
//! | `find_all_for` | `extension_chain(scope)` | every layer of the namespace, nearest first |
//! | `find_all_for_ancestors` | `ordinary_ancestry(scope)` | each ancestor's own layer, in ancestry order |
//! | `find_extended` | scope + `ordinary_ancestry(scope)` | scopes that have their own layer |

use crate::error::{FamilyError, Result};
use crate::host::ObjectModel;
use crate::installer;
use crate::layer::{Layer, LayerKey};
use crate::model::{LayerId, Namespace, ScopeId};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct LayerRegistry {
    layers: Vec<Layer>,
    index: HashMap<LayerKey, LayerId>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layer(&self, id: LayerId) -> Result<&Layer> {
        self.layers.get(id.0).ok_or(FamilyError::UnknownLayer(id))
    }

    pub(crate) fn layer_mut(&mut self, id: LayerId) -> Result<&mut Layer> {
        self.layers.get_mut(id.0).ok_or(FamilyError::UnknownLayer(id))
    }

    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    /// The layer owned by `scope` in `namespace`, searched on its own chain.
    pub fn find<M: ObjectModel>(
        &self,
        model: &M,
        scope: ScopeId,
        namespace: &Namespace,
    ) -> Result<Option<LayerId>> {
        for id in model.extension_chain(scope)? {
            let layer = self.layer(*id)?;
            if layer.owner() == scope && layer.namespace() == namespace {
                return Ok(Some(*id));
            }
        }
        Ok(None)
    }

    pub fn find_or_create<M: ObjectModel>(
        &mut self,
        model: &mut M,
        scope: ScopeId,
        namespace: &Namespace,
    ) -> Result<LayerId> {
        if let Some(id) = self.find(&*model, scope, namespace)? {
            return Ok(id);
        }

        let key = LayerKey {
            scope,
            namespace: namespace.clone(),
        };
        if self.index.contains_key(&key) {
            return Err(FamilyError::DuplicateLayer {
                scope,
                namespace: namespace.clone(),
            });
        }

        let id = LayerId(self.layers.len());
        self.layers.push(Layer::new(id, key.clone()));
        if let Err(err) = installer::install(self, model, id) {
            self.layers.pop();
            return Err(err);
        }
        self.index.insert(key, id);
        installer::attach_to_includers(self, model, id)?;

        debug!(
            scope = model.name(scope)?,
            %namespace,
            layer = %id,
            "created layer"
        );
        Ok(id)
    }

    pub fn find_all_for<M: ObjectModel>(
        &self,
        model: &M,
        scope: ScopeId,
        namespace: &Namespace,
    ) -> Result<Vec<LayerId>> {
        let mut found = Vec::new();
        for id in model.extension_chain(scope)? {
            if self.layer(*id)?.namespace() == namespace {
                found.push(*id);
            }
        }
        Ok(found)
    }

    pub fn find_all_for_ancestors<M: ObjectModel>(
        &self,
        model: &M,
        scope: ScopeId,
        namespace: &Namespace,
    ) -> Result<Vec<LayerId>> {
        let mut found = Vec::new();
        for ancestor in model.ordinary_ancestry(scope)? {
            if let Some(id) = self.find(model, *ancestor, namespace)? {
                found.push(id);
            }
        }
        Ok(found)
    }

    pub fn find_extended<M: ObjectModel>(
        &self,
        model: &M,
        scope: ScopeId,
        namespace: &Namespace,
    ) -> Result<Vec<ScopeId>> {
        let mut candidates = vec![scope];
        for ancestor in model.ordinary_ancestry(scope)? {
            if !candidates.contains(ancestor) {
                candidates.push(*ancestor);
            }
        }

        let mut extended = Vec::new();
        for candidate in candidates {
            if self.find(model, candidate, namespace)?.is_some() {
                extended.push(candidate);
            }
        }
        Ok(extended)
    }
}

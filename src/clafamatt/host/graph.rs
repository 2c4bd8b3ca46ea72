//! In-memory host: an explicit composition graph of classes, traits and singletons.
//!
//! Base order used for linearization is: included traits (most recent include
//! first), then the superclass or, for a singleton, its class. Linearizations
//! are cached on every node and rebuilt after each structural change.

use super::linearize::Linearization;
use super::ObjectModel;
use crate::error::{FamilyError, Result};
use crate::model::{LayerId, Namespace, ScopeId, ScopeKind, Value};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone)]
struct ScopeNode {
    name: String,
    kind: ScopeKind,
    superclass: Option<ScopeId>,
    includes: Vec<ScopeId>,
    linearization: Vec<ScopeId>,
    chain: Vec<LayerId>,
    values: HashMap<(Namespace, String), Value>,
}

impl ScopeNode {
    fn new(id: ScopeId, name: String, kind: ScopeKind, superclass: Option<ScopeId>) -> Self {
        Self {
            name,
            kind,
            superclass,
            includes: Vec::new(),
            linearization: vec![id],
            chain: Vec::new(),
            values: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScopeGraph {
    nodes: Vec<ScopeNode>,
    strategy: Linearization,
}

impl ScopeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_linearization(strategy: Linearization) -> Self {
        Self {
            nodes: Vec::new(),
            strategy,
        }
    }

    pub fn linearization(&self) -> Linearization {
        self.strategy
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn scopes(&self) -> impl Iterator<Item = ScopeId> + '_ {
        (0..self.nodes.len()).map(ScopeId)
    }

    pub fn find_by_name(&self, name: &str) -> Option<ScopeId> {
        self.nodes
            .iter()
            .position(|node| node.name == name)
            .map(ScopeId)
    }

    pub fn superclass(&self, scope: ScopeId) -> Result<Option<ScopeId>> {
        Ok(self.node(scope)?.superclass)
    }

    /// Traits included directly into `scope`, in include order.
    pub fn includes(&self, scope: ScopeId) -> Result<&[ScopeId]> {
        Ok(&self.node(scope)?.includes)
    }

    pub fn define_class(
        &mut self,
        name: impl Into<String>,
        superclass: Option<ScopeId>,
    ) -> Result<ScopeId> {
        if let Some(parent) = superclass {
            self.expect_class(parent)?;
        }
        let id = ScopeId(self.nodes.len());
        self.nodes
            .push(ScopeNode::new(id, name.into(), ScopeKind::Class, superclass));
        self.relinearize()?;
        Ok(id)
    }

    pub fn define_trait(&mut self, name: impl Into<String>) -> ScopeId {
        let id = ScopeId(self.nodes.len());
        self.nodes
            .push(ScopeNode::new(id, name.into(), ScopeKind::Trait, None));
        id
    }

    /// Create the per-instance scope of one value of `class`.
    pub fn singleton_of(&mut self, class: ScopeId, name: impl Into<String>) -> Result<ScopeId> {
        self.expect_class(class)?;
        let id = ScopeId(self.nodes.len());
        self.nodes.push(ScopeNode::new(
            id,
            name.into(),
            ScopeKind::Singleton { of: class },
            None,
        ));
        self.relinearize()?;
        Ok(id)
    }

    fn node(&self, scope: ScopeId) -> Result<&ScopeNode> {
        self.nodes
            .get(scope.0)
            .ok_or(FamilyError::UnknownScope(scope))
    }

    fn node_mut(&mut self, scope: ScopeId) -> Result<&mut ScopeNode> {
        self.nodes
            .get_mut(scope.0)
            .ok_or(FamilyError::UnknownScope(scope))
    }

    fn expect_class(&self, scope: ScopeId) -> Result<()> {
        let node = self.node(scope)?;
        match node.kind {
            ScopeKind::Class => Ok(()),
            _ => Err(FamilyError::NotAClass(node.name.clone())),
        }
    }

    fn bases(&self, scope: ScopeId) -> Result<Vec<ScopeId>> {
        let node = self.node(scope)?;
        let mut bases: Vec<ScopeId> = node.includes.iter().rev().copied().collect();
        match node.kind {
            ScopeKind::Class => bases.extend(node.superclass),
            ScopeKind::Trait => {}
            ScopeKind::Singleton { of } => bases.push(of),
        }
        Ok(bases)
    }

    fn compute(&self, scope: ScopeId, memo: &mut HashMap<ScopeId, Vec<ScopeId>>) -> Result<()> {
        if memo.contains_key(&scope) {
            return Ok(());
        }
        let bases = self.bases(scope)?;
        for base in &bases {
            self.compute(*base, memo)?;
        }
        let order = self
            .strategy
            .apply(scope, &bases, memo)
            .ok_or_else(|| FamilyError::InconsistentHierarchy(self.nodes[scope.0].name.clone()))?;
        memo.insert(scope, order);
        Ok(())
    }

    /// Rebuild every cached linearization; leaves the cache untouched on failure.
    fn relinearize(&mut self) -> Result<()> {
        let mut memo = HashMap::with_capacity(self.nodes.len());
        for index in 0..self.nodes.len() {
            self.compute(ScopeId(index), &mut memo)?;
        }
        for (index, node) in self.nodes.iter_mut().enumerate() {
            if let Some(order) = memo.remove(&ScopeId(index)) {
                node.linearization = order;
            }
        }
        debug!(scopes = self.nodes.len(), strategy = %self.strategy, "relinearized scope graph");
        Ok(())
    }
}

impl ObjectModel for ScopeGraph {
    fn kind(&self, scope: ScopeId) -> Result<ScopeKind> {
        Ok(self.node(scope)?.kind)
    }

    fn name(&self, scope: ScopeId) -> Result<&str> {
        Ok(&self.node(scope)?.name)
    }

    fn ordinary_ancestry(&self, scope: ScopeId) -> Result<&[ScopeId]> {
        let node = self.node(scope)?;
        match node.kind {
            ScopeKind::Singleton { .. } => Ok(&node.linearization[1..]),
            _ => Ok(&node.linearization),
        }
    }

    fn lookup_path(&self, scope: ScopeId) -> Result<Vec<ScopeId>> {
        let mut path = Vec::new();
        let mut current = Some(scope);
        while let Some(id) = current {
            path.push(id);
            let node = self.node(id)?;
            current = match node.kind {
                ScopeKind::Class => node.superclass,
                ScopeKind::Trait => None,
                ScopeKind::Singleton { of } => Some(of),
            };
        }
        Ok(path)
    }

    fn extension_chain(&self, scope: ScopeId) -> Result<&[LayerId]> {
        Ok(&self.node(scope)?.chain)
    }

    fn prepend(&mut self, scope: ScopeId, layer: LayerId) -> Result<()> {
        let chain = &mut self.node_mut(scope)?.chain;
        chain.retain(|existing| *existing != layer);
        chain.insert(0, layer);
        Ok(())
    }

    fn value(
        &self,
        scope: ScopeId,
        namespace: &Namespace,
        attribute: &str,
    ) -> Result<Option<&Value>> {
        Ok(self
            .node(scope)?
            .values
            .get(&(namespace.clone(), attribute.to_string())))
    }

    fn set_value(
        &mut self,
        scope: ScopeId,
        namespace: &Namespace,
        attribute: &str,
        value: Value,
    ) -> Result<()> {
        self.node_mut(scope)?
            .values
            .insert((namespace.clone(), attribute.to_string()), value);
        Ok(())
    }

    fn include(&mut self, scope: ScopeId, included: ScopeId) -> Result<()> {
        let host = self.node(scope)?;
        let mixin = self.node(included)?;
        if mixin.kind != ScopeKind::Trait {
            return Err(FamilyError::NotATrait(mixin.name.clone()));
        }
        if scope == included || mixin.linearization.contains(&scope) {
            return Err(FamilyError::CyclicAncestry {
                scope: host.name.clone(),
                included: mixin.name.clone(),
            });
        }
        if host.includes.contains(&included) {
            return Ok(());
        }

        self.node_mut(scope)?.includes.push(included);
        if let Err(err) = self.relinearize() {
            self.node_mut(scope)?.includes.pop();
            return Err(err);
        }
        Ok(())
    }

    fn includers(&self, scope: ScopeId) -> Result<Vec<ScopeId>> {
        self.node(scope)?;
        let mut found = Vec::new();
        for other in self.scopes() {
            if other != scope && self.ordinary_ancestry(other)?.contains(&scope) {
                found.push(other);
            }
        }
        Ok(found)
    }
}

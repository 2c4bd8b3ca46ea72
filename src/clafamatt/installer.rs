//! # Chain Installation
//!
//! When a scope is first decorated in a namespace, its new layer must sit in
//! front of the layers its ancestors already own, in ancestry order. The host
//! only offers "insert at front", so the target order `[L, a1, a2, .., an]` is
//! built by prepending `an, .., a2, a1` and finally `L`.
//!
//! Ancestor layers are reused, never recreated: a scope decorated by many
//! descendants still contributes exactly one layer object to each of them.
//!
//! A trait can be included before it owns a layer. Its first layer is then
//! attached to every includer that could not otherwise reach it, so the
//! outcome does not depend on whether `include` or the declaration came first.

use crate::error::Result;
use crate::host::ObjectModel;
use crate::model::{LayerId, Namespace, ScopeId, ScopeKind};
use crate::registry::LayerRegistry;
use tracing::debug;

/// Layers owned by the ancestors of `scope` (excluding `scope`), in ancestry order.
pub fn ancestor_layers<M: ObjectModel>(
    registry: &LayerRegistry,
    model: &M,
    scope: ScopeId,
    namespace: &Namespace,
) -> Result<Vec<LayerId>> {
    let mut found = Vec::new();
    for ancestor in model.ordinary_ancestry(scope)? {
        if *ancestor == scope {
            continue;
        }
        if let Some(id) = registry.find(model, *ancestor, namespace)? {
            found.push(id);
        }
    }
    Ok(found)
}

/// Prepend the ancestor layers of `scope` in ancestry order, then its own
/// layer if it already has one. Returns the number of ancestor layers.
fn arrange<M: ObjectModel>(
    registry: &LayerRegistry,
    model: &mut M,
    scope: ScopeId,
    namespace: &Namespace,
) -> Result<usize> {
    let own = registry.find(&*model, scope, namespace)?;
    let ancestors = ancestor_layers(registry, &*model, scope, namespace)?;
    for ancestor in ancestors.iter().rev() {
        model.prepend(scope, *ancestor)?;
    }
    if let Some(own) = own {
        model.prepend(scope, own)?;
    }
    Ok(ancestors.len())
}

fn layer_identity(registry: &LayerRegistry, layer: LayerId) -> Result<(ScopeId, Namespace)> {
    let layer = registry.layer(layer)?;
    Ok((layer.owner(), layer.namespace().clone()))
}

/// Whether procedure lookup on `scope` already passes through `layer`.
fn reaches<M: ObjectModel>(model: &M, scope: ScopeId, layer: LayerId) -> Result<bool> {
    for id in model.lookup_path(scope)? {
        if model.extension_chain(id)?.contains(&layer) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Attach a freshly registered layer to its owner's extension chain.
pub(crate) fn install<M: ObjectModel>(
    registry: &LayerRegistry,
    model: &mut M,
    layer: LayerId,
) -> Result<()> {
    let (scope, namespace) = layer_identity(registry, layer)?;

    let ancestors = arrange(registry, model, scope, &namespace)?;
    model.prepend(scope, layer)?;

    debug!(
        scope = model.name(scope)?,
        %namespace,
        ancestors,
        "installed layer chain"
    );
    Ok(())
}

/// Hand a trait's new layer to the scopes that included the trait earlier.
///
/// Decorated includers get their whole chain re-arranged, as if they had been
/// decorated after the layer existed. Undecorated ones get the layer prepended
/// unless their lookup path already reaches it; includers are visited with the
/// shortest ancestry first so a superclass is served before its subclasses.
pub(crate) fn attach_to_includers<M: ObjectModel>(
    registry: &LayerRegistry,
    model: &mut M,
    layer: LayerId,
) -> Result<usize> {
    let (owner, namespace) = layer_identity(registry, layer)?;
    if model.kind(owner)? != ScopeKind::Trait {
        return Ok(0);
    }

    let mut includers = Vec::new();
    for scope in model.includers(owner)? {
        includers.push((model.ordinary_ancestry(scope)?.len(), scope));
    }
    includers.sort_by_key(|(depth, _)| *depth);

    let mut attached = 0;
    for (_, scope) in includers {
        if model.extension_chain(scope)?.contains(&layer) {
            continue;
        }
        if registry.find(&*model, scope, &namespace)?.is_some() {
            arrange(registry, model, scope, &namespace)?;
        } else if !reaches(&*model, scope, layer)? {
            model.prepend(scope, layer)?;
        } else {
            continue;
        }
        attached += 1;
    }

    if attached > 0 {
        debug!(
            owner = model.name(owner)?,
            %namespace,
            attached,
            "attached late trait layer to includers"
        );
    }
    Ok(attached)
}

/// Copy the layers reachable on `included` onto `host`, keeping their order.
///
/// Layers already on the host's chain stay where they are.
pub(crate) fn propagate<M: ObjectModel>(
    model: &mut M,
    host: ScopeId,
    included: ScopeId,
) -> Result<usize> {
    let incoming = model.extension_chain(included)?.to_vec();
    let mut copied = 0;
    for layer in incoming.into_iter().rev() {
        if model.extension_chain(host)?.contains(&layer) {
            continue;
        }
        model.prepend(host, layer)?;
        copied += 1;
    }
    if copied > 0 {
        debug!(
            host = model.name(host)?,
            included = model.name(included)?,
            copied,
            "propagated layers on include"
        );
    }
    Ok(copied)
}

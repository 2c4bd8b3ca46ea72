//! Aggregate queries over an attribute family.
//!
//! These report what each decorated scope stores *locally*; they never run the
//! fallback reader.

use crate::error::Result;
use crate::host::ObjectModel;
use crate::layer::writer_name;
use crate::model::{Namespace, ScopeId, Value};
use crate::registry::LayerRegistry;
use crate::resolver::responds_to;
use std::collections::HashMap;

/// Decorated scopes (nearest first, `scope` included) exposing `attribute`.
pub fn ancestors_with<M: ObjectModel>(
    registry: &LayerRegistry,
    model: &M,
    scope: ScopeId,
    namespace: &Namespace,
    attribute: &str,
) -> Result<Vec<ScopeId>> {
    let writer = writer_name(attribute);
    let mut found = Vec::new();
    for candidate in registry.find_extended(model, scope, namespace)? {
        if responds_to(registry, model, candidate, namespace, attribute)?
            || responds_to(registry, model, candidate, namespace, &writer)?
        {
            found.push(candidate);
        }
    }
    Ok(found)
}

/// Local values of `attribute` on each scope from [`ancestors_with`]; unset is `Null`.
pub fn values_for<M: ObjectModel>(
    registry: &LayerRegistry,
    model: &M,
    scope: ScopeId,
    namespace: &Namespace,
    attribute: &str,
) -> Result<Vec<Value>> {
    let mut values = Vec::new();
    for ancestor in ancestors_with(registry, model, scope, namespace, attribute)? {
        values.push(local_value(model, ancestor, namespace, attribute)?);
    }
    Ok(values)
}

pub fn properties_for<M: ObjectModel>(
    registry: &LayerRegistry,
    model: &M,
    scope: ScopeId,
    namespace: &Namespace,
    attribute: &str,
) -> Result<HashMap<ScopeId, Value>> {
    let mut properties = HashMap::new();
    for ancestor in ancestors_with(registry, model, scope, namespace, attribute)? {
        properties.insert(ancestor, local_value(model, ancestor, namespace, attribute)?);
    }
    Ok(properties)
}

fn local_value<M: ObjectModel>(
    model: &M,
    scope: ScopeId,
    namespace: &Namespace,
    attribute: &str,
) -> Result<Value> {
    Ok(model
        .value(scope, namespace, attribute)?
        .cloned()
        .unwrap_or(Value::Null))
}

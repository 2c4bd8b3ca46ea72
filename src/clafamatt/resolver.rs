//! # Accessor Resolution
//!
//! Procedure lookup and the reader/writer fallback algorithm.
//!
//! ## Lookup
//!
//! A procedure name is resolved by scanning, for each scope on the host's
//! lookup path, that scope's extension chain front to back. Only layers of the
//! requested namespace are considered; the first one defining the name wins.
//!
//! ## Reader
//!
//! 1. A value stored on the receiver itself (including `Null`) is returned.
//! 2. Otherwise the receiver's ordinary ancestry is walked, starting at the
//!    receiver's first ancestor (or at index 0 for a singleton, whose ancestry
//!    does not list itself). The first scope that responds to the reader is
//!    asked for its own value, recursively.
//! 3. No responding ancestor yields `Null`.
//!
//! The walk is recomputed on every read so traits included after the layer was
//! created are honoured.
//!
//! ## Writer
//!
//! Stores the value on the receiver only.

use crate::error::{FamilyError, Result};
use crate::host::ObjectModel;
use crate::layer::Procedure;
use crate::model::{Namespace, ScopeId, Value};
use crate::registry::LayerRegistry;
use tracing::trace;

/// Find the procedure `name` visible on `scope` in `namespace`.
pub fn lookup<M: ObjectModel>(
    registry: &LayerRegistry,
    model: &M,
    scope: ScopeId,
    namespace: &Namespace,
    name: &str,
) -> Result<Option<Procedure>> {
    for holder in model.lookup_path(scope)? {
        for id in model.extension_chain(holder)? {
            let layer = registry.layer(*id)?;
            if layer.namespace() != namespace {
                continue;
            }
            if let Some(procedure) = layer.procedure(name) {
                return Ok(Some(procedure));
            }
        }
    }
    Ok(None)
}

pub fn responds_to<M: ObjectModel>(
    registry: &LayerRegistry,
    model: &M,
    scope: ScopeId,
    namespace: &Namespace,
    name: &str,
) -> Result<bool> {
    Ok(lookup(registry, model, scope, namespace, name)?.is_some())
}

/// Run the procedure `name` with `scope` as receiver.
pub fn invoke<M: ObjectModel>(
    registry: &LayerRegistry,
    model: &mut M,
    scope: ScopeId,
    namespace: &Namespace,
    name: &str,
    args: &[Value],
) -> Result<Value> {
    let procedure = lookup(registry, &*model, scope, namespace, name)?.ok_or_else(|| {
        FamilyError::NoSuchProcedure {
            scope: model
                .name(scope)
                .map(str::to_string)
                .unwrap_or_else(|_| scope.to_string()),
            procedure: name.to_string(),
        }
    })?;

    if args.len() != procedure.arity() {
        return Err(FamilyError::WrongArity {
            procedure: procedure.name(),
            expected: procedure.arity(),
            given: args.len(),
        });
    }

    match procedure {
        Procedure::Reader(attr) => read(registry, &*model, scope, namespace, &attr),
        Procedure::Writer(attr) => {
            let value = args[0].clone();
            write(model, scope, namespace, &attr, value)
        }
    }
}

/// The reader body: local value first, then the nearest responding ancestor.
pub fn read<M: ObjectModel>(
    registry: &LayerRegistry,
    model: &M,
    scope: ScopeId,
    namespace: &Namespace,
    attribute: &str,
) -> Result<Value> {
    if let Some(value) = model.value(scope, namespace, attribute)? {
        return Ok(value.clone());
    }

    let start = if model.kind(scope)?.is_singleton() { 0 } else { 1 };
    for candidate in model.ordinary_ancestry(scope)?.iter().skip(start) {
        if responds_to(registry, model, *candidate, namespace, attribute)? {
            trace!(
                from = model.name(scope)?,
                to = model.name(*candidate)?,
                attribute,
                "reader falls back to ancestor"
            );
            return read(registry, model, *candidate, namespace, attribute);
        }
    }
    Ok(Value::Null)
}

/// The writer body. Never touches an ancestor.
pub fn write<M: ObjectModel>(
    model: &mut M,
    scope: ScopeId,
    namespace: &Namespace,
    attribute: &str,
    value: Value,
) -> Result<Value> {
    model.set_value(scope, namespace, attribute, value.clone())?;
    Ok(value)
}

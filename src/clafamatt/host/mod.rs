//! # Host Object Model
//!
//! The attribute engine never implements inheritance itself. It consumes the
//! [`ObjectModel`] trait, which answers ancestry questions and owns the
//! per-scope extension chains and value stores.
//!
//! ## Two Orders
//!
//! Every scope carries two independent orders:
//!
//! 1. **Ordinary ancestry**: the multiple-inheritance resolution order
//!    (self, included traits, superclass chain). Used by the reader fallback.
//! 2. **Extension chain**: the scope's own list of attached layers, grown only
//!    by [`ObjectModel::prepend`]. Used for procedure lookup.
//!
//! Once traits and singleton scopes are involved the two diverge, which is
//! why the resolver re-reads ordinary ancestry on every call.
//!
//! ## Lookup Path
//!
//! Procedure lookup on a scope searches the extension chains of
//! [`ObjectModel::lookup_path`] in order:
//!
//! | Kind | Lookup path |
//! |------|-------------|
//! | `Class` | self, superclass, superclass's superclass, ... |
//! | `Trait` | self |
//! | `Singleton` | self, then the lookup path of its class |
//!
//! Class-level layers are therefore visible on subclasses and singletons,
//! while a trait's layers reach an includer only when they are copied onto it.
//!
//! ## Implementations
//!
//! - [`graph::ScopeGraph`]: explicit composition graph with cached linearizations.

use crate::error::Result;
use crate::model::{LayerId, Namespace, ScopeId, ScopeKind, Value};

pub mod graph;
pub mod linearize;

/// Abstract interface to the host's scopes.
pub trait ObjectModel {
    /// The tagged kind of a scope.
    fn kind(&self, scope: ScopeId) -> Result<ScopeKind>;

    /// Human-readable scope name, used in errors and logs.
    fn name(&self, scope: ScopeId) -> Result<&str>;

    /// Resolution order without duplicates. Starts with `scope` unless it is a singleton.
    fn ordinary_ancestry(&self, scope: ScopeId) -> Result<&[ScopeId]>;

    /// Scopes whose extension chains are searched for procedures on `scope`.
    fn lookup_path(&self, scope: ScopeId) -> Result<Vec<ScopeId>>;

    /// Layers attached directly to `scope`, nearest first.
    fn extension_chain(&self, scope: ScopeId) -> Result<&[LayerId]>;

    /// Put `layer` at the front of the extension chain, moving it if already present.
    fn prepend(&mut self, scope: ScopeId, layer: LayerId) -> Result<()>;

    /// The locally stored value. `None` means never written on this scope.
    fn value(&self, scope: ScopeId, namespace: &Namespace, attribute: &str)
        -> Result<Option<&Value>>;

    /// Store a value on exactly this scope.
    fn set_value(
        &mut self,
        scope: ScopeId,
        namespace: &Namespace,
        attribute: &str,
        value: Value,
    ) -> Result<()>;

    /// Add `included` as a mixin of `scope`.
    fn include(&mut self, scope: ScopeId, included: ScopeId) -> Result<()>;

    /// Every other scope whose ordinary ancestry contains `scope`.
    fn includers(&self, scope: ScopeId) -> Result<Vec<ScopeId>>;
}

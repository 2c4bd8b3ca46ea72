use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute values are untyped; any JSON value can be stored, `Null` included.
pub use serde_json::Value;

/// Handle to a scope owned by the host object model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScopeId(pub(crate) usize);

impl ScopeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope#{}", self.0)
    }
}

/// Handle to a layer in the [`LayerRegistry`](crate::registry::LayerRegistry) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub(crate) usize);

impl LayerId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// The three kinds of scope that take part in attribute families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScopeKind {
    /// A class with at most one superclass.
    Class,

    /// A mixin that can be included into classes, singletons or other traits.
    Trait,

    /// A per-instance scope belonging to one value of class `of`.
    ///
    /// Its ordinary ancestry does not contain the singleton itself.
    Singleton { of: ScopeId },
}

impl ScopeKind {
    pub fn is_singleton(&self) -> bool {
        matches!(self, ScopeKind::Singleton { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScopeKind::Class => "class",
            ScopeKind::Trait => "trait",
            ScopeKind::Singleton { .. } => "singleton",
        }
    }
}

/// Partition key for attribute families.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace(String);

impl Namespace {
    pub const DEFAULT: &'static str = "default";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Namespace {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Namespace {
    fn from(name: String) -> Self {
        Self(name)
    }
}

//! Layers: the namespaced bundle of generated accessors attached to one scope.
//!
//! A layer records which attribute names it declares and whether each one is
//! readable, writable or both. Procedures are derived from that table:
//! a readable `foo` yields a reader named `foo`, a writable `foo` yields a
//! writer named `foo=`.

use crate::error::{FamilyError, Result};
use crate::model::{LayerId, Namespace, ScopeId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

const WRITER_SUFFIX: char = '=';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Access {
    pub readable: bool,
    pub writable: bool,
}

impl Access {
    pub const READ: Access = Access {
        readable: true,
        writable: false,
    };
    pub const WRITE: Access = Access {
        readable: false,
        writable: true,
    };
    pub const READ_WRITE: Access = Access {
        readable: true,
        writable: true,
    };

    pub fn union(self, other: Access) -> Access {
        Access {
            readable: self.readable || other.readable,
            writable: self.writable || other.writable,
        }
    }
}

/// Identity of a layer: the scope it decorates and its namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerKey {
    pub scope: ScopeId,
    pub namespace: Namespace,
}

/// A generated procedure, resolved by name from a layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Procedure {
    Reader(String),
    Writer(String),
}

impl Procedure {
    pub fn attribute(&self) -> &str {
        match self {
            Procedure::Reader(attr) | Procedure::Writer(attr) => attr,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Procedure::Reader(attr) => attr.clone(),
            Procedure::Writer(attr) => writer_name(attr),
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Procedure::Reader(_) => 0,
            Procedure::Writer(_) => 1,
        }
    }
}

pub fn writer_name(attribute: &str) -> String {
    format!("{attribute}{WRITER_SUFFIX}")
}

/// Attribute names become procedure names, so they must be non-empty and free of `=`.
pub fn validate_attribute_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains(WRITER_SUFFIX) || name.chars().any(char::is_whitespace) {
        return Err(FamilyError::InvalidAttributeName(name.to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Layer {
    id: LayerId,
    key: LayerKey,
    attributes: BTreeMap<String, Access>,
}

impl PartialEq for Layer {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Layer {}

impl Layer {
    pub(crate) fn new(id: LayerId, key: LayerKey) -> Self {
        Self {
            id,
            key,
            attributes: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn key(&self) -> &LayerKey {
        &self.key
    }

    pub fn owner(&self) -> ScopeId {
        self.key.scope
    }

    pub fn namespace(&self) -> &Namespace {
        &self.key.namespace
    }

    /// Widen the access of `attribute`; returns true if anything changed.
    pub(crate) fn declare(&mut self, attribute: &str, access: Access) -> bool {
        let entry = self.attributes.entry(attribute.to_string()).or_default();
        let widened = entry.union(access);
        let changed = widened != *entry;
        *entry = widened;
        changed
    }

    pub fn access(&self, attribute: &str) -> Option<Access> {
        self.attributes.get(attribute).copied()
    }

    pub fn declares(&self, attribute: &str) -> bool {
        self.attributes.contains_key(attribute)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, Access)> {
        self.attributes
            .iter()
            .map(|(name, access)| (name.as_str(), *access))
    }

    pub fn procedure(&self, name: &str) -> Option<Procedure> {
        match name.strip_suffix(WRITER_SUFFIX) {
            Some(attr) => self
                .access(attr)
                .filter(|access| access.writable)
                .map(|_| Procedure::Writer(attr.to_string())),
            None => self
                .access(name)
                .filter(|access| access.readable)
                .map(|_| Procedure::Reader(name.to_string())),
        }
    }

    pub fn procedure_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for (attr, access) in self.attributes() {
            if access.readable {
                names.push(attr.to_string());
            }
            if access.writable {
                names.push(writer_name(attr));
            }
        }
        names
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#<Layer:{}:{}:({})>",
            self.key.scope,
            self.key.namespace,
            self.procedure_names().join(", ")
        )
    }
}

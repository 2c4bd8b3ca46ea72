use crate::model::{LayerId, Namespace, ScopeId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FamilyError {
    #[error("undefined procedure `{procedure}` for {scope}")]
    NoSuchProcedure { scope: String, procedure: String },

    #[error("wrong number of arguments for `{procedure}` (given {given}, expected {expected})")]
    WrongArity {
        procedure: String,
        expected: usize,
        given: usize,
    },

    #[error("invalid attribute name: {0:?}")]
    InvalidAttributeName(String),

    #[error("Unknown scope: {0}")]
    UnknownScope(ScopeId),

    #[error("Unknown layer: {0}")]
    UnknownLayer(LayerId),

    #[error("{0} is not a trait and cannot be included")]
    NotATrait(String),

    #[error("{0} is not a class")]
    NotAClass(String),

    #[error("including {included} into {scope} would create a cycle")]
    CyclicAncestry { scope: String, included: String },

    #[error("cannot linearize ancestry of {0}: inconsistent hierarchy")]
    InconsistentHierarchy(String),

    /// A layer with this identity is registered but detached from its scope.
    #[error("duplicate layer for {scope} in namespace {namespace}")]
    DuplicateLayer { scope: ScopeId, namespace: Namespace },

    #[error("registry lock poisoned")]
    LockPoisoned,

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FamilyError>;

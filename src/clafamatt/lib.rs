//! # Clafamatt Architecture
//!
//! Clafamatt provides **class-family attributes**: inheritable, mutable,
//! scope-level attributes shared by classes, mixed-in traits and per-instance
//! singleton scopes.
//!
//! - Reading walks up the scope's ancestry to the nearest scope holding a value.
//! - Writing always lands on the exact scope addressed, never on an ancestor.
//! - Attributes live in namespaces, so unrelated features can reuse names.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, sync.rs)                                │
//! │  - Families<M>: declare, read/write, include, introspect    │
//! │  - SharedFamilies<M>: mutex-serialized handle               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (registry.rs, installer.rs, resolver.rs,            │
//! │          introspect.rs, layer.rs)                           │
//! │  - One layer per (scope, namespace)                         │
//! │  - Chain installation in ancestor order                     │
//! │  - Reader fallback over ordinary ancestry                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host Layer (host/)                                         │
//! │  - Abstract ObjectModel trait                               │
//! │  - ScopeGraph: explicit composition graph + linearization   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use clafamatt::api::Families;
//! use clafamatt::model::{Namespace, Value};
//!
//! let mut families = Families::new();
//! let ns = Namespace::default();
//!
//! let shared = families.define_trait("Shared");
//! families.declare_accessor(shared, &ns, &["foo"]).unwrap();
//! let parent = families.define_class("Parent", None).unwrap();
//! families.include(parent, shared).unwrap();
//! let child = families.define_class("Child", Some(parent)).unwrap();
//!
//! families.write(shared, "foo", "klaatu").unwrap();
//! assert_eq!(families.read(child, "foo").unwrap(), Value::from("klaatu"));
//!
//! families.write(parent, "foo", "nikto").unwrap();
//! assert_eq!(families.read(child, "foo").unwrap(), Value::from("nikto"));
//! assert_eq!(families.read(shared, "foo").unwrap(), Value::from("klaatu"));
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The facade; entry point for all operations
//! - [`registry`]: Layer arena and ancestry queries
//! - [`installer`]: Extension-chain installation and include propagation
//! - [`resolver`]: Procedure lookup and reader/writer fallback
//! - [`introspect`]: Aggregate queries (`ancestors_with`, `values_for`, `properties_for`)
//! - [`layer`]: Layer type and generated procedures
//! - [`host`]: Host object model trait and the in-memory `ScopeGraph`
//! - [`model`]: Ids, scope kinds, namespaces, values
//! - [`config`]: Configuration management
//! - [`sync`]: Thread-shared facade
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod host;
pub mod installer;
pub mod introspect;
pub mod layer;
pub mod model;
pub mod registry;
pub mod resolver;
pub mod sync;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;

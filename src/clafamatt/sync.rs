//! Shared handle for multi-threaded hosts.
//!
//! Creating a layer and installing it on its chain are two steps; the mutex
//! makes them one, so concurrent declarations on the same scope and namespace
//! still produce a single layer.

use crate::api::Families;
use crate::error::{FamilyError, Result};
use crate::host::ObjectModel;
use std::sync::{Arc, Mutex};

pub struct SharedFamilies<M: ObjectModel> {
    inner: Arc<Mutex<Families<M>>>,
}

impl<M: ObjectModel> Clone for SharedFamilies<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: ObjectModel> SharedFamilies<M> {
    pub fn new(families: Families<M>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(families)),
        }
    }

    /// Run `f` with exclusive access to the registry and host.
    pub fn with<R>(&self, f: impl FnOnce(&mut Families<M>) -> Result<R>) -> Result<R> {
        let mut guard = self.inner.lock().map_err(|_| FamilyError::LockPoisoned)?;
        f(&mut guard)
    }
}

//! # In-Memory Repository
//!
//! The [`InMemoryRepository`] is the authoritative table of resources for one resource kind.
//! It owns every stored record; reads hand out clones, so the only way to change a stored
//! resource is to write a new copy back through [`update`](InMemoryRepository::update).
//!
//! [`modify`](InMemoryRepository::modify) runs a read-modify-write in a single call, which is
//! what the store actor uses for metadata changes.
//!
//! Reads are tenant-isolated: a record owned by another tenant is reported exactly like a
//! missing one. Update's existence check only looks at the ID, not the tenant.
//!
//! The repository itself is not synchronized. Wrap it in a [`StoreActor`](crate::StoreActor)
//! when more than one caller needs access.

use crate::entity::{TenantEntity, TenantId};
use crate::error::StoreError;
use crate::metadata::MetadataError;
use crate::page::{ListQuery, Page};
use std::collections::BTreeMap;
use tracing::debug;

pub struct InMemoryRepository<T: TenantEntity> {
    store: BTreeMap<T::Id, T>,
}

impl<T: TenantEntity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TenantEntity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns a copy of the resource stored under `id` if it belongs to `tenant`.
    pub fn get_by_id(&self, tenant: &TenantId, id: &T::Id) -> Result<T, StoreError> {
        match self.store.get(id) {
            Some(item) if item.tenant() == tenant => Ok(item.clone()),
            _ => Err(StoreError::not_found(T::KIND, id)),
        }
    }

    /// Returns every resource owned by `tenant`, ordered by ID, as a single page.
    ///
    /// Filters, page size and cursor in `query` are ignored.
    pub fn list(&self, tenant: &TenantId, query: &ListQuery) -> Result<Page<T>, StoreError> {
        if query.is_constrained() {
            debug!(kind = T::KIND, ?query, "Filtering and paging not supported, ignoring");
        }
        let items = self
            .store
            .values()
            .filter(|item| item.tenant() == tenant)
            .cloned()
            .collect();
        Ok(Page::single(items))
    }

    /// Inserts `item`, overwriting any record with the same ID.
    pub fn create(&mut self, item: impl Into<Option<T>>) -> Result<(), StoreError> {
        let item = item.into().ok_or(StoreError::EmptyItem)?;
        self.store.insert(item.id().clone(), item);
        Ok(())
    }

    /// Replaces the record stored under `item`'s ID.
    pub fn update(&mut self, item: impl Into<Option<T>>) -> Result<(), StoreError> {
        let item = item.into().ok_or(StoreError::EmptyItem)?;
        match self.store.get_mut(item.id()) {
            Some(stored) => {
                *stored = item;
                Ok(())
            }
            None => Err(StoreError::not_found(T::KIND, item.id())),
        }
    }

    /// Applies `apply` to a copy of the tenant's record `id` and stores the copy if `apply`
    /// succeeds. A rejected change leaves the stored record untouched.
    ///
    /// `apply` must not change the record's ID.
    pub fn modify(
        &mut self,
        tenant: &TenantId,
        id: &T::Id,
        apply: impl FnOnce(&mut T) -> Result<(), MetadataError>,
    ) -> Result<T, StoreError> {
        let mut item = self.get_by_id(tenant, id)?;
        apply(&mut item)?;
        self.store.insert(id.clone(), item.clone());
        Ok(item)
    }

    /// Removes the record stored under `item`'s ID. Absent items and unknown IDs are ignored.
    pub fn delete(&mut self, item: impl Into<Option<T>>) {
        if let Some(item) = item.into() {
            self.store.remove(item.id());
        }
    }
}

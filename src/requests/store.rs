//! # Request Store
//!
//! The authoritative, ordered collection of gig requests.
//!
//! Invariants:
//! - ids start at 1 and are assigned exactly once, in creation order
//! - the counter and the collection change together under one write lock,
//!   so `next_id == records.len() + 1` holds whenever the lock is free
//! - records are never modified or removed after they are pushed
//!
//! Readers share the lock; `append` takes it exclusively. A reader can
//! therefore never observe a record without its id or timestamp, nor a
//! counter that ran ahead of the collection.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use super::filter::SupplierFilter;
use super::record::{GigRequest, NewGigRequest};

#[derive(Debug)]
struct StoreInner {
    records: Vec<GigRequest>,
    next_id: u64,
}

/// In-memory gig request store. Share it behind an `Arc`.
#[derive(Debug)]
pub struct RequestStore {
    inner: RwLock<StoreInner>,
}

impl RequestStore {
    /// An empty store whose first record will get id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    // A panic cannot interrupt a commit halfway: the record is built before
    // the push and the counter moves right after it. A poisoned lock still
    // guards consistent state, so the guard is recovered.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Commits an already validated candidate.
    ///
    /// Assigns the next id and the current time, appends the record and
    /// advances the counter, all under the write lock. Returns the stored
    /// record.
    pub fn append(&self, candidate: NewGigRequest) -> GigRequest {
        let mut inner = self.write();
        let record = GigRequest::commit(inner.next_id, Utc::now(), candidate);
        inner.records.push(record.clone());
        inner.next_id += 1;
        record
    }

    /// Records for which `predicate` holds, in creation order.
    ///
    /// Never fails; an empty store or no match yields an empty vector.
    pub fn snapshot<P>(&self, predicate: P) -> Vec<GigRequest>
    where
        P: Fn(&GigRequest) -> bool,
    {
        self.read()
            .records
            .iter()
            .filter(|record| predicate(*record))
            .cloned()
            .collect()
    }

    /// Every record, in creation order.
    pub fn snapshot_all(&self) -> Vec<GigRequest> {
        self.read().records.clone()
    }

    /// Records belonging to the filter's supplier, or all of them.
    pub fn snapshot_filtered(&self, filter: &SupplierFilter) -> Vec<GigRequest> {
        self.snapshot(|record| filter.matches(record))
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RequestStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, supplier: &str) -> NewGigRequest {
        NewGigRequest::new(title, "Acme", "a@acme.com").with_supplier_email(supplier)
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let store = RequestStore::new();
        let first = store.append(payload("a", "s1@x.com"));
        let second = store.append(payload("b", "s1@x.com"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.created_at >= first.created_at);
    }

    #[test]
    fn test_append_echoes_fields() {
        let store = RequestStore::new();
        let record = store.append(
            NewGigRequest::new("Logo Design", "Acme", "a@acme.com").with_details("vector please"),
        );

        assert_eq!(record.gig_title, "Logo Design");
        assert_eq!(record.client, "Acme");
        assert_eq!(record.client_email, "a@acme.com");
        assert_eq!(record.details, "vector please");
        assert_eq!(record.supplier_email, "");
    }

    #[test]
    fn test_empty_store_snapshots_are_empty() {
        let store = RequestStore::new();
        assert!(store.is_empty());
        assert!(store.snapshot_all().is_empty());
        assert!(store.snapshot_filtered(&SupplierFilter::supplier("s1@x.com")).is_empty());
        assert!(store.snapshot(|_| true).is_empty());
    }

    #[test]
    fn test_snapshot_preserves_creation_order() {
        let store = RequestStore::new();
        for title in ["c", "a", "b"] {
            store.append(payload(title, "s1@x.com"));
        }

        let titles: Vec<_> = store
            .snapshot_all()
            .into_iter()
            .map(|r| r.gig_title)
            .collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_filtered_snapshot() {
        let store = RequestStore::new();
        store.append(payload("first", "s1@x.com"));
        store.append(payload("second", "s2@x.com"));
        store.append(payload("third", "s1@x.com"));

        let ids: Vec<_> = store
            .snapshot_filtered(&SupplierFilter::supplier("s1@x.com"))
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);

        assert_eq!(store.snapshot_filtered(&SupplierFilter::all()).len(), 3);
    }

    #[test]
    fn test_stores_are_independent() {
        let a = RequestStore::new();
        let b = RequestStore::new();
        a.append(payload("a", "s1@x.com"));

        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
        assert_eq!(b.append(payload("b", "s1@x.com")).id, 1);
    }
}

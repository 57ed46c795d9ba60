//! In-memory annotation storage.
//!
//! The store owns every annotation created during the life of the process.
//! It is constructed explicitly and shared by handle with the HTTP layer.
//! Nothing survives a restart.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use indexmap::IndexMap;
use tracing::debug;

use crate::annotation::{Annotation, NewAnnotation};

/// Storage engine for sensory annotations.
///
/// Provides:
/// - Insertion with server-assigned identifiers and timestamps
/// - Listing in insertion order
/// - Lookup by identifier
///
/// All mutation goes through [`AnnotationStore::insert`], which holds the
/// write lock for the whole id-assign-and-append section.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    records: IndexMap<String, Annotation>,
    /// Sequence number of the last assigned id.
    last_sequence: u64,
}

impl AnnotationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new annotation and return the stored record.
    ///
    /// The id and timestamp are assigned here. Duplicate submissions create
    /// duplicate records.
    pub fn insert(&self, input: NewAnnotation) -> Annotation {
        let mut inner = self.write();
        let timestamp = Utc::now().timestamp_millis();
        inner.last_sequence += 1;
        let id = Annotation::make_id(timestamp, inner.last_sequence);

        let annotation = Annotation::from_input(id.clone(), input, timestamp);
        inner.records.insert(id, annotation.clone());

        debug!(
            "Stored annotation {} ({} total)",
            annotation.id,
            inner.records.len()
        );
        annotation
    }

    /// All annotations, in insertion order.
    #[must_use]
    pub fn list_all(&self) -> Vec<Annotation> {
        self.read().records.values().cloned().collect()
    }

    /// Get an annotation by its id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Annotation> {
        self.read().records.get(id).cloned()
    }

    /// Number of stored annotations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    /// Check if the store holds no annotations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    // A panic while holding the lock cannot leave a half-written record:
    // the map insert is the last mutation in `insert`.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

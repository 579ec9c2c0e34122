//! Persistence seam used by the import pipeline.

use std::future::Future;

/// Bulk-write access to one reference collection.
///
/// One store instance serves exactly one import call. Implementations must
/// back the natural key with an authoritative uniqueness constraint: the
/// in-memory [`KeySet`](super::KeySet) is only advisory.
pub trait ReferenceStore<R: Send + Sync>: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Every natural key currently persisted in the collection.
    fn load_keys(&mut self) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send;

    /// Stage one chunk of records in the current unit of work.
    fn insert_many(
        &mut self,
        records: &[R],
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Durably persist the current unit of work.
    fn commit(&mut self) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Drop bookkeeping accumulated by earlier chunks.
    fn reset_tracking(&mut self);
}

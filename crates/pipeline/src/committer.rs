//! Chunked persistence of accepted records.

use refmaster_core::reference_import::ReferenceStore;
use tokio_util::sync::CancellationToken;

use crate::error::ImportError;

/// Persist `records` in chunks of `chunk_size`, returning how many were
/// written.
///
/// Each chunk is inserted, committed, and followed by
/// [`ReferenceStore::reset_tracking`] so per-chunk cost stays constant
/// instead of growing with the rows already written. An empty slice
/// performs no inserts and no commits. The first failing chunk aborts the
/// call; chunks committed before it stay durable.
pub async fn commit_in_chunks<R, S>(
    store: &mut S,
    records: &[R],
    chunk_size: usize,
    cancel: &CancellationToken,
) -> Result<usize, ImportError>
where
    R: Send + Sync,
    S: ReferenceStore<R>,
{
    let chunk_size = chunk_size.max(1);
    let mut committed = 0usize;

    for (index, chunk) in records.chunks(chunk_size).enumerate() {
        if cancel.is_cancelled() {
            tracing::warn!(committed, "Import cancelled between chunks");
            return Err(ImportError::Cancelled { committed });
        }

        store
            .insert_many(chunk)
            .await
            .map_err(|e| ImportError::store_after(committed, e))?;
        store
            .commit()
            .await
            .map_err(|e| ImportError::store_after(committed, e))?;
        store.reset_tracking();

        committed += chunk.len();
        tracing::debug!(
            chunk = index + 1,
            size = chunk.len(),
            committed,
            "Committed import chunk"
        );
    }

    Ok(committed)
}

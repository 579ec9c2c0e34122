//! In-memory [`ReferenceStore`] used by the pipeline tests.

use refmaster_core::reference_import::ReferenceStore;
use tokio_util::sync::CancellationToken;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MemoryStoreError(pub String);

/// Records staged by `insert_many` become visible to `load_keys` only
/// after `commit`.
pub struct MemoryStore<R> {
    pub persisted: Vec<R>,
    pub pending: Vec<R>,
    pub insert_calls: usize,
    pub chunk_sizes: Vec<usize>,
    pub commits: usize,
    pub resets: usize,
    /// 1-based `insert_many` call that fails.
    pub fail_on_insert: Option<usize>,
    /// Fires the token once the given 1-based commit has completed.
    pub cancel_on_commit: Option<(usize, CancellationToken)>,
    key_of: fn(&R) -> String,
}

impl<R> MemoryStore<R> {
    pub fn new(key_of: fn(&R) -> String) -> Self {
        Self {
            persisted: Vec::new(),
            pending: Vec::new(),
            insert_calls: 0,
            chunk_sizes: Vec::new(),
            commits: 0,
            resets: 0,
            fail_on_insert: None,
            cancel_on_commit: None,
            key_of,
        }
    }
}

impl<R: Clone + Send + Sync> ReferenceStore<R> for MemoryStore<R> {
    type Error = MemoryStoreError;

    async fn load_keys(&mut self) -> Result<Vec<String>, Self::Error> {
        Ok(self.persisted.iter().map(self.key_of).collect())
    }

    async fn insert_many(&mut self, records: &[R]) -> Result<(), Self::Error> {
        self.insert_calls += 1;
        if self.fail_on_insert == Some(self.insert_calls) {
            self.pending.clear();
            return Err(MemoryStoreError("duplicate key value".to_string()));
        }
        self.chunk_sizes.push(records.len());
        self.pending.extend_from_slice(records);
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), Self::Error> {
        self.commits += 1;
        self.persisted.append(&mut self.pending);
        if let Some((at, cancel)) = &self.cancel_on_commit {
            if *at == self.commits {
                cancel.cancel();
            }
        }
        Ok(())
    }

    fn reset_tracking(&mut self) {
        self.resets += 1;
    }
}

//! Import orchestrator: drives one upload from first line to final commit.

use refmaster_core::reference_import::{
    process_line, EntityDescriptor, ImportResult, KeySet, ReferenceStore, RowOutcome,
};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio_util::sync::CancellationToken;

use crate::committer::commit_in_chunks;
use crate::config::ImportConfig;
use crate::error::ImportError;

/// Imports delimited-text files into one reference collection.
///
/// Rows are processed strictly in input order. A malformed row is recorded
/// in [`ImportResult::errors`] and never aborts the file; only stream or
/// store failures (and cancellation) fail the call.
pub struct ReferenceImporter<'d, R, S> {
    descriptor: &'d EntityDescriptor<R>,
    store: S,
    config: ImportConfig,
    cancel: CancellationToken,
}

impl<'d, R, S> ReferenceImporter<'d, R, S>
where
    R: Send + Sync,
    S: ReferenceStore<R>,
{
    pub fn new(descriptor: &'d EntityDescriptor<R>, store: S, config: ImportConfig) -> Self {
        Self {
            descriptor,
            store,
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// Abort between rows (and between chunks) once `cancel` fires.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read `reader` to the end, then commit every accepted record.
    ///
    /// The dedup key set is seeded with a single [`ReferenceStore::load_keys`]
    /// call before the first row is read.
    pub async fn import<Rd>(&mut self, reader: Rd) -> Result<ImportResult, ImportError>
    where
        Rd: AsyncRead + Unpin + Send,
    {
        let kind = self.descriptor.kind;
        let existing = self.store.load_keys().await.map_err(ImportError::store)?;
        let mut keys = KeySet::seed(existing);
        tracing::info!(%kind, existing_keys = keys.len(), "Starting reference import");

        let mut accepted = Vec::new();
        let mut result = ImportResult::default();
        let mut lines = BufReader::new(reader).lines();
        let mut row = 0usize;

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|source| ImportError::Read {
                row: row + 1,
                source,
            })?
        {
            row += 1;

            if row % self.config.cancel_check_rows == 0 && self.cancel.is_cancelled() {
                tracing::warn!(%kind, row, "Import cancelled while parsing");
                return Err(ImportError::Cancelled { committed: 0 });
            }

            if row == 1 && self.descriptor.has_header {
                continue;
            }

            match process_line(self.descriptor, &mut keys, row, &line) {
                RowOutcome::Blank => {}
                RowOutcome::Accepted(record) => accepted.push(record),
                RowOutcome::Skipped => result.skipped += 1,
                RowOutcome::Rejected(error) => {
                    tracing::debug!(%kind, row, reason = %error.reason, "Rejected import row");
                    result.errors.push(error);
                }
            }
        }

        tracing::debug!(
            %kind,
            rows = row,
            accepted = accepted.len(),
            "Parsed import file"
        );

        result.created =
            commit_in_chunks(&mut self.store, &accepted, self.config.chunk_size, &self.cancel)
                .await?;

        tracing::info!(
            %kind,
            created = result.created,
            skipped = result.skipped,
            errors = result.errors.len(),
            "Reference import finished"
        );
        Ok(result)
    }
}

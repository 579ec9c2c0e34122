/// Call-level failure of an import. Row-level problems never surface here;
/// they are reported in [`ImportResult::errors`](refmaster_core::reference_import::ImportResult).
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The upload stream could not be read or was not valid UTF-8.
    #[error("Failed to read import stream at row {row}: {source}")]
    Read {
        row: usize,
        #[source]
        source: std::io::Error,
    },

    /// Loading keys, inserting, or committing a chunk failed. `committed`
    /// records from earlier chunks remain durable.
    #[error("Persistence error after {committed} committed records: {source}")]
    Store {
        committed: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The cancellation token fired. `committed` records from earlier
    /// chunks remain durable.
    #[error("Import cancelled after {committed} records were committed")]
    Cancelled { committed: usize },
}

impl ImportError {
    pub fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::store_after(0, err)
    }

    /// A store failure that happened after `committed` records were durable.
    pub fn store_after<E>(committed: usize, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store {
            committed,
            source: Box::new(err),
        }
    }

    /// Records already committed when the call failed.
    pub fn committed(&self) -> usize {
        match self {
            Self::Read { .. } => 0,
            Self::Store { committed, .. } | Self::Cancelled { committed } => *committed,
        }
    }

    /// The underlying store error, if it is of type `E`.
    pub fn store_source<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Store { source, .. } => source.downcast_ref::<E>(),
            _ => None,
        }
    }
}

//! [`ReferenceStore`] backed by PostgreSQL.
//!
//! Each chunk is written with one multi-row `INSERT ... VALUES` inside a
//! transaction that `commit` closes. The case-insensitive `uq_*` indexes
//! on every natural key are the authoritative duplicate guard; a violation
//! surfaces as a `sqlx::Error::Database` with SQLSTATE 23505.

use std::marker::PhantomData;

use refmaster_core::reference_import::ReferenceStore;
use sqlx::query_builder::Separated;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};

/// PostgreSQL caps a single statement at 65 535 bind parameters.
const MAX_BIND_PARAMS: usize = 65_535;

/// Table binding for one reference record type.
pub trait ReferenceTable: Send + Sync + 'static {
    type Record: Send + Sync;

    const TABLE: &'static str;
    const KEY_COLUMN: &'static str;
    /// Insert column list, in the order [`push_record`](Self::push_record) binds.
    const COLUMNS: &'static [&'static str];

    fn push_record(row: &mut Separated<'_, '_, Postgres, &'static str>, record: &Self::Record);
}

/// Restricts key loading to rows where `column = value`.
#[derive(Debug, Clone, Copy)]
struct Scope {
    column: &'static str,
    value: &'static str,
}

/// One import call's unit of work against a reference table.
pub struct PgReferenceStore<T: ReferenceTable> {
    pool: PgPool,
    tx: Option<Transaction<'static, Postgres>>,
    scope: Option<Scope>,
    /// Records inserted into the open transaction.
    staged: usize,
    _table: PhantomData<fn() -> T>,
}

impl<T: ReferenceTable> PgReferenceStore<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            tx: None,
            scope: None,
            staged: 0,
            _table: PhantomData,
        }
    }

    /// Only keys from rows where `column = value` count as existing.
    pub fn scoped(mut self, column: &'static str, value: &'static str) -> Self {
        self.scope = Some(Scope { column, value });
        self
    }

    pub fn staged(&self) -> usize {
        self.staged
    }
}

impl<T: ReferenceTable> ReferenceStore<T::Record> for PgReferenceStore<T> {
    type Error = sqlx::Error;

    async fn load_keys(&mut self) -> Result<Vec<String>, sqlx::Error> {
        match self.scope {
            Some(scope) => {
                let sql = format!(
                    "SELECT {} FROM {} WHERE {} = $1",
                    T::KEY_COLUMN,
                    T::TABLE,
                    scope.column
                );
                sqlx::query_scalar::<_, String>(&sql)
                    .bind(scope.value)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let sql = format!("SELECT {} FROM {}", T::KEY_COLUMN, T::TABLE);
                sqlx::query_scalar::<_, String>(&sql)
                    .fetch_all(&self.pool)
                    .await
            }
        }
    }

    async fn insert_many(&mut self, records: &[T::Record]) -> Result<(), sqlx::Error> {
        if records.is_empty() {
            return Ok(());
        }

        let mut tx = match self.tx.take() {
            Some(tx) => tx,
            None => self.pool.begin().await?,
        };

        let rows_per_statement = (MAX_BIND_PARAMS / T::COLUMNS.len()).max(1);
        for part in records.chunks(rows_per_statement) {
            let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
                "INSERT INTO {} ({}) ",
                T::TABLE,
                T::COLUMNS.join(", ")
            ));
            qb.push_values(part, |mut row, record| T::push_record(&mut row, record));
            qb.build().execute(&mut *tx).await?;
        }

        self.staged += records.len();
        self.tx = Some(tx);
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), sqlx::Error> {
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
            tracing::debug!(table = T::TABLE, records = self.staged, "Committed reference chunk");
        }
        self.staged = 0;
        Ok(())
    }

    fn reset_tracking(&mut self) {
        if self.tx.take().is_some() {
            tracing::warn!(
                table = T::TABLE,
                records = self.staged,
                "Discarding uncommitted reference chunk"
            );
        }
        self.staged = 0;
    }
}

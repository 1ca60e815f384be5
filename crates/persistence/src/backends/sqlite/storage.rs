//! RecordStorage implementation for SQLite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, ToSql, TransactionBehavior, params};

use crate::core::RecordStorage;
use crate::error::{BackendError, StorageError, StorageResult};
use crate::search::Predicate;
use crate::search::predicate::stringify_list;
use crate::types::{Advocate, NewAdvocate, Page, PageRequest};

use super::SqliteBackend;
use super::query_builder::{INSERT_ADVOCATE, SqlFragment, SqlParam, page_statement};

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: None,
    })
}

fn serialization_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::SerializationError { message })
}

/// Row of the paged statement before conversion: the total, then the record
/// columns, which are NULL when the page is empty.
type RawRow = (
    i64,
    Option<i64>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<i32>,
    Option<i64>,
    Option<String>,
);

/// Runs `f` with a pooled connection on the blocking thread pool.
///
/// The connection goes back to the pool when `f` returns, whether it
/// succeeded or not.
async fn with_connection<T, F>(pool: Pool<SqliteConnectionManager>, f: F) -> StorageResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut Connection) -> StorageResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        f(&mut conn)
    })
    .await
    .map_err(|e| {
        StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: format!("Blocking task failed: {}", e),
            source: Some(Box::new(e)),
        })
    })?
}

fn parse_created_at(raw: &str) -> StorageResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| serialization_error(format!("Invalid created_at '{}': {}", raw, e)))
}

fn parse_specialties(raw: &str) -> StorageResult<Vec<String>> {
    serde_json::from_str(raw)
        .map_err(|e| serialization_error(format!("Invalid specialties '{}': {}", raw, e)))
}

fn missing_column(name: &str) -> StorageError {
    internal_error(format!("Column '{}' is NULL in a matched row", name))
}

fn to_advocate(row: RawRow) -> StorageResult<Option<Advocate>> {
    let (
        _total,
        id,
        first_name,
        last_name,
        city,
        degree,
        specialties,
        years_of_experience,
        phone_number,
        created_at,
    ) = row;

    let Some(id) = id else {
        return Ok(None);
    };

    let specialties = specialties.ok_or_else(|| missing_column("specialties"))?;
    let created_at = created_at.ok_or_else(|| missing_column("created_at"))?;

    Ok(Some(Advocate {
        id,
        first_name: first_name.ok_or_else(|| missing_column("first_name"))?,
        last_name: last_name.ok_or_else(|| missing_column("last_name"))?,
        city: city.ok_or_else(|| missing_column("city"))?,
        degree: degree.ok_or_else(|| missing_column("degree"))?,
        specialties: parse_specialties(&specialties)?,
        years_of_experience: years_of_experience
            .ok_or_else(|| missing_column("years_of_experience"))?,
        phone_number: phone_number.ok_or_else(|| missing_column("phone_number"))?,
        created_at: parse_created_at(&created_at)?,
    }))
}

fn fetch_page_blocking(
    conn: &mut Connection,
    statement: SqlFragment,
) -> StorageResult<Page<Advocate>> {
    let mut stmt = conn
        .prepare(&statement.sql)
        .map_err(|e| internal_error(format!("Failed to prepare page query: {}", e)))?;

    let all_params: Vec<Box<dyn ToSql>> =
        statement.params.iter().map(SqlParam::to_boxed).collect();
    let param_refs: Vec<&dyn ToSql> = all_params.iter().map(|p| p.as_ref()).collect();

    let raw_rows: Vec<RawRow> = stmt
        .query_map(param_refs.as_slice(), |row| -> rusqlite::Result<RawRow> {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
                row.get(7)?,
                row.get(8)?,
                row.get(9)?,
            ))
        })
        .map_err(|e| internal_error(format!("Failed to execute page query: {}", e)))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| internal_error(format!("Failed to read row: {}", e)))?;

    let total = raw_rows
        .first()
        .map(|row| u64::try_from(row.0).unwrap_or_default())
        .unwrap_or_default();

    let mut data = Vec::with_capacity(raw_rows.len());
    for row in raw_rows {
        if let Some(advocate) = to_advocate(row)? {
            data.push(advocate);
        }
    }

    Ok(Page::new(data, total))
}

fn insert_many_blocking(
    conn: &mut Connection,
    records: Vec<NewAdvocate>,
) -> StorageResult<Vec<Advocate>> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| internal_error(format!("Failed to begin transaction: {}", e)))?;

    let mut stored = Vec::with_capacity(records.len());
    {
        let mut stmt = tx
            .prepare(INSERT_ADVOCATE)
            .map_err(|e| internal_error(format!("Failed to prepare insert: {}", e)))?;

        for record in records {
            let (id, created_at): (i64, String) = stmt
                .query_row(
                    params![
                        record.first_name,
                        record.last_name,
                        record.city,
                        record.degree,
                        stringify_list(&record.specialties),
                        record.years_of_experience,
                        record.phone_number,
                    ],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .map_err(|e| internal_error(format!("Failed to insert advocate: {}", e)))?;

            stored.push(record.into_stored(id, parse_created_at(&created_at)?));
        }
    }

    tx.commit()
        .map_err(|e| internal_error(format!("Failed to commit transaction: {}", e)))?;

    Ok(stored)
}

#[async_trait]
impl RecordStorage for SqliteBackend {
    type Record = Advocate;
    type NewRecord = NewAdvocate;

    async fn fetch_page(
        &self,
        predicate: &Predicate,
        page: PageRequest,
    ) -> StorageResult<Page<Advocate>> {
        let statement = page_statement(predicate, page.limit(), page.offset());

        tracing::debug!(
            page = page.page,
            page_size = page.page_size,
            params = statement.params.len(),
            "Executing page query"
        );

        with_connection(self.pool(), move |conn| fetch_page_blocking(conn, statement)).await
    }

    async fn insert_many(&self, records: Vec<NewAdvocate>) -> StorageResult<Vec<Advocate>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let count = records.len();
        let stored =
            with_connection(self.pool(), move |conn| insert_many_blocking(conn, records)).await?;

        tracing::debug!(count, "Inserted advocates");
        Ok(stored)
    }
}

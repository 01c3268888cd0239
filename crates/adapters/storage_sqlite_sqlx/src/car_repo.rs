//! `SQLite` implementation of [`Repository<Car>`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqliteConnection, SqlitePool};

use catchup_app::ports::{Change, Repository};
use catchup_domain::car::{Car, NewCar};
use catchup_domain::error::CatchUpError;
use catchup_domain::id::CarId;
use catchup_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Car);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Car> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let model: String = row.try_get("model")?;
        let color: String = row.try_get("color")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Car {
            id: CarId::new(id),
            model,
            color,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        }))
    }
}

fn parse_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

const INSERT: &str =
    "INSERT INTO cars (model, color, created_at, updated_at) VALUES (?, ?, ?, ?) RETURNING *";
const SELECT_BY_ID: &str = "SELECT * FROM cars WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM cars";
const UPDATE: &str = "UPDATE cars SET model = ?, color = ?, updated_at = ? WHERE id = ? RETURNING *";
const DELETE_BY_ID: &str = "DELETE FROM cars WHERE id = ?";

/// `SQLite`-backed car repository.
///
/// Reads run against the pool right away. Writes are queued until the owning
/// [`SqliteUnitOfWork`](crate::SqliteUnitOfWork) completes.
pub struct SqliteCarRepository {
    pool: SqlitePool,
    pending: Vec<Change<Car>>,
}

impl SqliteCarRepository {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            pending: Vec::new(),
        }
    }

    #[cfg(test)]
    fn pending(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn take_pending(&mut self) -> Vec<Change<Car>> {
        std::mem::take(&mut self.pending)
    }
}

impl Repository<Car> for SqliteCarRepository {
    fn add(&mut self, draft: NewCar) {
        self.pending.push(Change::Add(draft));
    }

    fn find_by_id(
        &self,
        id: CarId,
    ) -> impl Future<Output = Result<Option<Car>, CatchUpError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn list_all(&self) -> impl Future<Output = Result<Vec<Car>, CatchUpError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&mut self, entity: Car) {
        self.pending.push(Change::Update(entity));
    }

    fn remove(&mut self, entity: Car) {
        self.pending.push(Change::Remove(entity));
    }
}

/// Execute one staged change inside an open transaction.
///
/// Returns the number of affected rows and the row written back, if any.
pub(crate) async fn apply(
    conn: &mut SqliteConnection,
    change: Change<Car>,
    now: &str,
) -> Result<(u64, Option<Car>), sqlx::Error> {
    match change {
        Change::Add(draft) => {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(draft.model)
                .bind(draft.color)
                .bind(now)
                .bind(now)
                .fetch_one(conn)
                .await?;
            Ok((1, Some(row.0)))
        }
        Change::Update(car) => {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(car.model)
                .bind(car.color)
                .bind(now)
                .bind(car.id.get())
                .fetch_optional(conn)
                .await?;
            Ok((u64::from(row.is_some()), Wrapper::maybe(row)))
        }
        Change::Remove(car) => {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(car.id.get())
                .execute(conn)
                .await?;
            Ok((result.rows_affected(), None))
        }
    }
}

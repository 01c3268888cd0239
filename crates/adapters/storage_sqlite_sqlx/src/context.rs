//! `SQLite` persistence context and unit of work.

use std::future::Future;

use sqlx::SqlitePool;

use catchup_app::ports::{Change, Completion, PersistenceContext, UnitOfWork};
use catchup_domain::car::Car;
use catchup_domain::error::CatchUpError;
use catchup_domain::time;

use crate::car_repo::{self, SqliteCarRepository};
use crate::error::StorageError;

/// Hands out one [`SqliteUnitOfWork`] per operation over a shared pool.
#[derive(Clone)]
pub struct SqliteContext {
    pool: SqlitePool,
}

impl SqliteContext {
    /// Create a new context using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PersistenceContext for SqliteContext {
    type UnitOfWork = SqliteUnitOfWork;

    fn begin(&self) -> SqliteUnitOfWork {
        SqliteUnitOfWork {
            pool: self.pool.clone(),
            cars: SqliteCarRepository::new(self.pool.clone()),
        }
    }
}

/// Collects staged changes and flushes them in a single transaction.
pub struct SqliteUnitOfWork {
    pool: SqlitePool,
    cars: SqliteCarRepository,
}

impl UnitOfWork for SqliteUnitOfWork {
    type Cars = SqliteCarRepository;

    fn cars(&mut self) -> &mut SqliteCarRepository {
        &mut self.cars
    }

    fn complete(mut self) -> impl Future<Output = Result<Completion<Car>, CatchUpError>> + Send {
        let changes = self.cars.take_pending();
        let pool = self.pool;
        async move {
            if changes.is_empty() {
                return Ok(Completion::default());
            }

            let staged = changes.len();
            let completion = flush(&pool, changes).await.map_err(StorageError::from)?;
            tracing::debug!(staged, affected = completion.affected(), "unit of work completed");

            Ok(completion)
        }
    }
}

/// Apply `changes` in staging order. Any failure rolls the whole batch back
/// when the transaction is dropped uncommitted.
async fn flush(
    pool: &SqlitePool,
    changes: Vec<Change<Car>>,
) -> Result<Completion<Car>, sqlx::Error> {
    let now = time::now().to_rfc3339();
    let mut tx = pool.begin().await?;

    let mut affected = 0;
    let mut written = Vec::new();
    for change in changes {
        let (rows, car) = car_repo::apply(&mut tx, change, &now).await?;
        affected += rows;
        written.extend(car);
    }

    tx.commit().await?;
    Ok(Completion::new(affected, written))
}

//! Storage port: staged repositories and the unit of work that commits them.
//!
//! Reads go straight to the store. Writes are queued as [`Change`] intents on
//! the repository and only become durable when the owning [`UnitOfWork`]
//! completes, all in one transaction.

use std::future::Future;

use catchup_domain::aggregate::Aggregate;
use catchup_domain::car::Car;
use catchup_domain::error::CatchUpError;

/// A write intent queued on a repository until the unit of work completes.
#[derive(Debug, Clone)]
pub enum Change<T: Aggregate> {
    /// Insert a new record; the store assigns its id.
    Add(T::Draft),
    /// Overwrite the mutable columns of an existing record.
    Update(T),
    /// Delete an existing record.
    Remove(T),
}

/// Generic data access over one aggregate type.
pub trait Repository<T: Aggregate>: Send + Sync {
    /// Stage a new record for insertion.
    fn add(&mut self, draft: T::Draft);

    /// Fetch a record by id. A missing record is `Ok(None)`, never an error.
    fn find_by_id(
        &self,
        id: T::Id,
    ) -> impl Future<Output = Result<Option<T>, CatchUpError>> + Send;

    /// Fetch every record in the store's natural order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<T>, CatchUpError>> + Send;

    /// Stage a modification of a previously loaded record.
    fn update(&mut self, entity: T);

    /// Stage deletion of a previously loaded record.
    fn remove(&mut self, entity: T);
}

/// Repository for the [`Car`] aggregate.
pub trait CarRepository: Repository<Car> {}

impl<R: Repository<Car>> CarRepository for R {}

/// Outcome of flushing a unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion<T> {
    affected: u64,
    written: Vec<T>,
}

impl<T> Completion<T> {
    /// Build a completion from the affected-row count and the rows the store
    /// wrote back (inserted and updated records, in staging order).
    #[must_use]
    pub fn new(affected: u64, written: Vec<T>) -> Self {
        Self { affected, written }
    }

    /// Number of rows the commit inserted, updated or deleted.
    #[must_use]
    pub fn affected(&self) -> u64 {
        self.affected
    }

    /// Records written back by the store, with their final ids and timestamps.
    #[must_use]
    pub fn written(&self) -> &[T] {
        &self.written
    }

    /// Consume the completion, keeping the written records.
    #[must_use]
    pub fn into_written(self) -> Vec<T> {
        self.written
    }
}

impl<T> Default for Completion<T> {
    fn default() -> Self {
        Self::new(0, Vec::new())
    }
}

/// A batch of staged changes committed atomically.
///
/// Dropping a unit of work without calling [`UnitOfWork::complete`] discards
/// everything it staged.
pub trait UnitOfWork: Send {
    type Cars: CarRepository;

    /// The car repository bound to this unit of work.
    fn cars(&mut self) -> &mut Self::Cars;

    /// Flush every staged change in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`CatchUpError::Storage`] when the store rejects the batch
    /// (constraint violation, lost connection). Nothing is applied then.
    fn complete(self) -> impl Future<Output = Result<Completion<Car>, CatchUpError>> + Send;
}

/// Owns the connection to the store and opens units of work.
pub trait PersistenceContext: Send + Sync {
    type UnitOfWork: UnitOfWork;

    /// Open a fresh unit of work with nothing staged.
    fn begin(&self) -> Self::UnitOfWork;
}

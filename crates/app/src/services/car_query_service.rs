//! Car query service: read-only use-cases.

use catchup_domain::car::{Car, GetCarByIdQuery};
use catchup_domain::error::CatchUpError;

use crate::ports::{PersistenceContext, Repository, UnitOfWork};

/// Application service for car reads. Never stages or commits anything.
pub struct CarQueryService<C> {
    context: C,
}

impl<C: PersistenceContext> CarQueryService<C> {
    /// Create a new service backed by the given persistence context.
    pub fn new(context: C) -> Self {
        Self { context }
    }

    /// Look up a car by id. A missing car is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn handle_get_by_id(
        &self,
        query: GetCarByIdQuery,
    ) -> Result<Option<Car>, CatchUpError> {
        let mut uow = self.context.begin();
        uow.cars().find_by_id(query.id).await
    }

    /// List every car.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn handle_get_all(&self) -> Result<Vec<Car>, CatchUpError> {
        let mut uow = self.context.begin();
        uow.cars().list_all().await
    }
}

//! Car command service: use-cases that mutate cars.

use catchup_domain::car::{Car, CreateCarCommand, NewCar, UpdateCarCommand};
use catchup_domain::error::CatchUpError;
use catchup_domain::id::CarId;

use crate::ports::{PersistenceContext, Repository, UnitOfWork};

/// Application service for car writes.
///
/// Every successful branch completes exactly one unit of work; branches that
/// find nothing to act on complete none.
pub struct CarCommandService<C> {
    context: C,
}

impl<C: PersistenceContext> CarCommandService<C> {
    /// Create a new service backed by the given persistence context.
    pub fn new(context: C) -> Self {
        Self { context }
    }

    /// Create a car and return it with its store-assigned id.
    ///
    /// Returns `Ok(None)` if the commit did not write the new row back.
    ///
    /// # Errors
    ///
    /// Returns [`CatchUpError::Validation`] if model or color is blank, or a
    /// storage error propagated from the unit of work.
    #[tracing::instrument(skip(self, command), fields(model = %command.model, color = %command.color))]
    pub async fn handle_create(
        &self,
        command: CreateCarCommand,
    ) -> Result<Option<Car>, CatchUpError> {
        let draft = NewCar::new(command.model, command.color)?;

        let mut uow = self.context.begin();
        uow.cars().add(draft);
        let completion = uow.complete().await?;

        Ok(completion.into_written().into_iter().next())
    }

    /// Overwrite model and color of an existing car.
    ///
    /// Returns `Ok(None)` when no car has `command.id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatchUpError::Validation`] if model or color is blank, checked
    /// before the store is read, or a storage error from the repository or
    /// unit of work.
    #[tracing::instrument(skip(self, command), fields(id = %command.id))]
    pub async fn handle_update(
        &self,
        command: UpdateCarCommand,
    ) -> Result<Option<Car>, CatchUpError> {
        command.validate()?;

        let mut uow = self.context.begin();
        let Some(mut car) = uow.cars().find_by_id(command.id).await? else {
            tracing::debug!("car not found, nothing to update");
            return Ok(None);
        };

        car.apply(command)?;
        uow.cars().update(car);
        let completion = uow.complete().await?;

        // Empty when the row was deleted between the read and the commit.
        Ok(completion.into_written().into_iter().next())
    }

    /// Delete a car by id. Returns whether a car was deleted.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the repository or unit of work.
    #[tracing::instrument(skip(self))]
    pub async fn handle_delete(&self, id: CarId) -> Result<bool, CatchUpError> {
        let mut uow = self.context.begin();
        let Some(car) = uow.cars().find_by_id(id).await? else {
            tracing::debug!("car not found, nothing to delete");
            return Ok(false);
        };

        uow.cars().remove(car);
        uow.complete().await?;
        Ok(true)
    }
}

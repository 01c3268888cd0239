//! Intents that mutate cars.

use crate::error::CatchUpError;
use crate::id::CarId;

/// Create a car from its two attributes. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCarCommand {
    pub model: String,
    pub color: String,
}

/// Replace the model and color of the car identified by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCarCommand {
    pub id: CarId,
    pub model: String,
    pub color: String,
}

impl UpdateCarCommand {
    /// Check the new attributes without touching any stored car.
    ///
    /// # Errors
    ///
    /// Returns [`CatchUpError::Validation`] when `model` or `color` is blank.
    pub fn validate(&self) -> Result<(), CatchUpError> {
        super::validate(&self.model, &self.color)
    }
}

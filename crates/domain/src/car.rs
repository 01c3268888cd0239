//! The car aggregate root, its draft form, commands and queries.

mod commands;
mod queries;

pub use commands::{CreateCarCommand, UpdateCarCommand};
pub use queries::GetCarByIdQuery;

use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;
use crate::error::{CatchUpError, ValidationError};
use crate::id::CarId;
use crate::time::Timestamp;

/// A persisted car.
///
/// `id`, `created_at` and `updated_at` are owned by the store; callers only
/// ever change `model` and `color` (through [`Car::apply`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub model: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Car {
    /// Overwrite model and color from an update command.
    ///
    /// The command's id is only used to locate the car; it never replaces
    /// the identity of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`CatchUpError::Validation`] when the new model or color is
    /// blank. `self` is left untouched in that case.
    pub fn apply(&mut self, command: UpdateCarCommand) -> Result<(), CatchUpError> {
        command.validate()?;
        self.model = command.model;
        self.color = command.color;
        Ok(())
    }
}

impl Aggregate for Car {
    type Id = CarId;
    type Draft = NewCar;

    const NAME: &'static str = "Car";

    fn id(&self) -> CarId {
        self.id
    }
}

/// A car that has not been persisted yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub model: String,
    pub color: String,
}

impl NewCar {
    /// Build a draft car from its two attributes.
    ///
    /// # Errors
    ///
    /// Returns [`CatchUpError::Validation`] when `model` or `color` is blank.
    pub fn new(model: impl Into<String>, color: impl Into<String>) -> Result<Self, CatchUpError> {
        let model = model.into();
        let color = color.into();
        validate(&model, &color)?;
        Ok(Self { model, color })
    }
}

fn validate(model: &str, color: &str) -> Result<(), CatchUpError> {
    if model.trim().is_empty() {
        return Err(ValidationError::EmptyModel.into());
    }
    if color.trim().is_empty() {
        return Err(ValidationError::EmptyColor.into());
    }
    Ok(())
}

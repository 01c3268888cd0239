//! Read-only intents.

use crate::id::CarId;

/// Look up a single car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetCarByIdQuery {
    pub id: CarId,
}

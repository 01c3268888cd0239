//! Wire shapes of the car API.

use serde::{Deserialize, Serialize};

use catchup_domain::id::CarId;

/// A car as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarResource {
    pub id: CarId,
    pub model: String,
    pub color: String,
}

/// Body of `POST /api/v1/cars`.
#[derive(Debug, Deserialize)]
pub struct CreateCarResource {
    pub model: String,
    pub color: String,
}

/// Body of `PUT /api/v1/cars`.
#[derive(Debug, Deserialize)]
pub struct UpdateCarResource {
    pub id: CarId,
    pub model: String,
    pub color: String,
}

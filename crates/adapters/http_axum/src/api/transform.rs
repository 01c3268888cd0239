//! Assemblers between wire resources and application commands, queries and
//! aggregates. Pure and stateless: no validation happens here.

use catchup_domain::car::{Car, CreateCarCommand, GetCarByIdQuery, UpdateCarCommand};
use catchup_domain::id::CarId;

use super::resources::{CarResource, CreateCarResource, UpdateCarResource};

impl From<CreateCarResource> for CreateCarCommand {
    fn from(resource: CreateCarResource) -> Self {
        Self {
            model: resource.model,
            color: resource.color,
        }
    }
}

impl From<UpdateCarResource> for UpdateCarCommand {
    fn from(resource: UpdateCarResource) -> Self {
        Self {
            id: resource.id,
            model: resource.model,
            color: resource.color,
        }
    }
}

impl From<Car> for CarResource {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            model: car.model,
            color: car.color,
        }
    }
}

/// Build the lookup query for a path id.
#[must_use]
pub fn get_by_id_query(id: CarId) -> GetCarByIdQuery {
    GetCarByIdQuery { id }
}

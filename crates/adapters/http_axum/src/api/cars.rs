//! JSON REST handlers for cars.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use catchup_app::ports::PersistenceContext;
use catchup_domain::car::{CreateCarCommand, UpdateCarCommand};
use catchup_domain::error::{CatchUpError, ValidationError};
use catchup_domain::id::CarId;

use super::BASE_PATH;
use super::resources::{CarResource, CreateCarResource, UpdateCarResource};
use super::transform;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<CarResource>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<CarResource>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    /// 201 with a `Location` header pointing at the new car.
    Created(Json<CarResource>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => {
                let location = format!("{BASE_PATH}/cars/{}", json.0.id);
                (StatusCode::CREATED, [(header::LOCATION, location)], json).into_response()
            }
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<CarId, ApiError> {
    CarId::from_str(raw)
        .map_err(|_| ApiError::from(CatchUpError::from(ValidationError::InvalidId)))
}

/// `POST /api/v1/cars`
pub async fn create<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<CreateCarResource>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    C: PersistenceContext + Send + Sync + 'static,
{
    let Json(resource) = payload?;
    let command = CreateCarCommand::from(resource);
    let car = state
        .command_service
        .handle_create(command)
        .await?
        .ok_or(ApiError::NotCreated)?;
    Ok(CreateResponse::Created(Json(car.into())))
}

/// `GET /api/v1/cars/:id`
pub async fn get<C>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    C: PersistenceContext + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let car = state
        .query_service
        .handle_get_by_id(transform::get_by_id_query(id))
        .await?
        .ok_or_else(|| ApiError::car_not_found(id))?;
    Ok(GetResponse::Ok(Json(car.into())))
}

/// `GET /api/v1/cars`
pub async fn list<C>(State(state): State<AppState<C>>) -> Result<ListResponse, ApiError>
where
    C: PersistenceContext + Send + Sync + 'static,
{
    let cars = state.query_service.handle_get_all().await?;
    Ok(ListResponse::Ok(Json(
        cars.into_iter().map(CarResource::from).collect(),
    )))
}

/// `PUT /api/v1/cars`
pub async fn update<C>(
    State(state): State<AppState<C>>,
    payload: Result<Json<UpdateCarResource>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    C: PersistenceContext + Send + Sync + 'static,
{
    let Json(resource) = payload?;
    let command = UpdateCarCommand::from(resource);
    let id = command.id;
    let car = state
        .command_service
        .handle_update(command)
        .await?
        .ok_or_else(|| ApiError::car_not_found(id))?;
    Ok(GetResponse::Ok(Json(car.into())))
}

/// `DELETE /api/v1/cars/:id`
pub async fn delete<C>(
    State(state): State<AppState<C>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    C: PersistenceContext + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    if state.command_service.handle_delete(id).await? {
        Ok(DeleteResponse::NoContent)
    } else {
        Err(ApiError::car_not_found(id))
    }
}

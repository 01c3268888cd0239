//! JSON REST API, version 1.

#[allow(clippy::missing_errors_doc)]
pub mod cars;
pub mod resources;
pub mod transform;

use axum::Router;
use axum::routing::get;

use catchup_app::ports::PersistenceContext;

use crate::state::AppState;

/// Base path of the versioned API.
pub const BASE_PATH: &str = "/api/v1";

/// Build the `/api/v1` sub-router.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: PersistenceContext + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/cars",
            get(cars::list::<C>)
                .post(cars::create::<C>)
                .put(cars::update::<C>),
        )
        .route(
            "/cars/{id}",
            get(cars::get::<C>).delete(cars::delete::<C>),
        )
}

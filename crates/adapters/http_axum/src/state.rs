//! Shared application state for axum handlers.

use std::sync::Arc;

use catchup_app::ports::PersistenceContext;
use catchup_app::services::car_command_service::CarCommandService;
use catchup_app::services::car_query_service::CarQueryService;

/// Application state shared across all axum handlers.
///
/// Generic over the persistence context to avoid dynamic dispatch.
/// `Clone` is implemented manually so the context itself does not need to be
/// `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<C> {
    /// Car write use-cases.
    pub command_service: Arc<CarCommandService<C>>,
    /// Car read use-cases.
    pub query_service: Arc<CarQueryService<C>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            command_service: Arc::clone(&self.command_service),
            query_service: Arc::clone(&self.query_service),
        }
    }
}

impl<C> AppState<C>
where
    C: PersistenceContext + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(command_service: CarCommandService<C>, query_service: CarQueryService<C>) -> Self {
        Self {
            command_service: Arc::new(command_service),
            query_service: Arc::new(query_service),
        }
    }

    /// Build both services over clones of one persistence context.
    pub fn from_context(context: C) -> Self
    where
        C: Clone,
    {
        Self::new(
            CarCommandService::new(context.clone()),
            CarQueryService::new(context),
        )
    }
}

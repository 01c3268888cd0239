//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use catchup_app::ports::PersistenceContext;

use crate::api::BASE_PATH;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api/v1` next to a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<C>(state: AppState<C>) -> Router
where
    C: PersistenceContext + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest(BASE_PATH, crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use catchup_app::ports::{Completion, Repository, UnitOfWork};
    use catchup_domain::car::{Car, NewCar};
    use catchup_domain::error::CatchUpError;
    use catchup_domain::id::CarId;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// A store that never holds anything and never writes rows back. With
    /// `failing` set, every read reports a lost connection.
    #[derive(Clone, Default)]
    struct StubContext {
        failing: bool,
    }
    struct StubUnitOfWork(StubCarRepo);
    struct StubCarRepo {
        failing: bool,
    }

    impl StubCarRepo {
        fn read<T>(&self, value: T) -> Result<T, CatchUpError> {
            if self.failing {
                Err(CatchUpError::Storage(Box::new(std::io::Error::other(
                    "connection lost",
                ))))
            } else {
                Ok(value)
            }
        }
    }

    impl Repository<Car> for StubCarRepo {
        fn add(&mut self, _draft: NewCar) {}
        async fn find_by_id(&self, _id: CarId) -> Result<Option<Car>, CatchUpError> {
            self.read(None)
        }
        async fn list_all(&self) -> Result<Vec<Car>, CatchUpError> {
            self.read(vec![])
        }
        fn update(&mut self, _entity: Car) {}
        fn remove(&mut self, _entity: Car) {}
    }

    impl UnitOfWork for StubUnitOfWork {
        type Cars = StubCarRepo;

        fn cars(&mut self) -> &mut StubCarRepo {
            &mut self.0
        }

        async fn complete(self) -> Result<Completion<Car>, CatchUpError> {
            Ok(Completion::default())
        }
    }

    impl PersistenceContext for StubContext {
        type UnitOfWork = StubUnitOfWork;

        fn begin(&self) -> StubUnitOfWork {
            StubUnitOfWork(StubCarRepo {
                failing: self.failing,
            })
        }
    }

    fn app() -> Router {
        build(AppState::from_context(StubContext::default()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        send_to(app(), request).await
    }

    async fn send_to(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn json_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_cars() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/v1/cars")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn should_return_not_found_when_getting_missing_car() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/v1/cars/9999")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Car 9999 not found");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_path_id_is_not_an_integer() {
        let (status, _) = send(
            Request::builder()
                .uri("/api/v1/cars/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_bad_request_when_create_writes_nothing_back() {
        let (status, body) = send(json_request(
            "POST",
            "/api/v1/cars",
            r#"{"model":"Civic","color":"Red"}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "car could not be created");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_create_body_misses_a_field() {
        let (status, body) =
            send(json_request("POST", "/api/v1/cars", r#"{"model":"Civic"}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn should_return_bad_request_when_create_model_is_blank() {
        let (status, body) = send(json_request(
            "POST",
            "/api/v1/cars",
            r#"{"model":"","color":"Red"}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "model must not be empty");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_car() {
        let (status, _) = send(json_request(
            "PUT",
            "/api/v1/cars",
            r#"{"id":9999,"model":"Accord","color":"Blue"}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_car() {
        let (status, _) = send(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/cars/9999")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_internal_error_when_store_fails() {
        let failing = build(AppState::from_context(StubContext { failing: true }));

        let (status, body) = send_to(
            failing.clone(),
            Request::builder()
                .uri("/api/v1/cars")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal server error");

        let (status, _) = send_to(
            failing,
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/cars/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}

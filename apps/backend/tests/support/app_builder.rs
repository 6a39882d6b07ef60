use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use riddle_backend::middleware::request_trace::RequestTrace;
use riddle_backend::routes;
use riddle_backend::state::{build_state, AppState};
use riddle_backend::test_support::ScriptedBackend;
use riddle_backend::AppError;

type RouteConfigFn = Box<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

/// State backed by a fresh in-memory store and the given scripted backend.
pub fn scripted_state(backend: Arc<ScriptedBackend>) -> AppState {
    build_state()
        .with_backend(backend)
        .with_system_prompt("test rules")
        .build()
        .expect("state with explicit backend always builds")
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}

/// Builder for creating test Actix service instances
pub struct TestAppBuilder {
    state: AppState,
    route_config: Option<RouteConfigFn>,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            route_config: None,
        }
    }

    /// Mount the application's production routes.
    pub fn with_prod_routes(mut self) -> Self {
        self.route_config = Some(Box::new(routes::configure) as RouteConfigFn);
        self
    }

    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.route_config = Some(Box::new(config_fn) as RouteConfigFn);
        self
    }

    /// Build the service with `RequestTrace` applied, as in `main.rs`.
    pub async fn build(
        self,
    ) -> Result<impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>, AppError>
    {
        let data = web::Data::new(self.state);
        let route_config = self
            .route_config
            .unwrap_or_else(|| Box::new(routes::configure) as RouteConfigFn);

        let service = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .app_data(data)
                .configure(move |cfg| route_config(cfg)),
        )
        .await;

        Ok(service)
    }
}

use actix_web::{web, App, HttpServer};
use riddle_backend::config::AppConfig;
use riddle_backend::middleware::cors::cors_middleware;
use riddle_backend::middleware::request_trace::RequestTrace;
use riddle_backend::routes;
use riddle_backend::state::build_state;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_llm_config(config.llm.clone()).build() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        llm_base_url = %config.llm.base_url,
        llm_model = %config.llm.model,
        "server_starting"
    );

    let data = web::Data::new(app_state);
    let origins = config.allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

use skills_api::infra::config;
use skills_api::transport;
use skills_api::{MemorySkillsStorage, PostgresSkillsStorage, SkillsStorage};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // --- Storage Initialization ---
    let storage: Arc<dyn SkillsStorage> = if config::use_db_mock() {
        println!("> Using in-memory skills storage (USE_DB_MOCK=true).");
        Arc::new(MemorySkillsStorage::new())
    } else {
        println!("> Connecting to Postgres skills storage...");
        Arc::new(PostgresSkillsStorage::new().await?)
    };

    let app_state = transport::http::AppState { storage };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let port = config::http_port();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    println!("> Skills API listening on http://0.0.0.0:{}", port);
    println!("> Swagger UI available at http://localhost:{}/swagger-ui", port);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C), exiting.");
        }
    }

    Ok(())
}

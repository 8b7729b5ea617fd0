mod model;
mod server;

use axum::http::{header, HeaderName, Method};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    docs::ApiDoc,
    error::AppError,
    middleware::auth::{AGENT_ID_HEADER, AGENT_NAME_HEADER},
    router, scheduler, startup,
    state::AppState,
};

const GENERATE_ADMIN_KEY_FLAG: &str = "--generate-admin-key";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moltimon=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    if std::env::args().any(|arg| arg == GENERATE_ADMIN_KEY_FLAG) {
        return startup::generate_admin_key(&db).await;
    }

    startup::seed_game_data(&db).await?;

    if config.enable_scheduler {
        scheduler::game_jobs::start_scheduler(db.clone()).await?;
    } else {
        tracing::info!("Scheduler disabled");
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(AGENT_ID_HEADER),
            HeaderName::from_static(AGENT_NAME_HEADER),
        ])
        .allow_origin(Any);

    let app = router::router()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

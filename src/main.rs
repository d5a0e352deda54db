use axum::{
    routing::{get, post},
    Router,
};
use netquiz_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware, routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let quiz_api = Router::new()
        .route("/api/quiz/tests", get(routes::quiz::list_tests))
        .route(
            "/api/quiz/tests/:test_id/sections",
            get(routes::quiz::list_sections),
        )
        .route(
            "/api/quiz/sections/:section_id/attempts",
            post(routes::quiz::start_attempt),
        )
        .route(
            "/api/quiz/attempts/:attempt_id/finish",
            post(routes::quiz::finish_attempt),
        )
        .route(
            "/api/quiz/attempts/:attempt_id/result",
            get(routes::results::get_attempt_result),
        )
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.public_rps),
            middleware::rate_limit::rps_middleware,
        ))
        .with_state(app_state);

    let app = base_routes
        .merge(quiz_api)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("netquiz backend listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

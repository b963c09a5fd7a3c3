use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use domain::services::GameNightStore;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{game_nights, health, players};

#[derive(Clone)]
pub struct AppState {
    /// Storage handed to each operation; never a global.
    pub store: Arc<dyn GameNightStore>,
    pub config: Arc<Config>,
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

pub fn create_app(config: Config, store: Arc<dyn GameNightStore>) -> Router {
    let config = Arc::new(config);
    let cors = cors_layer(&config);
    let request_timeout = Duration::from_secs(config.server.request_timeout_secs);

    let state = AppState {
        store,
        config,
    };

    let api_routes = Router::new()
        .route(
            "/api/v1/game-nights",
            get(game_nights::list_game_nights).post(game_nights::create_game_night),
        )
        .route(
            "/api/v1/game-nights/:id",
            get(game_nights::get_game_night)
                .put(game_nights::replace_game_night)
                .delete(game_nights::delete_game_night),
        )
        .route(
            "/api/v1/game-nights/:game_night_id/players",
            post(players::create_player),
        );

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}

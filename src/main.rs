//! Courseloft server binary.
//!
//! Wires configuration, storage, and the payment gateway into the axum
//! application and serves it.

use std::sync::Arc;

use axum::Router;
use secrecy::SecretString;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use courseloft::adapters::http::courses::{course_routes, CoursesAppState};
use courseloft::adapters::postgres::{PostgresCourseStore, PostgresUserStore};
use courseloft::adapters::razorpay::{RazorpayConfig, RazorpayGateway};
use courseloft::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let gateway = RazorpayGateway::new(RazorpayConfig::new(
        config.payment.razorpay_key_id.clone(),
        config.payment.razorpay_key_secret.clone(),
    ));

    let state = CoursesAppState {
        courses: Arc::new(PostgresCourseStore::new(pool.clone())),
        users: Arc::new(PostgresUserStore::new(pool)),
        gateway: Arc::new(gateway),
        callback_secret: SecretString::new(config.payment.razorpay_key_secret.clone()),
        post_payment_redirect: config.payment.post_payment_redirect.clone(),
    };

    let app = Router::new()
        .nest("/api/courses", course_routes())
        .with_state(state)
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, environment = ?config.server.environment, "Courseloft listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<axum::http::HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        // Development default: open, matching the SPA dev server setup.
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

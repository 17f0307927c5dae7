use std::sync::Arc;

use staybite_app::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staybite_app=debug,staybite_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = staybite_client::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting StayBite client against {}", config.api.base_url);

    let api = Arc::new(
        staybite_client::HttpApi::new(&config.api).expect("Failed to build HTTP client"),
    );
    let session = Arc::new(
        staybite_client::SessionStore::open(&config.session.storage_dir)
            .expect("Failed to open session storage"),
    );

    let state = AppState::new(api, session, config.booking.clone());

    if let Some(user) = state.session.user() {
        tracing::info!("signed in as {}", user.email);
    }

    // Smoke fetch: pull the landing-page catalogs side by side.
    match state.home().load().await {
        Ok(data) => tracing::info!(
            pgs = data.pgs.len(),
            rooms = data.rooms.len(),
            "catalog loaded"
        ),
        Err(e) => tracing::error!("catalog load failed: {}", e.user_message()),
    }
}

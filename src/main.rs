use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};
use q_fleet_sdk::{Problem, QFleetClient};
use std::io;

mod config;
mod map_view;
mod models;
mod routes;
mod session;

use config::AppConfig;
use routes::{configure, json_config, AppState};

fn init_sentry(dsn: &str) -> Option<sentry::ClientInitGuard> {
    match dsn.parse::<sentry::types::Dsn>() {
        Ok(dsn) => Some(sentry::init(sentry::ClientOptions {
            dsn: Some(dsn),
            release: sentry::release_name!(),
            ..Default::default()
        })),
        Err(e) => {
            warn!("Ignoring invalid SENTRY_DSN: {}", e);
            None
        }
    }
}

// ---------- Server bootstrap ----------
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let _sentry = config.sentry_dsn.as_deref().and_then(init_sentry);

    let client = QFleetClient::new(&config.api_url)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
        .with_timeout(config.timeout);

    info!(
        "Using optimizer at {} with a {}s timeout",
        client.base_url(),
        config.timeout.as_secs()
    );

    let state = web::Data::new(AppState::new(client, Problem::default()));
    let json_limit = config.json_limit;

    info!("Starting server on http://127.0.0.1:{}", config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(sentry_actix::Sentry::new())
            .app_data(state.clone())
            .app_data(json_config(json_limit))
            .configure(configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}

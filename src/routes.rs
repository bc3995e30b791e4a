use actix_web::{web, HttpResponse, Responder};
use log::{info, warn};
use parking_lot::Mutex;
use q_fleet_sdk::{Problem, QFleetClient};

use crate::models::{ErrorResponse, StateResponse};
use crate::session::{Session, SessionError};

/// Shared by all workers: one presentation session and the optimizer client
pub struct AppState {
    pub session: Mutex<Session>,
    pub client: QFleetClient,
}

impl AppState {
    pub fn new(client: QFleetClient, parameters: Problem) -> Self {
        AppState {
            session: Mutex::new(Session::new(parameters)),
            client,
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/state", web::get().to(get_state))
                .route("/parameters", web::put().to(update_parameters))
                .route("/optimize", web::post().to(optimize))
                .route("/backend-health", web::get().to(backend_health)),
        );
}

/// JSON extractor settings; malformed bodies become `400 {"error": ...}`
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _| {
            let err_string = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(ErrorResponse::new(err_string)),
            )
            .into()
        })
}

// ---------- Route handlers ----------

/// GET /
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../static/index.html"))
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// GET /api/state
pub async fn get_state(state: web::Data<AppState>) -> impl Responder {
    let session = state.session.lock();
    HttpResponse::Ok().json(StateResponse::from(&*session))
}

/// PUT /api/parameters
pub async fn update_parameters(
    state: web::Data<AppState>,
    req: web::Json<Problem>,
) -> HttpResponse {
    let mut session = state.session.lock();
    match session.update_parameters(req.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(StateResponse::from(&*session)),
        Err(e) => session_error(e),
    }
}

/// POST /api/optimize
///
/// Runs one solve with the problem in the request body and answers with the
/// resulting state. A failed solve is still a 200: the error lives in the state.
pub async fn optimize(state: web::Data<AppState>, req: web::Json<Problem>) -> HttpResponse {
    let begun = state.session.lock().begin_solve(req.into_inner());
    let problem = match begun {
        Ok(problem) => problem,
        Err(e) => return session_error(e),
    };

    info!("Optimizing {:?}", problem);
    let outcome = state.client.solve(&problem).await;

    let mut session = state.session.lock();
    session.finish_solve(outcome);
    HttpResponse::Ok().json(StateResponse::from(&*session))
}

/// GET /api/backend-health
pub async fn backend_health(state: web::Data<AppState>) -> HttpResponse {
    match state.client.health_check().await {
        Ok(health) => HttpResponse::Ok().json(health),
        Err(e) => HttpResponse::BadGateway().json(ErrorResponse::new(e)),
    }
}

fn session_error(e: SessionError) -> HttpResponse {
    match e {
        SessionError::Busy => HttpResponse::Conflict().json(ErrorResponse::new(e)),
        SessionError::InvalidParameters(_) => {
            warn!("Rejected parameters: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse::new(e))
        }
    }
}

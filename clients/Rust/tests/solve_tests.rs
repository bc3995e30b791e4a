use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpResponse, HttpServer};
use q_fleet_sdk::{Problem, QFleetClient, QFleetError};
use serde_json::json;
use std::time::{Duration, Instant};
use tokio_test::{assert_err, assert_ok};

/// In-process stand-in for the optimizer
struct MockBackend {
    base_url: String,
    handle: ServerHandle,
}

impl MockBackend {
    fn start(configure: fn(&mut web::ServiceConfig)) -> Self {
        let server = HttpServer::new(move || App::new().configure(configure))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .expect("Failed to bind mock backend");
        let addr = server.addrs()[0];

        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        MockBackend {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    fn client(&self) -> QFleetClient {
        QFleetClient::new(&self.base_url).expect("Failed to build client")
    }

    async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn solve_ok(problem: web::Json<Problem>) -> HttpResponse {
    let coordinates: Vec<[f64; 2]> = (0..problem.num_locations)
        .map(|i| [16.5 + f64::from(i) * 0.01, 80.5 - f64::from(i) * 0.01])
        .collect();

    HttpResponse::Ok().json(json!({
        "solution_method": "QAOA",
        "notes": format!("reps={}", problem.reps),
        "total_distance": 8.0,
        "execution_time": 0.42,
        "is_quantum_solution": true,
        "coordinates": coordinates,
        "routes": [[0, 1, 2], [0, 3]],
        "distances": [5.0, 3.0]
    }))
}

fn healthy(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/optimize", web::post().to(solve_ok)).route(
        "/api/health",
        web::get().to(|| async { HttpResponse::Ok().json(json!({"status": "healthy"})) }),
    );
}

fn overloaded(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/api/optimize",
        web::post().to(|| async {
            HttpResponse::InternalServerError().json(json!({"detail": "overload"}))
        }),
    );
}

fn garbled_error(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/api/optimize",
        web::post().to(|| async {
            HttpResponse::BadRequest()
                .content_type("text/html")
                .body("<html>oops</html>")
        }),
    );
}

fn garbled_success(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/api/optimize",
        web::post().to(|| async {
            HttpResponse::Ok()
                .content_type("application/json")
                .body("{\"routes\": ")
        }),
    );
}

fn sleepy(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/api/optimize",
        web::post().to(|| async {
            actix_web::rt::time::sleep(Duration::from_secs(5)).await;
            HttpResponse::Ok().finish()
        }),
    )
    .route(
        "/api/health",
        web::get().to(|| async {
            actix_web::rt::time::sleep(Duration::from_secs(5)).await;
            HttpResponse::Ok().json(json!({}))
        }),
    );
}

fn unhealthy(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/api/health",
        web::get().to(|| async { HttpResponse::ServiceUnavailable().finish() }),
    );
}

#[actix_web::test]
async fn test_solve_returns_solution_unchanged() {
    let backend = MockBackend::start(healthy);
    let client = backend.client();

    let solution = assert_ok!(client.solve(&Problem::new(4, 2, 5)).await);

    assert_eq!(solution.total_distance, 8.0);
    assert_eq!(solution.routes, vec![vec![0, 1, 2], vec![0, 3]]);
    assert_eq!(solution.distances, vec![5.0, 3.0]);
    assert_eq!(solution.routes.len(), solution.distances.len());
    // The mock sizes coordinates from the request body, so this proves the payload arrived
    assert_eq!(solution.coordinates.len(), 4);
    assert_eq!(solution.notes, "reps=5");

    backend.stop().await;
}

#[actix_web::test]
async fn test_concurrent_solves_are_independent() {
    let backend = MockBackend::start(healthy);
    let client = backend.client();

    let small = Problem::new(3, 1, 1);
    let large = Problem::new(8, 4, 8);
    let (first, second) = tokio::join!(client.solve(&small), client.solve(&large));

    assert_eq!(assert_ok!(first).coordinates.len(), 3);
    assert_eq!(assert_ok!(second).coordinates.len(), 8);

    backend.stop().await;
}

#[actix_web::test]
async fn test_remote_error_carries_status_and_detail() {
    let backend = MockBackend::start(overloaded);

    let err = assert_err!(backend.client().solve(&Problem::default()).await);

    match &err {
        QFleetError::RemoteError { status, detail } => {
            assert_eq!(*status, 500);
            assert_eq!(detail, "overload");
        }
        other => panic!("expected RemoteError, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("overload"));

    backend.stop().await;
}

#[actix_web::test]
async fn test_unparsable_error_body_uses_default_detail() {
    let backend = MockBackend::start(garbled_error);

    let err = assert_err!(backend.client().solve(&Problem::default()).await);

    match err {
        QFleetError::RemoteError { status, detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail, "The server returned an error.");
        }
        other => panic!("expected RemoteError, got {other:?}"),
    }

    backend.stop().await;
}

#[actix_web::test]
async fn test_malformed_solution_is_transport_error() {
    let backend = MockBackend::start(garbled_success);

    let err = assert_err!(backend.client().solve(&Problem::default()).await);

    match err {
        QFleetError::Transport(message) => assert!(!message.is_empty()),
        other => panic!("expected Transport, got {other:?}"),
    }

    backend.stop().await;
}

#[actix_web::test]
async fn test_slow_backend_times_out() {
    let backend = MockBackend::start(sleepy);
    let client = backend.client().with_timeout(Duration::from_millis(200));

    let started = Instant::now();
    let err = assert_err!(client.solve(&Problem::default()).await);

    assert!(err.is_timeout(), "expected Timeout, got {err:?}");
    assert!(err.to_string().contains("starting up"));
    assert!(started.elapsed() < Duration::from_secs(3));

    backend.stop().await;
}

#[actix_web::test]
async fn test_unreachable_backend_is_transport_error() {
    // Nothing listens on port 1
    let client = QFleetClient::new("http://127.0.0.1:1")
        .unwrap()
        .with_timeout(Duration::from_secs(5));

    let err = assert_err!(client.solve(&Problem::default()).await);

    match err {
        QFleetError::Transport(message) => assert!(!message.is_empty()),
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[actix_web::test]
async fn test_health_check_passes_body_through() {
    let backend = MockBackend::start(healthy);

    let health = assert_ok!(backend.client().health_check().await);

    assert_eq!(health.get("status"), Some(&json!("healthy")));

    backend.stop().await;
}

#[actix_web::test]
async fn test_health_check_reports_unavailable_backend() {
    let backend = MockBackend::start(unhealthy);

    let err = assert_err!(backend.client().health_check().await);

    assert_eq!(err.to_string(), "API Error: 503 - Backend is not responding.");

    backend.stop().await;
}

#[actix_web::test]
async fn test_health_check_times_out() {
    let backend = MockBackend::start(sleepy);
    let client = backend.client().with_timeout(Duration::from_millis(200));

    let err = assert_err!(client.health_check().await);

    assert!(err.is_timeout());

    backend.stop().await;
}

#[actix_web::test]
async fn test_caller_client_timeout_is_reported_as_timeout() {
    let backend = MockBackend::start(sleepy);
    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("Failed to build reqwest client");
    // The outer timer stays at its default, so only reqwest can fire here
    let client = QFleetClient::with_client(&backend.base_url, http).unwrap();

    let started = Instant::now();
    let err = assert_err!(client.solve(&Problem::default()).await);

    assert!(err.is_timeout(), "expected Timeout, got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(3));

    backend.stop().await;
}

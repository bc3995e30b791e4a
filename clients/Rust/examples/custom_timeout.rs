use q_fleet_sdk::{Problem, QFleetClient, QFleetError, DEFAULT_BASE_URL};
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Read configuration from environment variables
    let api_url = env::var("QFLEET_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let timeout_secs = env::var("QFLEET_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(10);

    let client = QFleetClient::new(&api_url)?.with_timeout(Duration::from_secs(timeout_secs));

    println!("⏱ Solving with a {}s budget...", timeout_secs);

    match client.solve(&Problem::default()).await {
        Ok(solution) => {
            println!("✓ Success!\n");
            println!("Routes: {:?}", solution.routes);
            println!("Distances: {:?}", solution.distances);
        }
        Err(e) => {
            eprintln!("✗ Error: {}", e);
            if matches!(e, QFleetError::Timeout) {
                eprintln!("\nTip: raise QFLEET_TIMEOUT_SECS or retry once the backend is awake");
            }
            return Err(e.into());
        }
    }

    Ok(())
}

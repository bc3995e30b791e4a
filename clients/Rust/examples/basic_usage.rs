use q_fleet_sdk::{ProblemBuilder, QFleetClient, DEFAULT_BASE_URL};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Point QFLEET_API_URL at a local optimizer to avoid the hosted cold start
    let api_url = env::var("QFLEET_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let client = QFleetClient::new(&api_url)?;

    match client.health_check().await {
        Ok(health) => println!("✓ Backend is healthy: {:?}", health),
        Err(e) => println!("✗ Health check failed: {}", e),
    }

    // Four locations (depot + three stops), two vehicles, five QAOA layers
    let problem = ProblemBuilder::new()
        .num_locations(4)
        .num_vehicles(2)
        .reps(5)
        .build()?;

    println!("\n⚛ Solving vehicle routing problem...\n");

    let solution = client.solve(&problem).await?;

    println!("Method: {}", solution.solution_method);
    println!("Notes: {}", solution.notes);
    println!("Total distance: {:.2}", solution.total_distance);
    println!("Execution time: {:.2}s", solution.execution_time);

    for (i, route) in solution.routes.iter().enumerate() {
        let stops: Vec<String> = route.iter().map(|stop| stop.to_string()).collect();
        match solution.distances.get(i) {
            Some(distance) => println!("  Vehicle {}: {} ({:.2})", i + 1, stops.join(" → "), distance),
            None => println!("  Vehicle {}: {}", i + 1, stops.join(" → ")),
        }
    }

    Ok(())
}

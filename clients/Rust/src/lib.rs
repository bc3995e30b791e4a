//! # Q-Fleet Client
//!
//! A Rust client SDK for the Q-Fleet optimizer, a remote service that solves
//! small vehicle routing problems with QAOA.
//!
//! ## Example
//!
//! ```no_run
//! use q_fleet_sdk::{ProblemBuilder, QFleetClient, DEFAULT_BASE_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QFleetClient::new(DEFAULT_BASE_URL)?;
//!
//!     let problem = ProblemBuilder::new()
//!         .num_locations(5)
//!         .num_vehicles(2)
//!         .reps(3)
//!         .build()?;
//!
//!     let solution = client.solve(&problem).await?;
//!     println!("Routes: {:?}", solution.routes);
//!     Ok(())
//! }
//! ```

pub mod types;
pub mod client;
pub mod builder;
pub mod error;

pub use client::{QFleetClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use types::{Coordinate, HealthStatus, Problem, Solution, NUM_LOCATIONS, NUM_VEHICLES, REPS};
pub use builder::{validate, ProblemBuilder};
pub use error::{QFleetError, Result};

use log::warn;
use q_fleet_sdk::{Coordinate, Solution};
use serde::Serialize;

/// Route colors, reused cyclically when there are more vehicles than colors
pub const ROUTE_COLORS: [&str; 4] = ["#FF0000", "#0000FF", "#008000", "#FFA500"];

pub const DEFAULT_CENTER: Coordinate = [16.5, 80.5];
pub const DEFAULT_ZOOM: u8 = 11;

pub fn route_color(vehicle: usize) -> &'static str {
    ROUTE_COLORS[vehicle % ROUTE_COLORS.len()]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coordinate,
    pub is_depot: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePolyline {
    /// Zero-based vehicle position
    pub vehicle: usize,
    pub color: &'static str,
    pub positions: Vec<Coordinate>,
}

/// One line of the results panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub color: &'static str,
    /// e.g. `Vehicle 1: 0 → 1 → 2`
    pub label: String,
    /// Route distance with two decimals, absent when the service sent none
    pub distance: Option<String>,
}

/// Everything the page needs to draw a solution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub polylines: Vec<RoutePolyline>,
    pub routes: Vec<RouteSummary>,
    pub solution_method: String,
    pub notes: String,
    pub total_distance: String,
    pub execution_time: String,
    pub is_quantum_solution: bool,
}

impl MapView {
    pub fn from_solution(solution: &Solution) -> Self {
        let markers = solution
            .coordinates
            .iter()
            .enumerate()
            .map(|(index, &position)| Marker {
                position,
                is_depot: index == 0,
            })
            .collect();

        let polylines = solution
            .routes
            .iter()
            .enumerate()
            .filter(|(_, route)| !route.is_empty())
            .map(|(vehicle, route)| RoutePolyline {
                vehicle,
                color: route_color(vehicle),
                positions: resolve_positions(vehicle, route, &solution.coordinates),
            })
            .collect();

        let routes = solution
            .routes
            .iter()
            .enumerate()
            .map(|(vehicle, route)| RouteSummary {
                color: route_color(vehicle),
                label: format!("Vehicle {}: {}", vehicle + 1, join_stops(route)),
                distance: solution.distances.get(vehicle).map(|d| format!("{:.2}", d)),
            })
            .collect();

        MapView {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            markers,
            polylines,
            routes,
            solution_method: solution.solution_method.clone(),
            notes: solution.notes.clone(),
            total_distance: format!("{:.2}", solution.total_distance),
            execution_time: format!("{:.2}", solution.execution_time),
            is_quantum_solution: solution.is_quantum_solution,
        }
    }
}

fn resolve_positions(vehicle: usize, route: &[usize], coordinates: &[Coordinate]) -> Vec<Coordinate> {
    route
        .iter()
        .filter_map(|&stop| {
            let position = coordinates.get(stop).copied();
            if position.is_none() {
                warn!(
                    "Route of vehicle {} references location {} but only {} coordinates were returned",
                    vehicle + 1,
                    stop,
                    coordinates.len()
                );
            }
            position
        })
        .collect()
}

fn join_stops(route: &[usize]) -> String {
    route
        .iter()
        .map(|stop| stop.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::network::{Gate, RouteRecord};
use crate::transport::TransportPlan;

/// A gate in list views.
#[derive(Debug, Serialize)]
pub struct GateSummary {
    /// Stable 3-letter gate code.
    pub code: String,

    /// Display name.
    pub name: String,
}

impl GateSummary {
    pub fn from_gate(gate: &Gate) -> Self {
        Self {
            code: gate.code.to_string(),
            name: gate.name.clone(),
        }
    }
}

/// An outgoing directed route from a gate.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Destination gate code.
    pub to_code: String,

    /// Distance in hyperspace units.
    pub hu_distance: u32,
}

impl RouteResult {
    pub fn from_route(route: &RouteRecord) -> Self {
        Self {
            to_code: route.to.to_string(),
            hu_distance: route.hu_distance,
        }
    }
}

/// Gate details including outgoing routes.
#[derive(Debug, Serialize)]
pub struct GateDetailResponse {
    pub code: String,
    pub name: String,

    /// Outgoing directed routes, ordered by destination code.
    pub outgoing: Vec<RouteResult>,
}

/// Query parameters for cheapest-path requests.
#[derive(Debug, Deserialize)]
pub struct CheapestPathQuery {
    /// Passenger count for the optional hyperspace fee quote.
    pub passengers: Option<u32>,
}

/// Cheapest directed path between two gates.
#[derive(Debug, Serialize)]
pub struct CheapestPathResponse {
    /// Gate codes from start to target inclusive.
    pub path: Vec<String>,

    /// Total path distance in hyperspace units.
    pub total_hu: u64,

    /// Echo of the passengers query parameter, if supplied.
    pub passengers: Option<u32>,

    /// One-way hyperspace fee for the whole party, if passengers was
    /// supplied (GBP, rounded half-up to 2 decimals).
    pub hyperspace_cost_gbp: Option<f64>,
}

/// Query parameters for transport pricing requests.
#[derive(Debug, Deserialize)]
pub struct TransportQuery {
    /// Passenger count to move. Must be positive.
    pub passengers: u32,

    /// Days of parking required for personal vehicles (defaults to 0).
    pub parking: Option<u32>,
}

/// Breakdown of trips, per-trip costs, and totals for a single-mode plan.
#[derive(Debug, Serialize)]
pub struct TransportBreakdown {
    pub hstc_trips: u32,
    pub personal_trips: u32,

    pub hstc_trip_cost_gbp: f64,
    pub personal_trip_cost_gbp: f64,

    pub hstc_total_gbp: f64,
    pub personal_total_gbp: f64,

    pub total_capacity: u32,
}

/// Transport pricing response: the chosen single-mode plan plus both
/// pure-mode totals for client transparency.
#[derive(Debug, Serialize)]
pub struct TransportResponse {
    pub distance_au: f64,
    pub passengers: u32,
    pub parking_days: u32,

    /// Total cost of the chosen plan (GBP).
    pub total_cost_gbp: f64,

    pub plan: TransportBreakdown,

    /// What moving everyone by HSTC alone would cost (GBP).
    pub hstc_only_total_gbp: f64,

    /// What moving everyone by personal vehicles alone would cost (GBP).
    pub personal_only_total_gbp: f64,

    /// Always "HSTC" or "PERSONAL" for single-mode plans.
    pub chosen_mode: String,
}

impl TransportBreakdown {
    pub fn from_plan(plan: &TransportPlan) -> Self {
        Self {
            hstc_trips: plan.hstc_trips,
            personal_trips: plan.personal_trips,
            hstc_trip_cost_gbp: plan.hstc_trip_cost_gbp,
            personal_trip_cost_gbp: plan.personal_trip_cost_gbp,
            hstc_total_gbp: plan.hstc_total_gbp,
            personal_total_gbp: plan.personal_total_gbp,
            total_capacity: plan.total_capacity,
        }
    }
}

/// Error body returned by all failing endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GateCode;

    #[test]
    fn gate_summary_serializes_plain_fields() {
        let gate = Gate {
            code: GateCode::parse("SOL").unwrap(),
            name: "Sol".to_owned(),
        };
        let json = serde_json::to_value(GateSummary::from_gate(&gate)).unwrap();
        assert_eq!(json, serde_json::json!({ "code": "SOL", "name": "Sol" }));
    }

    #[test]
    fn cheapest_path_response_shape() {
        let response = CheapestPathResponse {
            path: vec!["SOL".to_owned(), "SIR".to_owned(), "CAS".to_owned()],
            total_hu: 300,
            passengers: Some(2),
            hyperspace_cost_gbp: Some(60.0),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["path"], serde_json::json!(["SOL", "SIR", "CAS"]));
        assert_eq!(json["total_hu"], 300);
        assert_eq!(json["passengers"], 2);
        assert_eq!(json["hyperspace_cost_gbp"], 60.0);
    }
}

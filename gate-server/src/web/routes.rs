//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::domain::GateCode;
use crate::routing::{RoutingError, find_shortest_path};
use crate::transport::{PlanError, round_money};

use super::dto::*;
use super::state::AppState;

/// One-way hyperspace fee per passenger per HU, charged by the web
/// layer on top of the computed path.
const HYPERSPACE_RATE_GBP_PER_HU: f64 = 0.10;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/gates", get(list_gates))
        .route("/gates/:gate_code", get(get_gate))
        .route("/gates/:gate_code/to/:target_gate_code", get(cheapest_path))
        .route("/transport/:distance", get(transport_cost))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all gates, ordered by code.
async fn list_gates(State(state): State<AppState>) -> Json<Vec<GateSummary>> {
    let gates = state.network.gates().map(GateSummary::from_gate).collect();
    Json(gates)
}

/// A single gate with its outgoing directed routes.
async fn get_gate(
    State(state): State<AppState>,
    Path(gate_code): Path<String>,
) -> Result<Json<GateDetailResponse>, AppError> {
    let code = parse_gate_code(&gate_code)?;

    let gate = state.network.gate(&code).ok_or_else(|| AppError::NotFound {
        message: format!("Gate '{code}' not found"),
    })?;

    let outgoing = state
        .network
        .outgoing(&code)
        .into_iter()
        .map(RouteResult::from_route)
        .collect();

    Ok(Json(GateDetailResponse {
        code: gate.code.to_string(),
        name: gate.name.clone(),
        outgoing,
    }))
}

/// Cheapest directed path between two gates, with an optional fee quote.
async fn cheapest_path(
    State(state): State<AppState>,
    Path((gate_code, target_gate_code)): Path<(String, String)>,
    Query(query): Query<CheapestPathQuery>,
) -> Result<Json<CheapestPathResponse>, AppError> {
    let start = parse_gate_code(&gate_code)?;
    let target = parse_gate_code(&target_gate_code)?;

    if state.network.gate(&start).is_none() {
        return Err(AppError::NotFound {
            message: format!("Gate '{start}' not found"),
        });
    }
    if state.network.gate(&target).is_none() {
        return Err(AppError::NotFound {
            message: format!("Gate '{target}' not found"),
        });
    }

    if query.passengers == Some(0) {
        return Err(AppError::BadRequest {
            message: "passengers must be > 0".to_owned(),
        });
    }

    // Directed edges: each (from -> to) has its own HU weight.
    let edges = state.network.edges();
    let result =
        find_shortest_path(&edges, start.as_str(), target.as_str()).map_err(AppError::from)?;

    let Some(found) = result else {
        return Err(AppError::NotFound {
            message: format!("No route from '{start}' to '{target}'"),
        });
    };

    // Hyperspace fee: one-way journey along the directed path for the
    // whole party.
    let hyperspace_cost_gbp = query.passengers.map(|passengers| {
        round_money(HYPERSPACE_RATE_GBP_PER_HU * f64::from(passengers) * found.total_weight as f64)
    });

    Ok(Json(CheapestPathResponse {
        path: found.path,
        total_hu: found.total_weight,
        passengers: query.passengers,
        hyperspace_cost_gbp,
    }))
}

/// Transport pricing for a distance and passenger count.
async fn transport_cost(
    State(state): State<AppState>,
    Path(distance): Path<f64>,
    Query(query): Query<TransportQuery>,
) -> Result<Json<TransportResponse>, AppError> {
    let parking_days = query.parking.unwrap_or(0);

    let plan = state
        .planner
        .plan(distance, query.passengers, parking_days)
        .map_err(AppError::from)?;

    // Pure single-mode totals for transparency in client UIs.
    let rates = state.planner.rates();
    let hstc_only_total = round_money(
        f64::from(query.passengers.div_ceil(rates.hstc_capacity))
            * (rates.hstc_rate_per_au * distance),
    );
    let personal_only_total = round_money(
        f64::from(query.passengers.div_ceil(rates.personal_capacity))
            * (rates.personal_rate_per_au * distance
                + rates.parking_per_day * f64::from(parking_days)),
    );

    Ok(Json(TransportResponse {
        distance_au: plan.distance_au,
        passengers: plan.passengers,
        parking_days: plan.parking_days,
        total_cost_gbp: plan.total_cost_gbp,
        chosen_mode: plan.chosen_mode().to_string(),
        plan: TransportBreakdown::from_plan(&plan),
        hstc_only_total_gbp: hstc_only_total,
        personal_only_total_gbp: personal_only_total,
    }))
}

fn parse_gate_code(raw: &str) -> Result<GateCode, AppError> {
    GateCode::parse_normalized(raw).map_err(|_| AppError::BadRequest {
        message: format!("Invalid gate code: {raw}"),
    })
}

/// Application error type.
///
/// Every failure a handler can hit is a caller mistake (bad input or a
/// missing resource), so there is no internal-error variant.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<RoutingError> for AppError {
    fn from(e: RoutingError) -> Self {
        // The registry rejects non-positive distances, so a bad weight
        // here means the caller handed the core an invalid edge list.
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

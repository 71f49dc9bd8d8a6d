//! Web layer for the gate routing server.
//!
//! Provides HTTP endpoints for listing gates, computing cheapest paths
//! and pricing transport.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;

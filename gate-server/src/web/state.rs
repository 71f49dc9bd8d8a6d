//! Application state for the web layer.

use std::sync::Arc;

use crate::network::GateNetwork;
use crate::transport::TransportPlanner;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Gate and route registry.
    pub network: Arc<GateNetwork>,

    /// Transport pricing planner.
    pub planner: Arc<TransportPlanner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: GateNetwork, planner: TransportPlanner) -> Self {
        Self {
            network: Arc::new(network),
            planner: Arc::new(planner),
        }
    }
}

//! In-memory registry of gates and directed routes.
//!
//! The gate graph is small reference data loaded once at startup; the
//! registry enforces the same constraints the original schema did (unique
//! gates, unique directed routes, endpoints must exist, positive HU
//! distances) and hands the routing layer a plain edge list.

mod seed;

use std::collections::{BTreeMap, HashSet};

use crate::domain::GateCode;
use crate::routing::Edge;

pub use seed::hstc_network;

/// A hyperspace gate: stable 3-letter code plus display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    pub code: GateCode,
    pub name: String,
}

/// A directed route between two gates with a hyperspace-unit distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRecord {
    pub from: GateCode,
    pub to: GateCode,
    pub hu_distance: u32,
}

/// Error from registry mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A route endpoint refers to a gate that isn't registered.
    #[error("gate '{0}' does not exist")]
    UnknownGate(GateCode),

    /// A gate with this code is already registered.
    #[error("gate '{0}' is already registered")]
    DuplicateGate(GateCode),

    /// A route for this ordered gate pair already exists.
    #[error("route {0} -> {1} already exists")]
    DuplicateRoute(GateCode, GateCode),

    /// Routes must have a strictly positive HU distance.
    #[error("route {0} -> {1} must have a positive HU distance")]
    ZeroDistance(GateCode, GateCode),
}

/// Registry of gates and their directed routes.
#[derive(Debug, Clone, Default)]
pub struct GateNetwork {
    /// Gates keyed by code; the map ordering gives stable list output.
    gates: BTreeMap<GateCode, Gate>,

    routes: Vec<RouteRecord>,

    /// Ordered (from, to) pairs already present, for duplicate checks.
    route_index: HashSet<(GateCode, GateCode)>,
}

impl GateNetwork {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gate.
    pub fn add_gate(
        &mut self,
        code: GateCode,
        name: impl Into<String>,
    ) -> Result<(), NetworkError> {
        if self.gates.contains_key(&code) {
            return Err(NetworkError::DuplicateGate(code));
        }
        self.gates.insert(
            code,
            Gate {
                code,
                name: name.into(),
            },
        );
        Ok(())
    }

    /// Register a directed route between two existing gates.
    ///
    /// Distances are HU and direction-sensitive; registering A -> B says
    /// nothing about B -> A.
    pub fn add_route(
        &mut self,
        from: GateCode,
        to: GateCode,
        hu_distance: u32,
    ) -> Result<(), NetworkError> {
        if !self.gates.contains_key(&from) {
            return Err(NetworkError::UnknownGate(from));
        }
        if !self.gates.contains_key(&to) {
            return Err(NetworkError::UnknownGate(to));
        }
        if hu_distance == 0 {
            return Err(NetworkError::ZeroDistance(from, to));
        }
        if !self.route_index.insert((from, to)) {
            return Err(NetworkError::DuplicateRoute(from, to));
        }
        self.routes.push(RouteRecord {
            from,
            to,
            hu_distance,
        });
        Ok(())
    }

    /// Look up a gate by code.
    pub fn gate(&self, code: &GateCode) -> Option<&Gate> {
        self.gates.get(code)
    }

    /// All gates, ordered by code for stable API output.
    pub fn gates(&self) -> impl Iterator<Item = &Gate> {
        self.gates.values()
    }

    /// All directed routes departing from the given gate, ordered by
    /// destination code.
    pub fn outgoing(&self, from: &GateCode) -> Vec<&RouteRecord> {
        // The graph is small; a scan is simpler than an adjacency index.
        let mut routes: Vec<&RouteRecord> =
            self.routes.iter().filter(|r| r.from == *from).collect();
        routes.sort_by_key(|r| r.to);
        routes
    }

    /// All routes as directed edges for the routing layer.
    pub fn edges(&self) -> Vec<Edge> {
        self.routes
            .iter()
            .map(|r| Edge::new(r.from.as_str(), r.to.as_str(), r.hu_distance))
            .collect()
    }

    /// Number of registered gates.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Number of registered routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no gates are registered.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

//! The HSTC reference network.

use crate::domain::GateCode;

use super::GateNetwork;

const GATES: &[(&str, &str)] = &[
    ("SOL", "Sol"),
    ("PRX", "Proxima"),
    ("SIR", "Sirius"),
    ("CAS", "Castor"),
    ("PRO", "Procyon"),
    ("DEN", "Denebula"),
    ("RAN", "Ran"),
    ("ARC", "Arcturus"),
    ("FOM", "Fomalhaut"),
    ("ALT", "Altair"),
    ("VEG", "Vega"),
    ("ALD", "Aldermain"),
    ("ALS", "Alshain"),
];

// Routes are one-way edges. Distances are HU and are direction-sensitive.
const ROUTES: &[(&str, &str, u32)] = &[
    ("SOL", "RAN", 100),
    ("SOL", "PRX", 90),
    ("SOL", "SIR", 100),
    ("SOL", "ARC", 200),
    ("SOL", "ALD", 250),
    ("PRX", "SOL", 90),
    ("PRX", "SIR", 100),
    ("PRX", "ALT", 150),
    ("SIR", "SOL", 80),
    ("SIR", "PRX", 10),
    ("SIR", "CAS", 200),
    ("CAS", "SIR", 200),
    ("CAS", "PRO", 120),
    ("PRO", "CAS", 80),
    ("DEN", "PRO", 5),
    ("DEN", "ARC", 2),
    ("DEN", "FOM", 8),
    ("DEN", "RAN", 100),
    ("DEN", "ALD", 3),
    ("RAN", "SOL", 100),
    ("ARC", "SOL", 500),
    ("ARC", "DEN", 120),
    ("FOM", "PRX", 10),
    ("FOM", "DEN", 20),
    ("FOM", "ALS", 9),
    ("ALT", "FOM", 140),
    ("ALT", "VEG", 220),
    ("VEG", "ARC", 220),
    ("VEG", "ALD", 580),
    ("ALD", "SOL", 200),
    ("ALD", "ALS", 160),
    ("ALD", "VEG", 320),
    ("ALS", "ALT", 1),
    ("ALS", "ALD", 1),
];

/// Build the seeded HSTC gate network.
pub fn hstc_network() -> GateNetwork {
    let mut network = GateNetwork::new();

    for (code, name) in GATES {
        let code = GateCode::parse(code).expect("seed gate codes are valid");
        network
            .add_gate(code, *name)
            .expect("seed gate codes are unique");
    }

    for (from, to, hu_distance) in ROUTES {
        let from = GateCode::parse(from).expect("seed gate codes are valid");
        let to = GateCode::parse(to).expect("seed gate codes are valid");
        network
            .add_route(from, to, *hu_distance)
            .expect("seed routes reference seeded gates and are unique");
    }

    network
}

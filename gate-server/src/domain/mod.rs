//! Domain types shared across the service.

mod gate;

pub use gate::{GateCode, InvalidGateCode};

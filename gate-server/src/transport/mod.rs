//! Transport pricing: personal vehicles vs. HSTC shared transit.
//!
//! Evaluates both pricing models for a passenger load over a distance and
//! picks the cheaper single mode. The two modes are never mixed; that is
//! a product decision, not a simplification to revisit.

mod planner;
mod rates;

pub use planner::{Mode, PlanError, TransportPlan, TransportPlanner};
pub use rates::RateSchedule;

/// Round a currency amount to two decimal places, half-up.
///
/// Applied only to fully-computed per-unit costs and totals, never to
/// intermediate capacity arithmetic.
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! Pricing configuration for the transport planner.

/// Rates and capacities for both transport modes.
///
/// Injectable so the planner can be exercised against alternate rate
/// schedules; [`RateSchedule::default`] carries the production figures.
#[derive(Debug, Clone)]
pub struct RateSchedule {
    /// Seats per personal vehicle.
    pub personal_capacity: u32,

    /// Travel cost per AU per personal vehicle (GBP).
    pub personal_rate_per_au: f64,

    /// Parking cost per day per personal vehicle (GBP).
    pub parking_per_day: f64,

    /// Seats per HSTC trip.
    pub hstc_capacity: u32,

    /// Travel cost per AU per HSTC trip (GBP). No parking applies.
    pub hstc_rate_per_au: f64,
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self {
            personal_capacity: 4,
            personal_rate_per_au: 0.30,
            parking_per_day: 5.0,
            hstc_capacity: 5,
            hstc_rate_per_au: 0.45,
        }
    }
}

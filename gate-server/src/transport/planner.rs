//! Cheapest single-mode transport planning.

use std::fmt;

use tracing::debug;

use super::rates::RateSchedule;
use super::round_money;

/// Error from transport planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// An input violates the planner's preconditions.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// The transport mode a plan settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Shared transit: 5 seats per trip, travel cost only.
    Hstc,

    /// Individual vehicles: 4 seats each, travel plus parking cost.
    Personal,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Hstc => f.write_str("HSTC"),
            Mode::Personal => f.write_str("PERSONAL"),
        }
    }
}

/// Computed cheapest plan plus the full cost breakdown.
///
/// Exactly one of `hstc_trips` / `personal_trips` is nonzero. Per-trip
/// costs are reported for both modes regardless of which one was chosen;
/// the non-chosen mode's total is reported as 0.00. All currency figures
/// are rounded half-up to two decimals at the point they are finalized.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportPlan {
    /// Real-space distance travelled, in AU.
    pub distance_au: f64,

    /// Passengers to move.
    pub passengers: u32,

    /// Days of parking required for personal vehicles.
    pub parking_days: u32,

    /// HSTC trips required (0 when personal mode was chosen).
    pub hstc_trips: u32,

    /// Personal vehicles required (0 when HSTC mode was chosen).
    pub personal_trips: u32,

    /// Travel cost for one HSTC trip (GBP).
    pub hstc_trip_cost_gbp: f64,

    /// Total cost for one personal vehicle: travel plus parking (GBP).
    pub personal_trip_cost_gbp: f64,

    /// Seats provided by the chosen mode.
    pub total_capacity: u32,

    /// Total cost of the chosen mode (GBP).
    pub total_cost_gbp: f64,

    /// HSTC-mode total, 0.00 unless HSTC was chosen (GBP).
    pub hstc_total_gbp: f64,

    /// Personal-mode total, 0.00 unless personal was chosen (GBP).
    pub personal_total_gbp: f64,
}

impl TransportPlan {
    /// The mode this plan settled on.
    pub fn chosen_mode(&self) -> Mode {
        if self.hstc_trips > 0 {
            Mode::Hstc
        } else {
            Mode::Personal
        }
    }
}

/// Plans the cheapest single-mode transport for a passenger load.
///
/// Pure: no I/O, no shared state. One instance may serve arbitrarily many
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct TransportPlanner {
    rates: RateSchedule,
}

impl TransportPlanner {
    /// Create a planner with the given rate schedule.
    pub fn new(rates: RateSchedule) -> Self {
        Self { rates }
    }

    /// The rate schedule this planner prices against.
    pub fn rates(&self) -> &RateSchedule {
        &self.rates
    }

    /// Compute the cheapest single-mode plan.
    ///
    /// Business rules:
    /// - Choose exactly one mode: personal-only OR HSTC-only, no mixing.
    /// - Trip counts come from exact ceiling division; currency rounding
    ///   happens only after totals are fully computed.
    /// - Comparison uses the rounded totals. On a tie, HSTC wins whenever
    ///   it needs no more movements than personal (it avoids parking
    ///   complexity); otherwise personal wins.
    ///
    /// # Errors
    ///
    /// Fails with [`PlanError::InvalidInput`] when `distance_au` is not a
    /// finite positive number or `passengers` is zero. Negative passenger
    /// and parking counts are unrepresentable in the signature.
    pub fn plan(
        &self,
        distance_au: f64,
        passengers: u32,
        parking_days: u32,
    ) -> Result<TransportPlan, PlanError> {
        if !distance_au.is_finite() || distance_au <= 0.0 {
            return Err(PlanError::InvalidInput("distance_au must be > 0"));
        }
        if passengers == 0 {
            return Err(PlanError::InvalidInput("passengers must be > 0"));
        }

        let rates = &self.rates;

        // Personal capacity and costs are computed per vehicle.
        let personal_trips = passengers.div_ceil(rates.personal_capacity);
        let personal_per_trip = rates.personal_rate_per_au * distance_au
            + rates.parking_per_day * f64::from(parking_days);
        let personal_total = f64::from(personal_trips) * personal_per_trip;
        let personal_capacity = personal_trips * rates.personal_capacity;

        // HSTC trips are per shared-transit capacity and never pay parking.
        let hstc_trips = passengers.div_ceil(rates.hstc_capacity);
        let hstc_per_trip = rates.hstc_rate_per_au * distance_au;
        let hstc_total = f64::from(hstc_trips) * hstc_per_trip;
        let hstc_capacity = hstc_trips * rates.hstc_capacity;

        // Round only now, so comparisons see finalized currency values.
        let personal_total_r = round_money(personal_total);
        let hstc_total_r = round_money(hstc_total);
        let personal_per_trip_r = round_money(personal_per_trip);
        let hstc_per_trip_r = round_money(hstc_per_trip);

        // Cheaper rounded total wins outright; on a tie, HSTC wins unless
        // it needs strictly more movements.
        let chosen = if personal_total_r < hstc_total_r {
            Mode::Personal
        } else if hstc_total_r < personal_total_r {
            Mode::Hstc
        } else if hstc_trips <= personal_trips {
            Mode::Hstc
        } else {
            Mode::Personal
        };

        debug!(
            distance_au,
            passengers,
            parking_days,
            %chosen,
            personal_total = personal_total_r,
            hstc_total = hstc_total_r,
            "transport plan computed"
        );

        let plan = match chosen {
            Mode::Hstc => TransportPlan {
                distance_au,
                passengers,
                parking_days,
                hstc_trips,
                personal_trips: 0,
                hstc_trip_cost_gbp: hstc_per_trip_r,
                personal_trip_cost_gbp: personal_per_trip_r,
                total_capacity: hstc_capacity,
                total_cost_gbp: hstc_total_r,
                hstc_total_gbp: hstc_total_r,
                personal_total_gbp: 0.0,
            },
            Mode::Personal => TransportPlan {
                distance_au,
                passengers,
                parking_days,
                hstc_trips: 0,
                personal_trips,
                hstc_trip_cost_gbp: hstc_per_trip_r,
                personal_trip_cost_gbp: personal_per_trip_r,
                total_capacity: personal_capacity,
                total_cost_gbp: personal_total_r,
                hstc_total_gbp: 0.0,
                personal_total_gbp: personal_total_r,
            },
        };

        Ok(plan)
    }
}

//! Itinerary generation: validate, price, render.
//!
//! One call per submission. Nothing is stored; the only non-deterministic
//! part is the trip id.

use tracing::{info, warn};

use super::calculators::{calculate_total_amount, CostBreakdown};
use crate::error::Result;
use crate::itinerary::render_itinerary;
use crate::trip::{validate_trip, TripDuration, TripId, TripRequest, ValidationError};

/// Result of a successful submission
#[derive(Debug, Clone)]
pub struct GeneratedItinerary {
    pub trip_id: TripId,
    pub duration: TripDuration,
    pub breakdown: CostBreakdown,
    pub itinerary_html: String,
}

/// Validate a trip, price it and render its itinerary.
///
/// Any validation failure aborts before pricing; no partial output is produced.
pub fn generate_itinerary(trip: &TripRequest, currency_symbol: &str) -> Result<GeneratedItinerary> {
    generate_itinerary_with_id(trip, currency_symbol, TripId::generate())
}

/// Same as [`generate_itinerary`] with a caller-supplied trip id.
pub fn generate_itinerary_with_id(
    trip: &TripRequest,
    currency_symbol: &str,
    trip_id: TripId,
) -> Result<GeneratedItinerary> {
    let duration = validate_trip(trip).map_err(|e| {
        warn!("Rejected itinerary request: {}", e);
        e
    })?;

    let breakdown = trip
        .pricing_input()
        .and_then(|input| calculate_total_amount(&input))
        .map_err(|e| {
            warn!("Rejected itinerary request: {}", e);
            ValidationError::from(e)
        })?;
    let itinerary_html = render_itinerary(trip, duration, &trip_id, &breakdown, currency_symbol)?;

    info!(
        trip_id = %trip_id,
        days = duration.days,
        destinations = trip.destinations.len(),
        total = %breakdown.total,
        "Itinerary generated"
    );

    Ok(GeneratedItinerary {
        trip_id,
        duration,
        breakdown,
        itinerary_html,
    })
}

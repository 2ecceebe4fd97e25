//! Checks run on a submission before anything is priced or rendered.

use std::collections::HashSet;

use super::models::{TripDuration, TripRequest};
use crate::catalog;
use crate::pricing::calculators::{is_negative, AmountOverflow};

/// Reasons a submission cannot produce an itinerary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter both customer name and phone number.")]
    MissingCustomerDetails,

    #[error("Please select at least one place to visit.")]
    NoDestinations,

    #[error("Please ensure the start date is before the end date.")]
    InvalidDateRange,

    #[error("The total number of stay days ({stay_days}) does not match the trip duration ({trip_days}). Please adjust your inputs.")]
    StayDaysMismatch { stay_days: i64, trip_days: i64 },

    #[error("{field} must be at least 1.")]
    NonPositiveCount { field: &'static str },

    #[error("{field} cannot be negative.")]
    NegativeAmount { field: String },

    #[error("Unknown place to visit: {0}.")]
    UnknownDestination(String),

    #[error("{0} is selected more than once.")]
    DuplicateDestination(String),

    #[error("Please add at least one hotel.")]
    NoHotels,

    #[error("{item} is located at {location}, which is not one of the selected places.")]
    LocationNotSelected { item: String, location: String },

    #[error("The amounts entered are too large to price. Please check the prices and counts.")]
    AmountTooLarge,
}

impl From<AmountOverflow> for ValidationError {
    fn from(_: AmountOverflow) -> Self {
        ValidationError::AmountTooLarge
    }
}

impl ValidationError {
    /// Stable machine-readable code for API responses
    pub fn error_type(&self) -> &'static str {
        match self {
            ValidationError::MissingCustomerDetails => "missing_customer_details",
            ValidationError::NoDestinations => "no_destinations",
            ValidationError::InvalidDateRange => "invalid_date_range",
            ValidationError::StayDaysMismatch { .. } => "stay_days_mismatch",
            ValidationError::NonPositiveCount { .. } => "non_positive_count",
            ValidationError::NegativeAmount { .. } => "negative_amount",
            ValidationError::UnknownDestination(_) => "unknown_destination",
            ValidationError::DuplicateDestination(_) => "duplicate_destination",
            ValidationError::NoHotels => "no_hotels",
            ValidationError::LocationNotSelected { .. } => "location_not_selected",
            ValidationError::AmountTooLarge => "amount_too_large",
        }
    }
}

/// Validate a submission and return its duration.
///
/// Customer details, destination selection, date order and the stay-day total
/// are checked first and in that order; structural checks on counts, prices
/// and locations follow. The first failure is returned.
pub fn validate_trip(trip: &TripRequest) -> Result<TripDuration, ValidationError> {
    if trip.customer_name.trim().is_empty() || trip.phone_number.trim().is_empty() {
        return Err(ValidationError::MissingCustomerDetails);
    }
    if trip.destinations.is_empty() {
        return Err(ValidationError::NoDestinations);
    }
    let duration = TripDuration::between(trip.start_date, trip.end_date)
        .ok_or(ValidationError::InvalidDateRange)?;

    let stay_days = trip.total_stay_days();
    if stay_days != duration.days {
        return Err(ValidationError::StayDaysMismatch {
            stay_days,
            trip_days: duration.days,
        });
    }

    check_counts(trip)?;
    let selected = check_destinations(trip)?;
    check_locations(trip, &selected)?;
    check_amounts(trip)?;

    Ok(duration)
}

fn check_counts(trip: &TripRequest) -> Result<(), ValidationError> {
    for (field, value) in [
        ("Number of passengers", trip.num_passengers),
        ("Number of days car is needed", trip.car_days),
        ("Number of cars", trip.num_cars),
    ] {
        if value == 0 {
            return Err(ValidationError::NonPositiveCount { field });
        }
    }
    if trip.destinations.iter().any(|d| d.stay_days == 0) {
        return Err(ValidationError::NonPositiveCount {
            field: "Days to stay at each place",
        });
    }
    Ok(())
}

fn check_destinations(trip: &TripRequest) -> Result<HashSet<&str>, ValidationError> {
    let mut selected = HashSet::new();
    for stay in &trip.destinations {
        if !catalog::is_known_place(&stay.place) {
            return Err(ValidationError::UnknownDestination(stay.place.clone()));
        }
        if !selected.insert(stay.place.as_str()) {
            return Err(ValidationError::DuplicateDestination(stay.place.clone()));
        }
    }
    Ok(selected)
}

fn check_locations(trip: &TripRequest, selected: &HashSet<&str>) -> Result<(), ValidationError> {
    if trip.hotels.is_empty() {
        return Err(ValidationError::NoHotels);
    }
    for (i, hotel) in trip.hotels.iter().enumerate() {
        if !selected.contains(hotel.location.as_str()) {
            return Err(ValidationError::LocationNotSelected {
                item: format!("Hotel {}", i + 1),
                location: hotel.location.clone(),
            });
        }
    }
    for location in &trip.addons.union_cabs.locations {
        if !selected.contains(location.as_str()) {
            return Err(ValidationError::LocationNotSelected {
                item: "Union cab".to_string(),
                location: location.clone(),
            });
        }
    }
    Ok(())
}

fn check_amounts(trip: &TripRequest) -> Result<(), ValidationError> {
    let negative = |field: String| ValidationError::NegativeAmount { field };

    if is_negative(trip.car_price_per_day) {
        return Err(negative("Price for car service per day".to_string()));
    }
    for (i, hotel) in trip.hotels.iter().enumerate() {
        if is_negative(hotel.price) {
            return Err(negative(format!("Price for hotel {}", i + 1)));
        }
    }
    let addons = &trip.addons;
    for (field, amount) in [
        ("Price per union cab", addons.union_cabs.price_per_cab),
        ("Price for Gulmarg Gondola phase 1", addons.gondola_phase_1_price),
        ("Price for Gulmarg Gondola phase 2", addons.gondola_phase_2_price),
        ("Price for horse ride", addons.horse_ride_price),
    ] {
        if is_negative(amount) {
            return Err(negative(field.to_string()));
        }
    }
    if trip.flight_price_per_passenger.is_some_and(is_negative) {
        return Err(negative("Price of plane ticket".to_string()));
    }
    Ok(())
}

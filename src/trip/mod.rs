//! Trip submissions: input types, validation and trip identifiers.

pub mod models;
pub mod trip_id;
pub mod validation;

pub use models::{Addons, CarType, DestinationStay, HotelBooking, TripDuration, TripRequest, UnionCabs};
pub use trip_id::TripId;
pub use validation::{validate_trip, ValidationError};

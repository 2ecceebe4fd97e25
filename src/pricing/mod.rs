//! Pricing engine module.
//!
//! Trip cost calculation (base, margin, miscellaneous, add-ons, flight) and
//! the HTTP/JSON endpoints that expose it.

pub mod calculators;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{calculate_total_amount, round_money, CostBreakdown, PricingInput};
pub use routes::router;
pub use services::{generate_itinerary, GeneratedItinerary};

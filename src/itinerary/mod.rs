//! Itinerary rendering
//!
//! Turns a validated trip and its priced breakdown into the customer-facing
//! HTML itinerary, and wraps it into a standalone result page.

use askama::Template;
use rust_decimal::Decimal;

use crate::pricing::calculators::{format_money, CostBreakdown};
use crate::trip::{TripDuration, TripId, TripRequest};

struct StayLine<'a> {
    place: &'a str,
    days: u32,
}

struct HotelLine<'a> {
    name: &'a str,
    location: &'a str,
}

/// Customer-facing itinerary fragment
#[derive(Template)]
#[template(path = "itinerary/itinerary.html")]
struct ItineraryTemplate<'a> {
    trip_id: &'a str,
    customer_name: &'a str,
    phone_number: &'a str,
    days: i64,
    nights: i64,
    start_date: String,
    end_date: String,
    num_passengers: u32,
    num_cars: u32,
    car_type: &'static str,
    stays: Vec<StayLine<'a>>,
    hotels: Vec<HotelLine<'a>>,
    union_cab_count: u32,
    union_cab_locations: String,
    gondola_phase_1: bool,
    gondola_phase_2: bool,
    horse_ride: bool,
    flight_included: bool,
    has_addons: bool,
    total: String,
}

struct BreakdownLine {
    label: &'static str,
    amount: String,
}

/// Result page: itinerary plus the internal cost breakdown
#[derive(Template)]
#[template(path = "itinerary/page.html")]
struct ItineraryPageTemplate<'a> {
    trip_id: &'a str,
    itinerary_html: &'a str,
    breakdown: Vec<BreakdownLine>,
}

/// Render the itinerary for a validated trip.
///
/// Add-ons only appear when their count or price is positive. All user text
/// is HTML-escaped by the template.
pub fn render_itinerary(
    trip: &TripRequest,
    duration: TripDuration,
    trip_id: &TripId,
    breakdown: &CostBreakdown,
    currency_symbol: &str,
) -> Result<String, askama::Error> {
    let addons = &trip.addons;
    let union_cab_count = addons.union_cabs.count;
    let gondola_phase_1 = addons.gondola_phase_1_price > Decimal::ZERO;
    let gondola_phase_2 = addons.gondola_phase_2_price > Decimal::ZERO;
    let horse_ride = addons.horse_ride_price > Decimal::ZERO;
    let flight_included = trip.includes_flight();

    let template = ItineraryTemplate {
        trip_id: trip_id.as_str(),
        customer_name: trip.customer_name.trim(),
        phone_number: trip.phone_number.trim(),
        days: duration.days,
        nights: duration.nights,
        start_date: trip.start_date.format("%d %b %Y").to_string(),
        end_date: trip.end_date.format("%d %b %Y").to_string(),
        num_passengers: trip.num_passengers,
        num_cars: trip.num_cars,
        car_type: trip.car_type.label(),
        stays: trip
            .destinations
            .iter()
            .map(|d| StayLine {
                place: &d.place,
                days: d.stay_days,
            })
            .collect(),
        hotels: trip
            .hotels
            .iter()
            .map(|h| HotelLine {
                name: &h.name,
                location: &h.location,
            })
            .collect(),
        union_cab_count,
        union_cab_locations: addons.union_cabs.locations.join(", "),
        gondola_phase_1,
        gondola_phase_2,
        horse_ride,
        flight_included,
        has_addons: union_cab_count > 0 || gondola_phase_1 || gondola_phase_2 || horse_ride || flight_included,
        total: format_money(breakdown.total, currency_symbol),
    };

    template.render()
}

/// Render the full result page around an already rendered itinerary.
pub fn render_itinerary_page(
    trip_id: &TripId,
    itinerary_html: &str,
    breakdown: &CostBreakdown,
    currency_symbol: &str,
) -> Result<String, askama::Error> {
    let template = ItineraryPageTemplate {
        trip_id: trip_id.as_str(),
        itinerary_html,
        breakdown: breakdown
            .line_items()
            .into_iter()
            .map(|(label, amount)| BreakdownLine {
                label,
                amount: format_money(amount, currency_symbol),
            })
            .collect(),
    };

    template.render()
}

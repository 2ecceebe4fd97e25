//! Itinerary page route handlers

use axum::{extract::State, response::Html, Json};

use crate::error::Result;
use crate::itinerary::render_itinerary_page;
use crate::pricing::generate_itinerary;
use crate::trip::TripRequest;
use crate::AppState;

/// Generate an itinerary and return the full result page
pub async fn create(
    State(state): State<AppState>,
    Json(trip): Json<TripRequest>,
) -> Result<Html<String>> {
    let symbol = &state.config.currency_symbol;
    let generated = generate_itinerary(&trip, symbol)?;

    let page = render_itinerary_page(
        &generated.trip_id,
        &generated.itinerary_html,
        &generated.breakdown,
        symbol,
    )?;

    Ok(Html(page))
}

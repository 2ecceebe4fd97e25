//! JSON API routes for pricing and itinerary generation.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::calculators::calculate_total_amount;
use super::requests::CalculatePricingRequest;
use super::responses::{CostBreakdownResponse, ItineraryResponse, PricingErrorResponse, RegionResponse};
use super::services::generate_itinerary;
use crate::catalog::REGIONS;
use crate::error::AppError;
use crate::trip::{TripRequest, ValidationError};
use crate::AppState;

type ApiResult<T> = std::result::Result<Json<T>, (StatusCode, Json<PricingErrorResponse>)>;

/// Pricing API router, mounted under `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/destinations", get(list_destinations))
        .route("/pricing/calculate", post(calculate_pricing))
        .route("/itinerary", post(create_itinerary))
}

fn error_response(err: AppError) -> (StatusCode, Json<PricingErrorResponse>) {
    (
        err.status_code(),
        Json(PricingErrorResponse {
            error_type: err.error_type().to_string(),
            message: err.public_message(),
            details: None,
        }),
    )
}

async fn list_destinations() -> Json<Vec<RegionResponse>> {
    Json(
        REGIONS
            .iter()
            .map(|r| RegionResponse {
                name: r.name,
                places: r.places,
            })
            .collect(),
    )
}

async fn calculate_pricing(
    State(state): State<AppState>,
    Json(req): Json<CalculatePricingRequest>,
) -> ApiResult<CostBreakdownResponse> {
    let negative = req.negative_fields();
    if !negative.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(PricingErrorResponse {
                error_type: "negative_amount".to_string(),
                message: "Amounts cannot be negative.".to_string(),
                details: Some(serde_json::json!({ "fields": negative })),
            }),
        ));
    }

    let breakdown = req
        .to_input()
        .and_then(|input| calculate_total_amount(&input))
        .map_err(|e| error_response(AppError::Validation(ValidationError::from(e))))?;
    tracing::debug!("Calculated pricing total {}", breakdown.total);

    Ok(Json(CostBreakdownResponse::from_breakdown(
        &breakdown,
        &state.config.currency_symbol,
    )))
}

async fn create_itinerary(
    State(state): State<AppState>,
    Json(trip): Json<TripRequest>,
) -> ApiResult<ItineraryResponse> {
    let symbol = &state.config.currency_symbol;
    let generated = generate_itinerary(&trip, symbol).map_err(error_response)?;

    Ok(Json(ItineraryResponse {
        cost_breakdown: CostBreakdownResponse::from_breakdown(&generated.breakdown, symbol),
        duration: generated.duration.into(),
        itinerary_html: generated.itinerary_html,
        trip_id: generated.trip_id.into_string(),
    }))
}

//! Response DTOs for pricing and itinerary API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{format_money, round_money, CostBreakdown};
use crate::trip::TripDuration;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Amount as shown to the customer (symbol + 2 decimals)
    pub display: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency_symbol: &str) -> Self {
        // always two decimal places on the wire ("5000.00")
        let mut rounded = round_money(amount, 2);
        rounded.rescale(2);

        Self {
            amount: rounded,
            display: format_money(amount, currency_symbol),
        }
    }
}

/// A labelled line of the cost breakdown
#[derive(Debug, Clone, Serialize)]
pub struct CostLineResponse {
    pub label: String,
    #[serde(flatten)]
    pub money: MoneyResponse,
}

/// Response for a trip pricing calculation
#[derive(Debug, Serialize)]
pub struct CostBreakdownResponse {
    pub car_service: MoneyResponse,
    pub hotels: MoneyResponse,
    pub flight_cost: MoneyResponse,
    pub union_cabs: MoneyResponse,
    pub gondola: MoneyResponse,
    pub horse_ride: MoneyResponse,
    pub base_amount: MoneyResponse,
    pub margin: MoneyResponse,
    pub miscellaneous: MoneyResponse,
    pub total: MoneyResponse,
    /// Same figures as ordered display lines
    pub lines: Vec<CostLineResponse>,
}

impl CostBreakdownResponse {
    pub fn from_breakdown(breakdown: &CostBreakdown, currency_symbol: &str) -> Self {
        let money = |amount: Decimal| MoneyResponse::new(amount, currency_symbol);

        Self {
            car_service: money(breakdown.car_service),
            hotels: money(breakdown.hotels),
            flight_cost: money(breakdown.flight_cost),
            union_cabs: money(breakdown.union_cabs),
            gondola: money(breakdown.gondola),
            horse_ride: money(breakdown.horse_ride),
            base_amount: money(breakdown.base_amount),
            margin: money(breakdown.margin),
            miscellaneous: money(breakdown.miscellaneous),
            total: money(breakdown.total),
            lines: breakdown
                .line_items()
                .into_iter()
                .map(|(label, amount)| CostLineResponse {
                    label: label.to_string(),
                    money: money(amount),
                })
                .collect(),
        }
    }
}

/// Trip length in the itinerary response
#[derive(Debug, Serialize)]
pub struct DurationResponse {
    pub days: i64,
    pub nights: i64,
}

impl From<TripDuration> for DurationResponse {
    fn from(duration: TripDuration) -> Self {
        Self {
            days: duration.days,
            nights: duration.nights,
        }
    }
}

/// Response for a generated itinerary
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub trip_id: String,
    pub duration: DurationResponse,
    pub itinerary_html: String,
    pub cost_breakdown: CostBreakdownResponse,
}

/// Region of the destination catalog
#[derive(Debug, Serialize)]
pub struct RegionResponse {
    pub name: &'static str,
    pub places: &'static [&'static str],
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculators::{calculate_total_amount, PricingInput};
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_response_always_two_places() {
        let money = MoneyResponse::new(dec!(5000), "₹");
        assert_eq!(money.amount.to_string(), "5000.00");
        assert_eq!(money.display, "₹5000.00");

        let money = MoneyResponse::new(dec!(12.345), "₹");
        assert_eq!(money.amount.to_string(), "12.34");
    }

    #[test]
    fn test_breakdown_response_lines_match_fields() {
        let breakdown = calculate_total_amount(&PricingInput {
            car_total: dec!(3000),
            hotel_prices: vec![dec!(2000)],
            passenger_count: 1,
            ..Default::default()
        })
        .unwrap();

        let resp = CostBreakdownResponse::from_breakdown(&breakdown, "₹");
        assert_eq!(resp.lines.len(), 10);
        assert_eq!(resp.lines[7].label, "Margin (50%)");
        assert_eq!(resp.lines[7].money.display, resp.margin.display);
        assert_eq!(resp.total.display, "₹8000.00");
    }
}

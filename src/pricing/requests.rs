//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::calculators::{calculate_car_total, is_negative, AmountOverflow, PricingInput};

/// Request to price a trip from itemized costs
#[derive(Debug, Deserialize)]
pub struct CalculatePricingRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub car_price_per_day: Decimal,
    pub car_days: u32,
    pub num_cars: u32,
    #[serde(default)]
    pub hotel_prices: Vec<HotelPriceRequest>,
    #[serde(default = "default_passengers")]
    pub num_passengers: u32,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub flight_price_per_passenger: Option<Decimal>,
    #[serde(default)]
    pub num_union_cabs: u32,
    #[serde(default = "zero", with = "rust_decimal::serde::str")]
    pub union_cab_price: Decimal,
    #[serde(default = "zero", with = "rust_decimal::serde::str")]
    pub gondola_phase_1_price: Decimal,
    #[serde(default = "zero", with = "rust_decimal::serde::str")]
    pub gondola_phase_2_price: Decimal,
    #[serde(default = "zero", with = "rust_decimal::serde::str")]
    pub horse_ride_price: Decimal,
}

/// A hotel price in the request
#[derive(Debug, Deserialize)]
pub struct HotelPriceRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

fn default_passengers() -> u32 {
    1
}

fn zero() -> Decimal {
    Decimal::ZERO
}

impl CalculatePricingRequest {
    /// Names of fields carrying a negative amount
    pub fn negative_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if is_negative(self.car_price_per_day) {
            fields.push("car_price_per_day");
        }
        if self.hotel_prices.iter().any(|h| is_negative(h.price)) {
            fields.push("hotel_prices");
        }
        if self.flight_price_per_passenger.is_some_and(is_negative) {
            fields.push("flight_price_per_passenger");
        }
        for (name, amount) in [
            ("union_cab_price", self.union_cab_price),
            ("gondola_phase_1_price", self.gondola_phase_1_price),
            ("gondola_phase_2_price", self.gondola_phase_2_price),
            ("horse_ride_price", self.horse_ride_price),
        ] {
            if is_negative(amount) {
                fields.push(name);
            }
        }
        fields
    }

    pub fn to_input(&self) -> Result<PricingInput, AmountOverflow> {
        Ok(PricingInput {
            car_total: calculate_car_total(self.car_price_per_day, self.car_days, self.num_cars)?,
            hotel_prices: self.hotel_prices.iter().map(|h| h.price).collect(),
            flight_price_per_passenger: self.flight_price_per_passenger,
            passenger_count: self.num_passengers,
            union_cab_count: self.num_union_cabs,
            union_cab_price: self.union_cab_price,
            gondola_phase_1_price: self.gondola_phase_1_price,
            gondola_phase_2_price: self.gondola_phase_2_price,
            horse_ride_price: self.horse_ride_price,
        })
    }
}

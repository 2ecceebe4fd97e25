//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O.
//! Margin and miscellaneous are charged on the base amount (car + hotels) only;
//! flight and add-ons pass through at cost.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Markup applied to the base amount
pub const MARGIN_RATE: Decimal = dec!(0.5);

/// Miscellaneous surcharge applied to the base amount
pub const MISCELLANEOUS_RATE: Decimal = dec!(0.1);

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use itinerary_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Format an amount for display: currency symbol plus two fixed decimals.
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    format!("{}{:.2}", symbol, round_money(amount, 2))
}

/// Itemized costs for one trip (used in calculate_total_amount)
#[derive(Debug, Clone, Default)]
pub struct PricingInput {
    pub car_total: Decimal,
    pub hotel_prices: Vec<Decimal>,
    /// Per-passenger ticket price; `None` when flights are not part of the package
    pub flight_price_per_passenger: Option<Decimal>,
    pub passenger_count: u32,
    pub union_cab_count: u32,
    pub union_cab_price: Decimal,
    pub gondola_phase_1_price: Decimal,
    pub gondola_phase_2_price: Decimal,
    pub horse_ride_price: Decimal,
}

/// Result of a trip price calculation
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub car_service: Decimal,
    pub hotels: Decimal,
    pub flight_cost: Decimal,
    pub union_cabs: Decimal,
    pub gondola: Decimal,
    pub horse_ride: Decimal,
    pub base_amount: Decimal,
    pub margin: Decimal,
    pub miscellaneous: Decimal,
    pub total: Decimal,
}

impl CostBreakdown {
    /// Sum of the add-on services (cabs, gondola, horse ride)
    pub fn addons_total(&self) -> Decimal {
        self.union_cabs + self.gondola + self.horse_ride
    }

    /// Labelled line items in display order, ending with the total.
    pub fn line_items(&self) -> Vec<(&'static str, Decimal)> {
        vec![
            ("Car Service", self.car_service),
            ("Hotels", self.hotels),
            ("Flight Cost", self.flight_cost),
            ("Union Cabs", self.union_cabs),
            ("Gulmarg Gondola", self.gondola),
            ("Horse Ride", self.horse_ride),
            ("Base Amount", self.base_amount),
            ("Margin (50%)", self.margin),
            ("Miscellaneous (10%)", self.miscellaneous),
            ("Total Amount", self.total),
        ]
    }
}

/// A pricing result does not fit in a `Decimal`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("amount overflowed while pricing")]
pub struct AmountOverflow;

fn add(a: Decimal, b: Decimal) -> Result<Decimal, AmountOverflow> {
    a.checked_add(b).ok_or(AmountOverflow)
}

fn mul(a: Decimal, b: Decimal) -> Result<Decimal, AmountOverflow> {
    a.checked_mul(b).ok_or(AmountOverflow)
}

/// True for amounts strictly below zero; `-0` counts as zero.
pub fn is_negative(amount: Decimal) -> bool {
    amount < Decimal::ZERO
}

/// Car service cost: daily rate for every car over every day it is hired.
pub fn calculate_car_total(
    price_per_day: Decimal,
    car_days: u32,
    car_count: u32,
) -> Result<Decimal, AmountOverflow> {
    mul(mul(price_per_day, Decimal::from(car_days))?, Decimal::from(car_count))
}

/// Calculate the trip total and its breakdown.
///
/// base = car + hotels; margin and miscellaneous are fractions of base.
/// Flight (per passenger) and add-ons are added on top without markup.
/// Fails instead of panicking when any intermediate sum overflows.
pub fn calculate_total_amount(input: &PricingInput) -> Result<CostBreakdown, AmountOverflow> {
    let hotels = input
        .hotel_prices
        .iter()
        .try_fold(Decimal::ZERO, |acc, price| add(acc, *price))?;
    let base_amount = add(input.car_total, hotels)?;

    let union_cabs = mul(Decimal::from(input.union_cab_count), input.union_cab_price)?;
    let gondola = add(input.gondola_phase_1_price, input.gondola_phase_2_price)?;
    let horse_ride = input.horse_ride_price;

    let flight_cost = match input.flight_price_per_passenger {
        Some(price) => mul(price, Decimal::from(input.passenger_count))?,
        None => Decimal::ZERO,
    };

    let margin = mul(base_amount, MARGIN_RATE)?;
    let miscellaneous = mul(base_amount, MISCELLANEOUS_RATE)?;
    let total = [union_cabs, gondola, horse_ride, flight_cost, margin, miscellaneous]
        .into_iter()
        .try_fold(base_amount, add)?;

    Ok(CostBreakdown {
        car_service: input.car_total,
        hotels,
        flight_cost,
        union_cabs,
        gondola,
        horse_ride,
        base_amount,
        margin,
        miscellaneous,
        total,
    })
}

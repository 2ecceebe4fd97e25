//! Trip submission types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::calculators::{calculate_car_total, AmountOverflow, PricingInput};

/// Type of car booked for the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarType {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Minivan,
    Luxury,
}

impl CarType {
    pub fn label(&self) -> &'static str {
        match self {
            CarType::Sedan => "Sedan",
            CarType::Suv => "SUV",
            CarType::Minivan => "Minivan",
            CarType::Luxury => "Luxury",
        }
    }
}

/// A selected place and the number of days spent there
#[derive(Debug, Clone, Deserialize)]
pub struct DestinationStay {
    pub place: String,
    #[serde(default = "default_stay_days")]
    pub stay_days: u32,
}

fn default_stay_days() -> u32 {
    1
}

/// A hotel booked at one of the selected places
#[derive(Debug, Clone, Deserialize)]
pub struct HotelBooking {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub location: String,
}

/// Local union cabs hired at some of the selected places
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnionCabs {
    #[serde(default)]
    pub count: u32,
    #[serde(default = "zero", with = "rust_decimal::serde::str")]
    pub price_per_cab: Decimal,
    #[serde(default)]
    pub locations: Vec<String>,
}

/// Optional extra services
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Addons {
    #[serde(default)]
    pub union_cabs: UnionCabs,
    #[serde(default = "zero", with = "rust_decimal::serde::str")]
    pub gondola_phase_1_price: Decimal,
    #[serde(default = "zero", with = "rust_decimal::serde::str")]
    pub gondola_phase_2_price: Decimal,
    #[serde(default = "zero", with = "rust_decimal::serde::str")]
    pub horse_ride_price: Decimal,
}

fn zero() -> Decimal {
    Decimal::ZERO
}

/// One itinerary submission
#[derive(Debug, Clone, Deserialize)]
pub struct TripRequest {
    pub customer_name: String,
    pub phone_number: String,
    pub num_passengers: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub car_type: CarType,
    #[serde(with = "rust_decimal::serde::str")]
    pub car_price_per_day: Decimal,
    pub car_days: u32,
    pub num_cars: u32,
    #[serde(default)]
    pub destinations: Vec<DestinationStay>,
    #[serde(default)]
    pub hotels: Vec<HotelBooking>,
    #[serde(default)]
    pub addons: Addons,
    /// Ticket price per passenger; absent when flights are not in the package
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub flight_price_per_passenger: Option<Decimal>,
}

impl TripRequest {
    pub fn includes_flight(&self) -> bool {
        self.flight_price_per_passenger.is_some()
    }

    pub fn car_total(&self) -> Result<Decimal, AmountOverflow> {
        calculate_car_total(self.car_price_per_day, self.car_days, self.num_cars)
    }

    pub fn total_stay_days(&self) -> i64 {
        self.destinations.iter().map(|d| i64::from(d.stay_days)).sum()
    }

    /// Itemized costs handed to the pricing calculator
    pub fn pricing_input(&self) -> Result<PricingInput, AmountOverflow> {
        Ok(PricingInput {
            car_total: self.car_total()?,
            hotel_prices: self.hotels.iter().map(|h| h.price).collect(),
            flight_price_per_passenger: self.flight_price_per_passenger,
            passenger_count: self.num_passengers,
            union_cab_count: self.addons.union_cabs.count,
            union_cab_price: self.addons.union_cabs.price_per_cab,
            gondola_phase_1_price: self.addons.gondola_phase_1_price,
            gondola_phase_2_price: self.addons.gondola_phase_2_price,
            horse_ride_price: self.addons.horse_ride_price,
        })
    }
}

/// Length of a trip; nights is always one less than days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripDuration {
    pub days: i64,
    pub nights: i64,
}

impl TripDuration {
    /// Calendar days between the dates, or `None` unless start is before end
    pub fn between(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        let days = (end - start).num_days();
        if days <= 0 {
            return None;
        }
        Some(Self {
            days,
            nights: days - 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_duration_between_dates() {
        let duration = TripDuration::between(date(2026, 5, 1), date(2026, 5, 6)).unwrap();
        assert_eq!(duration.days, 5);
        assert_eq!(duration.nights, 4);
    }

    #[test]
    fn test_duration_requires_start_before_end() {
        assert!(TripDuration::between(date(2026, 5, 6), date(2026, 5, 6)).is_none());
        assert!(TripDuration::between(date(2026, 5, 7), date(2026, 5, 6)).is_none());
    }

    #[test]
    fn test_deserialize_trip_with_defaults() {
        let trip: TripRequest = serde_json::from_value(serde_json::json!({
            "customer_name": "Asha",
            "phone_number": "9876543210",
            "num_passengers": 2,
            "start_date": "2026-05-01",
            "end_date": "2026-05-04",
            "car_type": "SUV",
            "car_price_per_day": "2500",
            "car_days": 3,
            "num_cars": 1,
            "destinations": [{"place": "Srinagar", "stay_days": 2}, {"place": "Gulmarg"}],
            "hotels": [{"name": "Lake View", "price": "4000", "location": "Srinagar"}]
        }))
        .unwrap();

        assert_eq!(trip.car_type, CarType::Suv);
        assert_eq!(trip.destinations[1].stay_days, 1);
        assert_eq!(trip.total_stay_days(), 3);
        assert!(!trip.includes_flight());
        assert_eq!(trip.addons.union_cabs.count, 0);
        assert_eq!(trip.car_total(), Ok(dec!(7500)));

        let input = trip.pricing_input().unwrap();
        assert_eq!(input.hotel_prices, vec![dec!(4000)]);
        assert_eq!(input.passenger_count, 2);
    }

    #[test]
    fn test_unknown_car_type_rejected() {
        let result = serde_json::from_value::<CarType>(serde_json::json!("Jeep"));
        assert!(result.is_err());
    }
}

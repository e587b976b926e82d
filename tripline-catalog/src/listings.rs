use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One flight search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightListing {
    pub code: String,
    pub airline: String,
    pub flight_number: String,
    pub departure_city: String,
    pub departure_code: String,
    pub departure_time: NaiveTime,
    pub arrival_city: String,
    pub arrival_code: String,
    pub arrival_time: NaiveTime,
    pub duration_minutes: u32,
    pub stops: u32,
    pub stop_city: Option<String>,
    pub price: u32,
    pub cabin_label: String,
}

impl FlightListing {
    pub fn is_direct(&self) -> bool {
        self.stops == 0
    }

    /// Display form of the duration, e.g. "5h 30m".
    pub fn duration_label(&self) -> String {
        format!("{}h {}m", self.duration_minutes / 60, self.duration_minutes % 60)
    }
}

/// Amenities a hotel listing can carry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Amenity {
    Wifi,
    Breakfast,
    Restaurant,
    Tv,
}

/// One hotel search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelListing {
    pub code: String,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub reviews: u32,
    pub price_per_night: u32,
    pub amenities: Vec<Amenity>,
    pub distance: String,
}

impl HotelListing {
    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        self.amenities.contains(&amenity)
    }
}

/// Rental car classes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarClass {
    Economy,
    Suv,
    Luxury,
}

impl fmt::Display for CarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarClass::Economy => write!(f, "Economy"),
            CarClass::Suv => write!(f, "SUV"),
            CarClass::Luxury => write!(f, "Luxury"),
        }
    }
}

/// One cab search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CabListing {
    pub code: String,
    pub car_class: CarClass,
    pub name: String,
    pub capacity: u32,
    pub features: Vec<String>,
    pub price_per_day: u32,
    pub rating: f64,
    pub reviews: u32,
    pub company: String,
}

/// A featured destination on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    pub name: String,
    pub price_from: u32,
    pub rating: f64,
}

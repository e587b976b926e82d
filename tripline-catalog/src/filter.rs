//! Filter and sort over the static result sets. Filters are pure functions
//! over listing slices; an empty allow-list means "any".

use crate::listings::{Amenity, CabListing, CarClass, FlightListing, HotelListing};
use serde::{Deserialize, Serialize};

/// Sidebar filter state for the flights page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightFilter {
    pub price_range: (u32, u32),
    pub airlines: Vec<String>,
    pub max_stops: Option<u32>,
}

impl Default for FlightFilter {
    fn default() -> Self {
        Self {
            price_range: (0, 1000),
            airlines: Vec::new(),
            max_stops: None,
        }
    }
}

impl FlightFilter {
    pub fn matches(&self, listing: &FlightListing) -> bool {
        let (min, max) = self.price_range;
        if listing.price < min || listing.price > max {
            return false;
        }
        if !self.airlines.is_empty() && !self.airlines.contains(&listing.airline) {
            return false;
        }
        if let Some(max_stops) = self.max_stops {
            if listing.stops > max_stops {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FlightSortKey {
    Price,
    Duration,
    DepartureTime,
}

/// Apply `filter` then order by `sort`, ascending. Stable, so equal keys
/// keep the fixture order.
pub fn search_flights(
    listings: &[FlightListing],
    filter: &FlightFilter,
    sort: FlightSortKey,
) -> Vec<FlightListing> {
    let mut results: Vec<FlightListing> = listings
        .iter()
        .filter(|listing| filter.matches(listing))
        .cloned()
        .collect();
    match sort {
        FlightSortKey::Price => results.sort_by_key(|l| l.price),
        FlightSortKey::Duration => results.sort_by_key(|l| l.duration_minutes),
        FlightSortKey::DepartureTime => results.sort_by_key(|l| l.departure_time),
    }
    results
}

/// Sidebar filter state for the hotels page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelFilter {
    pub price_range: (u32, u32),
    pub min_rating: f64,
    pub amenities: Vec<Amenity>,
}

impl Default for HotelFilter {
    fn default() -> Self {
        Self {
            price_range: (0, 500),
            min_rating: 0.0,
            amenities: Vec::new(),
        }
    }
}

impl HotelFilter {
    pub fn matches(&self, listing: &HotelListing) -> bool {
        let (min, max) = self.price_range;
        if listing.price_per_night < min || listing.price_per_night > max {
            return false;
        }
        if listing.rating < self.min_rating {
            return false;
        }
        // Every selected amenity must be present.
        self.amenities
            .iter()
            .all(|amenity| listing.has_amenity(*amenity))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum HotelSortKey {
    Price,
    Rating,
}

/// Price sorts ascending; rating sorts best-first.
pub fn search_hotels(
    listings: &[HotelListing],
    filter: &HotelFilter,
    sort: HotelSortKey,
) -> Vec<HotelListing> {
    let mut results: Vec<HotelListing> = listings
        .iter()
        .filter(|listing| filter.matches(listing))
        .cloned()
        .collect();
    match sort {
        HotelSortKey::Price => results.sort_by_key(|l| l.price_per_night),
        HotelSortKey::Rating => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    results
}

/// Sidebar filter state for the cabs page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabFilter {
    pub price_range: (u32, u32),
    pub car_classes: Vec<CarClass>,
    pub min_capacity: u32,
}

impl Default for CabFilter {
    fn default() -> Self {
        Self {
            price_range: (0, 200),
            car_classes: Vec::new(),
            min_capacity: 0,
        }
    }
}

impl CabFilter {
    pub fn matches(&self, listing: &CabListing) -> bool {
        let (min, max) = self.price_range;
        if listing.price_per_day < min || listing.price_per_day > max {
            return false;
        }
        if !self.car_classes.is_empty() && !self.car_classes.contains(&listing.car_class) {
            return false;
        }
        listing.capacity >= self.min_capacity
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CabSortKey {
    Price,
    Rating,
}

pub fn search_cabs(
    listings: &[CabListing],
    filter: &CabFilter,
    sort: CabSortKey,
) -> Vec<CabListing> {
    let mut results: Vec<CabListing> = listings
        .iter()
        .filter(|listing| filter.matches(listing))
        .cloned()
        .collect();
    match sort {
        CabSortKey::Price => results.sort_by_key(|l| l.price_per_day),
        CabSortKey::Rating => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    results
}

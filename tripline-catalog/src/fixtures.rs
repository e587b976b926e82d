//! Static mock result sets. There is no live inventory; these arrays are
//! the entire search space, and prices and ratings are fixed numbers.

use crate::listings::{
    Amenity, CabListing, CarClass, Destination, FlightListing, HotelListing,
};
use chrono::NaiveTime;

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// The New York → Los Angeles result set.
pub fn flight_listings() -> Vec<FlightListing> {
    vec![
        FlightListing {
            code: "f1".to_string(),
            airline: "Delta Airlines".to_string(),
            flight_number: "DL2478".to_string(),
            departure_city: "New York".to_string(),
            departure_code: "JFK".to_string(),
            departure_time: hm(8, 15),
            arrival_city: "Los Angeles".to_string(),
            arrival_code: "LAX".to_string(),
            arrival_time: hm(11, 45),
            duration_minutes: 330,
            stops: 0,
            stop_city: None,
            price: 549,
            cabin_label: "Economy".to_string(),
        },
        FlightListing {
            code: "f2".to_string(),
            airline: "United Airlines".to_string(),
            flight_number: "UA1282".to_string(),
            departure_city: "New York".to_string(),
            departure_code: "JFK".to_string(),
            departure_time: hm(10, 30),
            arrival_city: "Los Angeles".to_string(),
            arrival_code: "LAX".to_string(),
            arrival_time: hm(14, 15),
            duration_minutes: 345,
            stops: 1,
            stop_city: Some("Chicago".to_string()),
            price: 499,
            cabin_label: "Economy".to_string(),
        },
        FlightListing {
            code: "f3".to_string(),
            airline: "American Airlines".to_string(),
            flight_number: "AA3901".to_string(),
            departure_city: "New York".to_string(),
            departure_code: "JFK".to_string(),
            departure_time: hm(13, 45),
            arrival_city: "Los Angeles".to_string(),
            arrival_code: "LAX".to_string(),
            arrival_time: hm(17, 10),
            duration_minutes: 325,
            stops: 0,
            stop_city: None,
            price: 579,
            cabin_label: "Economy".to_string(),
        },
    ]
}

/// The Los Angeles hotel result set.
pub fn hotel_listings() -> Vec<HotelListing> {
    vec![
        HotelListing {
            code: "h1".to_string(),
            name: "Grand Luxury Hotel".to_string(),
            location: "Downtown Los Angeles".to_string(),
            rating: 4.8,
            reviews: 423,
            price_per_night: 299,
            amenities: vec![
                Amenity::Wifi,
                Amenity::Breakfast,
                Amenity::Restaurant,
                Amenity::Tv,
            ],
            distance: "0.5 miles to city center".to_string(),
        },
        HotelListing {
            code: "h2".to_string(),
            name: "Seaside Boutique Resort".to_string(),
            location: "Santa Monica".to_string(),
            rating: 4.6,
            reviews: 284,
            price_per_night: 249,
            amenities: vec![Amenity::Wifi, Amenity::Breakfast, Amenity::Restaurant],
            distance: "2 miles to beach".to_string(),
        },
        HotelListing {
            code: "h3".to_string(),
            name: "Urban Modern Suites".to_string(),
            location: "Hollywood".to_string(),
            rating: 4.4,
            reviews: 186,
            price_per_night: 199,
            amenities: vec![Amenity::Wifi, Amenity::Tv],
            distance: "1 mile to Hollywood Walk of Fame".to_string(),
        },
    ]
}

/// The airport cab result set.
pub fn cab_listings() -> Vec<CabListing> {
    vec![
        CabListing {
            code: "c1".to_string(),
            car_class: CarClass::Economy,
            name: "Toyota Corolla or similar".to_string(),
            capacity: 4,
            features: vec![
                "Air Conditioning".to_string(),
                "Automatic".to_string(),
                "Unlimited Mileage".to_string(),
            ],
            price_per_day: 49,
            rating: 4.8,
            reviews: 245,
            company: "Hertz".to_string(),
        },
        CabListing {
            code: "c2".to_string(),
            car_class: CarClass::Suv,
            name: "Ford Escape or similar".to_string(),
            capacity: 5,
            features: vec![
                "Air Conditioning".to_string(),
                "Automatic".to_string(),
                "Unlimited Mileage".to_string(),
                "GPS".to_string(),
            ],
            price_per_day: 69,
            rating: 4.7,
            reviews: 187,
            company: "Enterprise".to_string(),
        },
        CabListing {
            code: "c3".to_string(),
            car_class: CarClass::Luxury,
            name: "Mercedes C-Class or similar".to_string(),
            capacity: 4,
            features: vec![
                "Air Conditioning".to_string(),
                "Automatic".to_string(),
                "Unlimited Mileage".to_string(),
                "GPS".to_string(),
                "Leather Seats".to_string(),
            ],
            price_per_day: 99,
            rating: 4.9,
            reviews: 132,
            company: "Avis".to_string(),
        },
    ]
}

/// Featured destinations for the landing page.
pub fn featured_destinations() -> Vec<Destination> {
    vec![
        Destination {
            name: "Bali".to_string(),
            price_from: 1299,
            rating: 4.8,
        },
        Destination {
            name: "Santorini".to_string(),
            price_from: 1499,
            rating: 4.9,
        },
        Destination {
            name: "Tokyo".to_string(),
            price_from: 1199,
            rating: 4.7,
        },
        Destination {
            name: "Paris".to_string(),
            price_from: 999,
            rating: 4.6,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_codes_are_unique() {
        let flights = flight_listings();
        let mut codes: Vec<_> = flights.iter().map(|f| f.code.clone()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), flights.len());
    }

    #[test]
    fn test_fixture_shapes() {
        assert_eq!(flight_listings().len(), 3);
        assert_eq!(hotel_listings().len(), 3);
        assert_eq!(cab_listings().len(), 3);
        assert_eq!(featured_destinations().len(), 4);

        // The one-stop flight names its layover city.
        let with_stop = flight_listings()
            .into_iter()
            .find(|f| f.stops > 0)
            .unwrap();
        assert_eq!(with_stop.stop_city.as_deref(), Some("Chicago"));
    }
}

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tripline_core::identity::BookingId;

/// Cabin classes offered on flight search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CabinClass {
    Economy,
    Premium,
    Business,
    First,
}

/// Flight party: infants travel on an adult's lap, so they are counted
/// separately from children.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassengerCounts {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl PassengerCounts {
    pub fn total(&self) -> u32 {
        self.adults + self.children + self.infants
    }
}

impl Default for PassengerCounts {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            infants: 0,
        }
    }
}

/// Hotel party.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestCounts {
    pub adults: u32,
    pub children: u32,
}

impl GuestCounts {
    pub fn total(&self) -> u32 {
        self.adults + self.children
    }
}

impl Default for GuestCounts {
    fn default() -> Self {
        Self {
            adults: 2,
            children: 0,
        }
    }
}

/// A proposed flight reservation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightBooking {
    pub origin: String,
    pub destination: String,
    pub depart_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub passengers: PassengerCounts,
    pub cabin: Option<CabinClass>,
}

/// A proposed hotel stay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelBooking {
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: GuestCounts,
    pub room_type: Option<String>,
    pub star_rating: Option<u8>,
}

/// A proposed cab ride.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CabBooking {
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: NaiveDate,
    pub pickup_time: NaiveTime,
    pub passengers: u32,
    pub car_type: Option<String>,
}

/// A booking record headed for an itinerary, tagged with its kind. The
/// caller names the variant; there is no structural sniffing to decide
/// which sequence the record lands in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Booking {
    Flight(FlightBooking),
    Hotel(HotelBooking),
    Cab(CabBooking),
}

impl Booking {
    pub fn kind(&self) -> BookingKind {
        match self {
            Booking::Flight(_) => BookingKind::Flight,
            Booking::Hotel(_) => BookingKind::Hotel,
            Booking::Cab(_) => BookingKind::Cab,
        }
    }
}

/// Names one of the three booking sequences of an itinerary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingKind {
    Flight,
    Hotel,
    Cab,
}

/// A flight booking attached to an itinerary. The id is assigned when the
/// record is attached, never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookedFlight {
    pub id: BookingId,
    pub flight: FlightBooking,
    pub added_at: DateTime<Utc>,
}

impl BookedFlight {
    pub fn new(flight: FlightBooking) -> Self {
        Self {
            id: BookingId::new(),
            flight,
            added_at: Utc::now(),
        }
    }
}

/// A hotel booking attached to an itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookedHotel {
    pub id: BookingId,
    pub hotel: HotelBooking,
    pub added_at: DateTime<Utc>,
}

impl BookedHotel {
    pub fn new(hotel: HotelBooking) -> Self {
        Self {
            id: BookingId::new(),
            hotel,
            added_at: Utc::now(),
        }
    }
}

/// A cab booking attached to an itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookedCab {
    pub id: BookingId,
    pub cab: CabBooking,
    pub added_at: DateTime<Utc>,
}

impl BookedCab {
    pub fn new(cab: CabBooking) -> Self {
        Self {
            id: BookingId::new(),
            cab,
            added_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_flight() -> FlightBooking {
        FlightBooking {
            origin: "New York".to_string(),
            destination: "Los Angeles".to_string(),
            depart_date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
            return_date: None,
            passengers: PassengerCounts::default(),
            cabin: Some(CabinClass::Economy),
        }
    }

    #[test]
    fn test_booking_kind_dispatch() {
        let booking = Booking::Flight(sample_flight());
        assert_eq!(booking.kind(), BookingKind::Flight);
    }

    #[test]
    fn test_booking_tagged_serialization() {
        let booking = Booking::Flight(sample_flight());
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["kind"], "FLIGHT");
        assert_eq!(json["origin"], "New York");

        let back: Booking = serde_json::from_value(json).unwrap();
        assert_eq!(back, booking);
    }

    #[test]
    fn test_booked_flight_gets_fresh_id() {
        let a = BookedFlight::new(sample_flight());
        let b = BookedFlight::new(sample_flight());
        assert_ne!(a.id, b.id);
        assert_eq!(a.flight, b.flight);
    }

    #[test]
    fn test_party_totals() {
        let passengers = PassengerCounts {
            adults: 2,
            children: 1,
            infants: 1,
        };
        assert_eq!(passengers.total(), 4);
        assert_eq!(GuestCounts::default().total(), 2);
    }
}

use crate::booking::{BookedCab, BookedFlight, BookedHotel, Booking, BookingKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tripline_core::identity::{BookingId, ItineraryId};

/// A named trip container holding flight, hotel, and cab booking records.
/// Created empty, mutated only by attaching or detaching records, and
/// destroyed by an explicit delete on the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    pub id: ItineraryId,
    pub name: String,
    pub flights: Vec<BookedFlight>,
    pub hotels: Vec<BookedHotel>,
    pub cabs: Vec<BookedCab>,
    pub created_at: DateTime<Utc>,
}

impl Itinerary {
    /// New empty itinerary. Empty names are accepted as-is.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItineraryId::new(),
            name: name.into(),
            flights: Vec::new(),
            hotels: Vec::new(),
            cabs: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Attach a booking to the sequence named by its variant, assigning a
    /// fresh id. Returns the assigned id.
    pub fn attach(&mut self, booking: Booking) -> BookingId {
        match booking {
            Booking::Flight(flight) => {
                let record = BookedFlight::new(flight);
                let id = record.id;
                self.flights.push(record);
                id
            }
            Booking::Hotel(hotel) => {
                let record = BookedHotel::new(hotel);
                let id = record.id;
                self.hotels.push(record);
                id
            }
            Booking::Cab(cab) => {
                let record = BookedCab::new(cab);
                let id = record.id;
                self.cabs.push(record);
                id
            }
        }
    }

    /// Drop the record with `id` from the named sequence. Returns whether
    /// anything was removed; an absent id is a no-op.
    pub fn detach(&mut self, kind: BookingKind, id: BookingId) -> bool {
        match kind {
            BookingKind::Flight => {
                let before = self.flights.len();
                self.flights.retain(|record| record.id != id);
                self.flights.len() != before
            }
            BookingKind::Hotel => {
                let before = self.hotels.len();
                self.hotels.retain(|record| record.id != id);
                self.hotels.len() != before
            }
            BookingKind::Cab => {
                let before = self.cabs.len();
                self.cabs.retain(|record| record.id != id);
                self.cabs.len() != before
            }
        }
    }

    pub fn booking_count(&self) -> usize {
        self.flights.len() + self.hotels.len() + self.cabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.booking_count() == 0
    }
}

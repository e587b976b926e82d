use std::sync::Arc;
use tracing::{debug, info};
use tripline_core::identity::{BookingId, ItineraryId};
use tripline_domain::{Booking, BookingKind, Itinerary};

/// The authoritative list of itineraries and the only sanctioned mutation
/// surface over it.
///
/// Every mutation publishes a fresh `Arc<Vec<Itinerary>>` snapshot, so a
/// reader holding a previous snapshot detects change with `Arc::ptr_eq`
/// instead of diffing. No-ops publish nothing: the old snapshot stays
/// identical. Not-found targets are absorbed silently; no operation panics
/// or returns an error.
#[derive(Debug, Clone)]
pub struct ItineraryStore {
    itineraries: Arc<Vec<Itinerary>>,
}

impl ItineraryStore {
    pub fn new() -> Self {
        Self {
            itineraries: Arc::new(Vec::new()),
        }
    }

    /// Current snapshot. Cheap to clone and compare by identity.
    pub fn itineraries(&self) -> Arc<Vec<Itinerary>> {
        Arc::clone(&self.itineraries)
    }

    pub fn get(&self, id: ItineraryId) -> Option<&Itinerary> {
        self.itineraries.iter().find(|itinerary| itinerary.id == id)
    }

    pub fn len(&self) -> usize {
        self.itineraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itineraries.is_empty()
    }

    /// Create an empty itinerary with a fresh unique id. Empty names are
    /// accepted.
    pub fn create(&mut self, name: impl Into<String>) -> ItineraryId {
        let itinerary = Itinerary::new(name);
        let id = itinerary.id;

        let mut next = self.itineraries.as_ref().clone();
        next.push(itinerary);
        self.publish(next);

        info!("Created itinerary {}", id);
        id
    }

    /// Append `booking` to the matching sequence of the itinerary with
    /// `itinerary_id`, assigning it a fresh booking id. Returns `None` and
    /// leaves the store untouched when no itinerary matches.
    pub fn add(&mut self, itinerary_id: ItineraryId, booking: Booking) -> Option<BookingId> {
        if self.get(itinerary_id).is_none() {
            debug!("Ignoring add to unknown itinerary {}", itinerary_id);
            return None;
        }

        let kind = booking.kind();
        let mut next = self.itineraries.as_ref().clone();
        let booking_id = next
            .iter_mut()
            .find(|itinerary| itinerary.id == itinerary_id)
            .map(|itinerary| itinerary.attach(booking))?;
        self.publish(next);

        info!(
            "Added {:?} booking {} to itinerary {}",
            kind, booking_id, itinerary_id
        );
        Some(booking_id)
    }

    /// Remove the booking with `booking_id` from the named sequence of the
    /// matching itinerary. Returns whether anything was removed; unknown
    /// itinerary or booking ids are no-ops.
    pub fn remove(
        &mut self,
        itinerary_id: ItineraryId,
        booking_id: BookingId,
        kind: BookingKind,
    ) -> bool {
        let mut next = self.itineraries.as_ref().clone();
        let removed = next
            .iter_mut()
            .find(|itinerary| itinerary.id == itinerary_id)
            .map(|itinerary| itinerary.detach(kind, booking_id))
            .unwrap_or(false);

        if !removed {
            debug!(
                "Ignoring remove of {:?} booking {} from itinerary {}",
                kind, booking_id, itinerary_id
            );
            return false;
        }

        self.publish(next);
        info!(
            "Removed {:?} booking {} from itinerary {}",
            kind, booking_id, itinerary_id
        );
        true
    }

    /// Delete the itinerary with `id`. Returns whether anything was
    /// deleted; an absent id is a no-op.
    pub fn delete(&mut self, id: ItineraryId) -> bool {
        if self.get(id).is_none() {
            debug!("Ignoring delete of unknown itinerary {}", id);
            return false;
        }

        let mut next = self.itineraries.as_ref().clone();
        next.retain(|itinerary| itinerary.id != id);
        self.publish(next);

        info!("Deleted itinerary {}", id);
        true
    }

    fn publish(&mut self, next: Vec<Itinerary>) {
        self.itineraries = Arc::new(next);
    }
}

impl Default for ItineraryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use tripline_domain::{
        CabBooking, FlightBooking, HotelBooking, GuestCounts, PassengerCounts,
    };

    fn flight() -> Booking {
        Booking::Flight(FlightBooking {
            origin: "NYC".to_string(),
            destination: "LAX".to_string(),
            depart_date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
            return_date: None,
            passengers: PassengerCounts::default(),
            cabin: None,
        })
    }

    fn hotel() -> Booking {
        Booking::Hotel(HotelBooking {
            location: "Santa Monica".to_string(),
            check_in: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2026, 8, 13).unwrap(),
            guests: GuestCounts::default(),
            room_type: Some("Standard Room".to_string()),
            star_rating: Some(5),
        })
    }

    fn cab() -> Booking {
        Booking::Cab(CabBooking {
            pickup_location: "Los Angeles Airport".to_string(),
            dropoff_location: "Downtown Los Angeles".to_string(),
            pickup_date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
            pickup_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            passengers: 4,
            car_type: Some("Economy".to_string()),
        })
    }

    #[test]
    fn test_create_yields_named_empty_itinerary() {
        let mut store = ItineraryStore::new();
        let id = store.create("Spring Break");

        let itinerary = store.get(id).unwrap();
        assert_eq!(itinerary.name, "Spring Break");
        assert!(itinerary.is_empty());
    }

    #[test]
    fn test_create_ids_are_distinct() {
        let mut store = ItineraryStore::new();
        let a = store.create("A");
        let b = store.create("B");
        let c = store.create("");
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_touches_only_target_sequence() {
        let mut store = ItineraryStore::new();
        let target = store.create("Target");
        let other = store.create("Other");

        let booking_id = store.add(target, flight()).unwrap();

        let itinerary = store.get(target).unwrap();
        assert_eq!(itinerary.flights.len(), 1);
        assert_eq!(itinerary.flights[0].id, booking_id);
        assert!(itinerary.hotels.is_empty());
        assert!(itinerary.cabs.is_empty());
        assert!(store.get(other).unwrap().is_empty());
    }

    #[test]
    fn test_hotel_routes_to_hotel_sequence() {
        let mut store = ItineraryStore::new();
        let id = store.create("Trip");
        store.add(id, hotel()).unwrap();

        let itinerary = store.get(id).unwrap();
        assert!(itinerary.flights.is_empty());
        assert_eq!(itinerary.hotels.len(), 1);
        assert!(itinerary.cabs.is_empty());
    }

    #[test]
    fn test_add_to_unknown_itinerary_is_noop() {
        let mut store = ItineraryStore::new();
        store.create("Trip");
        let before = store.itineraries();

        assert!(store.add(ItineraryId::new(), cab()).is_none());
        assert!(Arc::ptr_eq(&before, &store.itineraries()));
    }

    #[test]
    fn test_remove_unknown_booking_is_noop() {
        let mut store = ItineraryStore::new();
        let id = store.create("Trip");
        store.add(id, flight()).unwrap();
        let before = store.itineraries();

        assert!(!store.remove(id, BookingId::new(), BookingKind::Flight));
        assert!(Arc::ptr_eq(&before, &store.itineraries()));
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = ItineraryStore::new();
        let keep = store.create("Keep");
        let drop = store.create("Drop");

        assert!(store.delete(drop));
        assert_eq!(store.len(), 1);
        assert!(store.get(keep).is_some());
        assert!(store.get(drop).is_none());

        // Deleting again is a no-op.
        assert!(!store.delete(drop));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_mutation_publishes_fresh_snapshot() {
        let mut store = ItineraryStore::new();
        let before = store.itineraries();
        let id = store.create("Trip");
        let after = store.itineraries();

        assert!(!Arc::ptr_eq(&before, &after));

        // An untouched itinerary still compares equal across snapshots.
        store.add(id, flight()).unwrap();
        assert_eq!(store.get(id).unwrap().name, after[0].name);
    }

    #[test]
    fn test_spring_break_scenario() {
        let mut store = ItineraryStore::new();

        let id = store.create("Spring Break");
        let booking_id = store.add(id, flight()).unwrap();
        {
            let itinerary = store.get(id).unwrap();
            assert_eq!(itinerary.flights.len(), 1);
            assert!(itinerary.hotels.is_empty());
            assert!(itinerary.cabs.is_empty());
        }

        assert!(store.remove(id, booking_id, BookingKind::Flight));
        assert!(store.get(id).unwrap().flights.is_empty());

        assert!(store.delete(id));
        assert!(store.get(id).is_none());
        assert!(store.is_empty());
    }
}

use chrono::{Days, Utc};
use tracing::debug;
use tripline_catalog::{CabListing, FlightListing, HotelListing};
use tripline_core::identity::{BookingId, ItineraryId};
use tripline_domain::{
    Booking, CabBooking, CabinClass, FlightBooking, GuestCounts, HotelBooking, PassengerCounts,
};
use tripline_store::{ActiveSelections, Config, ItineraryStore};

// Cab page prefills when no search was run.
const DEFAULT_CAB_PICKUP: &str = "Los Angeles Airport";
const DEFAULT_CAB_DROPOFF: &str = "Downtown Los Angeles";
const DEFAULT_CAB_ITINERARY_NAME: &str = "Los Angeles Trip";

/// The planning session behind the result pages: owns the itinerary store
/// and the active selection slots, and turns a picked search result into a
/// booking record on an itinerary.
///
/// Each `add_*_result` mirrors a result page's "Add to Itinerary" action:
/// when the caller has no itinerary selected, a fresh one is created and
/// named after the result, and its id is returned so the page can keep it
/// selected. A stale `selected` id (already deleted) is absorbed as a
/// no-op, returning `None`.
#[derive(Debug, Default)]
pub struct TripPlanner {
    store: ItineraryStore,
    selections: ActiveSelections,
    config: Config,
}

impl TripPlanner {
    pub fn new(config: Config) -> Self {
        Self {
            store: ItineraryStore::new(),
            selections: ActiveSelections::new(),
            config,
        }
    }

    pub fn store(&self) -> &ItineraryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ItineraryStore {
        &mut self.store
    }

    pub fn selections(&self) -> &ActiveSelections {
        &self.selections
    }

    pub fn selections_mut(&mut self) -> &mut ActiveSelections {
        &mut self.selections
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Add a flight result to `selected`, or to a fresh itinerary named
    /// "Trip to {arrival city}".
    pub fn add_flight_result(
        &mut self,
        selected: Option<ItineraryId>,
        listing: &FlightListing,
    ) -> Option<(ItineraryId, BookingId)> {
        let booking = Booking::Flight(FlightBooking {
            origin: listing.departure_city.clone(),
            destination: listing.arrival_city.clone(),
            depart_date: Utc::now().date_naive(),
            return_date: None,
            passengers: PassengerCounts::default(),
            cabin: Some(CabinClass::Economy),
        });
        self.attach(selected, booking, || {
            format!("Trip to {}", listing.arrival_city)
        })
    }

    /// Add a hotel result to `selected`, or to a fresh itinerary named
    /// "Stay in {location}". Check-in defaults to today with the configured
    /// check-out offset.
    pub fn add_hotel_result(
        &mut self,
        selected: Option<ItineraryId>,
        listing: &HotelListing,
    ) -> Option<(ItineraryId, BookingId)> {
        let check_in = Utc::now().date_naive();
        let nights = u64::from(self.config.defaults.checkout_offset_days);
        let booking = Booking::Hotel(HotelBooking {
            location: listing.location.clone(),
            check_in,
            check_out: check_in
                .checked_add_days(Days::new(nights))
                .unwrap_or(check_in),
            guests: GuestCounts::default(),
            room_type: Some("Standard Room".to_string()),
            star_rating: Some(listing.rating.round() as u8),
        });
        self.attach(selected, booking, || {
            format!("Stay in {}", listing.location)
        })
    }

    /// Add a cab result to `selected`, or to a fresh itinerary. Locations,
    /// date, and time come from the active cab selection when one is set,
    /// otherwise from the page prefills.
    pub fn add_cab_result(
        &mut self,
        selected: Option<ItineraryId>,
        listing: &CabListing,
    ) -> Option<(ItineraryId, BookingId)> {
        let booking = match self.selections.cab() {
            Some(draft) => Booking::Cab(CabBooking {
                passengers: listing.capacity,
                car_type: Some(listing.car_class.to_string()),
                ..draft.clone()
            }),
            None => Booking::Cab(CabBooking {
                pickup_location: DEFAULT_CAB_PICKUP.to_string(),
                dropoff_location: DEFAULT_CAB_DROPOFF.to_string(),
                pickup_date: Utc::now().date_naive(),
                pickup_time: self.config.defaults.pickup_time,
                passengers: listing.capacity,
                car_type: Some(listing.car_class.to_string()),
            }),
        };
        self.attach(selected, booking, || {
            DEFAULT_CAB_ITINERARY_NAME.to_string()
        })
    }

    fn attach(
        &mut self,
        selected: Option<ItineraryId>,
        booking: Booking,
        name: impl FnOnce() -> String,
    ) -> Option<(ItineraryId, BookingId)> {
        match selected {
            Some(id) => self.store.add(id, booking).map(|booking_id| (id, booking_id)),
            None => {
                let id = self.store.create(name());
                debug!("Auto-created itinerary {} for picked result", id);
                let booking_id = self.store.add(id, booking)?;
                Some((id, booking_id))
            }
        }
    }
}

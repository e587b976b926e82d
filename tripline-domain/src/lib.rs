pub mod booking;
pub mod itinerary;
pub mod search;

pub use booking::{
    BookedCab, BookedFlight, BookedHotel, Booking, BookingKind, CabBooking, CabinClass,
    FlightBooking, GuestCounts, HotelBooking, PassengerCounts,
};
pub use itinerary::Itinerary;
pub use search::{
    CabSearchRequest, FlightSearchRequest, HotelSearchRequest, SearchLimits, TripType,
};

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid party mix: {0}")]
    InvalidPartyMix(String),
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),
}

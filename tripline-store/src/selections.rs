use tripline_domain::{CabBooking, FlightBooking, HotelBooking};

/// The three single-slot "currently being configured" booking values, one
/// per search domain. Any page may set or clear any slot; nothing is
/// persisted and the slots reset with the session.
#[derive(Debug, Clone, Default)]
pub struct ActiveSelections {
    flight: Option<FlightBooking>,
    hotel: Option<HotelBooking>,
    cab: Option<CabBooking>,
}

impl ActiveSelections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flight(&self) -> Option<&FlightBooking> {
        self.flight.as_ref()
    }

    pub fn set_flight(&mut self, flight: FlightBooking) {
        self.flight = Some(flight);
    }

    pub fn clear_flight(&mut self) {
        self.flight = None;
    }

    pub fn hotel(&self) -> Option<&HotelBooking> {
        self.hotel.as_ref()
    }

    pub fn set_hotel(&mut self, hotel: HotelBooking) {
        self.hotel = Some(hotel);
    }

    pub fn clear_hotel(&mut self) {
        self.hotel = None;
    }

    pub fn cab(&self) -> Option<&CabBooking> {
        self.cab.as_ref()
    }

    pub fn set_cab(&mut self, cab: CabBooking) {
        self.cab = Some(cab);
    }

    pub fn clear_cab(&mut self) {
        self.cab = None;
    }
}

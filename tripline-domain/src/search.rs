use crate::booking::{CabinClass, GuestCounts, PassengerCounts};
use crate::DomainError;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripType {
    RoundTrip,
    OneWay,
    MultiCity,
}

/// Party-size ceilings enforced by the search forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    pub max_flight_adults: u32,
    pub max_flight_children: u32,
    pub max_hotel_adults: u32,
    pub max_hotel_children: u32,
    pub max_cab_passengers: u32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_flight_adults: 9,
            max_flight_children: 8,
            max_hotel_adults: 10,
            max_hotel_children: 6,
            max_cab_passengers: 8,
        }
    }
}

impl PassengerCounts {
    /// Clamp to the form limits: at least one adult, children capped, and
    /// infants never outnumbering adults (lap seating).
    pub fn clamped(self, limits: &SearchLimits) -> Self {
        let adults = self.adults.clamp(1, limits.max_flight_adults);
        Self {
            adults,
            children: self.children.min(limits.max_flight_children),
            infants: self.infants.min(adults),
        }
    }
}

impl GuestCounts {
    pub fn clamped(self, limits: &SearchLimits) -> Self {
        Self {
            adults: self.adults.clamp(1, limits.max_hotel_adults),
            children: self.children.min(limits.max_hotel_children),
        }
    }
}

/// One flight search as submitted from the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightSearchRequest {
    pub trip_type: TripType,
    pub origin: String,
    pub destination: String,
    pub depart_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub passengers: PassengerCounts,
    pub cabin: CabinClass,
}

impl FlightSearchRequest {
    pub fn validate(&self, limits: &SearchLimits) -> Result<(), DomainError> {
        if self.passengers.adults == 0 {
            return Err(DomainError::InvalidPartyMix(
                "at least one adult is required".to_string(),
            ));
        }
        if self.passengers.adults > limits.max_flight_adults {
            return Err(DomainError::InvalidPartyMix(format!(
                "at most {} adults per booking",
                limits.max_flight_adults
            )));
        }
        if self.passengers.infants > self.passengers.adults {
            return Err(DomainError::InvalidPartyMix(
                "each infant must travel with an adult".to_string(),
            ));
        }
        if let Some(return_date) = self.return_date {
            if return_date < self.depart_date {
                return Err(DomainError::InvalidDateRange(format!(
                    "return {} precedes departure {}",
                    return_date, self.depart_date
                )));
            }
        }
        Ok(())
    }

    /// Copy with the party clamped into range instead of rejected.
    pub fn normalized(mut self, limits: &SearchLimits) -> Self {
        self.passengers = self.passengers.clamped(limits);
        self
    }
}

/// One hotel search as submitted from the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelSearchRequest {
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: GuestCounts,
    pub min_star_rating: Option<u8>,
}

impl HotelSearchRequest {
    pub fn validate(&self, limits: &SearchLimits) -> Result<(), DomainError> {
        if self.guests.adults == 0 {
            return Err(DomainError::InvalidPartyMix(
                "at least one adult is required".to_string(),
            ));
        }
        if self.guests.adults > limits.max_hotel_adults {
            return Err(DomainError::InvalidPartyMix(format!(
                "at most {} adults per room",
                limits.max_hotel_adults
            )));
        }
        if self.check_out <= self.check_in {
            return Err(DomainError::InvalidDateRange(format!(
                "check-out {} must follow check-in {}",
                self.check_out, self.check_in
            )));
        }
        Ok(())
    }

    pub fn normalized(mut self, limits: &SearchLimits) -> Self {
        self.guests = self.guests.clamped(limits);
        self
    }
}

/// One cab search as submitted from the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CabSearchRequest {
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: NaiveDate,
    pub pickup_time: NaiveTime,
    pub passengers: u32,
}

impl CabSearchRequest {
    pub fn validate(&self, limits: &SearchLimits) -> Result<(), DomainError> {
        if self.passengers == 0 || self.passengers > limits.max_cab_passengers {
            return Err(DomainError::InvalidPartyMix(format!(
                "cab party must be between 1 and {}",
                limits.max_cab_passengers
            )));
        }
        Ok(())
    }

    pub fn normalized(mut self, limits: &SearchLimits) -> Self {
        self.passengers = self.passengers.clamp(1, limits.max_cab_passengers);
        self
    }
}

pub mod filter;
pub mod fixtures;
pub mod listings;

pub use filter::{
    search_cabs, search_flights, search_hotels, CabFilter, CabSortKey, FlightFilter,
    FlightSortKey, HotelFilter, HotelSortKey,
};
pub use listings::{Amenity, CabListing, CarClass, Destination, FlightListing, HotelListing};

pub mod app_config;
pub mod itinerary_store;
pub mod selections;

pub use app_config::{Config, TripDefaults};
pub use itinerary_store::ItineraryStore;
pub use selections::ActiveSelections;

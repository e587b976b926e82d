pub mod planner;
pub mod routes;

pub use planner::TripPlanner;
pub use routes::{Route, SearchTab};

//! Stop entities read from `stops.txt`.
//!
//! Only stations are built here. A station is a stop with no parent that may
//! own child stops, referenced by identifier.

mod builder;
mod location_type;
mod station;
mod wheelchair;

pub use builder::StationBuilder;
pub use location_type::{LOCATION_TYPE, LocationType};
pub use station::Station;
pub use wheelchair::{WHEELCHAIR_BOARDING, WheelchairBoarding};

/// Feed file every stop entity comes from.
pub const STOPS_FILENAME: &str = "stops.txt";

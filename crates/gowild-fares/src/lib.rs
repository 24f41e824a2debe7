pub mod aggregate;
pub mod client;
pub mod error;
pub mod extract;
pub mod layover;
pub mod normalize;
pub mod search;
pub mod types;

pub use aggregate::aggregate_fares;
pub use client::FrontierClient;
pub use error::FareError;
pub use extract::extract_flight_data;
pub use layover::layover_duration;
pub use normalize::normalize_fares;
pub use search::{discovery_destinations, search_fares, SearchSummary};
pub use types::{DestinationGroup, FareRecord, FlightLeg, Layover, RouteQuery, UNKNOWN};

//! Booking payload types and the normalized fare records built from them.
//!
//! ## Observed shape of the embedded payload
//!
//! The booking page inlines one JSON object in a `<script>` block. The parts
//! we read:
//!
//! ```text
//! journeys[0].flights[*] {
//!     isGoWildFareEnabled: bool,
//!     goWildFare: number,
//!     goWildFareSeatsRemaining: number | null,
//!     stopsText: "Nonstop" | "1 Stop" | ...,
//!     duration: "5h 12m",
//!     legs[*] {
//!         departureStation, arrivalStation,
//!         departureDateFormatted, arrivalDateFormatted,   // "7:32 AM"
//!         flightNumber, aircraftType,
//!     }
//! }
//! ```
//!
//! The endpoint has used two field-name conventions over time
//! (`arrivalStation` vs `arrivalAirport`). Live samples match the `Station`
//! convention, so that is what [`FlightLeg`] deserializes. If the site flips
//! back, only the serde renames here need to change.
//!
//! This shape is undocumented and unstable: every field except `legs` is
//! optional at the serde level, and the normalizer degrades to partial or
//! empty output instead of erroring when the shape drifts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel for source text fields that are missing or unparseable.
///
/// Seats deliberately do NOT use this: absence of a seat count is represented
/// as `None`, because "unknown" and "zero seats" render differently.
pub const UNKNOWN: &str = "Unknown";

/// One (origin, destination, date) lookup. Immutable once built; codes are
/// normalized to uppercase. Callers are expected to skip origin == destination
/// pairs before querying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
}

impl RouteQuery {
    #[must_use]
    pub fn new(origin: &str, destination: &str, date: NaiveDate) -> Self {
        Self {
            origin: origin.to_uppercase(),
            destination: destination.to_uppercase(),
            date,
        }
    }
}

/// One flight entry from `journeys[0].flights`, deserialized only after the
/// qualifying-fare flag has been checked on the raw JSON.
///
/// `legs` is the one structurally required field: an entry without legs is
/// malformed and aborts the rest of the flight list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEntry {
    #[serde(default)]
    pub go_wild_fare: f64,
    #[serde(default)]
    pub go_wild_fare_seats_remaining: Option<i64>,
    #[serde(default)]
    pub stops_text: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    pub legs: Vec<FlightLeg>,
}

/// One flown segment of a fare. Source-provided, read-only once parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightLeg {
    #[serde(default)]
    pub departure_station: Option<String>,
    #[serde(default)]
    pub arrival_station: Option<String>,
    #[serde(default)]
    pub departure_date_formatted: Option<String>,
    #[serde(default)]
    pub arrival_date_formatted: Option<String>,
    #[serde(default)]
    pub flight_number: Option<String>,
    #[serde(default)]
    pub aircraft_type: Option<String>,
}

/// An intermediate stop on a multi-leg fare.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layover {
    pub airport: String,
    /// Computed elapsed time, e.g. `"1h 20m"`, or `"Unknown"`.
    pub duration: String,
}

/// A normalized qualifying fare. Produced only for flights whose
/// qualifying-fare flag is set; non-qualifying flights are dropped entirely,
/// never represented with a zero price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareRecord {
    pub stops: String,
    pub price: f64,
    pub departure_time: String,
    pub departure_airport: String,
    pub arrival_time: String,
    pub arrival_airport: String,
    pub duration: String,
    pub seats: Option<i64>,
    pub layovers: Vec<Layover>,
    pub flight_number: String,
    pub aircraft_type: String,
    /// Full ordered leg list, kept for detailed display.
    pub legs: Vec<FlightLeg>,
}

impl FareRecord {
    /// The dedup key: two records with equal identity are the same fare seen
    /// twice (e.g. across a date-range or discovery fan-out).
    #[must_use]
    pub fn identity(&self) -> FareIdentity {
        FareIdentity {
            flight_number: self.flight_number.clone(),
            departure_time: self.departure_time.clone(),
            arrival_time: self.arrival_time.clone(),
            departure_airport: self.departure_airport.clone(),
            arrival_airport: self.arrival_airport.clone(),
            // Bitwise comparison is enough here: duplicate fares carry the
            // byte-identical price value from the same source payload.
            price_bits: self.price.to_bits(),
        }
    }
}

/// Identity tuple for fare deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FareIdentity {
    flight_number: String,
    departure_time: String,
    arrival_time: String,
    departure_airport: String,
    arrival_airport: String,
    price_bits: u64,
}

/// All deduplicated fares observed for one actual arrival station.
///
/// Keyed by the destination the fare data reports, not the one requested —
/// the booking engine sometimes returns a nearby airport instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationGroup {
    pub destination: String,
    pub destination_name: String,
    pub fares: Vec<FareRecord>,
}

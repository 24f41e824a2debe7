//! Builds normalized [`FareRecord`]s from the extracted payload.

use serde_json::Value;

use crate::layover::layover_duration;
use crate::types::{FareRecord, FlightEntry, Layover, UNKNOWN};

/// Filters `journeys[0].flights` down to qualifying fares and normalizes each
/// into a [`FareRecord`].
///
/// Missing or empty structure (`{}`, `journeys: []`, `flights: null`) yields
/// an empty vec, not an error. A structural problem inside one qualifying
/// entry stops processing of the rest of the list and returns whatever was
/// accumulated — partial results beat losing the whole query.
#[must_use]
pub fn normalize_fares(data: &Value) -> Vec<FareRecord> {
    let mut fares = Vec::new();

    let Some(flights) = data
        .get("journeys")
        .and_then(Value::as_array)
        .and_then(|journeys| journeys.first())
        .and_then(|journey| journey.get("flights"))
        .and_then(Value::as_array)
    else {
        return fares;
    };

    for entry in flights {
        // The qualifying flag is read off the raw JSON so that malformed
        // non-qualifying entries are skipped, not treated as structural
        // errors.
        let qualifying = entry
            .get("isGoWildFareEnabled")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if !qualifying {
            continue;
        }

        let flight: FlightEntry = match serde_json::from_value(entry.clone()) {
            Ok(flight) => flight,
            Err(e) => {
                tracing::warn!(error = %e, "malformed flight entry; keeping fares parsed so far");
                break;
            }
        };

        let Some(first_leg) = flight.legs.first() else {
            tracing::warn!("flight entry has an empty leg list; keeping fares parsed so far");
            break;
        };
        let last_leg = flight.legs.last().unwrap_or(first_leg);

        let layovers: Vec<Layover> = flight
            .legs
            .windows(2)
            .map(|pair| Layover {
                airport: text_or_unknown(pair[0].arrival_station.as_deref()),
                duration: layover_duration(
                    pair[0].arrival_date_formatted.as_deref().unwrap_or(""),
                    pair[1].departure_date_formatted.as_deref().unwrap_or(""),
                ),
            })
            .collect();

        fares.push(FareRecord {
            stops: text_or_unknown(flight.stops_text.as_deref()),
            price: flight.go_wild_fare,
            departure_time: text_or_unknown(first_leg.departure_date_formatted.as_deref()),
            departure_airport: text_or_unknown(first_leg.departure_station.as_deref()),
            arrival_time: text_or_unknown(last_leg.arrival_date_formatted.as_deref()),
            arrival_airport: text_or_unknown(last_leg.arrival_station.as_deref()),
            duration: text_or_unknown(flight.duration.as_deref()),
            seats: flight.go_wild_fare_seats_remaining,
            layovers,
            flight_number: text_or_unknown(first_leg.flight_number.as_deref()),
            aircraft_type: text_or_unknown(first_leg.aircraft_type.as_deref()),
            legs: flight.legs.clone(),
        });
    }

    fares
}

fn text_or_unknown(field: Option<&str>) -> String {
    field.map_or_else(|| UNKNOWN.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leg(dep: &str, arr: &str, dep_time: &str, arr_time: &str) -> Value {
        json!({
            "departureStation": dep,
            "arrivalStation": arr,
            "departureDateFormatted": dep_time,
            "arrivalDateFormatted": arr_time,
            "flightNumber": "F9 123",
            "aircraftType": "A320",
        })
    }

    #[test]
    fn empty_and_missing_structure_yield_empty() {
        assert!(normalize_fares(&json!({})).is_empty());
        assert!(normalize_fares(&json!({"journeys": []})).is_empty());
        assert!(normalize_fares(&json!({"journeys": [{"flights": null}]})).is_empty());
        assert!(normalize_fares(&json!({"journeys": [{}]})).is_empty());
    }

    #[test]
    fn non_qualifying_flights_are_dropped() {
        let data = json!({"journeys": [{"flights": [
            {"isGoWildFareEnabled": false, "goWildFare": 19.0,
             "legs": [leg("JFK", "LAX", "7:32 AM", "10:44 AM")]},
            {"isGoWildFareEnabled": true, "goWildFare": 59.0,
             "legs": [leg("JFK", "LAX", "7:32 AM", "10:44 AM")]},
        ]}]});
        let fares = normalize_fares(&data);
        assert_eq!(fares.len(), 1);
        assert!((fares[0].price - 59.0).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_non_qualifying_entry_is_skipped_not_fatal() {
        // No flag and no legs at all — never inspected beyond the flag check.
        let data = json!({"journeys": [{"flights": [
            {"someOtherField": 1},
            {"isGoWildFareEnabled": true, "goWildFare": 39.0,
             "legs": [leg("DEN", "PHX", "9:00 AM", "10:15 AM")]},
        ]}]});
        let fares = normalize_fares(&data);
        assert_eq!(fares.len(), 1);
        assert_eq!(fares[0].departure_airport, "DEN");
    }

    #[test]
    fn malformed_qualifying_entry_keeps_partial_results() {
        let data = json!({"journeys": [{"flights": [
            {"isGoWildFareEnabled": true, "goWildFare": 29.0,
             "legs": [leg("MCO", "ATL", "6:00 AM", "7:30 AM")]},
            {"isGoWildFareEnabled": true, "goWildFare": 49.0},   // no legs
            {"isGoWildFareEnabled": true, "goWildFare": 99.0,
             "legs": [leg("MCO", "DEN", "8:00 AM", "10:00 AM")]},
        ]}]});
        let fares = normalize_fares(&data);
        assert_eq!(fares.len(), 1, "entries after the malformed one are dropped");
        assert_eq!(fares[0].arrival_airport, "ATL");
    }

    #[test]
    fn empty_leg_list_keeps_partial_results() {
        let data = json!({"journeys": [{"flights": [
            {"isGoWildFareEnabled": true, "goWildFare": 29.0,
             "legs": [leg("MCO", "ATL", "6:00 AM", "7:30 AM")]},
            {"isGoWildFareEnabled": true, "goWildFare": 49.0, "legs": []},
        ]}]});
        assert_eq!(normalize_fares(&data).len(), 1);
    }

    #[test]
    fn connecting_flight_gets_layovers_from_adjacent_legs() {
        let data = json!({"journeys": [{"flights": [
            {"isGoWildFareEnabled": true, "goWildFare": 79.0, "stopsText": "1 Stop",
             "duration": "7h 12m",
             "legs": [
                 leg("LGA", "DEN", "7:32 AM", "9:58 AM"),
                 leg("DEN", "LAS", "11:18 AM", "12:10 PM"),
             ]},
        ]}]});
        let fares = normalize_fares(&data);
        assert_eq!(fares.len(), 1);
        let fare = &fares[0];

        // First leg supplies departure, last leg arrival.
        assert_eq!(fare.departure_airport, "LGA");
        assert_eq!(fare.departure_time, "7:32 AM");
        assert_eq!(fare.arrival_airport, "LAS");
        assert_eq!(fare.arrival_time, "12:10 PM");

        assert_eq!(fare.layovers.len(), 1);
        assert_eq!(fare.layovers[0].airport, "DEN");
        assert_eq!(fare.layovers[0].duration, "1h 20m");
        assert_eq!(fare.legs.len(), 2);
    }

    #[test]
    fn missing_fields_use_sentinels_and_absent_seats() {
        let data = json!({"journeys": [{"flights": [
            {"isGoWildFareEnabled": true, "goWildFare": 59.0,
             "legs": [{"departureStation": "JFK"}]},
        ]}]});
        let fares = normalize_fares(&data);
        assert_eq!(fares.len(), 1);
        let fare = &fares[0];
        assert_eq!(fare.stops, UNKNOWN);
        assert_eq!(fare.arrival_airport, UNKNOWN);
        assert_eq!(fare.flight_number, UNKNOWN);
        assert_eq!(fare.seats, None, "missing seats is unknown, not zero");
    }

    #[test]
    fn seats_remaining_is_carried_through() {
        let data = json!({"journeys": [{"flights": [
            {"isGoWildFareEnabled": true, "goWildFare": 59.0,
             "goWildFareSeatsRemaining": 3,
             "legs": [leg("JFK", "LAX", "7:32 AM", "10:44 AM")]},
        ]}]});
        assert_eq!(normalize_fares(&data)[0].seats, Some(3));
    }
}

//! Merges fan-out results into per-destination groups, dropping duplicates.

use std::collections::{HashMap, HashSet};

use gowild_core::airports::display_name;

use crate::types::{DestinationGroup, FareIdentity, FareRecord, UNKNOWN};

/// Groups fares from multiple route queries by the arrival station each fare
/// actually reports, deduplicating within a group by [`FareRecord::identity`].
///
/// Input is `(requested destination, fares)` pairs. The requested code is
/// only used as a grouping fallback when a fare reports no arrival station of
/// its own. Groups and the fares inside them keep first-seen order, so equal
/// input always produces identical output.
#[must_use]
pub fn aggregate_fares<I>(results: I) -> Vec<DestinationGroup>
where
    I: IntoIterator<Item = (String, Vec<FareRecord>)>,
{
    let mut groups: Vec<DestinationGroup> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();
    let mut seen: Vec<HashSet<FareIdentity>> = Vec::new();

    for (requested, fares) in results {
        for fare in fares {
            let destination = if fare.arrival_airport == UNKNOWN {
                requested.clone()
            } else {
                fare.arrival_airport.clone()
            };

            let slot = match group_index.get(&destination) {
                Some(&slot) => slot,
                None => {
                    groups.push(DestinationGroup {
                        destination: destination.clone(),
                        destination_name: display_name(&destination).to_string(),
                        fares: Vec::new(),
                    });
                    seen.push(HashSet::new());
                    group_index.insert(destination, groups.len() - 1);
                    groups.len() - 1
                }
            };

            // First occurrence wins; later duplicates are dropped silently.
            if seen[slot].insert(fare.identity()) {
                groups[slot].fares.push(fare);
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Layover;

    fn fare(flight_number: &str, dep: &str, arr: &str, price: f64) -> FareRecord {
        FareRecord {
            stops: "Nonstop".to_string(),
            price,
            departure_time: "7:32 AM".to_string(),
            departure_airport: dep.to_string(),
            arrival_time: "10:44 AM".to_string(),
            arrival_airport: arr.to_string(),
            duration: "3h 12m".to_string(),
            seats: Some(2),
            layovers: Vec::<Layover>::new(),
            flight_number: flight_number.to_string(),
            aircraft_type: "A320".to_string(),
            legs: Vec::new(),
        }
    }

    #[test]
    fn groups_by_actual_destination_not_requested() {
        // Two queries requested LAX, both came back reporting BUR.
        let results = vec![
            ("LAX".to_string(), vec![fare("F9 100", "LGA", "BUR", 59.0)]),
            ("LAX".to_string(), vec![fare("F9 200", "LGA", "BUR", 79.0)]),
        ];
        let groups = aggregate_fares(results);
        assert_eq!(groups.len(), 1, "one group keyed by the actual destination");
        assert_eq!(groups[0].destination, "BUR");
        assert_eq!(groups[0].destination_name, "Burbank, CA");
        assert_eq!(groups[0].fares.len(), 2);
    }

    #[test]
    fn duplicate_fares_collapse_to_first_occurrence() {
        let fares = vec![
            fare("F9 100", "LGA", "DEN", 59.0),
            fare("F9 200", "LGA", "DEN", 79.0),
        ];
        let once = aggregate_fares(vec![("DEN".to_string(), fares.clone())]);
        let twice = aggregate_fares(vec![
            ("DEN".to_string(), fares.clone()),
            ("DEN".to_string(), fares),
        ]);
        assert_eq!(once, twice, "aggregation is idempotent under duplication");
        assert_eq!(twice[0].fares.len(), 2);
    }

    #[test]
    fn same_flight_number_different_price_is_not_a_duplicate() {
        let results = vec![(
            "DEN".to_string(),
            vec![
                fare("F9 100", "LGA", "DEN", 59.0),
                fare("F9 100", "LGA", "DEN", 99.0),
            ],
        )];
        assert_eq!(aggregate_fares(results)[0].fares.len(), 2);
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let results = vec![
            ("MCO".to_string(), vec![fare("F9 1", "LGA", "MCO", 29.0)]),
            ("DEN".to_string(), vec![fare("F9 2", "LGA", "DEN", 39.0)]),
            ("MCO".to_string(), vec![fare("F9 3", "LGA", "MCO", 49.0)]),
        ];
        let groups = aggregate_fares(results);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].destination, "MCO");
        assert_eq!(groups[1].destination, "DEN");
        assert_eq!(groups[0].fares[0].flight_number, "F9 1");
        assert_eq!(groups[0].fares[1].flight_number, "F9 3");
    }

    #[test]
    fn unknown_arrival_falls_back_to_requested_destination() {
        let results = vec![(
            "SFO".to_string(),
            vec![fare("F9 9", "LGA", UNKNOWN, 59.0)],
        )];
        let groups = aggregate_fares(results);
        assert_eq!(groups[0].destination, "SFO");
    }

    #[test]
    fn empty_results_produce_no_groups() {
        let groups = aggregate_fares(vec![("DEN".to_string(), Vec::new())]);
        assert!(groups.is_empty());
    }
}

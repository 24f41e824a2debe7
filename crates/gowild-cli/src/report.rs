//! Console rendering for search results.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use gowild_core::airports::display_name;
use gowild_fares::{DestinationGroup, FareRecord, SearchSummary, UNKNOWN};

pub fn print_search_header(origin: &str, destination_count: usize, date: NaiveDate, discovery: bool) {
    let origin = origin.to_uppercase();
    println!("{}", "=".repeat(60));
    if discovery {
        println!("Discovering GoWild fares from {origin} ({})", display_name(&origin));
        println!("Searching {destination_count} domestic destinations, this takes a while");
    } else {
        println!("Checking GoWild fares from {origin} ({})", display_name(&origin));
    }
    println!("Date: {}", date.format("%A, %B %d, %Y"));
    println!("{}", "=".repeat(60));
}

pub fn print_summary(summary: &SearchSummary, discovery: bool) {
    for group in &summary.groups {
        println!();
        println!(
            "{} ({}): {} fare(s)",
            group.destination,
            group.destination_name,
            group.fares.len()
        );
        for (i, fare) in group.fares.iter().enumerate() {
            print_fare(i + 1, fare);
        }
    }

    println!();
    println!("{}", "=".repeat(60));
    println!("SUMMARY");
    println!("Destinations with GoWild fares: {}", summary.groups.len());
    println!("Total GoWild fares found: {}", summary.fare_count());
    if summary.groups.is_empty() {
        println!("No GoWild fares found on any route");
    } else {
        let codes: Vec<&str> = summary.groups.iter().map(|g| g.destination.as_str()).collect();
        println!("Available destinations: {}", codes.join(", "));
    }

    if discovery && !summary.groups.is_empty() {
        print_price_breakdown(&summary.groups);
    }
}

fn print_fare(index: usize, fare: &FareRecord) {
    println!("  {index}. {} - ${}", fare.stops, format_price(fare.price));

    if fare.legs.len() > 1 {
        for (leg_index, leg) in fare.legs.iter().enumerate() {
            let dep_airport = leg.departure_station.as_deref().unwrap_or(UNKNOWN);
            let arr_airport = leg.arrival_station.as_deref().unwrap_or(UNKNOWN);
            let dep_time = leg.departure_date_formatted.as_deref().unwrap_or(UNKNOWN);
            let arr_time = leg.arrival_date_formatted.as_deref().unwrap_or(UNKNOWN);

            println!("     Leg {}: {dep_airport} -> {arr_airport}", leg_index + 1);
            println!("       Departs {dep_time}, arrives {arr_time}");

            if let Some(layover) = fare.layovers.get(leg_index) {
                println!("       Layover at {}: {}", layover.airport, layover.duration);
            }
        }
    } else {
        println!(
            "     Departs {} from {}",
            fare.departure_time, fare.departure_airport
        );
        println!("     Arrives {} at {}", fare.arrival_time, fare.arrival_airport);
    }

    println!("     Total duration: {}", fare.duration);
    if fare.flight_number != UNKNOWN {
        if fare.aircraft_type == UNKNOWN {
            println!("     Flight {}", fare.flight_number);
        } else {
            println!("     Flight {} ({})", fare.flight_number, fare.aircraft_type);
        }
    }
    if let Some(seats) = fare.seats {
        println!("     Seats available: {seats}");
    }
}

fn print_price_breakdown(groups: &[DestinationGroup]) {
    println!();
    println!("PRICE BREAKDOWN");
    for point in price_breakdown(groups) {
        println!(
            "  ${}: {} flight(s) to {} destination(s)",
            format_price(point.price),
            point.flights,
            point.destinations.len()
        );
        let codes: Vec<&str> = point.destinations.iter().map(String::as_str).collect();
        println!("    {}", codes.join(", "));
    }
}

pub fn print_combined_summary(summaries: &[SearchSummary]) {
    let mut destinations: BTreeSet<&str> = BTreeSet::new();
    let mut total_fares = 0usize;
    for summary in summaries {
        total_fares += summary.fare_count();
        for group in &summary.groups {
            destinations.insert(group.destination.as_str());
        }
    }

    println!();
    println!("{}", "=".repeat(60));
    println!("COMBINED SUMMARY");
    println!("Unique destinations with GoWild fares: {}", destinations.len());
    println!("Total GoWild fares found: {total_fares}");
    for summary in summaries {
        println!(
            "  {}: {} fare(s)",
            summary.date.format("%A, %B %d"),
            summary.fare_count()
        );
    }
    if destinations.is_empty() {
        println!("No GoWild fares found on any route for any day");
    } else {
        let codes: Vec<&str> = destinations.iter().copied().collect();
        println!("Available destinations: {}", codes.join(", "));
    }
}

/// One price point in the discovery breakdown: how many flights and how many
/// distinct destinations go for this amount.
struct PricePoint {
    price: f64,
    flights: usize,
    destinations: BTreeSet<String>,
}

fn price_breakdown(groups: &[DestinationGroup]) -> Vec<PricePoint> {
    let mut points: Vec<PricePoint> = Vec::new();
    for group in groups {
        for fare in &group.fares {
            match points
                .iter_mut()
                .find(|p| (p.price - fare.price).abs() < f64::EPSILON)
            {
                Some(point) => {
                    point.flights += 1;
                    point.destinations.insert(group.destination.clone());
                }
                None => {
                    let mut destinations = BTreeSet::new();
                    destinations.insert(group.destination.clone());
                    points.push(PricePoint {
                        price: fare.price,
                        flights: 1,
                        destinations,
                    });
                }
            }
        }
    }
    points.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(std::cmp::Ordering::Equal));
    points
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    }
}

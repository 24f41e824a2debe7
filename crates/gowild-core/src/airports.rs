//! Static airport reference data.
//!
//! Covers the stations the booking engine serves: display names for result
//! rendering and the domestic list used for discovery-mode fan-out. Read-only
//! for the lifetime of the process; safe to share across workers.

/// Domestic US stations queried in discovery mode.
pub const DOMESTIC_AIRPORTS: &[&str] = &[
    "ATL", "DEN", "DFW", "ORD", "LAX", "LAS", "PHX", "MIA", "MCO", "TPA", "SFO", "SEA", //
    "LGA", "JFK", "BOS", "PHL", "BWI", "DCA", "CLT", "RDU", "BUF", "ISP", "SYR", "PWM", //
    "BTV", "MDT", "PIT", "CLE", "CVG", "CMH", "IND", "DTW", "MSP", "MKE", "GRB", "MSN", //
    "GRR", "ORF", "RIC", "CHS", "SAV", "JAX", "PNS", "SRQ", "FLL", "RSW", "PBI", //
    "MYR", "TTN", "EWR", "SJC", "OAK", "SAN", "SMF", "SNA", "ONT", "BUR", "PSP", //
    "PDX", "SLC", "RNO", "BOI", "MSO", "GEG", "FAR", "FSD", "AUS", "SAT", "IAH", "HOU", //
    "ELP", "CRP", "TUS", "OKC", "TUL", "MCI", "STL", "MSY", "MEM", "BNA", "TYS", "LIT", //
    "XNA", "DSM", "CID", "OMA",
];

/// Display names for every station the route network touches, including
/// international and Caribbean arrivals that only show up in returned fares.
const AIRPORT_NAMES: &[(&str, &str)] = &[
    // Major US hubs
    ("ATL", "Atlanta, GA"),
    ("DEN", "Denver, CO"),
    ("DFW", "Dallas, TX"),
    ("ORD", "Chicago, IL"),
    ("LAX", "Los Angeles, CA"),
    ("LAS", "Las Vegas, NV"),
    ("PHX", "Phoenix, AZ"),
    ("MIA", "Miami, FL"),
    ("MCO", "Orlando, FL"),
    ("TPA", "Tampa, FL"),
    ("SFO", "San Francisco, CA"),
    ("SEA", "Seattle, WA"),
    // East coast
    ("LGA", "LaGuardia, NY"),
    ("JFK", "JFK New York, NY"),
    ("BOS", "Boston, MA"),
    ("PHL", "Philadelphia, PA"),
    ("BWI", "Baltimore, MD"),
    ("DCA", "Washington DC"),
    ("CLT", "Charlotte, NC"),
    ("RDU", "Raleigh, NC"),
    ("BUF", "Buffalo, NY"),
    ("ISP", "Islip, NY"),
    ("SYR", "Syracuse, NY"),
    ("PWM", "Portland, ME"),
    ("BTV", "Burlington, VT"),
    ("MDT", "Harrisburg, PA"),
    ("PIT", "Pittsburgh, PA"),
    ("CLE", "Cleveland, OH"),
    ("CVG", "Cincinnati, OH"),
    ("CMH", "Columbus, OH"),
    ("IND", "Indianapolis, IN"),
    ("DTW", "Detroit, MI"),
    ("MSP", "Minneapolis, MN"),
    ("MKE", "Milwaukee, WI"),
    ("GRB", "Green Bay, WI"),
    ("MSN", "Madison, WI"),
    ("GRR", "Grand Rapids, MI"),
    ("ORF", "Norfolk, VA"),
    ("RIC", "Richmond, VA"),
    ("CHS", "Charleston, SC"),
    ("SAV", "Savannah, GA"),
    ("JAX", "Jacksonville, FL"),
    ("PNS", "Pensacola, FL"),
    ("SRQ", "Sarasota, FL"),
    ("FLL", "Fort Lauderdale, FL"),
    ("RSW", "Fort Myers, FL"),
    ("PBI", "West Palm Beach, FL"),
    ("MYR", "Myrtle Beach, SC"),
    ("TTN", "Trenton, NJ"),
    ("EWR", "Newark, NJ"),
    ("HPN", "White Plains, NY"),
    // West coast
    ("SJC", "San Jose, CA"),
    ("OAK", "Oakland, CA"),
    ("SAN", "San Diego, CA"),
    ("SMF", "Sacramento, CA"),
    ("SNA", "Orange County, CA"),
    ("ONT", "Ontario, CA"),
    ("BUR", "Burbank, CA"),
    ("PSP", "Palm Springs, CA"),
    ("PDX", "Portland, OR"),
    ("SLC", "Salt Lake City, UT"),
    ("RNO", "Reno, NV"),
    ("BOI", "Boise, ID"),
    ("MSO", "Missoula, MT"),
    ("GEG", "Spokane, WA"),
    ("FAR", "Fargo, ND"),
    ("FSD", "Sioux Falls, SD"),
    // Central US
    ("AUS", "Austin, TX"),
    ("SAT", "San Antonio, TX"),
    ("IAH", "Houston, TX"),
    ("HOU", "Houston Hobby, TX"),
    ("ELP", "El Paso, TX"),
    ("CRP", "Corpus Christi, TX"),
    ("TUS", "Tucson, AZ"),
    ("OKC", "Oklahoma City, OK"),
    ("TUL", "Tulsa, OK"),
    ("MCI", "Kansas City, MO"),
    ("STL", "St. Louis, MO"),
    ("MSY", "New Orleans, LA"),
    ("MEM", "Memphis, TN"),
    ("BNA", "Nashville, TN"),
    ("TYS", "Knoxville, TN"),
    ("LIT", "Little Rock, AR"),
    ("XNA", "Bentonville, AR"),
    ("DSM", "Des Moines, IA"),
    ("CID", "Cedar Rapids, IA"),
    ("OMA", "Omaha, NE"),
    // International / Caribbean
    ("CUN", "Cancun, Mexico"),
    ("PVR", "Puerto Vallarta, Mexico"),
    ("SJD", "Los Cabos, Mexico"),
    ("SJU", "San Juan, Puerto Rico"),
    ("BQN", "Aguadilla, Puerto Rico"),
    ("PSE", "Ponce, Puerto Rico"),
    ("STX", "St. Croix, USVI"),
    ("STT", "St. Thomas, USVI"),
    ("SXM", "St. Maarten"),
    ("ANU", "Antigua"),
    ("NAS", "Nassau, Bahamas"),
    ("MBJ", "Montego Bay, Jamaica"),
    ("KIN", "Kingston, Jamaica"),
    ("PUJ", "Punta Cana, DR"),
    ("SDQ", "Santo Domingo, DR"),
    ("STI", "Santiago, DR"),
    ("POP", "Puerto Plata, DR"),
    ("SAL", "San Salvador, El Salvador"),
    ("GUA", "Guatemala City"),
    ("SJO", "San Jose, Costa Rica"),
    ("SAP", "San Pedro Sula, Honduras"),
    ("BGI", "Bridgetown, Barbados"),
    ("POS", "Port of Spain, Trinidad"),
    ("AUA", "Aruba"),
    ("PLS", "Providenciales, Turks & Caicos"),
];

/// Looks up the display name for an airport code.
///
/// Returns `None` for codes outside the reference table — callers fall back
/// to showing the code itself. Membership here says nothing about whether a
/// route actually exists.
#[must_use]
pub fn airport_name(code: &str) -> Option<&'static str> {
    AIRPORT_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Display name with the code itself as fallback for unknown stations.
#[must_use]
pub fn display_name(code: &str) -> &str {
    airport_name(code).unwrap_or(code)
}

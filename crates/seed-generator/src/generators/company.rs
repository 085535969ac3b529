//! Company name and address generators.
//!
//! Values are assembled from fixed word pools, so they read like real
//! business data without any external data source.

use super::pick;
use rand::Rng;

const NAME_LEADS: &[&str] = &[
    "Acme", "Apex", "Albion", "Beacon", "Birch", "Bright", "Cobalt", "Crown", "Delta", "Ember",
    "Everest", "Falcon", "Granite", "Harbour", "Horizon", "Iron", "Juniper", "Keystone",
    "Lighthouse", "Maple", "Meridian", "Northgate", "Oak", "Orchid", "Pinnacle", "Quartz",
    "Redwood", "Riverside", "Sterling", "Summit", "Thames", "Union", "Vanguard", "Willow",
    "Windsor", "Zenith",
];

const NAME_TRADES: &[&str] = &[
    "Analytics", "Bakery", "Builders", "Capital", "Consulting", "Dynamics", "Energy",
    "Engineering", "Foods", "Freight", "Group", "Health", "Industries", "Interiors", "Labs",
    "Logistics", "Media", "Motors", "Partners", "Pharma", "Properties", "Retail", "Software",
    "Solutions", "Systems", "Technologies", "Textiles", "Trading", "Travel", "Ventures",
];

const NAME_SUFFIXES: &[&str] = &["Ltd", "Limited", "PLC", "LLP", "Holdings", "& Co", "Inc"];

const STREET_NAMES: &[&str] = &[
    "Abbey", "Bridge", "Castle", "Chapel", "Church", "Elm", "Green", "Grove", "High", "King",
    "Manor", "Market", "Mill", "New", "North", "Park", "Queen", "School", "Station", "Victoria",
    "Water", "West", "Windmill", "York",
];

const STREET_KINDS: &[&str] = &[
    "Street", "Road", "Lane", "Avenue", "Close", "Drive", "Way", "Gardens", "Terrace", "Place",
];

const CITIES: &[&str] = &[
    "London", "Manchester", "Birmingham", "Leeds", "Glasgow", "Liverpool", "Bristol", "Sheffield",
    "Edinburgh", "Cardiff", "Leicester", "Nottingham", "Newcastle", "Belfast", "Brighton",
    "Southampton", "Portsmouth", "Aberdeen", "Cambridge", "Oxford", "York", "Bath", "Exeter",
    "Norwich", "Swansea", "Dundee", "Plymouth", "Reading", "Derby", "Coventry",
];

const REGIONS: &[&str] = &[
    "Greater London", "Greater Manchester", "West Midlands", "West Yorkshire", "South Yorkshire",
    "Merseyside", "Tyne and Wear", "Kent", "Essex", "Surrey", "Hampshire", "Devon", "Norfolk",
    "Lancashire", "Cheshire", "Lothian", "Strathclyde", "Glamorgan", "Antrim", "Oxfordshire",
];

const COUNTRIES: &[&str] = &[
    "United Kingdom", "Ireland", "France", "Germany", "Netherlands", "Belgium", "Spain",
    "Portugal", "Italy", "Sweden", "Norway", "Denmark", "Poland", "Switzerland", "Austria",
    "United States", "Canada", "Australia", "New Zealand", "Japan",
];

/// Generate a company name such as "Harbour Logistics Ltd".
pub fn generate_company_name<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        pick(rng, NAME_LEADS),
        pick(rng, NAME_TRADES),
        pick(rng, NAME_SUFFIXES)
    )
}

/// Generate a street line such as "27 Mill Lane".
pub fn generate_street<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        rng.random_range(1..=999u32),
        pick(rng, STREET_NAMES),
        pick(rng, STREET_KINDS)
    )
}

/// Generate a second address line: a street followed by an apartment number.
pub fn generate_secondary_address<R: Rng>(rng: &mut R) -> String {
    let street = generate_street(rng);
    format!("{street} Apt {}", rng.random_range(1..=99u32))
}

pub fn generate_city<R: Rng>(rng: &mut R) -> String {
    pick(rng, CITIES).to_string()
}

pub fn generate_region<R: Rng>(rng: &mut R) -> String {
    pick(rng, REGIONS).to_string()
}

pub fn generate_country<R: Rng>(rng: &mut R) -> String {
    pick(rng, COUNTRIES).to_string()
}

/// Generate a five digit postal code.
pub fn generate_postal_code<R: Rng>(rng: &mut R) -> String {
    format!("{:05}", rng.random_range(0..100_000u32))
}

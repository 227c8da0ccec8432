//! Fixed catalogs the generator samples from.

pub const LOCATIONS: [&str; 10] = [
    "Downtown, Main Street",
    "Riverside Park",
    "North Mall, 2nd Floor",
    "Oak Avenue, Housing Complex",
    "Central Station",
    "West End, Apartment 3B",
    "Harbor District",
    "University Campus, Building C",
    "Industrial Zone, Warehouse 7",
    "Hillside Neighborhood",
];

/// Optional sentences appended to a case description, in order.
pub const DESCRIPTION_CLAUSES: [&str; 4] = [
    "Witnesses reported suspicious activity in the area. ",
    "Local authorities are investigating. ",
    "The public is advised to remain vigilant. ",
    "Anyone with information is encouraged to contact the authorities. ",
];

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const DEFAULT_CASE_COUNT: usize = 30;

/// Cases are dated between today and this many days ago (exclusive).
pub const RECENT_DAYS: i64 = 30;

/// Length of the generated case id.
pub const ID_LENGTH: usize = 8;

pub const TREND_MONTHS: usize = 6;
pub const TREND_MIN: u32 = 20;
/// Exclusive upper bound of a monthly trend value.
pub const TREND_MAX: u32 = 70;

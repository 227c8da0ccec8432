use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::debug;

use crate::data::catalog::{DESCRIPTION_CLAUSES, ID_LENGTH, LOCATIONS, RECENT_DAYS};
use crate::data::models::CaseRecord;
use crate::{CaseStatus, Category};

/// Generates `count` synthetic cases dated within the last 30 days of `now`,
/// newest first.
///
/// Every field is sampled independently per record, including the location
/// mentioned in the title, which may differ from the record's `location`.
/// Ids are not checked for collisions.
pub fn generate<R: Rng + ?Sized>(count: usize, now: DateTime<Utc>, rng: &mut R) -> Vec<CaseRecord> {
    let mut cases: Vec<CaseRecord> = (0..count).map(|_| generate_case(now, rng)).collect();

    cases.sort_by(|a, b| b.date.cmp(&a.date));

    debug!(count = cases.len(), "generated mock cases");
    cases
}

fn generate_case<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> CaseRecord {
    let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
    let status = CaseStatus::ALL[rng.random_range(0..CaseStatus::ALL.len())];

    let id = generate_id(rng);
    let title = format!("{} Incident in {}", category.label(), pick_location(rng));
    let description = generate_description(category, rng);
    let date = recent_date(now, rng);
    let location = pick_location(rng).to_string();

    CaseRecord {
        id,
        title,
        description,
        date,
        location,
        status,
        category,
    }
}

fn pick_location<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    LOCATIONS[rng.random_range(0..LOCATIONS.len())]
}

fn generate_description<R: Rng + ?Sized>(category: Category, rng: &mut R) -> String {
    let mut description = format!(
        "A {} incident was reported. ",
        category.label().to_lowercase()
    );

    for clause in DESCRIPTION_CLAUSES {
        if rng.random_bool(0.5) {
            description.push_str(clause);
        }
    }

    description
}

fn recent_date<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> DateTime<Utc> {
    let days_ago = rng.random_range(0..RECENT_DAYS);
    now - Duration::days(days_ago)
}

fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    base36_fraction(rng.random::<f64>(), ID_LENGTH)
}

/// Base-36 digits of the fractional part of `value`, stopping early once the
/// expansion terminates.
pub fn base36_fraction(value: f64, max_digits: usize) -> String {
    let mut fraction = value.fract().abs();
    let mut digits = String::with_capacity(max_digits);

    while digits.len() < max_digits && fraction > 0.0 {
        fraction *= 36.0;
        let digit = fraction.floor();
        fraction -= digit;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let digit = (digit as u32).min(35);
        if let Some(ch) = char::from_digit(digit, 36) {
            digits.push(ch);
        }
    }

    digits
}

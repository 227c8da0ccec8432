//! Placement of case markers on the placeholder map.
//!
//! There is no geolocation: a marker's position is a pure function of the
//! case id, so the same case always lands on the same spot.

use crate::data::models::CaseRecord;

/// Marker position as percentages of the map area, each in `[10, 90)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPosition {
    pub left: u8,
    pub top: u8,
}

pub fn id_hash(id: &str) -> i32 {
    id.chars().fold(0_i32, |acc, ch| {
        #[allow(clippy::cast_possible_wrap)]
        let code = u32::from(ch) as i32;
        acc.wrapping_shl(5).wrapping_sub(acc).wrapping_add(code)
    })
}

pub fn marker_position(id: &str) -> MarkerPosition {
    let hash = id_hash(id);

    MarkerPosition {
        left: percent_from(hash),
        top: percent_from(hash >> 8),
    }
}

pub fn case_position(case: &CaseRecord) -> MarkerPosition {
    marker_position(&case.id)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn percent_from(value: i32) -> u8 {
    ((value % 80).unsigned_abs() + 10) as u8
}

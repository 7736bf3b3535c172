//! Weekday sequencing for study schedules.

use chrono::Weekday;

use crate::error::MquestError;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of `day`.
pub fn day_name(day: Weekday) -> &'static str {
    DAY_NAMES[day.num_days_from_monday() as usize]
}

/// Convert a 0 (Monday) ..= 6 (Sunday) index to a weekday.
pub fn weekday_from_index(index: u8) -> Result<Weekday, MquestError> {
    WEEKDAYS
        .get(usize::from(index))
        .copied()
        .ok_or(MquestError::InvalidStartDay(index))
}

/// The seven day names, starting at `first_day` and wrapping past Sunday.
pub fn get_days_of_week(first_day: Weekday) -> Vec<&'static str> {
    std::iter::successors(Some(first_day), |day| Some(day.succ()))
        .take(DAY_NAMES.len())
        .map(day_name)
        .collect()
}

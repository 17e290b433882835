// Date utility functions
// Month grid arithmetic and ISO date strings

use chrono::{Datelike, Duration, NaiveDate, Weekday};

const ISO_DATE: &str = "%Y-%m-%d";

/// Format a date the way events store it (`YYYY-MM-DD`)
pub fn to_iso_string(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Parse the date part of an event date string.
///
/// Accepts `YYYY-MM-DD` and date-times such as `YYYY-MM-DDTHH:MM`; anything
/// else yields `None` and the event is not placed on the grid.
pub fn parse_event_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split('T').next().unwrap_or(value).trim();
    NaiveDate::parse_from_str(date_part, ISO_DATE).ok()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Move by whole months, clamping the day to the target month's length
pub fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let day = current.day().min(days_in_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(current)
}

/// Number of days `weekday` sits after the configured first column
pub fn column_of(weekday: Weekday, first_day_of_week: u8) -> u32 {
    (weekday.num_days_from_sunday() + 7 - u32::from(first_day_of_week % 7)) % 7
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whole weeks covering the month of `date`, including the leading and
/// trailing days of the neighbouring months.
pub fn month_weeks(date: NaiveDate, first_day_of_week: u8) -> Vec<[NaiveDate; 7]> {
    let first = first_of_month(date);
    let last_day = days_in_month(first.year(), first.month());
    let lead = i64::from(column_of(first.weekday(), first_day_of_week));
    let grid_start = first - Duration::days(lead);

    let total_cells = lead + i64::from(last_day);
    let weeks_needed = (total_cells + 6) / 7; // Ceiling division

    (0..weeks_needed)
        .map(|week| {
            let mut days = [grid_start; 7];
            for (offset, day) in days.iter_mut().enumerate() {
                *day = grid_start + Duration::days(week * 7 + offset as i64);
            }
            days
        })
        .collect()
}

pub fn day_names(first_day_of_week: u8) -> Vec<&'static str> {
    let all_days = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    let start = usize::from(first_day_of_week % 7);
    (0..7).map(|i| all_days[(start + i) % 7]).collect()
}

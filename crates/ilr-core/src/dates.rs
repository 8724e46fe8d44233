//! Date interval arithmetic.
//!
//! Boundary treatment differs between rule families, so every interval test
//! takes an explicit [`Boundary`] from its call site.

use chrono::{Datelike, Months, NaiveDate};

/// Whether the ends of an interval belong to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// `lower <= date <= upper`
    Inclusive,
    /// `lower < date < upper`
    Exclusive,
}

/// Test whether `date` lies between `lower` and `upper`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use ilr_core::dates::{Boundary, is_between};
///
/// let lower = NaiveDate::from_ymd_opt(2018, 8, 1).unwrap();
/// let upper = NaiveDate::from_ymd_opt(2019, 8, 1).unwrap();
///
/// assert!(is_between(lower, lower, upper, Boundary::Inclusive));
/// assert!(!is_between(lower, lower, upper, Boundary::Exclusive));
/// ```
pub fn is_between(date: NaiveDate, lower: NaiveDate, upper: NaiveDate, boundary: Boundary) -> bool {
    match boundary {
        Boundary::Inclusive => lower <= date && date <= upper,
        Boundary::Exclusive => lower < date && date < upper,
    }
}

/// Shift a date by whole calendar years.
///
/// Day-of-month is kept where it exists in the target year; 29 February
/// clamps to 28 February. Shifts past the representable range saturate at
/// [`NaiveDate::MIN`] / [`NaiveDate::MAX`].
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    let months = Months::new(years.unsigned_abs().saturating_mul(12));
    if years >= 0 {
        date.checked_add_months(months).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_months(months).unwrap_or(NaiveDate::MIN)
    }
}

/// Number of whole years from `start` to `end`.
///
/// Negative when `end` precedes `start`.
pub fn years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    if end < start {
        return -years_between(end, start);
    }
    let mut years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years
}

/// Age in whole years on a given date.
pub fn age_on(date_of_birth: NaiveDate, date: NaiveDate) -> i32 {
    years_between(date_of_birth, date)
}

/// Signed number of days from `start` to `end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn add_years_keeps_day_of_month() {
        assert_eq!(add_years(date(2018, 8, 1), 1), date(2019, 8, 1));
        assert_eq!(add_years(date(2018, 8, 1), -10), date(2008, 8, 1));
    }

    #[test]
    fn add_years_clamps_leap_day() {
        assert_eq!(add_years(date(2020, 2, 29), 1), date(2021, 2, 28));
        assert_eq!(add_years(date(2020, 2, 29), 4), date(2024, 2, 29));
        assert_eq!(add_years(date(2020, 2, 29), -1), date(2019, 2, 28));
    }

    #[test]
    fn add_years_saturates() {
        assert_eq!(add_years(date(2020, 1, 1), i32::MAX), NaiveDate::MAX);
        assert_eq!(add_years(date(2020, 1, 1), i32::MIN), NaiveDate::MIN);
    }

    #[test]
    fn years_between_counts_whole_years() {
        assert_eq!(years_between(date(2000, 9, 1), date(2016, 8, 31)), 15);
        assert_eq!(years_between(date(2000, 9, 1), date(2016, 9, 1)), 16);
        assert_eq!(years_between(date(2016, 9, 1), date(2000, 9, 1)), -16);
    }

    #[test]
    fn leap_day_birthday_arrives_on_first_of_march() {
        let dob = date(2000, 2, 29);
        assert_eq!(age_on(dob, date(2016, 2, 28)), 15);
        assert_eq!(age_on(dob, date(2016, 2, 29)), 16);
        assert_eq!(age_on(dob, date(2017, 2, 28)), 16);
        assert_eq!(age_on(dob, date(2015, 3, 1)), 15);
    }

    #[test]
    fn days_between_is_signed() {
        assert_eq!(days_between(date(2018, 8, 1), date(2018, 8, 31)), 30);
        assert_eq!(days_between(date(2018, 8, 31), date(2018, 8, 1)), -30);
    }
}

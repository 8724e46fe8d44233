//! Academic-year calendar.
//!
//! An academic year runs from 1 August to 31 July of the following year and
//! is identified by the calendar year in which it starts.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::dates::{Boundary, is_between};
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AcademicYear {
    start_year: i32,
    start: NaiveDate,
    end: NaiveDate,
    january_first: NaiveDate,
}

impl AcademicYear {
    /// The academic year starting on 1 August of `start_year`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidAcademicYear`] when either end of the year
    /// falls outside the representable date range.
    pub fn starting_in(start_year: i32) -> Result<Self, CoreError> {
        let end_year = start_year
            .checked_add(1)
            .ok_or(CoreError::InvalidAcademicYear(start_year))?;
        let start = NaiveDate::from_ymd_opt(start_year, 8, 1)
            .ok_or(CoreError::InvalidAcademicYear(start_year))?;
        let end = NaiveDate::from_ymd_opt(end_year, 7, 31)
            .ok_or(CoreError::InvalidAcademicYear(start_year))?;
        let january_first = NaiveDate::from_ymd_opt(end_year, 1, 1)
            .ok_or(CoreError::InvalidAcademicYear(start_year))?;

        Ok(Self {
            start_year,
            start,
            end,
            january_first,
        })
    }

    /// The academic year a date falls in.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        let start_year = if date.month() >= 8 {
            date.year()
        } else {
            date.year() - 1
        };
        Self::starting_in(start_year).ok()
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// 1 August.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// 31 July.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// 31 August, the reference date for age-in-year calculations.
    pub fn august_thirty_first(&self) -> NaiveDate {
        self.start + Days::new(30)
    }

    pub fn january_first(&self) -> NaiveDate {
        self.january_first
    }

    /// Last Friday in June, the end of the summer term.
    pub fn last_friday_in_june(&self) -> NaiveDate {
        let june_thirtieth = self.end - Days::new(31);
        let from_friday = (june_thirtieth.weekday().num_days_from_monday() + 7
            - Weekday::Fri.num_days_from_monday())
            % 7;
        june_thirtieth - Days::new(u64::from(from_friday))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        is_between(date, self.start, self.end, Boundary::Inclusive)
    }

    pub fn previous(&self) -> Option<Self> {
        Self::starting_in(self.start_year.checked_sub(1)?).ok()
    }

    pub fn next(&self) -> Option<Self> {
        Self::starting_in(self.start_year.checked_add(1)?).ok()
    }
}

impl TryFrom<i32> for AcademicYear {
    type Error = CoreError;

    fn try_from(start_year: i32) -> Result<Self, Self::Error> {
        Self::starting_in(start_year)
    }
}

impl From<AcademicYear> for i32 {
    fn from(year: AcademicYear) -> Self {
        year.start_year
    }
}

impl fmt::Display for AcademicYear {
    /// Two-digit form used in funding documentation, e.g. `1819`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}",
            self.start_year.rem_euclid(100),
            (self.start_year + 1).rem_euclid(100)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn boundaries_of_the_year() {
        let year = AcademicYear::starting_in(2018).unwrap();
        assert_eq!(year.start(), date(2018, 8, 1));
        assert_eq!(year.end(), date(2019, 7, 31));
        assert_eq!(year.august_thirty_first(), date(2018, 8, 31));
        assert_eq!(year.january_first(), date(2019, 1, 1));
    }

    #[test]
    fn containing_splits_on_first_of_august() {
        assert_eq!(
            AcademicYear::containing(date(2019, 7, 31)).unwrap().start_year(),
            2018
        );
        assert_eq!(
            AcademicYear::containing(date(2019, 8, 1)).unwrap().start_year(),
            2019
        );
    }

    #[test]
    fn last_friday_in_june() {
        // 28 June 2019 and 26 June 2020 were Fridays; 30 June 2017 was a Friday.
        assert_eq!(
            AcademicYear::starting_in(2018).unwrap().last_friday_in_june(),
            date(2019, 6, 28)
        );
        assert_eq!(
            AcademicYear::starting_in(2019).unwrap().last_friday_in_june(),
            date(2020, 6, 26)
        );
        assert_eq!(
            AcademicYear::starting_in(2016).unwrap().last_friday_in_june(),
            date(2017, 6, 30)
        );
    }

    #[test]
    fn displays_two_digit_years() {
        assert_eq!(AcademicYear::starting_in(2018).unwrap().to_string(), "1819");
        assert_eq!(AcademicYear::starting_in(1999).unwrap().to_string(), "9900");
    }

    #[test]
    fn deserializes_from_start_year() {
        let year: AcademicYear = serde_json::from_str("2018").unwrap();
        assert_eq!(year.start(), date(2018, 8, 1));
        assert_eq!(serde_json::to_string(&year).unwrap(), "2018");
    }
}

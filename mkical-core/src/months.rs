//! Monthly date sequence generation.
//!
//! A [`MonthSequence`] walks forward one calendar month at a time from a
//! starting [`YearMonth`], always landing on the same [`DayOfMonth`]. Because
//! the day is restricted to `1..=28` every produced date is valid.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::{MkicalError, MkicalResult};
use crate::params::{DayOfMonth, MonthCount};

/// A calendar month with year context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`MkicalError::InvalidStartMonth`] if `month` is not in
    /// `1..=12`, or [`MkicalError::DateOutOfRange`] if the year is outside
    /// the range chrono can represent.
    pub fn new(year: i32, month: u32) -> MkicalResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(MkicalError::InvalidStartMonth(format!("{year:04}-{month:02}")));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(MkicalError::DateOutOfRange(format!(
                "year {year} is not representable"
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the following month, rolling December over to January of the
    /// next year.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns the month `n` months after this one, or `None` if the result
    /// falls outside chrono's representable range.
    pub fn plus_months(self, n: usize) -> Option<Self> {
        let index = i64::from(self.year) * 12 + i64::from(self.month - 1);
        let target = index.checked_add(i64::try_from(n).ok()?)?;
        let year = i32::try_from(target.div_euclid(12)).ok()?;
        let month = u32::try_from(target.rem_euclid(12)).ok()? + 1;
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    /// The date on `day` within this month.
    pub fn with_day(self, day: DayOfMonth) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day.get())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = MkicalError;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MkicalError::InvalidStartMonth(s.to_string());

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        YearMonth::new(year, month).map_err(|e| match e {
            MkicalError::InvalidStartMonth(_) => invalid(),
            other => other,
        })
    }
}

/// Iterator over `count` dates, one calendar month apart, all on the same
/// day of month.
///
/// # Example
///
/// ```
/// use mkical_core::{DayOfMonth, MonthCount, MonthSequence, YearMonth};
///
/// let start = YearMonth::new(2024, 11).unwrap();
/// let day = DayOfMonth::new(15).unwrap();
/// let dates: Vec<_> = MonthSequence::new(start, day, MonthCount::new(3).unwrap())
///     .unwrap()
///     .map(|d| d.to_string())
///     .collect();
/// assert_eq!(dates, ["2024-11-15", "2024-12-15", "2025-01-15"]);
/// ```
#[derive(Debug, Clone)]
pub struct MonthSequence {
    cursor: YearMonth,
    day: DayOfMonth,
    remaining: usize,
}

impl MonthSequence {
    /// Creates a sequence starting at `day` of `start`.
    ///
    /// # Errors
    ///
    /// Returns [`MkicalError::DateOutOfRange`] if the last date of the
    /// sequence cannot be represented.
    pub fn new(start: YearMonth, day: DayOfMonth, count: MonthCount) -> MkicalResult<Self> {
        let count = count.get();
        if count > 0 {
            start
                .plus_months(count - 1)
                .and_then(|last| last.with_day(day))
                .ok_or_else(|| {
                    MkicalError::DateOutOfRange(format!(
                        "{count} months starting {start} run past the supported calendar range"
                    ))
                })?;
        }

        Ok(Self {
            cursor: start,
            day,
            remaining: count,
        })
    }

    pub fn day(&self) -> DayOfMonth {
        self.day
    }
}

impl Iterator for MonthSequence {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        let date = self.cursor.with_day(self.day)?;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.cursor = self.cursor.next();
        }
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for MonthSequence {}

impl FusedIterator for MonthSequence {}

//! Validated generation parameters.
//!
//! Range checks live here so that the date sequence generator can assume
//! every day of month it receives exists in every month, February included.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::error::{MkicalError, MkicalResult};

/// Largest day of month that exists in every month.
pub const MAX_DAY_OF_MONTH: u32 = 28;

/// Largest number of monthly events a single calendar may contain.
pub const MAX_MONTHS: usize = 500;

/// A day of month in `1..=28`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfMonth(u32);

impl DayOfMonth {
    pub fn new(day: u32) -> MkicalResult<Self> {
        if (1..=MAX_DAY_OF_MONTH).contains(&day) {
            Ok(Self(day))
        } else {
            Err(MkicalError::InvalidDayOfMonth(day.into()))
        }
    }

    /// Resolve a user-supplied day of month.
    ///
    /// `0` means "today's day of month". Today's day is clamped to 28 when
    /// the run happens on the 29th, 30th or 31st.
    pub fn resolve(requested: i64, today: NaiveDate) -> MkicalResult<Self> {
        match requested {
            0 => {
                let day = today.day();
                if day > MAX_DAY_OF_MONTH {
                    warn!(
                        today = %today,
                        "day of month {day} does not exist in every month, using {MAX_DAY_OF_MONTH}"
                    );
                }
                Ok(Self(day.min(MAX_DAY_OF_MONTH)))
            }
            1..=28 => Ok(Self(requested as u32)),
            _ => Err(MkicalError::InvalidDayOfMonth(requested)),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of monthly events to generate, in `0..=500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCount(usize);

impl MonthCount {
    pub fn new(months: i64) -> MkicalResult<Self> {
        match usize::try_from(months) {
            Ok(n) if n <= MAX_MONTHS => Ok(Self(n)),
            _ => Err(MkicalError::InvalidMonthCount(months)),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_of_month_bounds() {
        assert!(DayOfMonth::new(0).is_err());
        assert_eq!(DayOfMonth::new(1).unwrap().get(), 1);
        assert_eq!(DayOfMonth::new(28).unwrap().get(), 28);
        assert!(matches!(
            DayOfMonth::new(29),
            Err(MkicalError::InvalidDayOfMonth(29))
        ));
    }

    #[test]
    fn test_resolve_explicit_day_ignores_today() {
        let day = DayOfMonth::resolve(15, date(2024, 2, 3)).unwrap();
        assert_eq!(day.get(), 15);
    }

    #[test]
    fn test_resolve_zero_uses_today() {
        let day = DayOfMonth::resolve(0, date(2024, 11, 7)).unwrap();
        assert_eq!(day.get(), 7);
    }

    #[test]
    fn test_resolve_zero_clamps_late_days() {
        assert_eq!(DayOfMonth::resolve(0, date(2024, 1, 31)).unwrap().get(), 28);
        assert_eq!(DayOfMonth::resolve(0, date(2024, 2, 29)).unwrap().get(), 28);
        assert_eq!(DayOfMonth::resolve(0, date(2024, 4, 28)).unwrap().get(), 28);
    }

    #[test]
    fn test_resolve_rejects_out_of_range() {
        let today = date(2024, 6, 1);
        assert!(matches!(
            DayOfMonth::resolve(29, today),
            Err(MkicalError::InvalidDayOfMonth(29))
        ));
        assert!(matches!(
            DayOfMonth::resolve(-1, today),
            Err(MkicalError::InvalidDayOfMonth(-1))
        ));
    }

    #[test]
    fn test_month_count_bounds() {
        assert!(MonthCount::new(0).unwrap().is_empty());
        assert_eq!(MonthCount::new(500).unwrap().get(), 500);
        assert!(matches!(
            MonthCount::new(501),
            Err(MkicalError::InvalidMonthCount(501))
        ));
        assert!(matches!(
            MonthCount::new(-3),
            Err(MkicalError::InvalidMonthCount(-3))
        ));
    }
}

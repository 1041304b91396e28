//! Calendar arithmetic over whole days.
//!
//! Everything here works on [`ClockDay`], a calendar date that is insensitive
//! to the time of day it was taken from. Week boundaries depend on the first
//! day of the week, which is carried explicitly in a [`Calendar`] value.

pub use self::day::ClockDay;
pub use self::distance::{days_between, full_months_between, full_years_between};
pub use self::weekday::{ParseWeekdayError, Weekday};

mod day;
mod distance;
mod recurrence;
mod search;
mod util;
mod weekday;

/// Week-boundary configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    first_day_of_week: Weekday,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(Weekday::Monday)
    }
}

impl Calendar {
    pub fn new(first_day_of_week: Weekday) -> Self {
        Self { first_day_of_week }
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }
}

//! Predicates for matching recurring events.
//!
//! The month-based predicates compare days of the month directly. They are
//! unreliable for days after the 28th (after the 14th for semimonthly), since
//! months differ in length, and quarterly or semiannual events on the 29th to
//! 31st can never land in February.

use super::{days_between, Calendar, ClockDay};

impl ClockDay {
    pub fn same_day(self, other: Self) -> bool {
        self == other
    }

    pub fn same_day_of_week(self, other: Self) -> bool {
        self.day_of_week() == other.day_of_week()
    }

    /// Same year and month.
    pub fn same_month(self, other: Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    pub fn same_year(self, other: Self) -> bool {
        self.year() == other.year()
    }

    /// Same month and day of month, in any year.
    pub fn same_day_of_year(self, other: Self) -> bool {
        self.month() == other.month() && self.day_of_month() == other.day_of_month()
    }

    pub fn same_day_of_month(self, other: Self) -> bool {
        self.day_of_month() == other.day_of_month()
    }

    /// Same weekday, and a whole number of fortnights apart.
    pub fn coincides_biweekly(self, other: Self) -> bool {
        self.same_day_of_week(other) && days_between(self, other) % 14 == 0
    }

    pub fn coincides_semimonthly(self, other: Self) -> bool {
        self.day_of_month() % 15 == other.day_of_month() % 15
    }

    pub fn coincides_bimonthly(self, other: Self) -> bool {
        self.coincides_every_n_months(other, 2)
    }

    pub fn coincides_quarterly(self, other: Self) -> bool {
        self.coincides_every_n_months(other, 3)
    }

    pub fn coincides_semiannually(self, other: Self) -> bool {
        self.coincides_every_n_months(other, 6)
    }

    fn coincides_every_n_months(self, other: Self, n: u32) -> bool {
        self.same_day_of_month(other) && self.month() % n == other.month() % n
    }
}

impl Calendar {
    pub fn same_week(&self, a: ClockDay, b: ClockDay) -> bool {
        self.start_of_week(a) == self.start_of_week(b)
    }
}

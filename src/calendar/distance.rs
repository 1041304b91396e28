use super::{util, Calendar, ClockDay};

/// Signed number of calendar days from `start` to `end`.
pub fn days_between(start: ClockDay, end: ClockDay) -> i64 {
    (end.date() - start.date()).num_days()
}

/// Number of months between `start` and `end`, not including the month of
/// `start` or the month of `end`.
pub fn full_months_between(start: ClockDay, end: ClockDay) -> i64 {
    let after_start = util::month_number(start.year(), start.month()) + 1;
    util::month_number(end.year(), end.month()) - after_start
}

/// Number of years between `start` and `end`, not including the year of
/// `start` or the year of `end`.
///
/// This only looks at the years and ignores whether the anniversary of
/// `start` has passed in the year of `end`.
pub fn full_years_between(start: ClockDay, end: ClockDay) -> i64 {
    i64::from(end.year()) - i64::from(start.year()) - 1
}

impl Calendar {
    /// Number of weeks between `start` and `end`, not including the week of
    /// `start` or the week of `end`.
    pub fn full_weeks_between(&self, start: ClockDay, end: ClockDay) -> i64 {
        let after_start = self.start_of_week(start).add_days(7);
        days_between(after_start, self.start_of_week(end)) / 7
    }
}

use super::{Calendar, ClockDay, Weekday};

impl ClockDay {
    pub fn is_a(self, weekday: Weekday) -> bool {
        self.day_of_week() == weekday
    }

    pub fn is_weekend(self) -> bool {
        self.day_of_week().is_weekend()
    }

    pub fn is_weekday(self) -> bool {
        !self.is_weekend()
    }

    /// The nearest day on or after this one that falls on `weekday`.
    ///
    /// If this day already is a `weekday`, it is returned only when
    /// `include_today` is set. Otherwise the result lies a week ahead.
    pub fn next(self, weekday: Weekday, include_today: bool) -> Self {
        let days = match self.day_of_week().until(weekday) {
            0 if !include_today => 7,
            days => days,
        };
        self.add_days(days.into())
    }

    /// Like [`Self::next`], but searching backwards.
    pub fn previous(self, weekday: Weekday, include_today: bool) -> Self {
        let days = match weekday.until(self.day_of_week()) {
            0 if !include_today => 7,
            days => days,
        };
        self.add_days(-i64::from(days))
    }

    /// Whichever of the next Saturday and next Sunday comes first.
    pub fn next_weekend_day(self, include_today: bool) -> Self {
        let saturday = self.next(Weekday::Saturday, include_today);
        let sunday = self.next(Weekday::Sunday, include_today);
        saturday.min(sunday)
    }

    /// The next working day, starting at today or tomorrow. Weekends are
    /// skipped until the following Monday.
    pub fn next_weekday(self, include_today: bool) -> Self {
        let candidate = if include_today { self } else { self.tomorrow() };
        if candidate.is_weekend() {
            candidate.next(Weekday::Monday, false)
        } else {
            candidate
        }
    }
}

impl Calendar {
    /// The first day of the week containing `day`.
    pub fn start_of_week(&self, day: ClockDay) -> ClockDay {
        day.previous(self.first_day_of_week, true)
    }

    /// The day with the given weekday inside the week containing `day`.
    pub fn this(&self, day: ClockDay, weekday: Weekday) -> ClockDay {
        self.start_of_week(day).next(weekday, true)
    }

    /// The seven days of the week containing `day`, in ascending order.
    pub fn week_of(&self, day: ClockDay) -> [ClockDay; 7] {
        let start = self.start_of_week(day);
        std::array::from_fn(|offset| start.add_days(offset as i64))
    }
}

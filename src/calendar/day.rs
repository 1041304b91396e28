use std::fmt;

use chrono::{
    DateTime, Datelike, Days, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Timelike,
    Utc,
};

use super::util;
use super::Weekday;

/// Before this hour, the practical today is still yesterday.
const PRACTICAL_DAY_START_HOUR: u32 = 4;

/// How far around noon to look for a valid local time when noon itself falls
/// into a gap.
const NOON_SEARCH_MINUTES: i64 = 3 * 60;

/// A calendar date, independent of the time of day it was taken from.
///
/// Two days compare equal iff they denote the same date in the calendar they
/// were normalized in. The canonical instant of a day is its local noon, see
/// [`ClockDay::noon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockDay(NaiveDate);

impl From<NaiveDate> for ClockDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ClockDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ClockDay {
    /// The local date of `instant` in its own time zone.
    pub fn normalize<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.naive_local().date())
    }

    /// Returns `None` if the date does not exist (e.g. February 30).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The day a calorie log at `now` counts towards. Until 04:00 in the
    /// morning, that is still the previous day.
    pub fn practical_today<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let day = Self::normalize(now);
        if now.hour() < PRACTICAL_DAY_START_HOUR {
            day.yesterday()
        } else {
            day
        }
    }

    /// [`Self::practical_today`] for the current instant in `tz`.
    pub fn today<Tz: TimeZone>(tz: &Tz) -> Self {
        Self::practical_today(&Utc::now().with_timezone(tz))
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// The instant labelled 12:00 on this day in `tz`.
    ///
    /// A repeated noon resolves to the earlier instant. A skipped noon
    /// resolves to the nearest valid local time, searching forwards first.
    pub fn noon<Tz: TimeZone>(self, tz: &Tz) -> DateTime<Tz> {
        let noon = self.0.and_hms_opt(12, 0, 0).expect("noon exists on every date");
        nearest_valid(noon, |local| tz.from_local_datetime(local))
            .unwrap_or_else(|| tz.from_utc_datetime(&noon))
    }

    pub fn day_of_month(self) -> u32 {
        self.0.day()
    }

    /// One-based month.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// One-based day of the year.
    pub fn day_of_year(self) -> u32 {
        self.0.ordinal()
    }

    pub fn day_of_week(self) -> Weekday {
        self.0.weekday().into()
    }

    /// Moves by `days`. Returns `None` if the result lies outside the dates
    /// chrono can represent.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        let step = Days::new(days.unsigned_abs());
        let date = if days < 0 {
            self.0.checked_sub_days(step)
        } else {
            self.0.checked_add_days(step)
        };
        date.map(Self)
    }

    /// Like [`Self::checked_add_days`], for offsets known to stay in range.
    ///
    /// # Panics
    ///
    /// If the result lies outside the dates chrono can represent, roughly
    /// 262000 years before or after year 0. Offsets from user input go
    /// through [`Self::checked_add_days`] instead.
    pub fn add_days(self, days: i64) -> Self {
        self.checked_add_days(days).expect("day within chrono's range")
    }

    /// Moves by whole months, clamping to the last day of the target month.
    /// Returns `None` if the target month lies outside the supported range.
    pub fn add_months(self, months: i32) -> Option<Self> {
        let (year, month) = util::add_months(self.year(), self.month(), months)?;
        let day = self.day_of_month().min(util::month_length(year, month));
        Self::from_ymd(year, month, day)
    }

    /// Moves by whole years. February 29 becomes February 28 in common years.
    pub fn add_years(self, years: i32) -> Option<Self> {
        self.add_months(years.checked_mul(12)?)
    }

    pub fn tomorrow(self) -> Self {
        self.add_days(1)
    }

    pub fn yesterday(self) -> Self {
        self.add_days(-1)
    }

    pub fn first_day_of_month(self) -> Self {
        Self::from_ymd(self.year(), self.month(), 1).expect("every month has a first day")
    }

    pub fn last_day_of_year(self) -> Self {
        Self::from_ymd(self.year(), 12, 31).expect("every year has a december 31")
    }

    /// The given day of this day's month, if it exists.
    pub fn this_day_of_month(self, day: u32) -> Option<Self> {
        Self::from_ymd(self.year(), self.month(), day)
    }

    /// The next date whose day of month is `day`. That is this month's
    /// occurrence unless it already lies in the past (or is today and
    /// `include_self` is false), in which case it is next month's.
    pub fn next_occurrence_of_day_of_month(self, day: u32, include_self: bool) -> Option<Self> {
        if self.day_of_month() > day || (!include_self && self.day_of_month() == day) {
            let (year, month) = util::add_months(self.year(), self.month(), 1)?;
            Self::from_ymd(year, month, day)
        } else {
            self.this_day_of_month(day)
        }
    }

    /// The next date with the same month and day as `date`, in this day's
    /// year or the one after.
    pub fn next_anniversary(self, date: Self, include_self: bool) -> Option<Self> {
        let this_year = Self::from_ymd(self.year(), date.month(), date.day_of_month());
        match this_year {
            Some(day) if self < day || (include_self && self == day) => Some(day),
            Some(_) => Self::from_ymd(self.year() + 1, date.month(), date.day_of_month()),
            // This year's February 29 is missing. Before March it would have
            // been the next occurrence.
            None if self.month() <= 2 => None,
            None => Self::from_ymd(self.year() + 1, date.month(), date.day_of_month()),
        }
    }
}

fn nearest_valid<T>(
    local: NaiveDateTime,
    resolve: impl Fn(&NaiveDateTime) -> LocalResult<T>,
) -> Option<T> {
    let forwards = (0..=NOON_SEARCH_MINUTES).map(|m| local + Duration::minutes(m));
    let backwards = (1..=NOON_SEARCH_MINUTES).map(|m| local - Duration::minutes(m));
    forwards
        .chain(backwards)
        .find_map(|candidate| resolve(&candidate).earliest())
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, LocalResult, NaiveDate, TimeZone, Timelike};

    use super::{nearest_valid, ClockDay};

    fn day(y: i32, m: u32, d: u32) -> ClockDay {
        ClockDay::from_ymd(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
    }

    #[test]
    fn normalize_ignores_time_of_day() {
        let midnight = ClockDay::normalize(&at(2024, 3, 10, 0, 0));
        let late = ClockDay::normalize(&at(2024, 3, 10, 23, 59));
        assert_eq!(midnight, late);
        assert_eq!(midnight, day(2024, 3, 10));
        assert_ne!(late, ClockDay::normalize(&at(2024, 3, 11, 0, 0)));
    }

    #[test]
    fn normalize_is_idempotent() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let once = ClockDay::normalize(&at(2024, 7, 4, 18, 30));
        let twice = ClockDay::normalize(&once.noon(&tz));
        assert_eq!(once, twice);
        assert_eq!(once.noon(&tz).hour(), 12);
    }

    #[test]
    fn invalid_dates_are_absent() {
        assert_eq!(ClockDay::from_ymd(2023, 2, 29), None);
        assert_eq!(ClockDay::from_ymd(2024, 2, 30), None);
        assert_eq!(ClockDay::from_ymd(2024, 13, 1), None);
        assert!(ClockDay::from_ymd(2024, 2, 29).is_some());
    }

    #[test]
    fn practical_today_cuts_off_at_four() {
        assert_eq!(
            ClockDay::practical_today(&at(2024, 3, 1, 3, 59)),
            day(2024, 2, 29)
        );
        assert_eq!(
            ClockDay::practical_today(&at(2024, 3, 1, 4, 0)),
            day(2024, 3, 1)
        );
        assert_eq!(
            ClockDay::practical_today(&at(2025, 1, 1, 0, 30)),
            day(2024, 12, 31)
        );
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        assert_eq!(day(2024, 1, 31).add_months(1), Some(day(2024, 2, 29)));
        assert_eq!(day(2023, 1, 31).add_months(1), Some(day(2023, 2, 28)));
        assert_eq!(day(2024, 3, 31).add_months(-1), Some(day(2024, 2, 29)));
        assert_eq!(day(2024, 11, 15).add_months(3), Some(day(2025, 2, 15)));
    }

    #[test]
    fn add_years_handles_leap_day() {
        assert_eq!(day(2024, 2, 29).add_years(1), Some(day(2025, 2, 28)));
        assert_eq!(day(2024, 2, 29).add_years(4), Some(day(2028, 2, 29)));
        assert_eq!(day(2024, 6, 1).add_years(-1), Some(day(2023, 6, 1)));
    }

    #[test]
    fn month_and_year_steps_out_of_range_are_absent() {
        let d = day(2024, 3, 1);
        assert_eq!(d.add_years(300_000), None);
        assert_eq!(d.add_years(-300_000), None);
        assert_eq!(d.add_years(i32::MAX), None);
        assert_eq!(d.add_months(i32::MAX), None);
        assert_eq!(d.add_months(i32::MIN), None);
        assert_eq!(d.add_years(200_000).map(ClockDay::year), Some(202_024));
    }

    #[test]
    fn day_steps_out_of_range_are_absent() {
        let d = day(2024, 3, 1);
        assert_eq!(d.checked_add_days(4_000_000_000), None);
        assert_eq!(d.checked_add_days(-4_000_000_000), None);
        assert_eq!(d.checked_add_days(i64::MAX), None);
        assert_eq!(d.checked_add_days(i64::MIN), None);
        assert_eq!(d.checked_add_days(-1), Some(day(2024, 2, 29)));
        assert_eq!(d.checked_add_days(365), Some(day(2025, 3, 1)));
    }

    #[test]
    fn add_days_rolls_over_year() {
        assert_eq!(day(2024, 12, 31).tomorrow(), day(2025, 1, 1));
        assert_eq!(day(2024, 3, 1).yesterday(), day(2024, 2, 29));
        assert_eq!(day(2024, 1, 1).add_days(-366), day(2022, 12, 31));
    }

    #[test]
    fn related_days() {
        assert_eq!(day(2024, 5, 17).first_day_of_month(), day(2024, 5, 1));
        assert_eq!(day(2024, 5, 1).first_day_of_month(), day(2024, 5, 1));
        assert_eq!(day(2024, 5, 17).last_day_of_year(), day(2024, 12, 31));
        assert_eq!(day(2024, 2, 10).this_day_of_month(29), Some(day(2024, 2, 29)));
        assert_eq!(day(2023, 2, 10).this_day_of_month(29), None);
    }

    #[test]
    fn next_occurrence_of_day_of_month() {
        let d = day(2024, 12, 15);
        assert_eq!(d.next_occurrence_of_day_of_month(20, false), Some(day(2024, 12, 20)));
        assert_eq!(d.next_occurrence_of_day_of_month(10, false), Some(day(2025, 1, 10)));
        assert_eq!(d.next_occurrence_of_day_of_month(15, false), Some(day(2025, 1, 15)));
        assert_eq!(d.next_occurrence_of_day_of_month(15, true), Some(d));
        assert_eq!(day(2024, 1, 31).next_occurrence_of_day_of_month(30, true), None);
    }

    #[test]
    fn next_anniversary() {
        let birthday = day(1990, 6, 15);
        assert_eq!(day(2024, 3, 1).next_anniversary(birthday, false), Some(day(2024, 6, 15)));
        assert_eq!(day(2024, 7, 1).next_anniversary(birthday, false), Some(day(2025, 6, 15)));
        assert_eq!(day(2024, 6, 15).next_anniversary(birthday, false), Some(day(2025, 6, 15)));
        assert_eq!(day(2024, 6, 15).next_anniversary(birthday, true), Some(day(2024, 6, 15)));

        let leap = day(2020, 2, 29);
        assert_eq!(day(2023, 1, 1).next_anniversary(leap, false), None);
        assert_eq!(day(2023, 5, 1).next_anniversary(leap, false), Some(day(2024, 2, 29)));
    }

    #[test]
    fn skipped_noon_resolves_forwards() {
        let noon = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        // Local times from 12:00 until 13:00 do not exist.
        let resolved = nearest_valid(noon, |local| {
            if local.hour() == 12 {
                LocalResult::None
            } else {
                LocalResult::Single(*local)
            }
        });
        assert_eq!(resolved.map(|t| (t.hour(), t.minute())), Some((13, 0)));
    }

    #[test]
    fn repeated_noon_resolves_to_earlier_instant() {
        let noon = NaiveDate::from_ymd_opt(2024, 10, 27)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let resolved = nearest_valid(noon, |_| LocalResult::Ambiguous(1, 2));
        assert_eq!(resolved, Some(1));
    }

    #[test]
    fn unresolvable_noon_is_absent() {
        let noon = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(nearest_valid::<()>(noon, |_| LocalResult::None), None);
    }
}

use std::result;
use std::str::FromStr;

use pest::iterators::Pair;
use pest::Parser;

use crate::calendar::ClockDay;
use crate::entry::Entry;

use super::parse::{self, EntryParser, Error, Result, Rule};

fn from_str_via_parse<P, R>(s: &str, rule: Rule, parse: P) -> Result<R>
where
    P: FnOnce(Pair<'_, Rule>) -> Result<R>,
{
    let mut pairs = EntryParser::parse(rule, s)?;
    let p = pairs.next().unwrap();
    assert_eq!(pairs.next(), None);

    parse(p)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliDatum {
    Date(ClockDay),
    Today,
    Yesterday,
    Tomorrow,
}

fn parse_cli_datum(p: Pair<'_, Rule>) -> Result<CliDatum> {
    assert_eq!(p.as_rule(), Rule::cli_datum);
    let p = p.into_inner().next().unwrap();
    Ok(match p.as_rule() {
        Rule::datum => CliDatum::Date(parse::parse_datum(p)?),
        Rule::today => CliDatum::Today,
        Rule::yesterday => CliDatum::Yesterday,
        Rule::tomorrow => CliDatum::Tomorrow,
        _ => unreachable!(),
    })
}

/// A day given on the command line, like `today`, `2024-03-21` or `today-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliDate {
    pub datum: CliDatum,
    /// Offset in days.
    pub delta: i64,
}

impl CliDate {
    /// The day this refers to, or `None` if the delta leaves the range of
    /// representable dates.
    pub fn resolve(self, today: ClockDay) -> Option<ClockDay> {
        let (root, shift) = match self.datum {
            CliDatum::Date(day) => (day, 0),
            CliDatum::Today => (today, 0),
            CliDatum::Yesterday => (today, -1),
            CliDatum::Tomorrow => (today, 1),
        };
        root.checked_add_days(self.delta.checked_add(shift)?)
    }
}

fn parse_delta(p: Pair<'_, Rule>) -> Result<i64> {
    assert_eq!(p.as_rule(), Rule::delta);
    let mut p = p.into_inner();

    let negative = p.next().unwrap().as_str() == "-";
    let amount = i64::from(parse::parse_number(p.next().unwrap())?);

    assert_eq!(p.next(), None);

    Ok(if negative { -amount } else { amount })
}

fn parse_cli_date(p: Pair<'_, Rule>) -> Result<CliDate> {
    assert_eq!(p.as_rule(), Rule::cli_date);
    let mut p = p.into_inner();

    let datum = parse_cli_datum(p.next().unwrap())?;
    let delta = match p.next() {
        Some(p) if p.as_rule() == Rule::delta => parse_delta(p)?,
        _ => 0,
    };

    Ok(CliDate { datum, delta })
}

impl FromStr for CliDate {
    type Err = Error;

    fn from_str(s: &str) -> result::Result<Self, Error> {
        from_str_via_parse(s, Rule::cli_date, parse_cli_date)
    }
}

/// A single entry line, as written in the store file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliEntry(pub Entry);

fn parse_cli_entry(p: Pair<'_, Rule>) -> Result<CliEntry> {
    assert_eq!(p.as_rule(), Rule::cli_entry);
    let p = p.into_inner().next().unwrap();
    Ok(CliEntry(parse::parse_entry(p)?))
}

impl FromStr for CliEntry {
    type Err = Error;

    fn from_str(s: &str) -> result::Result<Self, Error> {
        from_str_via_parse(s, Rule::cli_entry, parse_cli_entry)
    }
}

#[cfg(test)]
mod tests {
    use crate::calendar::ClockDay;

    use super::{CliDate, CliDatum, CliEntry};

    fn day(y: i32, m: u32, d: u32) -> ClockDay {
        ClockDay::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn dates_resolve_relative_to_today() {
        let today = day(2024, 3, 1);
        let resolve = |s: &str| s.parse::<CliDate>().unwrap().resolve(today).unwrap();
        assert_eq!(resolve("today"), today);
        assert_eq!(resolve("yesterday"), day(2024, 2, 29));
        assert_eq!(resolve("tomorrow+1"), day(2024, 3, 3));
        assert_eq!(resolve("today-1"), day(2024, 2, 29));
        assert_eq!(resolve("today +14"), day(2024, 3, 15));
        assert_eq!(resolve("2023-12-31"), day(2023, 12, 31));
        assert_eq!(resolve("2023-12-31+1"), day(2024, 1, 1));
    }

    #[test]
    fn huge_deltas_do_not_resolve() {
        let today = day(2024, 3, 1);
        let resolve = |s: &str| s.parse::<CliDate>().unwrap().resolve(today);
        assert_eq!(resolve("today+4000000000"), None);
        assert_eq!(resolve("yesterday-4000000000"), None);
        assert_eq!(resolve("2024-03-01+4294967295"), None);
        assert_eq!(resolve("tomorrow+99999"), Some(day(2297, 12, 15)));
    }

    #[test]
    fn absolute_dates_parse() {
        let date: CliDate = "2024-02-29".parse().unwrap();
        assert_eq!(date.datum, CliDatum::Date(day(2024, 2, 29)));
        assert_eq!(date.delta, 0);
    }

    #[test]
    fn bad_dates_are_rejected() {
        assert!("2023-02-29".parse::<CliDate>().is_err());
        assert!("someday".parse::<CliDate>().is_err());
        assert!("today-".parse::<CliDate>().is_err());
        assert!("today 1".parse::<CliDate>().is_err());
    }

    #[test]
    fn entry_lines_parse() {
        let CliEntry(entry) = "2024-03-21 goal 250 calories 75\n".parse().unwrap();
        assert_eq!(entry.day, day(2024, 3, 21));
        assert_eq!((entry.goal, entry.calories), (250, 75));
        assert!("2024-03-21 goal 250\n2024-03-22\n".parse::<CliEntry>().is_err());
    }
}

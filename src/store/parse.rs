use std::collections::BTreeMap;
use std::result;

use pest::error::ErrorVariant;
use pest::iterators::Pair;
use pest::{Parser, Span};

use crate::calendar::{ClockDay, Weekday};
use crate::entry::{Entry, DEFAULT_GOAL};

#[derive(pest_derive::Parser)]
#[grammar = "store/grammar.pest"]
pub struct EntryParser;

pub type Error = pest::error::Error<Rule>;
pub type Result<T> = result::Result<T, Error>;

/// The contents of a store file.
#[derive(Debug, Default)]
pub struct File {
    pub timezone: Option<String>,
    pub week_start: Option<Weekday>,
    pub entries: BTreeMap<ClockDay, Entry>,
}

fn error<S: Into<String>>(span: Span<'_>, message: S) -> Error {
    Error::new_from_span(
        ErrorVariant::CustomError {
            message: message.into(),
        },
        span,
    )
}

fn fail<S: Into<String>, T>(span: Span<'_>, message: S) -> Result<T> {
    Err(error(span, message))
}

pub fn parse_number(p: Pair<'_, Rule>) -> Result<u32> {
    assert_eq!(p.as_rule(), Rule::number);
    let span = p.as_span();
    match p.as_str().parse() {
        Ok(n) => Ok(n),
        Err(_) => fail(span, "number too large"),
    }
}

pub fn parse_datum(p: Pair<'_, Rule>) -> Result<ClockDay> {
    assert_eq!(p.as_rule(), Rule::datum);
    let span = p.as_span();
    let mut p = p.into_inner();

    let year = p.next().unwrap().as_str().parse().unwrap();
    let month = p.next().unwrap().as_str().parse().unwrap();
    let day = p.next().unwrap().as_str().parse().unwrap();

    assert_eq!(p.next(), None);

    match ClockDay::from_ymd(year, month, day) {
        Some(day) => Ok(day),
        None => fail(span, "invalid date"),
    }
}

fn parse_timezone(p: Pair<'_, Rule>) -> String {
    assert_eq!(p.as_rule(), Rule::timezone);
    p.into_inner().next().unwrap().as_str().to_string()
}

fn parse_week_start(p: Pair<'_, Rule>) -> Result<Weekday> {
    assert_eq!(p.as_rule(), Rule::week_start);
    let p = p.into_inner().next().unwrap();
    let span = p.as_span();
    p.as_str().parse().map_err(|e| error(span, format!("{e}")))
}

pub fn parse_entry(p: Pair<'_, Rule>) -> Result<Entry> {
    assert_eq!(p.as_rule(), Rule::entry);
    let mut p = p.into_inner();

    let day = parse_datum(p.next().unwrap())?;
    let mut entry = Entry::new(day, DEFAULT_GOAL);

    for p in p {
        match p.as_rule() {
            Rule::goal => entry.goal = parse_number(p.into_inner().next().unwrap())?,
            Rule::calories => entry.calories = parse_number(p.into_inner().next().unwrap())?,
            _ => unreachable!(),
        }
    }

    Ok(entry)
}

fn parse_file(p: Pair<'_, Rule>) -> Result<File> {
    assert_eq!(p.as_rule(), Rule::file);
    let mut file = File::default();

    for p in p.into_inner() {
        let span = p.as_span();
        match p.as_rule() {
            Rule::timezone => {
                if file.timezone.is_some() {
                    return fail(span, "time zone already set");
                }
                file.timezone = Some(parse_timezone(p));
            }
            Rule::week_start => {
                if file.week_start.is_some() {
                    return fail(span, "first day of week already set");
                }
                file.week_start = Some(parse_week_start(p)?);
            }
            Rule::entry => {
                let entry = parse_entry(p)?;
                if file.entries.contains_key(&entry.day) {
                    return fail(span, format!("duplicate entry for {}", entry.day));
                }
                file.entries.insert(entry.day, entry);
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }

    Ok(file)
}

pub fn parse(input: &str) -> Result<File> {
    let mut pairs = EntryParser::parse(Rule::file, input)?;
    let file = pairs.next().unwrap();
    assert_eq!(pairs.next(), None);
    parse_file(file)
}

use std::fmt;

use crate::entry::Entry;

use super::cli::{CliDate, CliDatum};
use super::parse::File;

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} goal {} calories {}",
            self.day, self.goal, self.calories
        )
    }
}

impl fmt::Display for CliDatum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(day) => write!(f, "{day}"),
            Self::Today => write!(f, "today"),
            Self::Yesterday => write!(f, "yesterday"),
            Self::Tomorrow => write!(f, "tomorrow"),
        }
    }
}

impl fmt::Display for CliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.delta {
            0 => write!(f, "{}", self.datum),
            delta if delta > 0 => write!(f, "{}+{delta}", self.datum),
            delta => write!(f, "{}{delta}", self.datum),
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut has_directives = false;
        if let Some(timezone) = &self.timezone {
            writeln!(f, "TIMEZONE {timezone}")?;
            has_directives = true;
        }
        if let Some(week_start) = self.week_start {
            writeln!(f, "WEEKSTART {week_start}")?;
            has_directives = true;
        }

        if has_directives && !self.entries.is_empty() {
            writeln!(f)?;
        }

        for entry in self.entries.values() {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

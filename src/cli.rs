use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use log::info;

use crate::calendar::ClockDay;
use crate::goal;
use crate::store::cli::CliDate;
use crate::store::Entries;

pub use self::error::{Error, Result};

mod edit;
mod error;
mod show;
mod util;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Opt {
    /// File to load
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Overwrite the current date
    #[arg(short, long)]
    date: Option<CliDate>,
    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Shows a day's entry, creating it if necessary
    /// [default]
    #[command(alias = "s")]
    Show { date: Option<CliDate> },
    /// Shows the week containing a day
    #[command(alias = "w")]
    Week { date: Option<CliDate> },
    /// Adds calories to a day's entry
    #[command(alias = "e")]
    Eat {
        calories: u32,
        date: Option<CliDate>,
    },
    /// Sets a day's calories
    SetCalories {
        calories: u32,
        date: Option<CliDate>,
    },
    /// Sets a day's goal
    SetGoal { goal: u32, date: Option<CliDate> },
    /// Prints the goal a new entry for a day would get
    Goal {
        date: Option<CliDate>,
        /// Use this goal instead of the recent average (still rounded)
        #[arg(long = "override")]
        override_goal: Option<u32>,
    },
    /// Edits a day's entry in your editor
    Edit { date: Option<CliDate> },
    /// Deletes a day's entry
    Delete { date: CliDate },
    /// Deletes all entries
    Clear,
    /// Reformats the store file
    Fmt,
}

fn default_file() -> Result<PathBuf> {
    ProjectDirs::from("", "", "fiftycal")
        .map(|dirs| dirs.config_dir().join("entries.fiftycal"))
        .ok_or(Error::NoConfigDir)
}

fn find_today(entries: &Entries) -> Result<ClockDay> {
    let tz = entries.timezone()?;
    Ok(ClockDay::today(&&tz))
}

fn resolve_date(date: CliDate, today: ClockDay) -> Result<ClockDay> {
    date.resolve(today).ok_or(Error::DateOutOfRange(date))
}

fn resolve(date: Option<CliDate>, today: ClockDay) -> Result<ClockDay> {
    match date {
        Some(date) => resolve_date(date, today),
        None => Ok(today),
    }
}

pub fn run() -> Result<()> {
    let opt = Opt::parse();
    let _logger = crate::logging::init(opt.verbose);

    let file = match opt.file {
        Some(file) => file,
        None => default_file()?,
    };
    let mut entries = Entries::load(&file)?;
    let calendar = entries.calendar();

    let today = find_today(&entries)?;
    let today = resolve(opt.date, today)?;
    info!("event=cli_start today={today} file={}", file.display());

    match opt.command.unwrap_or(Command::Show { date: None }) {
        Command::Show { date } => {
            let entry = entries.create(resolve(date, today)?, None);
            show::show_entry(&entry, today);
        }
        Command::Week { date } => {
            let day = resolve(date, today)?;
            show::show_week(&entries, calendar, day, today);
        }
        Command::Eat { calories, date } => {
            let mut entry = entries.create(resolve(date, today)?, None);
            entry.eat(calories);
            entries.update(entry);
            show::show_entry(&entry, today);
        }
        Command::SetCalories { calories, date } => {
            let mut entry = entries.create(resolve(date, today)?, None);
            entry.calories = calories;
            entries.update(entry);
            show::show_entry(&entry, today);
        }
        Command::SetGoal { goal, date } => {
            let mut entry = entries.create(resolve(date, today)?, None);
            entry.goal = goal;
            entries.update(entry);
            show::show_entry(&entry, today);
        }
        Command::Goal {
            date,
            override_goal,
        } => {
            let day = resolve(date, today)?;
            println!("{}", goal::goal_for(&entries, day, override_goal));
        }
        Command::Edit { date } => edit::edit_entry(&mut entries, resolve(date, today)?)?,
        Command::Delete { date } => {
            let day = resolve_date(date, today)?;
            if entries.entry(day, false).is_none() {
                return Err(Error::NoSuchEntry(day));
            }
            if util::confirm(&format!("Delete the entry for {day}?")) {
                entries.delete(day);
            }
        }
        Command::Clear => {
            if util::confirm("Delete all entries?") {
                entries.delete_everything();
            }
        }
        Command::Fmt => entries.mark_dirty(),
    }

    entries.save()?;
    Ok(())
}

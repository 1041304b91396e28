use colored::{ColoredString, Colorize};

use crate::calendar::{Calendar, ClockDay};
use crate::entry::Entry;
use crate::store::{Entries, EntryStore};

fn display_day(day: ClockDay, today: ClockDay) -> ColoredString {
    let text = format!("{:9}  {}", day.day_of_week().full_name(), day);
    if day == today {
        text.bright_cyan().bold()
    } else {
        text.cyan()
    }
}

fn display_remaining(entry: &Entry) -> ColoredString {
    let remaining = entry.remaining();
    if remaining >= 0 {
        format!("{remaining} left").green()
    } else {
        format!("{} over", -remaining).red().bold()
    }
}

pub fn show_entry(entry: &Entry, today: ClockDay) {
    println!("=== {} ===", display_day(entry.day, today));
    println!("{}     {}", "Goal:".bright_black(), entry.goal);
    println!("{} {}", "Calories:".bright_black(), entry.calories);
    println!("{}     {}", "Left:".bright_black(), display_remaining(entry));
}

pub fn show_week(entries: &Entries, calendar: Calendar, day: ClockDay, today: ClockDay) {
    for day in calendar.week_of(day) {
        let line = match entries.lookup(day) {
            Ok(Some(entry)) => format!(
                "{:>5} / {:<5} {}",
                entry.calories,
                entry.goal,
                display_remaining(&entry)
            ),
            _ => format!("{:>5}", "-").bright_black().to_string(),
        };
        println!("{}  {}", display_day(day, today), line);
    }
}

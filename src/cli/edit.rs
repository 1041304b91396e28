use crate::calendar::ClockDay;
use crate::error::eprint_parse_error;
use crate::store::cli::CliEntry;
use crate::store::Entries;

use super::error::Result;
use super::util;

/// Lets the user edit the entry for `day` as a single line of the store file.
/// The day itself may not be changed.
pub fn edit_entry(entries: &mut Entries, day: ClockDay) -> Result<()> {
    let entry = entries.create(day, None);
    let mut text = format!("{entry}\n");

    let edited = loop {
        text = util::edit_with_suffix(&text, ".fiftycal")?;
        match text.parse::<CliEntry>() {
            Ok(CliEntry(edited)) if edited.day == day => break Some(edited),
            Ok(CliEntry(edited)) => {
                eprintln!("The entry must stay on {day}, but was moved to {}", edited.day)
            }
            Err(e) => eprint_parse_error("entry", &text, &e),
        }
        if !matches!(
            promptly::prompt_default("Continue editing?", true),
            Ok(true)
        ) {
            println!("Aborting");
            break None;
        }
    };

    if let Some(edited) = edited {
        entries.update(edited);
    }
    Ok(())
}

//! Persisting entries in a plain text file.

use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::{fs, io, result};

use log::{debug, info};
use tzfile::Tz;

use crate::calendar::{Calendar, ClockDay};
use crate::entry::Entry;
use crate::error::eprint_parse_error;
use crate::goal;

use self::parse::File;

pub mod cli;
mod format;
pub mod parse;

/// Where the core looks up entries.
pub trait EntryStore {
    type Error: std::fmt::Display;

    /// The entry for `day`, if there is one. Never creates entries.
    fn lookup(&self, day: ClockDay) -> result::Result<Option<Entry>, Self::Error>;

    /// All entries, ordered by day.
    fn entries(&self) -> Vec<Entry>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not read {file}: {error}")]
    ReadFile { file: PathBuf, error: io::Error },
    #[error("Could not write {file}: {error}")]
    WriteFile { file: PathBuf, error: io::Error },
    #[error("Could not parse {file}: {error}")]
    Parse {
        file: PathBuf,
        content: String,
        error: Box<parse::Error>,
    },
    #[error("Could not resolve time zone {timezone}: {error}")]
    ResolveTz { timezone: String, error: io::Error },
    #[error("Could not determine local time zone: {error}")]
    LocalTz { error: io::Error },
}

impl Error {
    pub fn eprint(&self) {
        match self {
            Self::Parse {
                file,
                content,
                error,
            } => {
                eprint_parse_error(&file.display().to_string(), content, error);
            }
            _ => eprintln!("{self}"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// All entries of one store file, along with the file's settings.
#[derive(Debug)]
pub struct Entries {
    path: PathBuf,
    file: File,
    dirty: bool,
}

impl Entries {
    /// Loads the store at `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let file = match fs::read_to_string(path) {
            Ok(content) => parse::parse(&content).map_err(|error| Error::Parse {
                file: path.to_path_buf(),
                content,
                error: Box::new(error),
            })?,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                info!("event=store_load status=missing path={}", path.display());
                File::default()
            }
            Err(error) => {
                return Err(Error::ReadFile {
                    file: path.to_path_buf(),
                    error,
                })
            }
        };
        info!(
            "event=store_load status=ok path={} entries={}",
            path.display(),
            file.entries.len()
        );
        Ok(Self {
            path: path.to_path_buf(),
            file,
            dirty: false,
        })
    }

    /// Writes the store back to its file, but only if anything changed.
    pub fn save(&self) -> Result<()> {
        if !self.dirty {
            debug!("event=store_save status=unchanged path={}", self.path.display());
            return Ok(());
        }

        let write_error = |error| Error::WriteFile {
            file: self.path.clone(),
            error,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(&self.path, self.file.to_string()).map_err(write_error)?;
        info!(
            "event=store_save status=ok path={} entries={}",
            self.path.display(),
            self.file.entries.len()
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the file on the next save even if nothing changed.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// The time zone named in the file, or the system's local one.
    pub fn timezone(&self) -> Result<Tz> {
        match &self.file.timezone {
            Some(timezone) => Tz::named(timezone).map_err(|error| Error::ResolveTz {
                timezone: timezone.clone(),
                error,
            }),
            None => Tz::local().map_err(|error| Error::LocalTz { error }),
        }
    }

    pub fn calendar(&self) -> Calendar {
        self.file.week_start.map(Calendar::new).unwrap_or_default()
    }

    /// The entry for `day`. If there is none and `create` is set, a new one is
    /// created with a computed goal.
    pub fn entry(&mut self, day: ClockDay, create: bool) -> Option<Entry> {
        match self.file.entries.get(&day) {
            Some(entry) => Some(*entry),
            None if create => Some(self.create(day, None)),
            None => None,
        }
    }

    /// Creates the entry for `day` with a goal computed from the days before
    /// it, or from `override_goal`. An existing entry is returned unchanged.
    pub fn create(&mut self, day: ClockDay, override_goal: Option<u32>) -> Entry {
        if let Some(entry) = self.file.entries.get(&day) {
            return *entry;
        }

        let entry = Entry::new(day, goal::goal_for(&*self, day, override_goal));
        info!("event=entry_create day={} goal={}", entry.day, entry.goal);
        self.file.entries.insert(day, entry);
        self.dirty = true;
        entry
    }

    /// Overwrites goal and calories of the entry with the same day. Returns
    /// whether there was such an entry.
    pub fn update(&mut self, entry: Entry) -> bool {
        match self.file.entries.get_mut(&entry.day) {
            Some(existing) => {
                if *existing != entry {
                    *existing = entry;
                    self.dirty = true;
                }
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, day: ClockDay) -> Option<Entry> {
        let removed = self.file.entries.remove(&day);
        if removed.is_some() {
            info!("event=entry_delete day={day}");
            self.dirty = true;
        }
        removed
    }

    pub fn delete_everything(&mut self) {
        if !self.file.entries.is_empty() {
            info!(
                "event=entry_delete_all entries={}",
                self.file.entries.len()
            );
            self.file.entries.clear();
            self.dirty = true;
        }
    }

    /// Inserts `entry` as is. Returns false if its day already has an entry.
    pub fn import(&mut self, entry: Entry) -> bool {
        if self.file.entries.contains_key(&entry.day) {
            return false;
        }
        self.file.entries.insert(entry.day, entry);
        self.dirty = true;
        true
    }
}

impl EntryStore for Entries {
    type Error = Infallible;

    fn lookup(&self, day: ClockDay) -> result::Result<Option<Entry>, Infallible> {
        Ok(self.file.entries.get(&day).copied())
    }

    fn entries(&self) -> Vec<Entry> {
        self.file.entries.values().copied().collect()
    }
}

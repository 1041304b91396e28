use std::{io, result};

use crate::calendar::ClockDay;
use crate::store;
use crate::store::cli::CliDate;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Store(#[from] store::Error),
    #[error("Could not determine config dir")]
    NoConfigDir,
    #[error("Date out of range: {0}")]
    DateOutOfRange(CliDate),
    #[error("No entry for {0}")]
    NoSuchEntry(ClockDay),
    #[error("Error editing: {0}")]
    EditingIo(io::Error),
}

impl Error {
    pub fn eprint(&self) {
        match self {
            Self::Store(error) => error.eprint(),
            _ => eprintln!("{self}"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

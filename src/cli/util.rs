use super::error::{Error, Result};

pub fn edit_with_suffix(input: &str, suffix: &str) -> Result<String> {
    let mut builder = edit::Builder::new();
    builder.suffix(suffix);
    edit::edit_with_builder(input, &builder).map_err(Error::EditingIo)
}

/// Asks a yes/no question, defaulting to no.
pub fn confirm(question: &str) -> bool {
    matches!(promptly::prompt_default(question, false), Ok(true))
}

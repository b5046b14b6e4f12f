use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Usage: fix_exceptions <file_path>")]
pub struct UsageError;

/// Takes the arguments after the program name; exactly one file path is accepted.
pub fn file_path<I>(args: I) -> Result<PathBuf, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    match (args.next(), args.next()) {
        (Some(path), None) => Ok(PathBuf::from(path)),
        _ => Err(UsageError),
    }
}

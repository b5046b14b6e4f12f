use core::fmt;

use thiserror::Error;

// Our own error that wraps `anyhow::Error`.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

pub type Result<T> = std::result::Result<T, AppError>;

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// This enables using `?` on anything that converts into `anyhow::Error`.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// A rule whose pattern could not be compiled.
#[derive(Error, Debug)]
#[error("invalid pattern for {construct}: {source}")]
pub struct RuleError {
    pub construct: &'static str,
    #[source]
    pub source: regex::Error,
}

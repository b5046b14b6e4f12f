use serde::{Deserialize, Serialize};

/// The name the configuration file is stored under.
pub const APP_NAME: &str = "fix_exceptions";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Report what would change without writing the file back
    #[serde(default)]
    pub dry_run: bool,
    /// Log how many call sites of each construct were rewritten
    #[serde(default)]
    pub report_rewrites: bool,
}

pub mod document;
pub mod error;
pub mod rewriting;
pub mod state;

use std::path::Path;

use document::Document;
use error::Result;
use rewriting::{named_args::NamedArgsRewriter, rewriter::Rewriter};
use state::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file was rewritten in place.
    Fixed,
    /// The file needs rewriting but `dry_run` kept it untouched.
    WouldFix,
    Unchanged,
}

impl Outcome {
    /// The line printed on stdout once `path` has been processed.
    pub fn status_line(&self, path: &Path) -> String {
        match self {
            Outcome::Fixed => format!("Fixed exceptions in {}", path.display()),
            Outcome::WouldFix => format!("Would fix exceptions in {}", path.display()),
            Outcome::Unchanged => format!("No changes needed in {}", path.display()),
        }
    }
}

/// Rewrites the named-argument calls in the file at `path`.
pub fn fix_file(path: &Path, config: &Config) -> Result<Outcome> {
    let document = Document::load(path)?;
    let rewriter = NamedArgsRewriter::new()?;

    fix_document(&document, &rewriter, config)
}

pub fn fix_document(
    document: &Document,
    rewriter: &dyn Rewriter,
    config: &Config,
) -> Result<Outcome> {
    let rewrite = document.apply(rewriter);

    if config.report_rewrites {
        for hit in &rewrite.hits {
            tracing::info!(
                path = %document.path().display(),
                construct = hit.construct,
                count = hit.count,
                "Rewrote call sites"
            );
        }
        tracing::info!(
            path = %document.path().display(),
            total = rewrite.total(),
            "Finished rewriting"
        );
    }

    if !rewrite.changed {
        return Ok(Outcome::Unchanged);
    }

    if config.dry_run {
        return Ok(Outcome::WouldFix);
    }

    document.persist(&rewrite.text)?;

    Ok(Outcome::Fixed)
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::Result,
    rewriting::rewriter::{Rewrite, Rewriter},
};

/// The full text of one source file.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    content: String,
}

impl Document {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path)?;

        Ok(Self { path, content })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn apply(&self, rewriter: &dyn Rewriter) -> Rewrite {
        rewriter.rewrite(&self.content)
    }

    /// Overwrites the file this document was loaded from.
    pub fn persist(&self, text: &str) -> Result<()> {
        fs::write(&self.path, text)?;

        Ok(())
    }
}

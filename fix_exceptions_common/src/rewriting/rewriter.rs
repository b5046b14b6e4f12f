/// How many call sites of one construct a rewrite touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleHit {
    pub construct: &'static str,
    pub count: usize,
}

/// The result of running a [`Rewriter`] over a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// `true` iff `text` differs from the input.
    pub changed: bool,
    /// Constructs with at least one rewritten call site, in rule order.
    pub hits: Vec<RuleHit>,
}

impl Rewrite {
    pub fn total(&self) -> usize {
        self.hits.iter().map(|hit| hit.count).sum()
    }
}

pub trait Rewriter {
    fn rewrite(&self, input: &str) -> Rewrite;
}

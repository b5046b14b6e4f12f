use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::{
    error::RuleError,
    rewriting::rewriter::{Rewrite, RuleHit, Rewriter},
};

use super::rules::{Construct, CONSTRUCTS};

struct Rule {
    construct: &'static str,
    regex: Regex,
}

/// Rewrites `Name(message: x[, second: y])` calls into `Name(x)`.
pub struct NamedArgsRewriter {
    rules: Vec<Rule>,
}

impl NamedArgsRewriter {
    /// A rewriter covering every entry of [`CONSTRUCTS`].
    pub fn new() -> Result<Self, RuleError> {
        Self::with_constructs(CONSTRUCTS)
    }

    pub fn with_constructs(constructs: &[Construct]) -> Result<Self, RuleError> {
        let rules = constructs
            .iter()
            .map(|construct| {
                Ok(Rule {
                    construct: construct.name,
                    regex: construct.compile()?,
                })
            })
            .collect::<Result<_, RuleError>>()?;

        Ok(Self { rules })
    }
}

impl Rewriter for NamedArgsRewriter {
    fn rewrite(&self, input: &str) -> Rewrite {
        let mut text = input.to_string();
        let mut hits = vec![];

        for rule in &self.rules {
            let mut count = 0;
            let replaced = rule.regex.replace_all(&text, |caps: &Captures| {
                count += 1;
                let message = caps
                    .name("first")
                    .or_else(|| caps.name("only"))
                    .map_or("", |m| m.as_str());
                format!("{}({})", &caps["head"], message)
            });

            if let Cow::Owned(replaced) = replaced {
                text = replaced;
            }

            if count > 0 {
                hits.push(RuleHit {
                    construct: rule.construct,
                    count,
                });
            }
        }

        Rewrite {
            changed: text != input,
            text,
            hits,
        }
    }
}

use regex::Regex;

use crate::error::RuleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where a construct is expected to appear.
pub enum Site {
    /// Only directly after a `throw` keyword.
    Throw,
    /// Anywhere, e.g. as a return value.
    Bare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Construct {
    pub name: &'static str,
    pub site: Site,
    /// Whether a `const` qualifier in front of the call is recognized.
    pub const_qualifier: bool,
    /// A second named argument that follows `message` and is dropped.
    pub secondary: Option<&'static str>,
}

impl Construct {
    const fn thrown(name: &'static str) -> Self {
        Self {
            name,
            site: Site::Throw,
            const_qualifier: false,
            secondary: None,
        }
    }

    const fn bare(name: &'static str) -> Self {
        Self {
            name,
            site: Site::Bare,
            const_qualifier: false,
            secondary: None,
        }
    }

    const fn with_const(mut self) -> Self {
        self.const_qualifier = true;
        self
    }

    const fn dropping(mut self, secondary: &'static str) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// The pattern matching a named-argument call of this construct.
    ///
    /// `head` captures everything up to the opening parenthesis verbatim
    /// (keyword, qualifier and name). The message expression lands in `first`
    /// when a secondary argument follows it and in `only` otherwise. The
    /// secondary alternative comes first so it wins at any given position.
    pub fn pattern(&self) -> String {
        // Bare names may carry Dart's private `_` prefix.
        let (site, private) = match self.site {
            Site::Throw => (r"\bthrow\s+", ""),
            Site::Bare => (r"\b", "_*"),
        };
        let qualifier = if self.const_qualifier {
            r"(?:const\s+)?"
        } else {
            ""
        };
        let only = r"(?P<only>[^)]+?),?\s*";
        let args = match self.secondary {
            Some(secondary) => format!(
                r"(?:(?P<first>[^,]+?)\s*,\s*{}:\s*[^)]+|{only})",
                regex::escape(secondary)
            ),
            None => only.to_string(),
        };

        format!(
            r"(?P<head>{site}{qualifier}{private}{})\(\s*message:\s*{args}\s*\)",
            regex::escape(self.name)
        )
    }

    pub fn compile(&self) -> Result<Regex, RuleError> {
        Regex::new(&self.pattern()).map_err(|source| RuleError {
            construct: self.name,
            source,
        })
    }
}

/// Every construct whose named-argument calls get rewritten.
pub const CONSTRUCTS: &[Construct] = &[
    Construct::thrown("ServerException").dropping("statusCode"),
    Construct::thrown("NetworkException").with_const(),
    Construct::thrown("UnauthorizedException").with_const(),
    Construct::thrown("ValidationException").dropping("errors"),
    Construct::thrown("CacheException"),
    Construct::thrown("AuthenticationException"),
    Construct::bare("ServerFailure"),
    Construct::bare("NetworkFailure").with_const(),
    Construct::bare("UnauthorizedFailure"),
    Construct::bare("ValidationFailure"),
    Construct::bare("CacheFailure").with_const(),
    Construct::bare("AuthenticationFailure"),
];

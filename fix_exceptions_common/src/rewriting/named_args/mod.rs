pub mod named_args_rewriter;
pub mod rules;

pub use named_args_rewriter::NamedArgsRewriter;
pub use rules::{Construct, Site, CONSTRUCTS};

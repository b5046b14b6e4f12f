pub mod named_args;
pub mod rewriter;

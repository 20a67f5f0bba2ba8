//! Command-line parsing engine for multi-level ("git-style") CLIs.
//!
//! This crate matches raw process arguments against an immutable
//! [`CommandModel`] (commands, nested subcommands, named options,
//! positional arguments) and produces a structured invocation:
//!
//! - [`CommandModel`] / [`CommandInfo`] — the declarative command tree,
//!   built once through builder-style constructors.
//! - [`CommandTreeParser`] — the tokenizer plus recursive-descent matcher.
//! - [`ParsedTree`] — the runtime result: a linear chain of matched
//!   commands with parameter bindings and the verbatim remaining
//!   arguments captured after `--`.
//! - [`ParseError`] — fail-fast, position-aware user-input diagnostics.
//! - [`validate_model`] — structural model checks before any parse.
//! - [`CommandRunnable`] / [`run`] — optional per-command validate and
//!   execute behavior.
//!
//! The grammar resolves the usual ambiguities of hand-rolled CLIs:
//! `--name=value` and `-nvalue` inline values, negative numbers (`-5`)
//! kept as plain values, `--` switching to verbatim remaining-arguments
//! mode, user-declared names shadowing the built-in `-h`/`--help` flag,
//! and default-command fallback when the first argument names no
//! top-level command.
//!
//! # Example
//!
//! ```
//! use argtree_core::*;
//!
//! let model = CommandModel::new().with_command(
//!     CommandInfo::new("animal").with_command(
//!         CommandInfo::new("dog")
//!             .with_option(CommandOption::single(Some("n"), Some("name")))
//!             .with_option(CommandOption::flag(Some("a"), Some("alive")))
//!             .with_argument(CommandArgument::optional("age", 0)),
//!     ),
//! );
//! assert!(validate_model(&model).is_empty());
//!
//! let parser = CommandTreeParser::new(&model);
//! let args: Vec<String> = ["animal", "dog", "4", "--name", "Rex", "--alive"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let ParseOutcome::Tree(tree) = parser.parse(&args).unwrap() else {
//!     panic!("expected a tree");
//! };
//!
//! let chain: Vec<&str> = tree.iter().map(|node| node.command.name.as_str()).collect();
//! assert_eq!(chain, vec!["animal", "dog"]);
//!
//! let dog = tree.leaf().unwrap();
//! assert_eq!(dog.value_of("name"), Some("Rex"));
//! assert_eq!(dog.value_of("alive"), Some("true"));
//! assert_eq!(dog.value_of("age"), Some("4"));
//! ```
//!
//! # Crate type
//!
//! This is a **library-only crate** with no binary targets. The model is
//! read-only during parsing and safe to reuse across sequential parse
//! calls; each parse exclusively owns its own result.

mod behavior;
mod error;
mod model;
pub mod parser;
mod tree;
mod validate;

pub use behavior::{CommandBehavior, CommandRunnable, ExecutionContext, ExecutionError, run};
pub use error::ParseError;
pub use model::{
    CommandArgument, CommandContainer, CommandInfo, CommandModel, CommandOption, CommandParameter,
    ParameterKind,
};
pub use parser::{CommandTreeParser, ParseOutcome};
pub use tree::{NodeId, ParsedTree, TreeNode};
pub use validate::{ValidationError, validate_model};

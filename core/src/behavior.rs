//! Per-command validate/execute capability.
//!
//! Each [`CommandInfo`](crate::CommandInfo) carries a [`CommandBehavior`]:
//! either a pure branch that only routes to child commands, or a
//! [`CommandRunnable`] with a validate step and an execute step. [`run`]
//! drives the deepest matched command of a parse result through both steps.

use std::fmt;

use thiserror::Error;

use crate::tree::{ParsedTree, TreeNode};

/// Errors surfaced while running a matched command.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The parse result contains no matched command.
    #[error("no command was matched")]
    NothingMatched,
    /// The matched command only routes to child commands.
    #[error("command '{0}' is not executable")]
    NotRunnable(String),
    /// The command rejected its bound parameters.
    #[error("validation failed: {0}")]
    Validation(String),
    /// The command ran and reported a failure.
    #[error("command failed: {0}")]
    Failed(String),
}

/// Read access to the matched command's bindings during validate/execute.
pub struct ExecutionContext<'t, 'm> {
    tree: &'t ParsedTree<'m>,
    node: &'t TreeNode<'m>,
}

impl<'t, 'm> ExecutionContext<'t, 'm> {
    pub(crate) fn new(tree: &'t ParsedTree<'m>, node: &'t TreeNode<'m>) -> Self {
        Self { tree, node }
    }

    /// Returns the first bound value for the named parameter.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.node.value_of(name)
    }

    /// Returns every bound value for the named parameter, in input order.
    pub fn values_of(&self, name: &str) -> Vec<&str> {
        self.node.values_of(name)
    }

    /// Returns true if the named parameter was supplied at all.
    pub fn is_set(&self, name: &str) -> bool {
        self.node
            .mapped
            .iter()
            .any(|(parameter, _)| parameter.matches_name(name))
    }

    /// Returns the verbatim arguments captured after the `--` sentinel.
    pub fn remaining(&self) -> &[String] {
        self.tree.remaining()
    }
}

/// A command's validate and execute operations.
///
/// `validate` runs first and rejects bad parameter combinations with a
/// message; `execute` produces the process exit code.
pub trait CommandRunnable {
    /// Checks the bound parameters before execution.
    fn validate(&self, _context: &ExecutionContext<'_, '_>) -> Result<(), String> {
        Ok(())
    }

    /// Runs the command and returns its exit code.
    fn execute(&self, context: &ExecutionContext<'_, '_>) -> Result<i32, ExecutionError>;
}

/// Behavior selected for a command in the model.
#[derive(Default)]
pub enum CommandBehavior {
    /// Structural command; only routes to child commands.
    #[default]
    Branch,
    /// Executable command with validate/execute operations.
    Runnable(Box<dyn CommandRunnable>),
}

impl fmt::Debug for CommandBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandBehavior::Branch => f.write_str("Branch"),
            CommandBehavior::Runnable(_) => f.write_str("Runnable"),
        }
    }
}

/// Validates and executes the deepest matched command of a parse result.
///
/// # Examples
///
/// ```
/// use argtree_core::*;
///
/// struct Greet;
///
/// impl CommandRunnable for Greet {
///     fn execute(&self, context: &ExecutionContext<'_, '_>) -> Result<i32, ExecutionError> {
///         assert_eq!(context.value_of("name"), Some("Rex"));
///         Ok(0)
///     }
/// }
///
/// let model = CommandModel::new().with_command(
///     CommandInfo::new("greet")
///         .with_option(CommandOption::single(Some("n"), Some("name")))
///         .with_runnable(Greet),
/// );
///
/// let parser = CommandTreeParser::new(&model);
/// let args: Vec<String> = ["greet", "--name", "Rex"].iter().map(|s| s.to_string()).collect();
/// let ParseOutcome::Tree(tree) = parser.parse(&args).unwrap() else {
///     panic!("expected a tree");
/// };
/// assert_eq!(run(&tree).unwrap(), 0);
/// ```
pub fn run(tree: &ParsedTree<'_>) -> Result<i32, ExecutionError> {
    let leaf = tree.leaf().ok_or(ExecutionError::NothingMatched)?;
    let context = ExecutionContext::new(tree, leaf);
    match leaf.command.behavior() {
        CommandBehavior::Branch => Err(ExecutionError::NotRunnable(leaf.command.name.clone())),
        CommandBehavior::Runnable(runnable) => {
            runnable
                .validate(&context)
                .map_err(ExecutionError::Validation)?;
            runnable.execute(&context)
        }
    }
}

//! Parse error taxonomy.
//!
//! Parsing is fail-fast: the first violated rule aborts the parse with one
//! of these errors and no partial tree is ever produced. Every variant
//! carries the offending token rendered as the user typed it, its index in
//! the original argument list, and the verbatim argument snapshot, so
//! hosts can point diagnostics back into the input.

use thiserror::Error;

use crate::parser::tokenizer::{Token, TokenKind};

/// A user-input error raised while matching arguments against the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An option-shaped token appeared where a command name was expected
    /// and no default command is registered.
    #[error("expected a command, found option '{token}'")]
    UnexpectedOption {
        token: String,
        position: usize,
        arguments: Vec<String>,
    },
    /// A string matches no child command and cannot be a positional
    /// argument here.
    #[error("unknown command '{token}'")]
    UnknownCommand {
        token: String,
        position: usize,
        arguments: Vec<String>,
    },
    /// An option the current command does not declare, and not the help
    /// spelling.
    #[error("unknown option '{token}'")]
    UnknownOption {
        token: String,
        position: usize,
        arguments: Vec<String>,
    },
    /// A positional string with no remaining positional slot to bind to.
    #[error("could not match '{token}' to a positional argument")]
    CouldNotMatchArgument {
        token: String,
        position: usize,
        arguments: Vec<String>,
    },
    /// A flag was given an explicit value.
    #[error("flag '{token}' cannot be assigned a value")]
    CannotAssignValueToFlag {
        token: String,
        position: usize,
        arguments: Vec<String>,
    },
    /// An option that requires a value had neither a value token nor a
    /// declared default.
    #[error("option '{token}' requires a value")]
    OptionHasNoValue {
        token: String,
        position: usize,
        arguments: Vec<String>,
    },
}

impl ParseError {
    pub(crate) fn unexpected_option(arguments: &[String], token: &Token) -> Self {
        ParseError::UnexpectedOption {
            token: rendered(token),
            position: token.position,
            arguments: arguments.to_vec(),
        }
    }

    pub(crate) fn unknown_command(arguments: &[String], token: &Token) -> Self {
        ParseError::UnknownCommand {
            token: rendered(token),
            position: token.position,
            arguments: arguments.to_vec(),
        }
    }

    pub(crate) fn unknown_option(arguments: &[String], token: &Token) -> Self {
        ParseError::UnknownOption {
            token: rendered(token),
            position: token.position,
            arguments: arguments.to_vec(),
        }
    }

    pub(crate) fn could_not_match_argument(arguments: &[String], token: &Token) -> Self {
        ParseError::CouldNotMatchArgument {
            token: rendered(token),
            position: token.position,
            arguments: arguments.to_vec(),
        }
    }

    pub(crate) fn cannot_assign_value_to_flag(arguments: &[String], token: &Token) -> Self {
        ParseError::CannotAssignValueToFlag {
            token: rendered(token),
            position: token.position,
            arguments: arguments.to_vec(),
        }
    }

    pub(crate) fn option_has_no_value(arguments: &[String], token: &Token) -> Self {
        ParseError::OptionHasNoValue {
            token: rendered(token),
            position: token.position,
            arguments: arguments.to_vec(),
        }
    }

    /// The offending token, rendered as the user typed it.
    pub fn token(&self) -> &str {
        match self {
            ParseError::UnexpectedOption { token, .. }
            | ParseError::UnknownCommand { token, .. }
            | ParseError::UnknownOption { token, .. }
            | ParseError::CouldNotMatchArgument { token, .. }
            | ParseError::CannotAssignValueToFlag { token, .. }
            | ParseError::OptionHasNoValue { token, .. } => token,
        }
    }

    /// Index of the offending token in the original argument list.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedOption { position, .. }
            | ParseError::UnknownCommand { position, .. }
            | ParseError::UnknownOption { position, .. }
            | ParseError::CouldNotMatchArgument { position, .. }
            | ParseError::CannotAssignValueToFlag { position, .. }
            | ParseError::OptionHasNoValue { position, .. } => *position,
        }
    }

    /// The verbatim argument list the parse ran against.
    pub fn arguments(&self) -> &[String] {
        match self {
            ParseError::UnexpectedOption { arguments, .. }
            | ParseError::UnknownCommand { arguments, .. }
            | ParseError::UnknownOption { arguments, .. }
            | ParseError::CouldNotMatchArgument { arguments, .. }
            | ParseError::CannotAssignValueToFlag { arguments, .. }
            | ParseError::OptionHasNoValue { arguments, .. } => arguments,
        }
    }
}

/// Renders a token the way the user typed it, dash prefix included.
fn rendered(token: &Token) -> String {
    match token.kind {
        TokenKind::LongOption => format!("--{}", token.value),
        TokenKind::ShortOption => format!("-{}", token.value),
        TokenKind::String | TokenKind::Remaining => token.value.clone(),
    }
}

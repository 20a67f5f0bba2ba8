//! Command model validation.
//!
//! Validates structural invariants of a [`CommandModel`] before it is
//! handed to the parser, catching errors such as empty command names,
//! duplicate sibling commands, duplicate option names in a scope, and
//! misdeclared positional arguments.
//!
//! # Examples
//!
//! ```
//! use argtree_core::*;
//!
//! let model = CommandModel::new().with_command(
//!     CommandInfo::new("dog")
//!         .with_option(CommandOption::flag(Some("a"), Some("alive")))
//!         .with_argument(CommandArgument::required("name", 0)),
//! );
//! assert!(validate_model(&model).is_empty());
//!
//! // Invalid: option name declared with its dash prefix
//! let bad = CommandModel::new().with_command(
//!     CommandInfo::new("dog").with_option(CommandOption::flag(None, Some("--alive"))),
//! );
//! assert!(!validate_model(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{CommandInfo, CommandModel, CommandParameter};

/// Model validation errors.
///
/// Each variant describes a specific structural problem found during
/// validation. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Command name is empty or whitespace-only.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// Two sibling commands share a name.
    #[error("duplicate command in scope: {0}")]
    DuplicateCommand(String),
    /// An option has neither a long nor a short form.
    #[error("option must define a long or short form")]
    MissingOptionName,
    /// An option name was declared with its dash prefix (names are bare).
    #[error("option name '{0}' must not include its dash prefix")]
    DashPrefixedOptionName(String),
    /// Two options in the same command share a name.
    #[error("duplicate option in command '{command}': {name}")]
    DuplicateOption { command: String, name: String },
    /// Two positional arguments in the same command share a position.
    #[error("duplicate argument position {position} in command '{command}'")]
    DuplicateArgumentPosition { command: String, position: usize },
    /// Positional argument positions do not start at zero or have gaps.
    #[error("argument positions in command '{command}' must start at zero and be contiguous")]
    NonContiguousArgumentPositions { command: String },
    /// A required positional argument is declared after an optional one.
    #[error("required argument '{argument}' follows an optional argument in command '{command}'")]
    RequiredArgumentAfterOptional { command: String, argument: String },
}

/// Validates a full command model.
///
/// Checks every top-level command, nested child commands, and the default
/// command if one is registered. Returns the first error found, or an
/// empty list for a valid model.
///
/// # Examples
///
/// ```
/// use argtree_core::*;
///
/// let model = CommandModel::new()
///     .with_command(CommandInfo::new("dog"))
///     .with_command(CommandInfo::new("dog"));
///
/// let errors = validate_model(&model);
/// assert_eq!(errors, vec![ValidationError::DuplicateCommand("dog".to_string())]);
/// ```
pub fn validate_model(model: &CommandModel) -> Vec<ValidationError> {
    let mut errors = validate_siblings(model.commands());
    if !errors.is_empty() {
        return errors;
    }

    if let Some(default) = model.default_command() {
        errors.extend(validate_command(default));
    }

    errors
}

fn validate_siblings(commands: &[CommandInfo]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for command in commands {
        let name = command.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::EmptyCommandName);
            return errors;
        }

        if !seen.insert(name) {
            errors.push(ValidationError::DuplicateCommand(name.to_string()));
            return errors;
        }

        errors.extend(validate_command(command));
        if !errors.is_empty() {
            return errors;
        }
    }

    errors
}

fn validate_command(command: &CommandInfo) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if command.name.trim().is_empty() {
        errors.push(ValidationError::EmptyCommandName);
        return errors;
    }

    errors.extend(validate_options(command));
    if !errors.is_empty() {
        return errors;
    }

    errors.extend(validate_arguments(command));
    if !errors.is_empty() {
        return errors;
    }

    errors.extend(validate_siblings(command.children()));
    errors
}

fn validate_options(command: &CommandInfo) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for parameter in command.parameters() {
        let CommandParameter::Option(option) = parameter else {
            continue;
        };

        if option.short.is_none() && option.long.is_none() {
            errors.push(ValidationError::MissingOptionName);
            return errors;
        }

        for name in [option.short.as_deref(), option.long.as_deref()]
            .into_iter()
            .flatten()
        {
            if name.starts_with('-') {
                errors.push(ValidationError::DashPrefixedOptionName(name.to_string()));
                return errors;
            }
            if !seen.insert(name) {
                errors.push(ValidationError::DuplicateOption {
                    command: command.name.clone(),
                    name: name.to_string(),
                });
                return errors;
            }
        }
    }

    errors
}

fn validate_arguments(command: &CommandInfo) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let arguments: Vec<_> = command
        .parameters()
        .iter()
        .filter_map(|parameter| match parameter {
            CommandParameter::Argument(argument) => Some(argument),
            CommandParameter::Option(_) => None,
        })
        .collect();

    let mut positions: HashSet<usize> = HashSet::new();
    for argument in &arguments {
        if !positions.insert(argument.position) {
            errors.push(ValidationError::DuplicateArgumentPosition {
                command: command.name.clone(),
                position: argument.position,
            });
            return errors;
        }
    }

    if (0..arguments.len()).any(|position| !positions.contains(&position)) {
        errors.push(ValidationError::NonContiguousArgumentPositions {
            command: command.name.clone(),
        });
        return errors;
    }

    let mut by_position = arguments;
    by_position.sort_by_key(|argument| argument.position);
    let mut optional_seen = false;
    for argument in by_position {
        if argument.required && optional_seen {
            errors.push(ValidationError::RequiredArgumentAfterOptional {
                command: command.name.clone(),
                argument: argument.name.clone(),
            });
            return errors;
        }
        if !argument.required {
            optional_seen = true;
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use crate::model::{CommandArgument, CommandOption};

    use super::*;

    #[test]
    fn test_validate_model_accepts_valid_model() {
        let model = CommandModel::new().with_command(
            CommandInfo::new("animal").with_command(
                CommandInfo::new("dog")
                    .with_option(CommandOption::single(Some("n"), Some("name")))
                    .with_argument(CommandArgument::required("breed", 0))
                    .with_argument(CommandArgument::optional("age", 1)),
            ),
        );

        assert!(validate_model(&model).is_empty());
    }

    #[test]
    fn test_validate_model_rejects_duplicate_sibling_commands() {
        let model = CommandModel::new().with_command(
            CommandInfo::new("animal")
                .with_command(CommandInfo::new("dog"))
                .with_command(CommandInfo::new("dog")),
        );

        let errors = validate_model(&model);
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateCommand("dog".to_string())]
        );
    }

    #[test]
    fn test_validate_model_rejects_dash_prefixed_option_name() {
        let model = CommandModel::new().with_command(
            CommandInfo::new("dog").with_option(CommandOption::flag(Some("-a"), None)),
        );

        let errors = validate_model(&model);
        assert_eq!(
            errors,
            vec![ValidationError::DashPrefixedOptionName("-a".to_string())]
        );
    }

    #[test]
    fn test_validate_model_rejects_duplicate_option_names() {
        let model = CommandModel::new().with_command(
            CommandInfo::new("dog")
                .with_option(CommandOption::single(Some("n"), Some("name")))
                .with_option(CommandOption::flag(None, Some("name"))),
        );

        let errors = validate_model(&model);
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateOption {
                command: "dog".to_string(),
                name: "name".to_string(),
            }]
        );
    }

    #[test]
    fn test_validate_model_rejects_argument_position_gap() {
        let model = CommandModel::new().with_command(
            CommandInfo::new("dog")
                .with_argument(CommandArgument::required("breed", 0))
                .with_argument(CommandArgument::required("age", 2)),
        );

        let errors = validate_model(&model);
        assert_eq!(
            errors,
            vec![ValidationError::NonContiguousArgumentPositions {
                command: "dog".to_string(),
            }]
        );
    }

    #[test]
    fn test_validate_model_rejects_required_after_optional() {
        let model = CommandModel::new().with_command(
            CommandInfo::new("dog")
                .with_argument(CommandArgument::optional("breed", 0))
                .with_argument(CommandArgument::required("age", 1)),
        );

        let errors = validate_model(&model);
        assert_eq!(
            errors,
            vec![ValidationError::RequiredArgumentAfterOptional {
                command: "dog".to_string(),
                argument: "age".to_string(),
            }]
        );
    }

    #[test]
    fn test_validate_model_checks_default_command() {
        let model = CommandModel::new().with_default_command(
            CommandInfo::new("run").with_option(CommandOption::single(None, Some("--port"))),
        );

        let errors = validate_model(&model);
        assert_eq!(
            errors,
            vec![ValidationError::DashPrefixedOptionName(
                "--port".to_string()
            )]
        );
    }
}

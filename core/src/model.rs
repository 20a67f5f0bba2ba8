//! Declarative command model definitions.
//!
//! This module defines the read-only command tree that parsing runs
//! against: commands with nested child commands, named options, and
//! positional arguments. The model is built once through the builder-style
//! constructors, treated as immutable, and may be shared across any number
//! of sequential parses. The pure data parts serialize with [`serde`] and
//! round-trip through JSON; runtime behaviors are skipped.

use serde::{Deserialize, Serialize};

use crate::behavior::{CommandBehavior, CommandRunnable};

/// How many value tokens a parameter consumes.
///
/// # Examples
///
/// ```
/// use argtree_core::ParameterKind;
///
/// let kind = ParameterKind::default();
/// assert_eq!(kind, ParameterKind::Single);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ParameterKind {
    /// Exactly one value (the default).
    #[default]
    Single,
    /// Boolean flag; never takes an explicit value token.
    Flag,
    /// One value per occurrence, may occur several times.
    Multiple,
}

/// A named option (`--name value`, `-n value`, `--name=value`, `-nvalue`).
///
/// Option names are stored without their dash prefixes: the long form
/// `"verbose"` matches `--verbose` on the command line, the short form
/// `"v"` matches `-v`.
///
/// # Examples
///
/// ```
/// use argtree_core::{CommandOption, ParameterKind};
///
/// let name = CommandOption::single(Some("n"), Some("name"));
/// assert_eq!(name.kind, ParameterKind::Single);
/// assert!(name.matches("n", false));
/// assert!(name.matches("name", true));
///
/// let alive = CommandOption::flag(Some("a"), Some("alive"));
/// assert_eq!(alive.kind, ParameterKind::Flag);
///
/// let age = CommandOption::single(None, Some("age")).with_default("18");
/// assert_eq!(age.default_value.as_deref(), Some("18"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    /// Short form without the dash (e.g., `"n"` for `-n`).
    pub short: Option<String>,
    /// Long form without the dashes (e.g., `"name"` for `--name`).
    pub long: Option<String>,
    /// How many value tokens this option consumes.
    pub kind: ParameterKind,
    /// Value bound when the option appears with no value token.
    pub default_value: Option<String>,
    /// Description for help rendering.
    pub description: Option<String>,
}

impl CommandOption {
    fn new(short: Option<&str>, long: Option<&str>, kind: ParameterKind) -> Self {
        Self {
            short: short.map(String::from),
            long: long.map(String::from),
            kind,
            default_value: None,
            description: None,
        }
    }

    /// Creates an option that consumes exactly one value.
    pub fn single(short: Option<&str>, long: Option<&str>) -> Self {
        Self::new(short, long, ParameterKind::Single)
    }

    /// Creates a boolean flag.
    ///
    /// Flags bind the literal value `"true"` when present and reject any
    /// explicit value.
    pub fn flag(short: Option<&str>, long: Option<&str>) -> Self {
        Self::new(short, long, ParameterKind::Flag)
    }

    /// Creates an option that may occur several times, one value each.
    pub fn multiple(short: Option<&str>, long: Option<&str>) -> Self {
        Self::new(short, long, ParameterKind::Multiple)
    }

    /// Sets the value bound when the option appears without a value token.
    pub fn with_default(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Returns the canonical name (long form preferred, falls back to short).
    pub fn canonical_name(&self) -> &str {
        self.long
            .as_deref()
            .or(self.short.as_deref())
            .unwrap_or("unknown")
    }

    /// Checks whether a bare option name matches this option's long or
    /// short form.
    pub fn matches(&self, name: &str, long: bool) -> bool {
        if long {
            self.long.as_deref() == Some(name)
        } else {
            self.short.as_deref() == Some(name)
        }
    }
}

/// A positional argument, identified by its declared position.
///
/// # Examples
///
/// ```
/// use argtree_core::CommandArgument;
///
/// let src = CommandArgument::required("source", 0);
/// assert!(src.required);
///
/// let dest = CommandArgument::optional("dest", 1);
/// assert!(!dest.required);
/// assert_eq!(dest.position, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandArgument {
    /// Name of the argument (e.g., "file", "url").
    pub name: String,
    /// Zero-based position among the command's positional arguments.
    pub position: usize,
    /// Whether the argument must be supplied.
    pub required: bool,
    /// Description for help rendering.
    pub description: Option<String>,
}

impl CommandArgument {
    /// Creates a required positional argument.
    pub fn required(name: &str, position: usize) -> Self {
        Self {
            name: name.to_string(),
            position,
            required: true,
            description: None,
        }
    }

    /// Creates an optional positional argument.
    pub fn optional(name: &str, position: usize) -> Self {
        Self {
            name: name.to_string(),
            position,
            required: false,
            description: None,
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }
}

/// A declared parameter of a command: either a named option or a
/// positional argument.
///
/// # Examples
///
/// ```
/// use argtree_core::{CommandArgument, CommandOption, CommandParameter, ParameterKind};
///
/// let option = CommandParameter::from(CommandOption::flag(Some("v"), Some("verbose")));
/// assert_eq!(option.kind(), ParameterKind::Flag);
/// assert_eq!(option.name(), "verbose");
///
/// let argument = CommandParameter::from(CommandArgument::required("file", 0));
/// assert_eq!(argument.kind(), ParameterKind::Single);
/// assert!(argument.matches_name("file"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandParameter {
    /// A named option.
    Option(CommandOption),
    /// A positional argument.
    Argument(CommandArgument),
}

impl CommandParameter {
    /// Returns how many value tokens this parameter consumes.
    ///
    /// Positional arguments always consume exactly one token.
    pub fn kind(&self) -> ParameterKind {
        match self {
            CommandParameter::Option(option) => option.kind,
            CommandParameter::Argument(_) => ParameterKind::Single,
        }
    }

    /// Returns the canonical name of the parameter.
    pub fn name(&self) -> &str {
        match self {
            CommandParameter::Option(option) => option.canonical_name(),
            CommandParameter::Argument(argument) => &argument.name,
        }
    }

    /// Checks whether the parameter answers to the given bare name.
    pub fn matches_name(&self, name: &str) -> bool {
        match self {
            CommandParameter::Option(option) => {
                option.matches(name, true) || option.matches(name, false)
            }
            CommandParameter::Argument(argument) => argument.name == name,
        }
    }

    pub(crate) fn default_value(&self) -> Option<&str> {
        match self {
            CommandParameter::Option(option) => option.default_value.as_deref(),
            CommandParameter::Argument(_) => None,
        }
    }
}

impl From<CommandOption> for CommandParameter {
    fn from(option: CommandOption) -> Self {
        CommandParameter::Option(option)
    }
}

impl From<CommandArgument> for CommandParameter {
    fn from(argument: CommandArgument) -> Self {
        CommandParameter::Argument(argument)
    }
}

/// Name-indexed lookup of child commands.
///
/// Implemented by [`CommandModel`] (root commands) and [`CommandInfo`]
/// (nested child commands) so the parser can descend uniformly.
pub trait CommandContainer {
    /// Finds a direct child command by exact name.
    fn find_command(&self, name: &str) -> Option<&CommandInfo>;
}

/// A node in the command model: one command with its child commands and
/// declared parameters.
///
/// # Examples
///
/// ```
/// use argtree_core::{CommandArgument, CommandInfo, CommandOption};
///
/// let dog = CommandInfo::new("dog")
///     .with_option(CommandOption::single(Some("n"), Some("name")))
///     .with_option(CommandOption::flag(Some("a"), Some("alive")))
///     .with_argument(CommandArgument::optional("age", 0));
///
/// assert_eq!(dog.name, "dog");
/// assert_eq!(dog.parameters().len(), 3);
/// assert!(dog.has_arguments());
/// assert!(dog.find_option("name", true).is_some());
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandInfo {
    /// Name of the command.
    pub name: String,
    /// Short description for help rendering.
    pub description: Option<String>,
    children: Vec<CommandInfo>,
    parameters: Vec<CommandParameter>,
    #[serde(skip)]
    behavior: CommandBehavior,
}

impl CommandInfo {
    /// Creates a new command with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            children: Vec::new(),
            parameters: Vec::new(),
            behavior: CommandBehavior::Branch,
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds a nested child command.
    pub fn with_command(mut self, child: CommandInfo) -> Self {
        self.children.push(child);
        self
    }

    /// Adds a named option.
    pub fn with_option(mut self, option: CommandOption) -> Self {
        self.parameters.push(CommandParameter::Option(option));
        self
    }

    /// Adds a positional argument.
    pub fn with_argument(mut self, argument: CommandArgument) -> Self {
        self.parameters.push(CommandParameter::Argument(argument));
        self
    }

    /// Attaches a validate/execute behavior, making the command runnable.
    pub fn with_runnable(mut self, runnable: impl CommandRunnable + 'static) -> Self {
        self.behavior = CommandBehavior::Runnable(Box::new(runnable));
        self
    }

    /// Returns the behavior selected for this command.
    pub fn behavior(&self) -> &CommandBehavior {
        &self.behavior
    }

    /// Returns the direct child commands, in declaration order.
    pub fn children(&self) -> &[CommandInfo] {
        &self.children
    }

    /// Returns the declared parameters, in declaration order.
    pub fn parameters(&self) -> &[CommandParameter] {
        &self.parameters
    }

    /// Finds a declared option by bare name and form.
    pub fn find_option(&self, name: &str, long: bool) -> Option<&CommandParameter> {
        self.parameters.iter().find(|parameter| match parameter {
            CommandParameter::Option(option) => option.matches(name, long),
            CommandParameter::Argument(_) => false,
        })
    }

    /// Finds the positional argument declared at the given position.
    pub fn find_argument(&self, position: usize) -> Option<&CommandParameter> {
        self.parameters.iter().find(|parameter| match parameter {
            CommandParameter::Argument(argument) => argument.position == position,
            CommandParameter::Option(_) => false,
        })
    }

    /// Returns true if the command declares any positional argument.
    pub fn has_arguments(&self) -> bool {
        self.parameters
            .iter()
            .any(|parameter| matches!(parameter, CommandParameter::Argument(_)))
    }
}

impl CommandContainer for CommandInfo {
    fn find_command(&self, name: &str) -> Option<&CommandInfo> {
        self.children.iter().find(|child| child.name == name)
    }
}

/// The root of the command model: ordered top-level commands and an
/// optional default command.
///
/// The default command receives the whole input when the first argument
/// does not name a top-level command.
///
/// # Examples
///
/// ```
/// use argtree_core::{CommandContainer, CommandInfo, CommandModel};
///
/// let model = CommandModel::new()
///     .with_command(CommandInfo::new("animal").with_command(CommandInfo::new("dog")));
///
/// assert!(model.find_command("animal").is_some());
/// assert!(model.find_command("mineral").is_none());
/// assert!(model.default_command().is_none());
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CommandModel {
    commands: Vec<CommandInfo>,
    default_command: Option<CommandInfo>,
}

impl CommandModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level command.
    pub fn with_command(mut self, command: CommandInfo) -> Self {
        self.commands.push(command);
        self
    }

    /// Registers the default command.
    pub fn with_default_command(mut self, command: CommandInfo) -> Self {
        self.default_command = Some(command);
        self
    }

    /// Returns the top-level commands, in declaration order.
    pub fn commands(&self) -> &[CommandInfo] {
        &self.commands
    }

    /// Returns the default command, if one is registered.
    pub fn default_command(&self) -> Option<&CommandInfo> {
        self.default_command.as_ref()
    }
}

impl CommandContainer for CommandModel {
    fn find_command(&self, name: &str) -> Option<&CommandInfo> {
        self.commands.iter().find(|command| command.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_matches_by_form() {
        let option = CommandOption::single(Some("n"), Some("name"));

        assert!(option.matches("n", false));
        assert!(option.matches("name", true));
        assert!(!option.matches("name", false));
        assert!(!option.matches("n", true));
    }

    #[test]
    fn test_canonical_name_prefers_long_form() {
        assert_eq!(
            CommandOption::flag(Some("v"), Some("verbose")).canonical_name(),
            "verbose"
        );
        assert_eq!(CommandOption::flag(Some("v"), None).canonical_name(), "v");
    }

    #[test]
    fn test_description_builders_carry_through_parameters() {
        let command = CommandInfo::new("dog")
            .with_description("Inspect a dog")
            .with_option(
                CommandOption::flag(Some("a"), Some("alive")).with_description("Is the dog alive"),
            )
            .with_argument(
                CommandArgument::optional("age", 0).with_description("Age of the dog in years"),
            );

        assert_eq!(command.description.as_deref(), Some("Inspect a dog"));

        let CommandParameter::Option(alive) = &command.parameters()[0] else {
            panic!("expected an option");
        };
        assert_eq!(alive.description.as_deref(), Some("Is the dog alive"));

        let CommandParameter::Argument(age) = &command.parameters()[1] else {
            panic!("expected an argument");
        };
        assert_eq!(age.description.as_deref(), Some("Age of the dog in years"));
    }

    #[test]
    fn test_find_argument_by_position() {
        let command = CommandInfo::new("copy")
            .with_argument(CommandArgument::required("source", 0))
            .with_argument(CommandArgument::optional("dest", 1));

        let first = command.find_argument(0).unwrap();
        assert_eq!(first.name(), "source");
        assert!(command.find_argument(2).is_none());
    }

    #[test]
    fn test_find_command_is_exact_match() {
        let model = CommandModel::new().with_command(CommandInfo::new("animal"));

        assert!(model.find_command("animal").is_some());
        assert!(model.find_command("anima").is_none());
        assert!(model.find_command("ANIMAL").is_none());
    }

    #[test]
    fn test_model_round_trips_through_json() {
        let model = CommandModel::new().with_command(
            CommandInfo::new("dog")
                .with_option(CommandOption::single(Some("n"), Some("name")))
                .with_argument(CommandArgument::optional("age", 0)),
        );

        let json = serde_json::to_string(&model).unwrap();
        let restored: CommandModel = serde_json::from_str(&json).unwrap();

        let dog = restored.find_command("dog").unwrap();
        assert_eq!(dog.parameters().len(), 2);
        assert!(dog.find_option("name", true).is_some());
    }
}

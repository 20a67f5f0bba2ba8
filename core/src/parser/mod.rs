//! Recursive-descent matcher for git-style command lines.
//!
//! [`CommandTreeParser`] drives a forward-only token stream against an
//! immutable [`CommandModel`], producing a linear [`ParsedTree`] of
//! matched commands or a show-help signal. Parsing is strictly fail-fast:
//! the first violated rule aborts with a [`ParseError`] and no partial
//! tree is returned.
//!
//! Resolution rules, in precedence order at each command level:
//!
//! 1. exact declared option and child-command names;
//! 2. for short options, an exact multi-char name beats splitting
//!    `-nvalue` into first-char name plus concatenated value;
//! 3. the help spelling (`-h`/`--help` by default), so user-declared
//!    names shadow the built-in help flag on collision;
//! 4. default-command fallback: a first token that does not exactly name
//!    a top-level command routes the whole input to the default command
//!    when one is registered.

pub(crate) mod context;
pub(crate) mod stream;
pub(crate) mod tokenizer;

use tracing::debug;

use crate::error::ParseError;
use crate::model::{CommandContainer, CommandInfo, CommandModel, CommandParameter, ParameterKind};
use crate::tree::{NodeId, ParsedTree, TreeNode};

use context::ParserContext;
use stream::TokenStream;
use tokenizer::{Token, TokenKind, tokenize};

/// Result of a successful parse.
#[derive(Debug)]
pub enum ParseOutcome<'m> {
    /// The matched command chain plus any remaining arguments.
    Tree(ParsedTree<'m>),
    /// Help was requested, or the input was empty with nothing resolvable.
    ShowHelp,
}

/// The recursive-descent command tree parser.
///
/// Borrows a [`CommandModel`] built once up front; the model is never
/// mutated and the parser can be reused across sequential parse calls.
///
/// # Examples
///
/// ```
/// use argtree_core::*;
///
/// let model = CommandModel::new().with_command(
///     CommandInfo::new("animal").with_command(
///         CommandInfo::new("dog")
///             .with_option(CommandOption::single(Some("n"), Some("name")))
///             .with_option(CommandOption::flag(Some("a"), Some("alive"))),
///     ),
/// );
///
/// let parser = CommandTreeParser::new(&model);
/// let args: Vec<String> = ["animal", "dog", "--name", "Rex", "--alive"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let ParseOutcome::Tree(tree) = parser.parse(&args).unwrap() else {
///     panic!("expected a tree");
/// };
///
/// let leaf = tree.leaf().unwrap();
/// assert_eq!(leaf.command.name, "dog");
/// assert_eq!(leaf.value_of("name"), Some("Rex"));
/// assert_eq!(leaf.value_of("alive"), Some("true"));
/// ```
pub struct CommandTreeParser<'m> {
    model: &'m CommandModel,
    help_short: Option<String>,
    help_long: Option<String>,
}

impl<'m> CommandTreeParser<'m> {
    /// Creates a parser over the given model with the default `-h`/`--help`
    /// help spelling.
    pub fn new(model: &'m CommandModel) -> Self {
        Self {
            model,
            help_short: Some("h".to_string()),
            help_long: Some("help".to_string()),
        }
    }

    /// Overrides the help spelling. Names are given without dash prefixes;
    /// `None` disables that form.
    pub fn with_help_spelling(mut self, short: Option<&str>, long: Option<&str>) -> Self {
        self.help_short = short.map(String::from);
        self.help_long = long.map(String::from);
        self
    }

    /// Matches the given arguments against the model.
    pub fn parse(&self, args: &[String]) -> Result<ParseOutcome<'m>, ParseError> {
        let mut context = ParserContext::new(args);
        let mut stream = TokenStream::new(tokenize(args));
        let mut tree = ParsedTree::new();

        match stream.peek().cloned() {
            None => {
                let Some(default) = self.model.default_command() else {
                    return Ok(ParseOutcome::ShowHelp);
                };
                self.parse_command_parameters(&mut context, default, None, &mut stream, &mut tree)?;
            }
            Some(token) if token.kind != TokenKind::String => {
                if let Some(default) = self.model.default_command() {
                    debug!(command = %default.name, "option-shaped first token, falling back to default command");
                    self.parse_command_parameters(
                        &mut context,
                        default,
                        None,
                        &mut stream,
                        &mut tree,
                    )?;
                } else if self.is_help(&token) {
                    return Ok(ParseOutcome::ShowHelp);
                } else {
                    return Err(ParseError::unexpected_option(context.arguments(), &token));
                }
            }
            Some(token) => {
                if self.model.find_command(&token.value).is_some() {
                    self.parse_command(&mut context, self.model, None, &mut stream, &mut tree)?;
                } else if let Some(default) = self.model.default_command() {
                    debug!(command = %default.name, "no top-level command match, falling back to default command");
                    self.parse_command_parameters(
                        &mut context,
                        default,
                        None,
                        &mut stream,
                        &mut tree,
                    )?;
                } else {
                    return Err(ParseError::unknown_command(context.arguments(), &token));
                }
            }
        }

        tree.set_remaining(context.into_remaining());
        Ok(ParseOutcome::Tree(tree))
    }

    /// Consumes a command-name token, resolves it in the container, and
    /// descends into the command's parameters.
    fn parse_command(
        &self,
        context: &mut ParserContext,
        container: &'m dyn CommandContainer,
        parent: Option<NodeId>,
        stream: &mut TokenStream,
        tree: &mut ParsedTree<'m>,
    ) -> Result<NodeId, ParseError> {
        let token = stream.consume(TokenKind::String);
        let Some(command) = container.find_command(&token.value) else {
            return Err(ParseError::unknown_command(context.arguments(), &token));
        };
        debug!(command = %command.name, "matched command");
        self.parse_command_parameters(context, command, parent, stream, tree)
    }

    fn parse_command_parameters(
        &self,
        context: &mut ParserContext,
        command: &'m CommandInfo,
        parent: Option<NodeId>,
        stream: &mut TokenStream,
        tree: &mut ParsedTree<'m>,
    ) -> Result<NodeId, ParseError> {
        context.reset_argument_position();

        let id = tree.push(TreeNode::new(parent, command));
        while let Some(kind) = stream.peek().map(|token| token.kind) {
            match kind {
                TokenKind::LongOption => self.parse_option(context, stream, id, tree, true)?,
                TokenKind::ShortOption => self.parse_option(context, stream, id, tree, false)?,
                TokenKind::String => self.parse_string(context, stream, id, tree)?,
                TokenKind::Remaining => Self::parse_remaining(context, stream),
            }
        }

        // Parameters not supplied, by distinct identity.
        let node = tree.node_mut(id);
        for parameter in command.parameters() {
            if node
                .mapped
                .iter()
                .all(|(mapped, _)| !std::ptr::eq(*mapped, parameter))
            {
                node.unmapped.push(parameter);
            }
        }

        Ok(id)
    }

    fn parse_string(
        &self,
        context: &mut ParserContext,
        stream: &mut TokenStream,
        id: NodeId,
        tree: &mut ParsedTree<'m>,
    ) -> Result<(), ParseError> {
        let token = stream.expect(TokenKind::String).clone();
        let command = tree.node(id).command;

        // Child command?
        if command.find_command(&token.value).is_some() {
            let next = self.parse_command(context, command, Some(id), stream, tree)?;
            tree.node_mut(id).next = Some(next);
            return Ok(());
        }

        if !command.has_arguments() {
            return Err(ParseError::unknown_command(context.arguments(), &token));
        }

        let Some(parameter) = command.find_argument(context.current_argument_position()) else {
            return Err(ParseError::could_not_match_argument(
                context.arguments(),
                &token,
            ));
        };

        let value = stream.consume(TokenKind::String).value;
        tree.node_mut(id).mapped.push((parameter, Some(value)));
        context.increase_argument_position();
        Ok(())
    }

    fn parse_option(
        &self,
        context: &mut ParserContext,
        stream: &mut TokenStream,
        id: NodeId,
        tree: &mut ParsedTree<'m>,
        long: bool,
    ) -> Result<(), ParseError> {
        let token = stream.consume(if long {
            TokenKind::LongOption
        } else {
            TokenKind::ShortOption
        });
        let command = tree.node(id).command;

        if let Some(option) = command.find_option(&token.value, long) {
            let value = Self::parse_option_value(context, stream, &token, command, option)?;
            tree.node_mut(id).mapped.push((option, value));
            return Ok(());
        }

        // Concatenated short value (`-nRex`): an exact multi-char name was
        // tried above, so split into first-char name plus inline value.
        if !long {
            if let Some((name, inline)) = split_concatenated(&token.value) {
                if let Some(option) = command.find_option(&name, false) {
                    if option.kind() == ParameterKind::Flag {
                        return Err(ParseError::cannot_assign_value_to_flag(
                            context.arguments(),
                            &token,
                        ));
                    }
                    tree.node_mut(id).mapped.push((option, Some(inline)));
                    return Ok(());
                }
            }
        }

        if self.is_help(&token) {
            tree.node_mut(id).show_help = true;
            return Ok(());
        }

        Err(ParseError::unknown_option(context.arguments(), &token))
    }

    fn parse_option_value(
        context: &ParserContext,
        stream: &mut TokenStream,
        owner: &Token,
        command: &CommandInfo,
        parameter: &CommandParameter,
    ) -> Result<Option<String>, ParseError> {
        let mut value = None;

        // A following String is an inline value unless it names a child
        // command of the current node.
        let takes_next = matches!(stream.peek(), Some(next)
            if next.kind == TokenKind::String && command.find_command(&next.value).is_none());
        if takes_next {
            match parameter.kind() {
                ParameterKind::Single | ParameterKind::Multiple => {
                    value = Some(stream.consume(TokenKind::String).value);
                }
                ParameterKind::Flag => {
                    return Err(ParseError::cannot_assign_value_to_flag(
                        context.arguments(),
                        owner,
                    ));
                }
            }
        }

        if value.is_none() {
            match parameter.kind() {
                ParameterKind::Flag => value = Some("true".to_string()),
                ParameterKind::Single | ParameterKind::Multiple => {
                    value = parameter.default_value().map(String::from);
                    if value.is_none() {
                        return Err(ParseError::option_has_no_value(context.arguments(), owner));
                    }
                }
            }
        }

        Ok(value)
    }

    fn parse_remaining(context: &mut ParserContext, stream: &mut TokenStream) {
        while stream.peek().is_some() {
            let token = stream.consume(TokenKind::Remaining);
            context.add_remaining(token.value);
        }
    }

    fn is_help(&self, token: &Token) -> bool {
        match token.kind {
            TokenKind::ShortOption => self.help_short.as_deref() == Some(token.value.as_str()),
            TokenKind::LongOption => self.help_long.as_deref() == Some(token.value.as_str()),
            TokenKind::String | TokenKind::Remaining => false,
        }
    }
}

/// Splits a multi-char short-option token into its first character and
/// the rest, the candidate concatenated value.
fn split_concatenated(text: &str) -> Option<(String, String)> {
    let mut chars = text.chars();
    let first = chars.next()?;
    let rest: String = chars.collect();
    if rest.is_empty() {
        return None;
    }
    Some((first.to_string(), rest))
}

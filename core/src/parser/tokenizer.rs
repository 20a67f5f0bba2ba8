//! Turns raw argument strings into a typed token sequence.
//!
//! Option token values are stored without their dash prefixes; every token
//! keeps the index of the argument it came from so diagnostics can point
//! back into the original input.

/// Kind of a lexed argument token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// Plain text: command name, positional value, or option value.
    String,
    /// Short option (`-n`), value stored without the dash.
    ShortOption,
    /// Long option (`--name`), value stored without the dashes.
    LongOption,
    /// Verbatim argument seen after the `--` sentinel.
    Remaining,
}

/// One lexed argument token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) value: String,
    /// Index into the original argument list.
    pub(crate) position: usize,
}

impl Token {
    fn new(kind: TokenKind, value: &str, position: usize) -> Self {
        Self {
            kind,
            value: value.to_string(),
            position,
        }
    }
}

/// Lexes raw arguments into tokens.
///
/// Grammar:
/// - a literal `--` is consumed and switches every later argument into a
///   verbatim `Remaining` token;
/// - `--name` is a long option, `--name=value` splits into the option
///   token plus a synthetic `String` token at the same position;
/// - `-n` is a short option with the same `=` split; `-nvalue` keeps the
///   whole text after the dash, the parser disambiguates it against the
///   declared option names;
/// - a dash followed by a digit (`-5`, `-3.14`) is a plain `String`, which
///   preserves negative numbers as values;
/// - anything else, including a lone `-`, is a plain `String`.
pub(crate) fn tokenize(args: &[String]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut remaining = false;

    for (position, arg) in args.iter().enumerate() {
        if remaining {
            tokens.push(Token::new(TokenKind::Remaining, arg, position));
        } else if arg == "--" {
            remaining = true;
        } else if let Some(rest) = arg.strip_prefix("--") {
            push_option(&mut tokens, TokenKind::LongOption, rest, position);
        } else if let Some(rest) = arg.strip_prefix('-') {
            if rest.is_empty() || rest.starts_with(|c: char| c.is_ascii_digit()) {
                // Lone dash or negative number.
                tokens.push(Token::new(TokenKind::String, arg, position));
            } else {
                push_option(&mut tokens, TokenKind::ShortOption, rest, position);
            }
        } else {
            tokens.push(Token::new(TokenKind::String, arg, position));
        }
    }

    tokens
}

fn push_option(tokens: &mut Vec<Token>, kind: TokenKind, text: &str, position: usize) {
    match text.split_once('=') {
        Some((name, value)) => {
            tokens.push(Token::new(kind, name, position));
            tokens.push(Token::new(TokenKind::String, value, position));
        }
        None => tokens.push(Token::new(kind, text, position)),
    }
}

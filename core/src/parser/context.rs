//! Per-parse mutable state.

/// Cross-cutting state for a single parse call: the verbatim argument
/// snapshot used by every diagnostic, the positional-argument counter,
/// and the append-only remaining-arguments accumulator.
pub(crate) struct ParserContext {
    arguments: Vec<String>,
    argument_position: usize,
    remaining: Vec<String>,
}

impl ParserContext {
    pub(crate) fn new(arguments: &[String]) -> Self {
        Self {
            arguments: arguments.to_vec(),
            argument_position: 0,
            remaining: Vec::new(),
        }
    }

    /// The original argument list, verbatim.
    pub(crate) fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Resets the positional counter; invoked on entering a command level.
    pub(crate) fn reset_argument_position(&mut self) {
        self.argument_position = 0;
    }

    pub(crate) fn current_argument_position(&self) -> usize {
        self.argument_position
    }

    /// Advances past a bound positional argument.
    pub(crate) fn increase_argument_position(&mut self) {
        self.argument_position += 1;
    }

    /// Appends a verbatim post-sentinel argument.
    pub(crate) fn add_remaining(&mut self, argument: String) {
        self.remaining.push(argument);
    }

    pub(crate) fn into_remaining(self) -> Vec<String> {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_position_resets_per_level() {
        let mut context = ParserContext::new(&[]);

        context.increase_argument_position();
        context.increase_argument_position();
        assert_eq!(context.current_argument_position(), 2);

        context.reset_argument_position();
        assert_eq!(context.current_argument_position(), 0);
    }

    #[test]
    fn test_remaining_preserves_order() {
        let mut context = ParserContext::new(&[]);

        context.add_remaining("--name".to_string());
        context.add_remaining("-5".to_string());

        assert_eq!(context.into_remaining(), vec!["--name", "-5"]);
    }
}

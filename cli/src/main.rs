//! Demonstration host for the argtree parsing engine.
//!
//! Registers a small pet-store command model, parses this process's own
//! arguments with [`argtree_core`], prints the matched chain as JSON, and
//! executes the matched command. Parse errors are rendered against the
//! original argument list and terminate with a non-zero status.

use std::process::ExitCode;

use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use argtree_core::{
    CommandArgument, CommandInfo, CommandModel, CommandOption, CommandRunnable, CommandTreeParser,
    ExecutionContext, ExecutionError, ParseError, ParseOutcome, ParsedTree, run, validate_model,
};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

struct DogCommand;

impl CommandRunnable for DogCommand {
    fn validate(&self, context: &ExecutionContext<'_, '_>) -> Result<(), String> {
        if context.is_set("age") && !context.is_set("name") {
            return Err("--age requires --name".to_string());
        }
        Ok(())
    }

    fn execute(&self, context: &ExecutionContext<'_, '_>) -> Result<i32, ExecutionError> {
        let name = context.value_of("name").unwrap_or("the dog");
        match context.value_of("alive") {
            Some(_) => println!("{name} barks"),
            None => println!("{name} is very quiet"),
        }
        Ok(0)
    }
}

struct CatCommand;

impl CommandRunnable for CatCommand {
    fn execute(&self, context: &ExecutionContext<'_, '_>) -> Result<i32, ExecutionError> {
        for toy in context.values_of("toy") {
            println!("the cat ignores the {toy}");
        }
        println!("the cat ignores you");
        Ok(0)
    }
}

struct EchoCommand;

impl CommandRunnable for EchoCommand {
    fn execute(&self, context: &ExecutionContext<'_, '_>) -> Result<i32, ExecutionError> {
        if let Some(text) = context.value_of("text") {
            println!("{text}");
        }
        for argument in context.remaining() {
            println!("{argument}");
        }
        Ok(0)
    }
}

fn build_model() -> CommandModel {
    CommandModel::new()
        .with_command(
            CommandInfo::new("animal")
                .with_description("Manage animals")
                .with_command(
                    CommandInfo::new("dog")
                        .with_description("Inspect a dog")
                        .with_option(CommandOption::single(Some("n"), Some("name")))
                        .with_option(CommandOption::flag(Some("a"), Some("alive")))
                        .with_option(CommandOption::single(None, Some("age")).with_default("18"))
                        .with_runnable(DogCommand),
                )
                .with_command(
                    CommandInfo::new("cat")
                        .with_description("Inspect a cat")
                        .with_option(CommandOption::multiple(Some("t"), Some("toy")))
                        .with_runnable(CatCommand),
                ),
        )
        .with_default_command(
            CommandInfo::new("echo")
                .with_description("Echo the input back")
                .with_argument(CommandArgument::optional("text", 0))
                .with_runnable(EchoCommand),
        )
}

/// One matched command level, as printed to stdout.
#[derive(Serialize)]
struct LevelSummary {
    command: String,
    bindings: Vec<Binding>,
}

#[derive(Serialize)]
struct Binding {
    parameter: String,
    value: Option<String>,
}

#[derive(Serialize)]
struct ParseSummary {
    levels: Vec<LevelSummary>,
    remaining: Vec<String>,
}

fn summarize(tree: &ParsedTree<'_>) -> ParseSummary {
    let levels = tree
        .iter()
        .map(|node| LevelSummary {
            command: node.command.name.clone(),
            bindings: node
                .mapped
                .iter()
                .map(|(parameter, value)| Binding {
                    parameter: parameter.name().to_string(),
                    value: value.clone(),
                })
                .collect(),
        })
        .collect();
    ParseSummary {
        levels,
        remaining: tree.remaining().to_vec(),
    }
}

fn print_usage(model: &CommandModel) {
    println!("argtree {PACKAGE_VERSION}");
    println!();
    println!("Usage: argtree [COMMAND] [OPTIONS] [-- <REMAINING>...]");
    println!();
    println!("Commands:");
    for command in model.commands() {
        let description = command.description.as_deref().unwrap_or("");
        println!("  {:<10} {description}", command.name);
        for child in command.children() {
            let description = child.description.as_deref().unwrap_or("");
            println!("    {:<8} {description}", child.name);
        }
    }
    if let Some(default) = model.default_command() {
        let description = default.description.as_deref().unwrap_or("");
        println!("  {:<10} {description} (default)", default.name);
    }
}

/// Points at the offending argument, caret-style, on stderr.
fn render_parse_error(error: &ParseError) {
    eprintln!("error: {error}");

    let arguments = error.arguments();
    if arguments.is_empty() {
        return;
    }
    eprintln!("  {}", arguments.join(" "));

    let offset: usize = arguments
        .iter()
        .take(error.position())
        .map(|argument| argument.len() + 1)
        .sum();
    let width = arguments
        .get(error.position())
        .map(|argument| argument.len())
        .unwrap_or(1);
    eprintln!("  {}{}", " ".repeat(offset), "^".repeat(width));
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let model = build_model();
    let errors = validate_model(&model);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("model error: {error}");
        }
        return ExitCode::FAILURE;
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    debug!(?args, "parsing arguments");

    let parser = CommandTreeParser::new(&model);
    match parser.parse(&args) {
        Ok(ParseOutcome::ShowHelp) => {
            print_usage(&model);
            ExitCode::SUCCESS
        }
        Ok(ParseOutcome::Tree(tree)) => {
            if tree.show_help() {
                print_usage(&model);
                return ExitCode::SUCCESS;
            }
            match serde_json::to_string_pretty(&summarize(&tree)) {
                Ok(json) => println!("{json}"),
                Err(error) => {
                    eprintln!("error: {error}");
                    return ExitCode::FAILURE;
                }
            }
            match run(&tree) {
                Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
                Err(error) => {
                    eprintln!("error: {error}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(error) => {
            render_parse_error(&error);
            ExitCode::FAILURE
        }
    }
}

//! Traits which, typically, may be imported without concern: `use optbind::prelude::*`.

use crate::api::{Binding, CommandLine, CommandLineParser, Usage};
use crate::model::Repeats;
use crate::parser::{BindingParser, CommandLineError};

/// Behaviour for a type whose fields bind to the command line.
///
/// Only [`Bindable::bindings`] is required; it is the static descriptor table for `Self`.
/// Typically this is implemented via `#[derive(CommandLine)]` rather than by hand.
pub trait Bindable: Default + 'static {
    /// The bindings for the fields of `Self`.
    fn bindings() -> Vec<Binding<Self>>;

    /// The usage banner.
    fn usage() -> Usage {
        Usage::default()
    }

    /// How to treat a flag which appears more than once.
    fn repeats() -> Repeats {
        Repeats::default()
    }

    /// The command line parser configured from the bindings, usage, and repeats of `Self`.
    fn command_line_parser() -> CommandLineParser<Self> {
        CommandLineParser::new()
            .usage(Self::usage())
            .repeats(Self::repeats())
            .add_all(Self::bindings())
    }

    /// Build the parser and bind the input tokens.
    /// See [`BindingParser::parse_tokens`].
    fn parse_tokens(tokens: &[&str]) -> Result<CommandLine<Self>, CommandLineError> {
        let parser: BindingParser<Self> = Self::command_line_parser().build_parser()?;
        Ok(parser.parse_tokens(tokens)?)
    }

    /// Build the parser and bind the Cli [`std::env::args`], exiting on any error.
    /// See [`BindingParser::parse`].
    fn parse() -> CommandLine<Self> {
        Self::command_line_parser().build().parse()
    }
}

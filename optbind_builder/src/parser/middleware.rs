use std::env;
use std::path::Path;

use crate::api::CommandLine;
use crate::matcher::{tokenize, Token};
use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::parser::ErrorContext;

/// The configured binding parser.
/// Built via [`CommandLineParser::build`](crate::CommandLineParser::build) or [`CommandLineParser::build_parser`](crate::CommandLineParser::build_parser).
pub struct BindingParser<T> {
    parser: Parser<T>,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl<T> std::fmt::Debug for BindingParser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingParser")
            .field("parser", &self.parser)
            .field("printer", &self.printer)
            .finish()
    }
}

#[derive(Debug)]
enum ParseResult<T> {
    Complete(CommandLine<T>),
    Exit(i32),
}

impl<T: Default> BindingParser<T> {
    pub(crate) fn new(
        parser: Parser<T>,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            parser,
            printer,
            user_interface,
        }
    }

    fn consume(&self, tokens: &[Token]) -> Result<CommandLine<T>, ParseError> {
        let mut inner = T::default();
        let Outcome {
            missing_required,
            usage_requested,
        } = self.parser.consume(&mut inner, tokens)?;

        Ok(CommandLine::new(
            inner,
            missing_required,
            usage_requested,
            self.printer.render(),
        ))
    }

    /// Bind the input tokens onto a fresh `T::default()`.
    ///
    /// Each token is tokenized (splitting a combined `-s "value"` argument), matched against the options, and bound onto its field.
    /// The first unknown option, unconvertible value, or rejected value stops the parse with a [`ParseError`].
    ///
    /// Missing required options and the usage flag (`-?`) are *not* errors.
    /// They are reported on the returned [`CommandLine`], for the caller to act on.
    ///
    /// ### Example
    /// ```
    /// # use optbind_builder as optbind;
    /// use optbind::{Binding, CommandLineParser, Field, OptionDescriptor};
    ///
    /// #[derive(Default)]
    /// struct Settings {
    ///     count: u32,
    /// }
    ///
    /// let parser = CommandLineParser::new()
    ///     .add(Binding::new(
    ///         OptionDescriptor::option('c', "How many times.").long("count"),
    ///         Field::new(|s: &mut Settings| &mut s.count),
    ///     ))
    ///     .build();
    ///
    /// let settings = parser.parse_tokens(&["--count", "3"]).unwrap();
    /// assert_eq!(settings.count, 3);
    /// ```
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<CommandLine<T>, ParseError> {
        self.consume(&tokenize(tokens))
    }

    fn invoke(&self, tokens: &[&str]) -> ParseResult<T> {
        let tokens = tokenize(tokens);

        match self.consume(&tokens) {
            Ok(command_line) if command_line.usage_requested() => {
                self.printer.print_usage(&*self.user_interface);
                ParseResult::Exit(0)
            }
            Ok(command_line) if !command_line.missing_required().is_empty() => {
                let missing: Vec<String> = command_line
                    .missing_required()
                    .iter()
                    .map(|descriptor| descriptor.to_string())
                    .collect();
                self.user_interface.print_error(format!(
                    "Missing required option(s): {}.",
                    missing.join(", ")
                ));
                self.printer.print_usage(&*self.user_interface);
                ParseResult::Exit(1)
            }
            Ok(command_line) => ParseResult::Complete(command_line),
            Err(error) => {
                self.user_interface.print_error(error.to_string());

                if let Some(offset) = error.offset() {
                    self.user_interface
                        .print_error_context(ErrorContext::new(offset, &tokens));
                }

                ParseResult::Exit(1)
            }
        }
    }

    /// Run the binding parser against the Cli [`env::args`].
    ///
    /// If a [`ParseError`] is encountered, it is displayed and the process exits with error code `1` (via [`std::process::exit`]).
    /// If the usage flag (`-?`) is encountered, the usage message is displayed and the process exits with error code `0`.
    /// If any required options are missing, they are displayed along with the usage message and the process exits with error code `1`.
    ///
    /// Otherwise, the bound command line is returned.
    pub fn parse(mut self) -> CommandLine<T> {
        let mut arguments = env::args();

        if let Some(stem) = arguments
            .next()
            .as_deref()
            .and_then(|argv0| Path::new(argv0).file_stem())
            .and_then(|stem| stem.to_str())
        {
            self.printer.fallback_program(stem);
        }

        let command_input: Vec<String> = arguments.collect();

        match self.invoke(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            ParseResult::Complete(command_line) => command_line,
            ParseResult::Exit(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}

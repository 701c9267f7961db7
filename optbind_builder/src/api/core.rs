use crate::api::{Binding, OptionDescriptor, Usage};
use crate::model::Repeats;
use crate::parser::{BindingParser, ConfigError, ConsoleInterface, Parser, Printer, UserInterface};

/// The base command line parser, which binds options onto the fields of `T`.
///
/// ### Example
/// ```
/// # use optbind_builder as optbind;
/// use optbind::{Binding, CommandLineParser, Field, OptionDescriptor, Usage};
///
/// #[derive(Default)]
/// struct Settings {
///     verbose: bool,
///     path: String,
/// }
///
/// let parser = CommandLineParser::new()
///     .usage(Usage::new("reader"))
///     .add(Binding::new(
///         OptionDescriptor::option('v', "Print more.").long("verbose"),
///         Field::new(|s: &mut Settings| &mut s.verbose),
///     ))
///     .add(Binding::new(
///         OptionDescriptor::target("The file to read.").required(),
///         Field::new(|s: &mut Settings| &mut s.path),
///     ))
///     .build();
///
/// let settings = parser.parse_tokens(&["-v", "notes.txt"]).unwrap();
/// assert!(settings.verbose);
/// assert_eq!(settings.path, "notes.txt");
/// ```
pub struct CommandLineParser<T> {
    usage: Usage,
    repeats: Repeats,
    bindings: Vec<Binding<T>>,
}

impl<T> std::fmt::Debug for CommandLineParser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLineParser")
            .field("usage", &self.usage)
            .field("repeats", &self.repeats)
            .field("bindings", &self.bindings)
            .finish()
    }
}

impl<T: Default> Default for CommandLineParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> CommandLineParser<T> {
    /// Create a command line parser without any bindings.
    pub fn new() -> Self {
        Self {
            usage: Usage::default(),
            repeats: Repeats::default(),
            bindings: Vec::default(),
        }
    }

    /// Document the usage banner for this command line parser.
    /// If repeated, only the final usage will apply.
    ///
    /// Without an executable name, the usage message falls back to the name the program was invoked by.
    pub fn usage(mut self, usage: Usage) -> Self {
        self.usage = usage;
        self
    }

    /// Declare how to treat a flag which appears more than once.
    /// Defaults to [`Repeats::Overwrite`].
    ///
    /// ### Example
    /// ```
    /// # use optbind_builder as optbind;
    /// use optbind::{Binding, CommandLineParser, Field, OptionDescriptor, ParseError, Repeats};
    ///
    /// #[derive(Debug, Default)]
    /// struct Settings {
    ///     level: u8,
    /// }
    ///
    /// let parser = CommandLineParser::new()
    ///     .repeats(Repeats::Reject)
    ///     .add(Binding::new(
    ///         OptionDescriptor::option('l', "The level."),
    ///         Field::new(|s: &mut Settings| &mut s.level),
    ///     ))
    ///     .build();
    ///
    /// let error = parser.parse_tokens(&["-l", "1", "-l", "2"]).unwrap_err();
    /// assert!(matches!(error, ParseError::RepeatedOption { offset: 2, .. }));
    /// ```
    pub fn repeats(mut self, repeats: Repeats) -> Self {
        self.repeats = repeats;
        self
    }

    /// Add a binding to the command line parser.
    /// The order of bindings does not affect the parser semantics.
    pub fn add(mut self, binding: Binding<T>) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Add all the bindings to the command line parser.
    pub fn add_all(mut self, bindings: impl IntoIterator<Item = Binding<T>>) -> Self {
        self.bindings.extend(bindings);
        self
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<BindingParser<T>, ConfigError> {
        let CommandLineParser {
            usage,
            repeats,
            bindings,
        } = self;
        let parser = Parser::new(
            bindings.into_iter().map(Binding::consume).collect(),
            repeats,
        )?;
        let printer = Printer::terminal(usage, parser.entries());
        Ok(BindingParser::new(parser, printer, user_interface))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: an unsupported field type, or a repeated option).
    pub fn build_parser(self) -> Result<BindingParser<T>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: an unsupported field type, or a repeated option).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> BindingParser<T> {
        match self.build_parser() {
            Ok(bp) => bp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

/// The bound target `T`, along with what the parse reported.
///
/// Dereferences to `T`.
#[derive(Debug)]
pub struct CommandLine<T> {
    inner: T,
    missing_required: Vec<OptionDescriptor>,
    usage_requested: bool,
    usage: Vec<String>,
}

impl<T> CommandLine<T> {
    pub(crate) fn new(
        inner: T,
        missing_required: Vec<OptionDescriptor>,
        usage_requested: bool,
        usage: Vec<String>,
    ) -> Self {
        Self {
            inner,
            missing_required,
            usage_requested,
            usage,
        }
    }

    /// Create a dummy command line around `inner`, for use in unit tests.
    #[cfg(feature = "unit_test")]
    pub fn test_dummy(inner: T) -> Self {
        Self::new(inner, Vec::default(), false, Vec::default())
    }

    /// The required options which were not given on the Cli, in ascending descriptor order.
    pub fn missing_required(&self) -> &[OptionDescriptor] {
        &self.missing_required
    }

    /// Whether the usage flag (`-?`) was given on the Cli.
    pub fn usage_requested(&self) -> bool {
        self.usage_requested
    }

    /// The rendered usage message.
    pub fn usage(&self) -> String {
        self.usage.join("\n")
    }

    /// Write the rendered usage message.
    pub fn write_usage(&self, writer: &mut impl std::io::Write) -> std::io::Result<()> {
        for line in &self.usage {
            writeln!(writer, "{line}")?;
        }

        Ok(())
    }

    /// Take the bound target.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> std::ops::Deref for CommandLine<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> std::ops::DerefMut for CommandLine<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

use thiserror::Error;

use crate::api::{GenericCapturable, InvalidCapture, OptionDescriptor, Rejection};
use crate::constant::*;
use crate::matcher::*;
use crate::model::{OptionType, Repeats};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We need a (dyn .. [ignoring V] ..) here in order to put all the fields of varying types V under one collection.
pub(crate) type FieldCapture<T> = (OptionDescriptor, Box<dyn GenericCapturable<T>>);

/// An error in the declared bindings, detected before any token is parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The field of an option is not text, integer, or boolean.
    #[error("Option {option} cannot bind a field of type '{type_name}'.")]
    UnsupportedOptionType {
        /// The option, displayed as its symbols.
        option: String,
        /// The name of the field type.
        type_name: &'static str,
    },
    /// More than one target option was declared.
    #[error("Cannot declare more than one target option ('{first}' and '{second}').")]
    DuplicateTargetOption {
        /// The description of the first target.
        first: String,
        /// The description of the second target.
        second: String,
    },
    /// A short or long symbol was declared twice, or the reserved `-?` was declared.
    #[error("Cannot duplicate the option '{symbol}'.")]
    DuplicateOption {
        /// The duplicated symbol, including its dashes.
        symbol: String,
    },
    /// A short or long symbol which no Cli token could ever match.
    #[error("Cannot declare the unmatchable option '{symbol}'.")]
    InvalidSymbol {
        /// The offending symbol, including its dashes.
        symbol: String,
    },
}

/// An error in the Cli tokens, which aborts the parse.
///
/// The `offset` is the index of the offending token.
/// It is `None` when the error arises from binding an initial value, before any token is read.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A dash-prefixed token matched no declared option.
    #[error("Unknown option '{token}'.")]
    UnknownOption {
        /// The offending token index.
        offset: usize,
        /// The offending token.
        token: String,
    },
    /// A value could not be converted to the type of its field.
    #[error("Option {option} cannot convert '{token}' to {type_name}.")]
    TypeCoercionError {
        /// The offending token index.
        offset: Option<usize>,
        /// The option, displayed as its symbols.
        option: String,
        /// The offending value.
        token: String,
        /// The name of the field type.
        type_name: &'static str,
    },
    /// The validator of a field rejected a converted value.
    #[error("Option {option} rejected '{token}': {source}")]
    ValidationFailed {
        /// The offending token index.
        offset: Option<usize>,
        /// The option, displayed as its symbols.
        option: String,
        /// The offending value.
        token: String,
        /// The rejection returned by the validator.
        #[source]
        source: Rejection,
    },
    /// An already satisfied option appeared again, while repeats are rejected.
    #[error("Option {option} cannot be repeated.")]
    RepeatedOption {
        /// The offending token index.
        offset: usize,
        /// The option, displayed as its symbols.
        option: String,
    },
}

impl ParseError {
    /// The index of the offending token, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::UnknownOption { offset, .. } | ParseError::RepeatedOption { offset, .. } => {
                Some(*offset)
            }
            ParseError::TypeCoercionError { offset, .. }
            | ParseError::ValidationFailed { offset, .. } => *offset,
        }
    }

    fn from_match(offset: usize, error: MatchError) -> Self {
        match error {
            MatchError::UnknownOption(token) => ParseError::UnknownOption { offset, token },
            MatchError::RepeatedOption(option) => ParseError::RepeatedOption { offset, option },
        }
    }

    fn from_capture(offset: Option<usize>, descriptor: &OptionDescriptor, error: InvalidCapture) -> Self {
        match error {
            InvalidCapture::InvalidConversion { token, type_name } => {
                ParseError::TypeCoercionError {
                    offset,
                    option: descriptor.to_string(),
                    token,
                    type_name,
                }
            }
            InvalidCapture::Rejected { token, source } => ParseError::ValidationFailed {
                offset,
                option: descriptor.to_string(),
                token,
                source,
            },
        }
    }
}

/// Any error from building the bindings or parsing the Cli tokens.
#[derive(Debug, Error)]
pub enum CommandLineError {
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The non-fatal result of a parse.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Outcome {
    pub(crate) missing_required: Vec<OptionDescriptor>,
    pub(crate) usage_requested: bool,
}

pub(crate) struct Parser<T> {
    registry: DescriptorRegistry,
    fields: Vec<Box<dyn GenericCapturable<T>>>,
    repeats: Repeats,
}

impl<T> std::fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("registry", &self.registry)
            .field("repeats", &self.repeats)
            .finish()
    }
}

impl<T> Parser<T> {
    /// Configuration errors are reported against the declaration order of the `captures`.
    pub(crate) fn new(captures: Vec<FieldCapture<T>>, repeats: Repeats) -> Result<Self, ConfigError> {
        let mut entries = Vec::with_capacity(captures.len());
        let mut fields = Vec::with_capacity(captures.len());

        for (descriptor, field) in captures.into_iter() {
            entries.push((descriptor, field.option_type(), field.type_name()));
            fields.push(field);
        }

        Ok(Self {
            registry: DescriptorRegistry::new(entries)?,
            fields,
            repeats,
        })
    }

    /// The registered options, in ascending descriptor order.
    pub(crate) fn entries(&self) -> Vec<(OptionDescriptor, OptionType)> {
        let mut entries: Vec<(OptionDescriptor, OptionType)> = self
            .registry
            .configs()
            .iter()
            .map(|config| (config.descriptor().clone(), config.option_type()))
            .collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    /// Bind the tokens onto the target.
    ///
    /// Optional fields are first bound from their initial (or zero) value, then each token is fed to the matcher and bound as soon as it matches.
    /// The first error stops the parse, leaving the fields after it untouched.
    pub(crate) fn consume(&self, target: &mut T, tokens: &[Token]) -> Result<Outcome, ParseError> {
        let mut outcome = Outcome::default();

        // 1. Bind the initial values of the optional fields.
        // A declared initial value is validated, the type's zero value is not.
        for (index, config) in self.registry.configs().iter().enumerate() {
            let descriptor = config.descriptor();

            if descriptor.is_required() {
                continue;
            }

            match descriptor.default_value() {
                Some(value) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Binding initial value '{value}' for {descriptor}.");
                    }
                    self.capture(target, index, value, None)?;
                }
                None => {
                    let zero = config.option_type().zero();
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Binding zero value '{zero}' for {descriptor}.");
                    }
                    self.fields[index].initialize(target, zero).map_err(|error| {
                        ParseError::from_capture(None, descriptor, error)
                    })?;
                }
            }
        }

        // 2. Feed the tokens, binding each match in turn.
        let mut token_matcher = TokenMatcher::new(&self.registry, self.repeats);

        for (offset, token) in tokens.iter().enumerate() {
            match token_matcher
                .feed(token)
                .map_err(|error| ParseError::from_match(offset, error))?
            {
                Some(Matched::Switch(index)) => {
                    self.capture(target, index, SWITCH_VALUE, Some(offset))?;
                }
                Some(Matched::Value(index, value)) => {
                    self.capture(target, index, &value, Some(offset))?;
                }
                Some(Matched::Usage) => {
                    outcome.usage_requested = true;
                }
                None => {}
            }
        }

        // 3. Report what was never satisfied.
        let satisfied = token_matcher.close();
        outcome.missing_required = missing_required(&self.registry, &satisfied);
        Ok(outcome)
    }

    fn capture(
        &self,
        target: &mut T,
        index: usize,
        value: &str,
        offset: Option<usize>,
    ) -> Result<(), ParseError> {
        self.fields[index]
            .capture(target, value)
            .map_err(|error| {
                ParseError::from_capture(offset, self.registry.config(index).descriptor(), error)
            })
    }
}

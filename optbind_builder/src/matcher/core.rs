use std::collections::HashSet;
use thiserror::Error;

use crate::constant::*;
use crate::matcher::*;
use crate::model::{OptionType, Repeats};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MatchError {
    #[error("Unknown option '{0}'.")]
    UnknownOption(String),
    #[error("Option '{0}' cannot be repeated.")]
    RepeatedOption(String),
}

/// The token-by-token state machine which resolves flags and values against a [`DescriptorRegistry`].
///
/// Each fed token produces at most one [`Matched`] for the caller to bind.
/// The matcher tracks which options have been satisfied from the Cli, but never touches the target itself.
#[derive(Debug)]
pub(crate) struct TokenMatcher<'r> {
    registry: &'r DescriptorRegistry,
    repeats: Repeats,
    state: MatchState,
    satisfied: HashSet<usize>,
}

impl<'r> TokenMatcher<'r> {
    pub(crate) fn new(registry: &'r DescriptorRegistry, repeats: Repeats) -> Self {
        Self {
            registry,
            repeats,
            state: MatchState::Scanning,
            satisfied: HashSet::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> MatchState {
        self.state
    }

    pub(crate) fn feed(&mut self, token: &Token) -> Result<Option<Matched>, MatchError> {
        if self.state == MatchState::Done {
            unreachable!("internal error - cannot feed a closed matcher");
        }

        match token {
            Token::Raw(text) if text.starts_with('-') => self.feed_flag(text),
            _ => Ok(self.feed_value(token.text())),
        }
    }

    /// Finish matching, returning the indices of the options satisfied from the Cli.
    pub(crate) fn close(&mut self) -> HashSet<usize> {
        #[cfg(feature = "tracing_debug")]
        {
            if let MatchState::AwaitingValue(index) = self.state {
                debug!(
                    "Option {} received no value before the end of the tokens.",
                    self.registry.config(index).descriptor()
                );
            }
        }

        self.state = MatchState::Done;
        std::mem::take(&mut self.satisfied)
    }

    fn feed_flag(&mut self, text: &str) -> Result<Option<Matched>, MatchError> {
        let index = if let Some(long) = text.strip_prefix("--") {
            self.registry.long(long)
        } else {
            match single(&text[1..]) {
                Some(USAGE_SHORT) => {
                    self.abandon();
                    return Ok(Some(Matched::Usage));
                }
                Some(short) => self.registry.short(short),
                None => None,
            }
        };
        let index = index.ok_or_else(|| MatchError::UnknownOption(text.to_string()))?;
        self.abandon();

        if self.repeats == Repeats::Reject && self.satisfied.contains(&index) {
            return Err(MatchError::RepeatedOption(
                self.registry.config(index).descriptor().to_string(),
            ));
        }

        if self.registry.config(index).option_type() == OptionType::Boolean {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{text}' matched switch at index {index}.");
            }

            self.satisfied.insert(index);
            Ok(Some(Matched::Switch(index)))
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{text}' matched option at index {index}, awaiting its value.");
            }

            self.state = MatchState::AwaitingValue(index);
            Ok(None)
        }
    }

    fn feed_value(&mut self, text: &str) -> Option<Matched> {
        match self.state {
            MatchState::AwaitingValue(index) => {
                self.state = MatchState::Scanning;
                self.satisfied.insert(index);
                Some(Matched::Value(index, text.to_string()))
            }
            MatchState::Scanning => match self.registry.target() {
                Some(index) if !self.satisfied.contains(&index) => {
                    self.satisfied.insert(index);
                    Some(Matched::Value(index, text.to_string()))
                }
                _ => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Ignoring token '{text}', there is no open target.");
                    }

                    None
                }
            },
            MatchState::Done => unreachable!("internal error - cannot feed a closed matcher"),
        }
    }

    // A flag arriving while a value is awaited leaves that option without one.
    fn abandon(&mut self) {
        #[cfg(feature = "tracing_debug")]
        {
            if let MatchState::AwaitingValue(index) = self.state {
                debug!(
                    "Option {} received no value before the next flag.",
                    self.registry.config(index).descriptor()
                );
            }
        }

        self.state = MatchState::Scanning;
    }
}

fn single(text: &str) -> Option<char> {
    let mut characters = text.chars();

    match (characters.next(), characters.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// One unit of input for the [`TokenMatcher`](crate::matcher::TokenMatcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A token which may be a flag or a value, decided by its shape.
    Raw(String),
    /// A token which is always a value (split out of a combined `-flag value` argument).
    Value(String),
}

impl Token {
    pub(crate) fn raw(text: impl Into<String>) -> Self {
        Token::Raw(text.into())
    }

    pub(crate) fn value(text: impl Into<String>) -> Self {
        Token::Value(text.into())
    }

    pub(crate) fn text(&self) -> &str {
        match self {
            Token::Raw(text) | Token::Value(text) => text,
        }
    }
}

/// The state of the [`TokenMatcher`](crate::matcher::TokenMatcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchState {
    Scanning,
    /// Waiting on the value for the option at this registry index.
    AwaitingValue(usize),
    Done,
}

/// What a single token matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Matched {
    /// A boolean flag at this registry index.
    Switch(usize),
    /// A value for the option at this registry index.
    Value(usize, String),
    /// The usage flag.
    Usage,
}

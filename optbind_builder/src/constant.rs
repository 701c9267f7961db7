/// The short symbol reserved for the positional target option.
pub(crate) const TARGET_SHORT: char = ' ';
/// The short symbol reserved for requesting the usage message.
pub(crate) const USAGE_SHORT: char = '?';
pub(crate) const USAGE_MESSAGE: &str = "Show this usage message.";
pub(crate) const TARGET_PLACEHOLDER: &str = "TARGET";
pub(crate) const QUOTES: [char; 2] = ['"', '\''];
pub(crate) const SWITCH_VALUE: &str = "true";
pub(crate) const DEFAULT_PROGRAM: &str = "program";

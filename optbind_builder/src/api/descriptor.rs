use crate::constant::*;

/// The immutable metadata for one bindable field.
///
/// A descriptor is either *flagged* (matched by `-S` or `--LONG` on the Cli), or the *target* (the single positional value).
/// Descriptors order by their short symbol, with the target sorting before every flagged option.
///
/// ### Example
/// ```
/// # use optbind_builder as optbind;
/// use optbind::OptionDescriptor;
///
/// let count = OptionDescriptor::option('c', "How many times.")
///     .long("count")
///     .initial(3);
/// let path = OptionDescriptor::target("The file to read.")
///     .required();
///
/// assert_eq!(count.default_value(), Some("3"));
/// assert!(path.is_target_option());
/// assert!(path < count);
/// ```
// Field order matters: the derived `Ord` compares `short_symbol` first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptionDescriptor {
    short_symbol: char,
    long_symbol: Option<String>,
    is_required: bool,
    description: String,
    default_value: Option<String>,
}

impl OptionDescriptor {
    /// Create a flagged option, matched by `-{short_symbol}`.
    pub fn option(short_symbol: char, description: impl Into<String>) -> Self {
        Self {
            short_symbol,
            long_symbol: None,
            is_required: false,
            description: description.into(),
            default_value: None,
        }
    }

    /// Create the target option, matched positionally.
    pub fn target(description: impl Into<String>) -> Self {
        Self::option(TARGET_SHORT, description)
    }

    /// Also match this option by `--{long_symbol}`.
    /// Has no effect on the target option, which has no symbols.
    pub fn long(mut self, long_symbol: impl Into<String>) -> Self {
        let long_symbol = long_symbol.into();

        if !self.is_target_option() && !long_symbol.is_empty() {
            self.long_symbol.replace(long_symbol);
        }

        self
    }

    /// Mark this option as required.
    /// Required options never receive their initial value; when absent from the Cli they are reported as missing.
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Document the initial value for this option, applied before the Cli tokens are bound.
    /// When not specified, optional fields start from their type's zero value.
    pub fn initial(mut self, value: impl ToString) -> Self {
        self.default_value.replace(value.to_string());
        self
    }

    /// The short symbol (`' '` for the target option).
    pub fn short_symbol(&self) -> char {
        self.short_symbol
    }

    /// The long symbol, if any.
    pub fn long_symbol(&self) -> Option<&str> {
        self.long_symbol.as_deref()
    }

    /// Whether this option is required.
    pub fn is_required(&self) -> bool {
        self.is_required
    }

    /// The description shown in the usage message.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The initial value, if any.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Whether this is the positional target option rather than a flag.
    pub fn is_target_option(&self) -> bool {
        self.short_symbol == TARGET_SHORT
    }
}

impl std::fmt::Display for OptionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_target_option() {
            write!(f, "{TARGET_PLACEHOLDER}")
        } else {
            match &self.long_symbol {
                Some(long) => write!(f, "-{s}/--{long}", s = self.short_symbol),
                None => write!(f, "-{s}", s = self.short_symbol),
            }
        }
    }
}

/// The banner for the usage message, attached to a whole binding.
///
/// ### Example
/// ```
/// # use optbind_builder as optbind;
/// use optbind::Usage;
///
/// let usage = Usage::new("cleaner")
///     .pre("Removes stale files.")
///     .post("Exit code 1 means something went wrong.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Usage {
    pub(crate) executable_name: Option<String>,
    pub(crate) pre_usage: Option<String>,
    pub(crate) post_usage: Option<String>,
}

impl Usage {
    /// Create a usage banner for the named executable.
    pub fn new(executable_name: impl Into<String>) -> Self {
        Self {
            executable_name: Some(executable_name.into()),
            pre_usage: None,
            post_usage: None,
        }
    }

    /// Text shown between the usage line and the options.
    pub fn pre(mut self, message: impl Into<String>) -> Self {
        self.pre_usage.replace(message.into());
        self
    }

    /// Text shown after the options.
    pub fn post(mut self, message: impl Into<String>) -> Self {
        self.post_usage.replace(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn option() {
        let descriptor = OptionDescriptor::option('i', "int value");
        assert_eq!(descriptor.short_symbol(), 'i');
        assert_eq!(descriptor.long_symbol(), None);
        assert!(!descriptor.is_required());
        assert_eq!(descriptor.description(), "int value");
        assert_eq!(descriptor.default_value(), None);
        assert!(!descriptor.is_target_option());
    }

    #[test]
    fn option_full() {
        let descriptor = OptionDescriptor::option('i', "int value")
            .long("int")
            .required()
            .initial(123);
        assert_eq!(descriptor.short_symbol(), 'i');
        assert_eq!(descriptor.long_symbol(), Some("int"));
        assert!(descriptor.is_required());
        assert_eq!(descriptor.default_value(), Some("123"));
    }

    #[test]
    fn option_empty_long() {
        let descriptor = OptionDescriptor::option('i', "").long("");
        assert_eq!(descriptor.long_symbol(), None);
    }

    #[test]
    fn target() {
        let descriptor = OptionDescriptor::target("a target").long("ignored");
        assert_eq!(descriptor.short_symbol(), ' ');
        assert_eq!(descriptor.long_symbol(), None);
        assert!(descriptor.is_target_option());
    }

    #[test]
    fn ordering() {
        let mut descriptors = vec![
            OptionDescriptor::option('s', "s"),
            OptionDescriptor::option('b', "b"),
            OptionDescriptor::target("target"),
            OptionDescriptor::option('B', "B"),
            OptionDescriptor::option('i', "i"),
        ];
        descriptors.sort();
        let shorts: Vec<char> = descriptors.iter().map(|d| d.short_symbol()).collect();
        assert_eq!(shorts, vec![' ', 'B', 'b', 'i', 's']);
    }

    #[rstest]
    #[case(OptionDescriptor::target("t"), "TARGET")]
    #[case(OptionDescriptor::option('s', "s"), "-s")]
    #[case(OptionDescriptor::option('s', "s").long("string"), "-s/--string")]
    fn display(#[case] descriptor: OptionDescriptor, #[case] expected: &str) {
        assert_eq!(descriptor.to_string(), expected);
    }

    #[test]
    fn usage() {
        assert_eq!(
            Usage::default(),
            Usage {
                executable_name: None,
                pre_usage: None,
                post_usage: None,
            }
        );
        assert_eq!(
            Usage::new("abc").pre("before").post("after"),
            Usage {
                executable_name: Some("abc".to_string()),
                pre_usage: Some("before".to_string()),
                post_usage: Some("after".to_string()),
            }
        );
    }
}

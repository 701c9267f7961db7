use terminal_size::{terminal_size, Width};

use crate::api::{OptionDescriptor, Usage};
use crate::constant::*;
use crate::matcher::Token;
use crate::model::OptionType;
use crate::parser::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We'll target 95% of the total width, to ensure the printer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;
// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_DESCRIPTION_WIDTH: usize = 17;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

/// Renders the usage message for a set of bound options.
#[derive(Debug, Clone)]
pub(crate) struct Printer {
    executable_name: Option<String>,
    pre_usage: Option<String>,
    post_usage: Option<String>,
    entries: Vec<(OptionDescriptor, OptionType)>,
    terminal_width: Option<usize>,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Usage::default(), Vec::default(), None)
    }

    pub(crate) fn terminal(usage: Usage, entries: Vec<(OptionDescriptor, OptionType)>) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(usage, entries, terminal_width)
    }

    /// Without a `terminal_width`, descriptions are never wrapped.
    pub(crate) fn new(
        usage: Usage,
        entries: Vec<(OptionDescriptor, OptionType)>,
        terminal_width: Option<usize>,
    ) -> Self {
        let Usage {
            executable_name,
            pre_usage,
            post_usage,
        } = usage;

        Self {
            executable_name,
            pre_usage,
            post_usage,
            entries,
            terminal_width,
        }
    }

    /// Use this executable name, unless one was declared.
    pub(crate) fn fallback_program(&mut self, name: impl Into<String>) {
        if self.executable_name.is_none() {
            self.executable_name.replace(name.into());
        }
    }

    pub(crate) fn program(&self) -> &str {
        self.executable_name.as_deref().unwrap_or(DEFAULT_PROGRAM)
    }

    pub(crate) fn print_usage(&self, user_interface: &(impl UserInterface + ?Sized)) {
        for line in self.render() {
            user_interface.print(line);
        }
    }

    pub(crate) fn render(&self) -> Vec<String> {
        let mut summary = vec![format!("[-{USAGE_SHORT}]")];
        let mut target_summary = None;
        let mut target_rows = Vec::default();
        let mut rows = vec![(format!("-{USAGE_SHORT}"), USAGE_MESSAGE.to_string())];

        for (descriptor, option_type) in &self.entries {
            let grammar = grammar(descriptor, *option_type);
            let description = match (descriptor.is_required(), descriptor.default_value()) {
                (true, _) => format!("{} (required)", descriptor.description()),
                (false, Some(value)) => format!("{} (default: {value})", descriptor.description()),
                (false, None) => descriptor.description().to_string(),
            };
            let item = if descriptor.is_target_option() {
                target_rows.push((grammar.clone(), description));
                grammar
            } else {
                let short = format!("-{}{grammar}", descriptor.short_symbol());
                let flags = match descriptor.long_symbol() {
                    Some(long) => format!("{short}, --{long}{grammar}"),
                    None => short.clone(),
                };
                rows.push((flags, description));
                short
            };
            let item = if descriptor.is_required() {
                item
            } else {
                format!("[{item}]")
            };

            if descriptor.is_target_option() {
                target_summary.replace(item);
            } else {
                summary.push(item);
            }
        }

        summary.extend(target_summary);
        target_rows.extend(rows);
        let rows = target_rows;

        let left_width = rows
            .iter()
            .map(|(left, _)| left.chars().count())
            .max()
            .unwrap_or_default();
        let (paragraph_width, description_width) = match self.terminal_width {
            Some(terminal_width) => {
                let total = (terminal_width as f64 * TARGET_TOTAL_FACTOR) as usize;
                let description_width = std::cmp::max(
                    total.saturating_sub(MAIN_INDENT + left_width + PADDING_WIDTH),
                    MINIMUM_DESCRIPTION_WIDTH,
                );
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Terminal width {terminal_width}, selecting description width {description_width}.");
                }
                (
                    Some(std::cmp::max(total, MINIMUM_DESCRIPTION_WIDTH)),
                    Some(description_width),
                )
            }
            None => (None, None),
        };

        let mut out = vec![format!(
            "usage: {p} {s}",
            p = self.program(),
            s = summary.join(" ")
        )];

        if let Some(pre_usage) = &self.pre_usage {
            out.push(String::default());
            out.extend(wrap(pre_usage, paragraph_width));
        }

        out.push(String::default());
        out.push("options:".to_string());

        let indent = MAIN_INDENT;
        let padding = PADDING_WIDTH;

        for (left, description) in rows {
            let mut parts = wrap(&description, description_width).into_iter();
            let first = parts.next().unwrap_or_default();
            out.push(
                format!("{:indent$}{left:left_width$}{:padding$}{first}", "", "")
                    .trim_end()
                    .to_string(),
            );

            for part in parts {
                out.push(format!(
                    "{:indent$}{:left_width$}{:padding$}{part}",
                    "", "", ""
                ));
            }
        }

        if let Some(post_usage) = &self.post_usage {
            out.push(String::default());
            out.extend(wrap(post_usage, paragraph_width));
        }

        out
    }
}

// The text after a flag, such as `" INT"` in `-i INT`.
// The target is displayed by its placeholder alone.
fn grammar(descriptor: &OptionDescriptor, option_type: OptionType) -> String {
    if descriptor.is_target_option() {
        TARGET_PLACEHOLDER.to_string()
    } else if option_type == OptionType::Boolean {
        String::default()
    } else {
        match descriptor.long_symbol() {
            Some(long) => format!(" {}", long.to_ascii_uppercase().replace('-', "_")),
            None => format!(" {}", option_type.placeholder()),
        }
    }
}

fn wrap(paragraph: &str, width: Option<usize>) -> Vec<String> {
    match width {
        Some(width) => chunk(paragraph, width),
        None => {
            let trimmed = paragraph.trim();

            if trimmed.is_empty() {
                Vec::default()
            } else {
                vec![trimmed.to_string()]
            }
        }
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    // width must be at least 2, so that each hyphenated line holds a character.
    let increment = width - 1;
    let characters: Vec<char> = word.chars().collect();
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

/// The tokens of a failed parse, displayed with a caret under the offending token.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[Token]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|t| t.text().to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        let (start, length) = match self.tokens.get(self.offset) {
            Some(token) => (
                self.tokens[..self.offset]
                    .iter()
                    .map(|t| t.chars().count() + 1)
                    .sum::<usize>(),
                std::cmp::max(1, token.chars().count()),
            ),
            // Past the end, point just after the final token.
            None if self.tokens.is_empty() => (0, 1),
            None => (projection.chars().count() + 1, 1),
        };

        write!(f, "{projection}\n{:start$}{}", "", "^".repeat(length))
    }
}

use crate::constant::*;
use crate::matcher::Token;

/// Flatten the raw Cli arguments into the tokens for matching.
///
/// An argument which holds a flag followed by a space, such as `-s "whatever"`, is split into the flag and its value.
/// Anything else is passed through as a single token.
/// In both cases, a surrounding pair of quotes is stripped.
pub(crate) fn tokenize(arguments: &[&str]) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(arguments.len());

    for argument in arguments {
        let stripped = strip_quotes(argument);

        match stripped.split_once(' ') {
            Some((flag, value)) if is_flag_shape(flag) => {
                tokens.push(Token::raw(flag));
                tokens.push(Token::value(remove_quotes(value)));
            }
            _ => tokens.push(Token::raw(stripped)),
        }
    }

    tokens
}

/// Whether the text looks like `-x` or `--name`.
pub(crate) fn is_flag_shape(text: &str) -> bool {
    if let Some(long) = text.strip_prefix("--") {
        !long.is_empty() && !long.starts_with('-')
    } else if let Some(short) = text.strip_prefix('-') {
        let mut characters = short.chars();
        matches!((characters.next(), characters.next()), (Some(c), None) if c != '-')
    } else {
        false
    }
}

fn strip_quotes(argument: &str) -> &str {
    for quote in QUOTES {
        if argument.len() >= 2 && argument.starts_with(quote) && argument.ends_with(quote) {
            return &argument[1..argument.len() - 1];
        }
    }

    argument
}

fn remove_quotes(value: &str) -> String {
    value.chars().filter(|c| !QUOTES.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn tokenize_empty() {
        assert!(tokenize(&[]).is_empty());
    }

    #[rstest]
    #[case(vec!["abc"], vec![Token::raw("abc")])]
    #[case(vec!["-s", "whatever"], vec![Token::raw("-s"), Token::raw("whatever")])]
    #[case(vec!["-s", "foo-bar"], vec![Token::raw("-s"), Token::raw("foo-bar")])]
    #[case(vec!["--string", "x"], vec![Token::raw("--string"), Token::raw("x")])]
    #[case(vec!["-?"], vec![Token::raw("-?")])]
    #[case(vec!["-"], vec![Token::raw("-")])]
    #[case(vec!["--"], vec![Token::raw("--")])]
    #[case(vec![""], vec![Token::raw("")])]
    fn tokenize_plain(#[case] arguments: Vec<&str>, #[case] expected: Vec<Token>) {
        assert_eq!(tokenize(&arguments), expected);
    }

    #[rstest]
    #[case(vec!["\"abc\""], vec![Token::raw("abc")])]
    #[case(vec!["'abc'"], vec![Token::raw("abc")])]
    #[case(vec!["\"foo-bar\""], vec![Token::raw("foo-bar")])]
    #[case(vec!["\"-s\""], vec![Token::raw("-s")])]
    #[case(vec!["\"\""], vec![Token::raw("")])]
    #[case(vec!["\""], vec![Token::raw("\"")])]
    #[case(vec!["\"abc'"], vec![Token::raw("\"abc'")])]
    #[case(vec!["ab\"c"], vec![Token::raw("ab\"c")])]
    fn tokenize_quoted(#[case] arguments: Vec<&str>, #[case] expected: Vec<Token>) {
        assert_eq!(tokenize(&arguments), expected);
    }

    #[rstest]
    #[case(vec!["-s \"whatever\""], vec![Token::raw("-s"), Token::value("whatever")])]
    #[case(vec!["-s whatever"], vec![Token::raw("-s"), Token::value("whatever")])]
    #[case(vec!["--string 'whatever'"], vec![Token::raw("--string"), Token::value("whatever")])]
    #[case(vec!["\"-s whatever\""], vec![Token::raw("-s"), Token::value("whatever")])]
    #[case(vec!["-s \"a b\""], vec![Token::raw("-s"), Token::value("a b")])]
    #[case(vec!["-s \"x\"y\""], vec![Token::raw("-s"), Token::value("xy")])]
    #[case(vec!["-i \"-5\""], vec![Token::raw("-i"), Token::value("-5")])]
    #[case(vec!["-s "], vec![Token::raw("-s"), Token::value("")])]
    #[case(
        vec!["-f", "-s \"whatever\""],
        vec![Token::raw("-f"), Token::raw("-s"), Token::value("whatever")]
    )]
    fn tokenize_combined(#[case] arguments: Vec<&str>, #[case] expected: Vec<Token>) {
        assert_eq!(tokenize(&arguments), expected);
    }

    #[rstest]
    #[case(vec!["hello world"], vec![Token::raw("hello world")])]
    #[case(vec!["\"hello world\""], vec![Token::raw("hello world")])]
    #[case(vec!["foo-bar baz"], vec![Token::raw("foo-bar baz")])]
    #[case(vec!["-abc value"], vec![Token::raw("-abc value")])]
    #[case(vec!["--- value"], vec![Token::raw("--- value")])]
    #[case(vec!["- value"], vec![Token::raw("- value")])]
    #[case(vec![" -s value"], vec![Token::raw(" -s value")])]
    fn tokenize_unsplit(#[case] arguments: Vec<&str>, #[case] expected: Vec<Token>) {
        assert_eq!(tokenize(&arguments), expected);
    }

    #[rstest]
    #[case("-s", true)]
    #[case("-?", true)]
    #[case("-1", true)]
    #[case("--string", true)]
    #[case("--a", true)]
    #[case("-", false)]
    #[case("--", false)]
    #[case("---", false)]
    #[case("---x", false)]
    #[case("-ab", false)]
    #[case("s", false)]
    #[case("", false)]
    fn flag_shape(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_flag_shape(text), expected);
    }
}

//! Built-in validation modes.
//!
//! Each function resolves one candidate against the working buffer the same way
//! a configured [`CharacterValidator`](super::CharacterValidator) would, but with
//! checks that need neighbouring characters and so can't be written as rules.

use super::context::CharContext;
use super::rule::{to_lower, to_upper, CharOutcome};

const EMAIL_SPECIAL_CHARACTERS: &str = "!#$%&'*+-/=?^_`{|}~";

/// How the decimal separator is treated by [`number`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalSeparator {
    /// Integers only
    None,
    /// One `.` or `,`
    PointOrComma,
    /// One `.`; a typed `,` becomes `.`
    ForcePoint,
}

fn accept_if(condition: bool, ch: char) -> CharOutcome {
    if condition {
        CharOutcome::Accept(ch)
    } else {
        CharOutcome::Reject
    }
}

/// Integer and decimal numbers with an optional leading minus sign
pub fn number(ch: char, ctx: &CharContext<'_>, separator: DecimalSeparator) -> CharOutcome {
    // Nothing may be typed in front of an existing leading '-'
    if ctx.position() == 0 && ctx.first() == Some('-') {
        return CharOutcome::Reject;
    }

    match ch {
        '0'..='9' => CharOutcome::Accept(ch),
        '-' => accept_if(ctx.position() == 0, ch),
        '.' | ',' => match separator {
            DecimalSeparator::None => CharOutcome::Reject,
            DecimalSeparator::PointOrComma => {
                accept_if(!ctx.contains('.') && !ctx.contains(','), ch)
            }
            DecimalSeparator::ForcePoint => accept_if(!ctx.contains('.'), '.'),
        },
        _ => CharOutcome::Reject,
    }
}

/// ASCII letters and digits
pub fn alphanumeric(ch: char) -> CharOutcome {
    accept_if(ch.is_ascii_alphanumeric(), ch)
}

/// Person names: capitalised words separated by single spaces, one apostrophe
pub fn name(ch: char, ctx: &CharContext<'_>) -> CharOutcome {
    let previous = ctx.previous();
    let next = ctx.next();

    if ch.is_alphabetic() {
        let word_start = previous.is_none() || previous == Some(' ');
        if ch.is_lowercase() && word_start {
            return CharOutcome::Accept(to_upper(ch));
        }
        if ch.is_uppercase() && !word_start && previous != Some('\'') {
            return CharOutcome::Accept(to_lower(ch));
        }
        return CharOutcome::Accept(ch);
    }

    let is_separator = |c: Option<char>| matches!(c, Some(' ') | Some('\''));
    let separated = !is_separator(previous) && !is_separator(next);

    match ch {
        '\'' => accept_if(!ctx.contains('\'') && separated, ch),
        ' ' => accept_if(separated, ch),
        _ => CharOutcome::Reject,
    }
}

/// Characters valid in an email address
pub fn email_address(ch: char, ctx: &CharContext<'_>) -> CharOutcome {
    if ch.is_alphanumeric() || EMAIL_SPECIAL_CHARACTERS.contains(ch) {
        return CharOutcome::Accept(ch);
    }

    match ch {
        '@' => accept_if(!ctx.contains('@'), ch),
        '.' => accept_if(ctx.previous() != Some('.') && ctx.next() != Some('.'), ch),
        _ => CharOutcome::Reject,
    }
}

/// Dotted IPv4 address: at most four sections of at most three digits
pub fn ip_address(ch: char, ctx: &CharContext<'_>) -> CharOutcome {
    let before = ctx.before;
    let last_dot = before.iter().rposition(|&c| c == '.');
    let digits_in_section = match last_dot {
        Some(dot) => before.len() - dot - 1,
        None => before.len(),
    };

    match ch {
        '0'..='9' => accept_if(digits_in_section < 3, ch),
        '.' => {
            let dots = before.iter().filter(|&&c| c == '.').count();
            accept_if(digits_in_section > 0 && dots < 3, ch)
        }
        _ => CharOutcome::Reject,
    }
}

/// Free text with the first letter of each sentence upper-cased
pub fn sentence(ch: char, ctx: &CharContext<'_>) -> CharOutcome {
    if ch.is_lowercase() {
        let before = ctx.before;
        let sentence_start = before.is_empty() || before.ends_with(&['.', ' ']);
        if sentence_start {
            return CharOutcome::Accept(to_upper(ch));
        }
    }
    CharOutcome::Accept(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_end(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn resolve(
        f: impl Fn(char, &CharContext<'_>) -> CharOutcome,
        text: &str,
        ch: char,
    ) -> CharOutcome {
        let buffer = at_end(text);
        f(ch, &CharContext::at_end_of(&buffer))
    }

    fn int(ch: char, ctx: &CharContext<'_>) -> CharOutcome {
        number(ch, ctx, DecimalSeparator::None)
    }

    fn dec(ch: char, ctx: &CharContext<'_>) -> CharOutcome {
        number(ch, ctx, DecimalSeparator::PointOrComma)
    }

    fn dec_point(ch: char, ctx: &CharContext<'_>) -> CharOutcome {
        number(ch, ctx, DecimalSeparator::ForcePoint)
    }

    #[test]
    fn test_integer() {
        assert_eq!(resolve(int, "", '-'), CharOutcome::Accept('-'));
        assert_eq!(resolve(int, "1", '-'), CharOutcome::Reject);
        assert_eq!(resolve(int, "-1", '2'), CharOutcome::Accept('2'));
        assert_eq!(resolve(int, "1", '.'), CharOutcome::Reject);
        assert_eq!(resolve(int, "1", 'a'), CharOutcome::Reject);
    }

    #[test]
    fn test_nothing_before_leading_minus() {
        let after = at_end("-5");
        let ctx = CharContext::new(&[], &after, 0);
        assert_eq!(number('3', &ctx, DecimalSeparator::None), CharOutcome::Reject);
    }

    #[test]
    fn test_decimal_single_separator() {
        assert_eq!(resolve(dec, "1", ','), CharOutcome::Accept(','));
        assert_eq!(resolve(dec, "1,5", '.'), CharOutcome::Reject);
        assert_eq!(resolve(dec, "1.5", '.'), CharOutcome::Reject);
    }

    #[test]
    fn test_decimal_force_point() {
        assert_eq!(resolve(dec_point, "1", ','), CharOutcome::Accept('.'));
        assert_eq!(resolve(dec_point, "1.2", ','), CharOutcome::Reject);
    }

    #[test]
    fn test_alphanumeric() {
        assert_eq!(alphanumeric('a'), CharOutcome::Accept('a'));
        assert_eq!(alphanumeric('7'), CharOutcome::Accept('7'));
        assert_eq!(alphanumeric('_'), CharOutcome::Reject);
        assert_eq!(alphanumeric('é'), CharOutcome::Reject);
    }

    #[test]
    fn test_name_capitalisation() {
        assert_eq!(resolve(name, "", 'j'), CharOutcome::Accept('J'));
        assert_eq!(resolve(name, "J", 'O'), CharOutcome::Accept('o'));
        assert_eq!(resolve(name, "John ", 's'), CharOutcome::Accept('S'));
        assert_eq!(resolve(name, "O'", 'N'), CharOutcome::Accept('N'));
    }

    #[test]
    fn test_name_separators() {
        assert_eq!(resolve(name, "John ", ' '), CharOutcome::Reject);
        assert_eq!(resolve(name, "O'", '\''), CharOutcome::Reject);
        assert_eq!(resolve(name, "O'Neil", '\''), CharOutcome::Reject);
        assert_eq!(resolve(name, "John", '-'), CharOutcome::Reject);
    }

    #[test]
    fn test_email_address() {
        assert_eq!(resolve(email_address, "me", '@'), CharOutcome::Accept('@'));
        assert_eq!(resolve(email_address, "me@x", '@'), CharOutcome::Reject);
        assert_eq!(resolve(email_address, "me@x", '.'), CharOutcome::Accept('.'));
        assert_eq!(resolve(email_address, "me@x.", '.'), CharOutcome::Reject);
        assert_eq!(resolve(email_address, "me", '+'), CharOutcome::Accept('+'));
        assert_eq!(resolve(email_address, "me", ' '), CharOutcome::Reject);
    }

    #[test]
    fn test_ip_address() {
        assert_eq!(resolve(ip_address, "", '.'), CharOutcome::Reject);
        assert_eq!(resolve(ip_address, "192", '1'), CharOutcome::Reject);
        assert_eq!(resolve(ip_address, "192", '.'), CharOutcome::Accept('.'));
        assert_eq!(resolve(ip_address, "192.", '.'), CharOutcome::Reject);
        assert_eq!(resolve(ip_address, "192.168.0", '.'), CharOutcome::Accept('.'));
        assert_eq!(resolve(ip_address, "192.168.0.1", '.'), CharOutcome::Reject);
        assert_eq!(resolve(ip_address, "192.16", '8'), CharOutcome::Accept('8'));
    }

    #[test]
    fn test_sentence() {
        assert_eq!(resolve(sentence, "", 'h'), CharOutcome::Accept('H'));
        assert_eq!(resolve(sentence, "Hi. ", 't'), CharOutcome::Accept('T'));
        assert_eq!(resolve(sentence, "Hi ", 't'), CharOutcome::Accept('t'));
        assert_eq!(resolve(sentence, "Hi", '!'), CharOutcome::Accept('!'));
    }
}

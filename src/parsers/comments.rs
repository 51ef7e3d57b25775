use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::is_not;
use nom::character::complete::char;
use nom::combinator::{opt, value};
use nom::sequence::pair;

/// Recognizes a `#` comment running to the end of the line.
pub fn ignore_comment_line<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value((), pair(char('#'), opt(is_not("\r\n"))))(input.into())
}

/// Blank lines and comment lines carry no content and are skipped by the
/// problem parser.
pub fn is_ignored_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || ignore_comment_line(trimmed).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn just_hash() {
        let (remainder, ()) = ignore_comment_line("#").unwrap();
        assert!(remainder.is_empty());
    }

    #[test]
    fn comment_with_text() {
        let (remainder, ()) = ignore_comment_line("# the fastest goes back").unwrap();
        assert!(remainder.is_empty());
    }

    #[test]
    fn ignored_lines() {
        assert!(is_ignored_line(""));
        assert!(is_ignored_line("   "));
        assert!(is_ignored_line("# comment"));
        assert!(is_ignored_line("  # indented comment"));
        assert!(!is_ignored_line("A 1"));
        assert!(!is_ignored_line("END"));
    }
}

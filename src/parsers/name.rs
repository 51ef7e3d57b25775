use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::is_not;
use nom::combinator::map;

/// Parses a name token: any non-empty run of non-whitespace characters.
pub fn parse_name<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, String> {
    map(is_not(" \t\r\n"), |span: Span| span.fragment().to_string())(input.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token() {
        let (remainder, name) = parse_name("Grandma 12").unwrap();
        assert_eq!(name, "Grandma");
        assert_eq!(remainder.fragment(), &" 12");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_name("").is_err());
        assert!(parse_name(" leading").is_err());
    }
}

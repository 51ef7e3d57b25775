use crate::parsers::{ParseResult, Span};
use nom::character::complete::{digit1, one_of};
use nom::combinator::{opt, recognize};
use nom::error::{ErrorKind, ParseError as NomParseError};
use nom::sequence::pair;

/// Parses an optionally signed run of digits into an `i64`. Range and
/// positivity checks are the caller's concern; this only decides whether the
/// field looks like an integer at all.
pub fn parse_integer<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, i64> {
    let input = input.into();
    let (remainder, matched) = recognize(pair(opt(one_of("+-")), digit1))(input)?;
    match matched.fragment().parse::<i64>() {
        Ok(value) => Ok((remainder, value)),
        Err(_) => Err(nom::Err::Error(NomParseError::from_error_kind(
            matched,
            ErrorKind::Digit,
        ))),
    }
}

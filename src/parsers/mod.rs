//! nom parsers for the line-oriented problem file format.

mod comments;
mod integer;
mod name;
mod problem;

pub use comments::{ignore_comment_line, is_ignored_line};
pub use integer::parse_integer;
pub use name::parse_name;
pub use problem::parse_problem_text;

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

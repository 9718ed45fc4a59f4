use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::is_not;
use nom::character::complete::{multispace0, one_of};
use nom::combinator::{opt, value};
use nom::multi::many0_count;
use nom::sequence::{pair, preceded};

/// Consumes whitespace (newlines included) together with any number of `;`
/// or `#` comments running to the end of their line.
pub fn skip_blank_and_comments<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value(
        (),
        pair(
            multispace0,
            many0_count(preceded(
                pair(one_of(";#"), opt(is_not("\r\n"))),
                multispace0,
            )),
        ),
    )(input.into())
}

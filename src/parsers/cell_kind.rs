use crate::parsers::{ParseResult, Span};
use crate::search::CellKind;
use nom::character::complete::anychar;
use nom::combinator::map_opt;

/// Parses a single cell code.
pub fn parse_cell_kind<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, CellKind> {
    map_opt(anychar, CellKind::from_symbol)(input.into())
}

use crate::parsers::{parse_cell_kind, skip_blank_and_comments, ParseResult, Span};
use crate::search::CellKind;
use nom::character::complete::space0;
use nom::combinator::all_consuming;
use nom::multi::many1;
use nom::sequence::{preceded, terminated};

/// Parses one row: a run of cell codes on a single line, optionally separated
/// by spaces or tabs.
pub fn parse_row<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Vec<CellKind>> {
    many1(preceded(space0, parse_cell_kind))(input.into())
}

/// Parses a whole grid file into its rows. The rows are not checked for
/// rectangularity here, see [`Grid::new`](crate::search::Grid::new).
pub fn parse_grid_rows<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Vec<Vec<CellKind>>> {
    all_consuming(terminated(
        many1(preceded(skip_blank_and_comments, parse_row)),
        skip_blank_and_comments,
    ))(input.into())
}

//! Parsers for the plain-text grid format.
//!
//! A grid file holds one row per line. Cells are the single-character codes
//! of [`CellKind`](crate::search::CellKind) and may be separated by spaces or
//! tabs. Blank lines and lines starting with `;` or `#` are ignored.

mod cell_kind;
mod comments;
mod grid;
mod utilities;

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

// Parsers
pub use cell_kind::parse_cell_kind;
pub use comments::skip_blank_and_comments;
pub use grid::{parse_grid_rows, parse_row};

pub(crate) use utilities::error_location;

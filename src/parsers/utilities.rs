//! Error reporting helpers.

use crate::parsers::ParseError;
use nom_greedyerror::error_position;

/// Converts a parse failure into a one-based `(line, column)` pair within
/// `text`. Columns count characters, not bytes.
pub fn error_location(text: &str, error: &nom::Err<ParseError>) -> (usize, usize) {
    let offset = match error {
        nom::Err::Error(e) | nom::Err::Failure(e) => error_position(e).unwrap_or(0),
        nom::Err::Incomplete(_) => text.len(),
    };
    let offset = offset.min(text.len());
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |index| index + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_grid_rows;

    #[test]
    fn locates_bad_symbol() {
        let text = "C__\n_X_\n__S";
        let error = parse_grid_rows(text).unwrap_err();
        assert_eq!(error_location(text, &error), (2, 2));
    }

    #[test]
    fn locates_bad_symbol_on_first_line() {
        let text = "C_?S";
        let error = parse_grid_rows(text).unwrap_err();
        assert_eq!(error_location(text, &error), (1, 3));
    }
}

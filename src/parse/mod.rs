mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub use parser::{COLUMNS, IssueKind, ParsedRules, RowIssue};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse header-row CSV text into [`ParsedRules`].
///
/// Blank lines are skipped and the first remaining line is the header.
/// Rows narrower or wider than the header, and a quoted field left open
/// until the end of input, are kept and reported in [`ParsedRules::issues`].
///
/// # Errors
///
/// Returns [`ParseError`] if the grammar cannot consume the text as a table.
pub fn parse(input: &str) -> Result<ParsedRules, ParseError> {
    use winnow::Parser;

    let body = input.strip_prefix(BYTE_ORDER_MARK).unwrap_or(input);
    let skipped = input.len() - body.len();

    let raw = grammar::parse_records
        .parse(body)
        .map_err(|e| ParseError::new(e.inner().to_string(), skipped + e.offset()))?;
    Ok(parser::build(raw))
}

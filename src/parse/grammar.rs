use winnow::combinator::{alt, opt, separated};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// One physical record as read from the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub fields: Vec<String>,
    /// A quoted field in this record was never closed and ran to the end of
    /// the input.
    pub unterminated: bool,
}

struct Field {
    text: String,
    closed: bool,
}

// -- Line endings -----------------------------------------------------------

fn line_ending<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt(("\r\n", "\n", "\r")).parse_next(input)
}

fn is_field_end(c: char) -> bool {
    c == DELIMITER || c == '\r' || c == '\n'
}

// -- Fields -----------------------------------------------------------------

fn unquoted_field(input: &mut &str) -> ModalResult<Field> {
    take_while(0.., |c: char| !is_field_end(c))
        .map(|text: &str| Field {
            text: text.to_owned(),
            closed: true,
        })
        .parse_next(input)
}

/// `"..."` with `""` as an escaped quote. May span lines. Text between the
/// closing quote and the next delimiter is kept as-is. A missing closing
/// quote takes everything up to the end of input.
fn quoted_field(input: &mut &str) -> ModalResult<Field> {
    QUOTE.parse_next(input)?;
    let mut text = String::new();
    loop {
        let chunk = take_while(0.., |c: char| c != QUOTE).parse_next(input)?;
        text.push_str(chunk);
        if opt(QUOTE).parse_next(input)?.is_none() {
            return Ok(Field { text, closed: false });
        }
        if opt(QUOTE).parse_next(input)?.is_some() {
            text.push(QUOTE);
        } else {
            break;
        }
    }
    let trailing = take_while(0.., |c: char| !is_field_end(c)).parse_next(input)?;
    text.push_str(trailing);
    Ok(Field { text, closed: true })
}

fn field(input: &mut &str) -> ModalResult<Field> {
    alt((quoted_field, unquoted_field)).parse_next(input)
}

// -- Records ----------------------------------------------------------------

fn record(input: &mut &str) -> ModalResult<RawRecord> {
    let fields: Vec<Field> = separated(1.., field, DELIMITER).parse_next(input)?;
    let unterminated = fields.iter().any(|f| !f.closed);
    Ok(RawRecord {
        fields: fields.into_iter().map(|f| f.text).collect(),
        unterminated,
    })
}

/// A record made of one empty field is a blank line.
pub(super) fn is_blank(record: &RawRecord) -> bool {
    !record.unterminated && matches!(record.fields.as_slice(), [only] if only.is_empty())
}

// -- Top-level parser -------------------------------------------------------

/// Every record in the input, blank lines included. A single trailing line
/// ending does not produce an extra record.
pub fn parse_records(input: &mut &str) -> ModalResult<Vec<RawRecord>> {
    let mut records = Vec::new();
    loop {
        records.push(record.parse_next(input)?);
        if input.is_empty() {
            break;
        }
        line_ending.parse_next(input)?;
        if input.is_empty() {
            break;
        }
    }
    Ok(records)
}

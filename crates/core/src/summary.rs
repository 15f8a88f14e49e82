//! Row splitting for the operator summary table.
//!
//! The summary rows are plain prose lines, so the fields are recovered
//! with an explicit rule rather than a pattern that matches anything:
//! the operator name is everything before the first whitespace run, and
//! the page number is the last whitespace-delimited token when that
//! token is all ASCII digits. Rows that cannot carry a name at all are
//! a reported error instead of a silent wrong split.

use crate::error::{OpgenError, Result};

/// A summary-table row split into its fields.
///
/// `text` holds the PostScript equivalent (when present) together with
/// the description; the source table puts no delimiter between the two,
/// so they stay one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRow<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub page: Option<u32>,
}

/// Split one summary row into operator name, text and page number.
///
/// A row with no whitespace at all (e.g. `'`) is a bare operator name
/// with empty text and no page. A digit run glued to a word is left in
/// the text; only a whole trailing token is taken as the page number.
pub fn split_row(line: &str) -> Result<SummaryRow<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return Err(OpgenError::EmptyRow);
    }

    let (name, rest) = match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], line[pos..].trim_start()),
        None => (line, ""),
    };

    let (text, page) = match rest.rsplit_once(char::is_whitespace) {
        Some((head, tail)) if is_page_token(tail) => (head.trim_end(), tail.parse().ok()),
        _ if is_page_token(rest) => ("", rest.parse().ok()),
        _ => (rest, None),
    };

    Ok(SummaryRow { name, text, page })
}

fn is_page_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_text_and_page() {
        let row = split_row("m moveto Begin new subpath 59").unwrap();
        assert_eq!(row.name, "m");
        assert_eq!(row.text, "moveto Begin new subpath");
        assert_eq!(row.page, Some(59));
    }

    #[test]
    fn page_is_optional() {
        let row = split_row("Tc Set character spacing").unwrap();
        assert_eq!(row.name, "Tc");
        assert_eq!(row.text, "Set character spacing");
        assert_eq!(row.page, None);
    }

    #[test]
    fn bare_operator_has_empty_text() {
        let row = split_row("'").unwrap();
        assert_eq!(row.name, "'");
        assert_eq!(row.text, "");
        assert_eq!(row.page, None);
    }

    #[test]
    fn glued_digits_stay_in_text() {
        let row = split_row("d0 Set glyph width in Type3").unwrap();
        assert_eq!(row.text, "Set glyph width in Type3");
        assert_eq!(row.page, None);
    }

    #[test]
    fn empty_row_is_an_error() {
        assert!(matches!(split_row("   "), Err(OpgenError::EmptyRow)));
    }
}

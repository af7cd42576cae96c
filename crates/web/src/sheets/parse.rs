//! CSV decoding into [`Sheet`]s.

use redline_core::Sheet;
use thiserror::Error;

/// Errors produced while decoding a sheet export body.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The content is not valid CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The content has no header row.
    #[error("sheet export has no header row")]
    MissingHeader,
}

/// Parse comma-separated text with a header row into a [`Sheet`].
///
/// Ragged rows are tolerated; [`Sheet::new`] normalizes them to the header
/// width. Row order is preserved.
///
/// # Errors
///
/// Returns `ParseError` when the content cannot be decoded as CSV or the
/// header row is absent.
pub fn parse_sheet(text: &str) -> Result<Sheet, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(ParseError::MissingHeader);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Sheet::new(headers, rows))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_header_and_rows() {
        let sheet = parse_sheet("Name,Password\nAlice,a1\nBob,b2\n").unwrap();
        assert_eq!(sheet.headers(), ["Name", "Password"]);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.value(0, "Name"), Some("Alice"));
        assert_eq!(sheet.value(1, "Password"), Some("b2"));
    }

    #[test]
    fn test_preserves_row_order() {
        let sheet = parse_sheet("Buyer\nCharlie\nAlice\nBob\n").unwrap();
        let buyers: Vec<_> = (0..3).map(|i| sheet.value(i, "Buyer").unwrap()).collect();
        assert_eq!(buyers, ["Charlie", "Alice", "Bob"]);
    }

    #[test]
    fn test_quoted_fields() {
        let sheet =
            parse_sheet("Model,Price\n\"Custom, with comma\",500\n\"He said \"\"hi\"\"\",5\n")
                .unwrap();
        assert_eq!(sheet.value(0, "Model"), Some("Custom, with comma"));
        assert_eq!(sheet.value(1, "Model"), Some("He said \"hi\""));
    }

    #[test]
    fn test_ragged_rows_are_normalized() {
        let sheet = parse_sheet("A,B,C\n1\n1,2,3,4\n").unwrap();
        assert_eq!(sheet.value(0, "B"), Some(""));
        assert_eq!(sheet.value(1, "C"), Some("3"));
    }

    #[test]
    fn test_header_only_is_empty_sheet() {
        let sheet = parse_sheet("Name,Password\n").unwrap();
        assert!(sheet.is_empty());
        assert_eq!(sheet.headers().len(), 2);
    }

    #[test]
    fn test_empty_content_is_missing_header() {
        assert!(matches!(parse_sheet(""), Err(ParseError::MissingHeader)));
        assert!(matches!(parse_sheet("\n"), Err(ParseError::MissingHeader)));
    }
}

//! In-memory tabular data, as parsed from a sheet's CSV export.

use serde::{Deserialize, Serialize};

/// A table of named columns with textual cells.
///
/// Row order from the source is preserved; display code relies on it. Rows are
/// normalized to the header width on construction, so cell lookups never fall
/// off the end of a ragged row.
///
/// Header names are assumed unique. Lookups return the first matching column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Create a sheet from a header row and data rows.
    ///
    /// Short rows are padded with empty cells and long rows truncated, so
    /// every row has exactly one cell per header.
    #[must_use]
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { headers, rows }
    }

    /// The header row.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The data rows, in source order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the sheet has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with the given header, if any.
    ///
    /// Matching is exact: case-sensitive, no trimming.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// The cell at `(row, column-name)`, if both exist.
    #[must_use]
    pub fn value(&self, row: usize, name: &str) -> Option<&str> {
        let col = self.column(name)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// A new sheet with the same headers and only the rows accepted by
    /// `keep`, in source order.
    #[must_use]
    pub fn retain_rows(&self, mut keep: impl FnMut(&[String]) -> bool) -> Self {
        Self {
            headers: self.headers.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| keep(row))
                .cloned()
                .collect(),
        }
    }
}

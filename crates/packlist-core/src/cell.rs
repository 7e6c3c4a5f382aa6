//! Cell value types

/// Represents the value read from one grid cell.
///
/// Date/time cells arrive from the file reader as serial numbers or ISO
/// strings; the core carries them through without interpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell (no value)
    Empty,

    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Numeric value (all numbers stored as f64, including serial dates)
    Number(f64),

    /// String value
    String(String),
}

impl CellValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(s.into())
    }

    /// Check if the cell has no value at all
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell is empty or holds an empty string.
    ///
    /// This is the blankness test used by the extraction terminator: only
    /// a missing value or a zero-length string counts, the way the source
    /// format leaves terminated regions.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Trimmed human text of the value.
    ///
    /// `Empty` becomes `""`; whole numbers render without a fractional
    /// part so codes typed as numbers ("12") round-trip cleanly.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::String(s) => s.trim().to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::String(s.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::String(s)
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

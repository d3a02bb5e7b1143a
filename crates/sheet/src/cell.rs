use std::fmt;

/// Represents a cell value in a sheet
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// A spreadsheet formula, stored with its leading `=`.
    Formula(String),
}

impl CellValue {
    /// Create a formula cell value.
    #[must_use]
    pub fn formula<S: Into<String>>(source: S) -> Self {
        CellValue::Formula(source.into())
    }

    /// Check if the value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Try to get the value as a float
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(f) => Some(*f),
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::String(s) => s.trim().parse().ok(),
            CellValue::Null | CellValue::Formula(_) => None,
        }
    }

    /// Get the value as a string
    #[must_use]
    pub fn as_str(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::String(s) | CellValue::Formula(s) => s.clone(),
        }
    }

    /// Whether this is a string cell holding exactly `text`.
    #[must_use]
    pub fn is_text(&self, text: &str) -> bool {
        matches!(self, CellValue::String(s) if s == text)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, ""),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(fl) => write!(f, "{fl}"),
            CellValue::String(s) | CellValue::Formula(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<usize> for CellValue {
    fn from(i: usize) -> Self {
        i64::try_from(i).map_or(CellValue::Float(i as f64), CellValue::Int)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(CellValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(CellValue::Null.as_str(), "");
        assert_eq!(CellValue::Int(7).as_str(), "7");
        assert_eq!(CellValue::from("S1").as_str(), "S1");
        assert_eq!(CellValue::formula("=A1 / A2").as_str(), "=A1 / A2");
    }

    #[test]
    fn test_as_float() {
        assert_eq!(CellValue::Int(3).as_float(), Some(3.0));
        assert_eq!(CellValue::from(" 2.5 ").as_float(), Some(2.5));
        assert_eq!(CellValue::Null.as_float(), None);
        assert_eq!(CellValue::from("n/a").as_float(), None);
    }

    #[test]
    fn test_is_text() {
        assert!(CellValue::from("Filename").is_text("Filename"));
        assert!(!CellValue::from("filename").is_text("Filename"));
        assert!(!CellValue::Int(1).is_text("1"));
    }

    #[test]
    fn test_formula_is_not_text() {
        let formula = CellValue::formula("=A1 / A2");
        assert_ne!(formula, CellValue::from("=A1 / A2"));
        assert!(!formula.is_text("=A1 / A2"));
        assert_eq!(formula.clone(), formula);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(CellValue::from(None::<f64>), CellValue::Null);
        assert_eq!(CellValue::from(Some(1.5)), CellValue::Float(1.5));
    }
}

use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use indexmap::IndexMap;

/// A book containing multiple sheets (preserves insertion order)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Book {
    sheets: IndexMap<String, Sheet>,
}

impl Book {
    /// Create a new empty book
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of sheets
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the book is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get all sheet names in order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .get(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Add a sheet to the end of the book
    pub fn add_sheet(&mut self, name: &str, sheet: Sheet) -> Result<()> {
        if self.sheets.contains_key(name) {
            return Err(SheetError::SheetAlreadyExists {
                name: name.to_string(),
            });
        }

        let mut sheet = sheet;
        sheet.set_name(name);
        self.sheets.insert(name.to_string(), sheet);
        Ok(())
    }

    /// Iterate over `(name, sheet)` pairs in book order
    pub fn sheets(&self) -> impl Iterator<Item = (&str, &Sheet)> {
        self.sheets.iter().map(|(name, sheet)| (name.as_str(), sheet))
    }

    /// Iterate mutably over `(name, sheet)` pairs in book order
    pub fn sheets_mut(&mut self) -> impl Iterator<Item = (&str, &mut Sheet)> {
        self.sheets
            .iter_mut()
            .map(|(name, sheet)| (name.as_str(), sheet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_preserves_order() {
        let mut book = Book::new();
        book.add_sheet("Gly", Sheet::new()).unwrap();
        book.add_sheet("Ala", Sheet::new()).unwrap();
        book.add_sheet("Nor", Sheet::new()).unwrap();

        assert_eq!(book.sheet_names(), vec!["Gly", "Ala", "Nor"]);
    }

    #[test]
    fn test_add_sheet_sets_name() {
        let mut book = Book::new();
        book.add_sheet("Gly", Sheet::new()).unwrap();
        assert_eq!(book.get_sheet("Gly").unwrap().name(), "Gly");
    }

    #[test]
    fn test_duplicate_sheet_rejected() {
        let mut book = Book::new();
        book.add_sheet("Gly", Sheet::new()).unwrap();
        let err = book.add_sheet("Gly", Sheet::new()).unwrap_err();
        assert!(matches!(err, SheetError::SheetAlreadyExists { .. }));
    }

    #[test]
    fn test_missing_sheet() {
        let book = Book::new();
        assert!(matches!(
            book.get_sheet("Nor"),
            Err(SheetError::SheetNotFound { .. })
        ));
        assert!(book.is_empty());
    }
}

//! Table cleaning: blank markers become missing, empty rows and columns go.

use crate::config::TransposeConfig;
use peaktable_sheet::{Book, Sheet};
use tracing::{debug, info};

/// Removes fully-missing rows and columns from tables.
#[derive(Debug, Clone)]
pub struct Cleaner {
    blank_marker: String,
    reset_index: bool,
}

impl Cleaner {
    /// A cleaner that keeps row index labels intact.
    #[must_use]
    pub fn new(config: &TransposeConfig) -> Self {
        Cleaner {
            blank_marker: config.blank_marker.clone(),
            reset_index: false,
        }
    }

    /// Whether surviving rows are renumbered `0..n` after removal.
    #[must_use]
    pub fn reset_index(mut self, reset_index: bool) -> Self {
        self.reset_index = reset_index;
        self
    }

    /// Clean one table in place.
    pub fn clean_sheet(&self, sheet: &mut Sheet) {
        let blanks = sheet.replace_blank(&self.blank_marker);
        let rows = sheet.drop_empty_rows(self.reset_index);
        let cols = sheet.drop_empty_columns();
        debug!(
            "Cleaned sheet {}: {} blank cells, {} empty rows, {} empty columns",
            sheet.name(),
            blanks,
            rows,
            cols
        );
    }

    /// Clean every table of a book, keeping sheet names and order.
    #[must_use]
    pub fn clean_book(&self, mut book: Book) -> Book {
        info!("Removing rows and columns containing only missing values");
        for (_, sheet) in book.sheets_mut() {
            self.clean_sheet(sheet);
        }
        book
    }
}

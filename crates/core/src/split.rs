//! Header/value splitting of raw instrument sheets.
//!
//! Each raw sheet holds a free-form metadata block, then a row whose first
//! cell is the separator value, then the per-sample table. The separator row
//! labels the value columns; the first metadata row labels the header columns.

use crate::clean::Cleaner;
use crate::config::TransposeConfig;
use crate::error::{TransposeError, TransposeResult};
use indexmap::IndexMap;
use peaktable_sheet::{Book, Sheet};
use tracing::{debug, info, warn};

/// A raw sheet divided at its separator row.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSheet {
    /// Metadata block, labelled by its first row.
    pub header: Sheet,
    /// Value block, labelled by the separator row and indexed by the
    /// separator column (the sample identifiers).
    pub values: Sheet,
}

/// Split sheets keyed by sheet name, in workbook order.
pub type SplitBook = IndexMap<String, SplitSheet>;

/// Splits raw sheets into header and value regions.
#[derive(Debug, Clone)]
pub struct Splitter {
    separator: String,
    cleaner: Cleaner,
}

impl Splitter {
    #[must_use]
    pub fn new(config: &TransposeConfig) -> Self {
        Splitter {
            separator: config.separator.clone(),
            cleaner: Cleaner::new(config).reset_index(false),
        }
    }

    /// Position of the separator row.
    ///
    /// # Errors
    ///
    /// Returns `TransposeError::SeparatorNotFound` if no row starts with the separator.
    pub fn find_separator(&self, name: &str, sheet: &Sheet) -> TransposeResult<usize> {
        let mut matches = sheet
            .rows()
            .enumerate()
            .filter(|(_, row)| row.first().is_some_and(|cell| cell.is_text(&self.separator)))
            .map(|(position, _)| position);

        let position = matches
            .next()
            .ok_or_else(|| TransposeError::SeparatorNotFound {
                sheet: name.to_string(),
                separator: self.separator.clone(),
            })?;

        let extra = matches.count();
        if extra > 0 {
            warn!(
                "Sheet {} has {} more '{}' rows after row {}; splitting at the first",
                name, extra, self.separator, position
            );
        }
        Ok(position)
    }

    /// Split one raw sheet.
    ///
    /// Rows before the separator form the header region, rows from the
    /// separator on form the value region. Each region's first row becomes
    /// its column labels; both regions are then cleaned with their index
    /// labels preserved.
    pub fn split_sheet(&self, name: &str, sheet: &Sheet) -> TransposeResult<SplitSheet> {
        let position = self.find_separator(name, sheet)?;
        debug!("Splitting sheet {} at row {}", name, position);

        let mut header = sheet.slice_rows(0..position);
        header.promote_header_row()?;

        let mut values = sheet.slice_rows(position..sheet.row_count());
        values.promote_header_row()?;
        values.set_index_column(&self.separator)?;

        self.cleaner.clean_sheet(&mut header);
        self.cleaner.clean_sheet(&mut values);

        Ok(SplitSheet { header, values })
    }

    /// Split every sheet of a book. The first sheet without a separator
    /// aborts the whole split.
    pub fn split_book(&self, book: &Book) -> TransposeResult<SplitBook> {
        info!("Splitting sheets into header and values sections");
        let mut split = SplitBook::with_capacity(book.sheet_count());
        for (name, sheet) in book.sheets() {
            let parts = self.split_sheet(name, sheet)?;
            debug!(
                "Sheet {}: {} header rows, {} value rows",
                name,
                parts.header.row_count(),
                parts.values.row_count()
            );
            split.insert(name.to_string(), parts);
        }
        Ok(split)
    }
}

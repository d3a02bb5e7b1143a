//! Sheet/Book model for peaktable
//!
//! Provides the tabular types the transposition engine works on, plus the
//! spreadsheet adapters that move them in and out of files.
//!
//! # Examples
//!
//! ## Labelling a table
//!
//! ```
//! use peaktable_sheet::{CellValue, Sheet};
//!
//! let mut sheet = Sheet::from_data(vec![
//!     vec!["Filename", "Area", "RT"],
//!     vec!["S1", "1200", "3.4"],
//! ]);
//!
//! sheet.promote_header_row().unwrap();
//! sheet.set_index_column("Filename").unwrap();
//!
//! assert_eq!(sheet.index_name(), Some("Filename"));
//! assert_eq!(sheet.index(), &[CellValue::from("S1")]);
//! assert_eq!(sheet.get_by_name(0, "RT").unwrap().as_str(), "3.4");
//! ```
//!
//! ## Working with books
//!
//! ```
//! use peaktable_sheet::{Book, Sheet};
//!
//! let mut book = Book::new();
//! book.add_sheet("Gly", Sheet::new()).unwrap();
//! book.add_sheet("Nor", Sheet::new()).unwrap();
//!
//! assert_eq!(book.sheet_names(), vec!["Gly", "Nor"]);
//! ```
//!
//! ## Cell references
//!
//! ```
//! use peaktable_sheet::{column_index_to_letters, sheet_reference};
//!
//! assert_eq!(column_index_to_letters(27), "AB");
//! assert_eq!(sheet_reference("Aggregates", 1, 1), "Aggregates!B2");
//! ```

mod a1_notation;
mod book;
mod cell;
mod csv;
mod error;
mod sheet;
mod xlsx;

/// Re-export A1 notation helpers.
pub use a1_notation::{
    column_index_to_letters, parse_a1, parse_column_letters, sheet_reference, to_a1_notation,
};
/// Re-export book type.
pub use book::Book;
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export sheet type.
pub use sheet::Sheet;
/// Re-export XLSX write options.
pub use xlsx::XlsxWriteOptions;

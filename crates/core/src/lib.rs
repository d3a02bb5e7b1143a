//! # peaktable-core
//!
//! Reshapes per-compound instrument sheets into one compound-by-sample table
//! plus a parallel table of ratio formulas.
//!
//! Stages, in order:
//! - [`Cleaner`]: blank markers become missing, empty rows and columns go
//! - [`Splitter`]: each sheet is cut at its separator row into header and values
//! - [`Transposer`]: value tables are pivoted into the wide table
//! - [`FormulaGenerator`]: every wide-table cell is divided by the
//!   normalization compound's cell in the same column
//!
//! ```
//! use peaktable_core::{Pipeline, TransposeConfig};
//! use peaktable_sheet::{Book, CellValue, Sheet};
//!
//! let raw = |area: f64| {
//!     Sheet::from_rows(vec![
//!         vec![CellValue::from("Compound")],
//!         vec!["Filename".into(), "Area".into(), "RT".into()],
//!         vec!["S1".into(), CellValue::Float(area), CellValue::Float(1.5)],
//!     ])
//! };
//! let mut book = Book::new();
//! book.add_sheet("Gly", raw(10.0)).unwrap();
//! book.add_sheet("Nor", raw(5.0)).unwrap();
//!
//! let pipeline = Pipeline::new(TransposeConfig::default()).unwrap();
//! let result = pipeline.transpose(&book).unwrap();
//! assert_eq!(
//!     result.formulas.get_by_name(0, "S1_Area").unwrap().as_str(),
//!     "=Aggregates!C2 / Aggregates!C3"
//! );
//! ```

/// Table cleaning.
pub mod clean;
/// Run configuration.
pub mod config;
/// Error types and result aliases.
pub mod error;
/// Ratio formula generation.
pub mod formulas;
/// End-to-end orchestration.
pub mod pipeline;
/// Header/value splitting.
pub mod split;
/// Wide-table pivot.
pub mod transpose;

pub use clean::Cleaner;
pub use config::{RtNaming, TransposeConfig};
pub use error::{TransposeError, TransposeResult};
pub use formulas::{spreadsheet_column, spreadsheet_row, FormulaGenerator};
pub use pipeline::{Pipeline, Transposition};
pub use split::{SplitBook, SplitSheet, Splitter};
pub use transpose::{Transposer, WideTableBuilder};

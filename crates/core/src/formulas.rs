//! Ratio formulas against a normalization compound.
//!
//! The formulas point at the wide table as it will sit on its own sheet:
//! column labels on the first spreadsheet row and compound names in column
//! `A`, so wide-table cell `(i, j)` is found at row `i + 2`, column
//! letter `j + 1`.

use crate::config::TransposeConfig;
use crate::error::{TransposeError, TransposeResult};
use peaktable_sheet::{column_index_to_letters, sheet_reference, CellValue, Sheet};
use tracing::{debug, info};

/// Rows above the first compound on the written sheet.
const HEADER_ROWS: usize = 1;
/// Columns left of the first sample column on the written sheet.
const LABEL_COLUMNS: usize = 1;

/// 1-based spreadsheet row of the wide-table row at `position`.
#[must_use]
pub fn spreadsheet_row(position: usize) -> usize {
    position + HEADER_ROWS + 1
}

/// Spreadsheet column letters of the wide-table column at `position`.
#[must_use]
pub fn spreadsheet_column(position: usize) -> String {
    column_index_to_letters(position + LABEL_COLUMNS)
}

/// Emits `=<sheet>!<col><row> / <sheet>!<col><norm-row>` for every cell of
/// the wide table.
#[derive(Debug, Clone)]
pub struct FormulaGenerator {
    normalization_key: String,
    target_sheet: String,
    sheet_name: String,
}

impl FormulaGenerator {
    #[must_use]
    pub fn new(config: &TransposeConfig) -> Self {
        FormulaGenerator {
            normalization_key: config.normalization_key.clone(),
            target_sheet: config.aggregates_sheet.clone(),
            sheet_name: config.formulas_sheet.clone(),
        }
    }

    fn reference(&self, row: usize, col: usize) -> String {
        sheet_reference(&self.target_sheet, row + HEADER_ROWS, col + LABEL_COLUMNS)
    }

    /// Build the formula table: same columns and row labels as `wide`, each
    /// cell dividing the wide-table cell by the normalization compound's
    /// cell in the same column.
    ///
    /// # Errors
    ///
    /// Returns `TransposeError::NormalizationKeyNotFound` if the normalization
    /// compound is not a row of `wide`.
    pub fn generate(&self, wide: &Sheet) -> TransposeResult<Sheet> {
        info!("Generating formulas sheet");
        let norm_position = wide.index_position(&self.normalization_key).map_err(|_| {
            TransposeError::NormalizationKeyNotFound {
                key: self.normalization_key.clone(),
                sheet: wide.name().to_string(),
            }
        })?;
        debug!(
            "Normalization compound {} is on spreadsheet row {}",
            self.normalization_key,
            spreadsheet_row(norm_position)
        );

        let rows: Vec<Vec<CellValue>> = (0..wide.row_count())
            .map(|row| {
                (0..wide.col_count())
                    .map(|col| {
                        let formula = format!(
                            "={} / {}",
                            self.reference(row, col),
                            self.reference(norm_position, col)
                        );
                        debug!("Row {}, column {}: {}", row, col, formula);
                        CellValue::formula(formula)
                    })
                    .collect()
            })
            .collect();

        let mut formulas = Sheet::from_rows(rows);
        formulas.set_name(&self.sheet_name);
        if let Some(names) = wide.column_names() {
            formulas.set_column_names(names.clone())?;
        }
        formulas.set_index(wide.index().to_vec(), wide.index_name())?;
        Ok(formulas)
    }
}

use crate::book::Book;
use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Options for writing Excel files
#[derive(Debug, Clone)]
pub struct XlsxWriteOptions {
    /// Excel number format applied to floating point cells
    pub number_format: String,
}

impl Default for XlsxWriteOptions {
    fn default() -> Self {
        XlsxWriteOptions {
            number_format: "0.000000".to_string(),
        }
    }
}

impl XlsxWriteOptions {
    /// Set the number format used for floating point cells
    #[must_use]
    pub fn with_number_format(mut self, number_format: &str) -> Self {
        self.number_format = number_format.to_string();
        self
    }
}

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        // Excel stores dates as days since 1899-12-30
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

impl Book {
    /// Load every sheet of a spreadsheet file (xlsx, xlsm, xls, ods), in
    /// workbook order.
    ///
    /// Cells keep their on-sheet positions: leading empty rows and columns
    /// before the used range are filled with nulls.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened or a sheet cannot be read.
    pub fn from_spreadsheet<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut workbook = open_workbook_auto(path.as_ref())?;
        let sheet_names = workbook.sheet_names();
        let mut book = Book::new();

        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name)?;
            let (first_row, first_col) = range.start().unwrap_or((0, 0));

            let mut data: Vec<Vec<CellValue>> = vec![Vec::new(); first_row as usize];
            for row in range.rows() {
                let mut row_data = vec![CellValue::Null; first_col as usize];
                row_data.extend(row.iter().map(data_to_cell_value));
                data.push(row_data);
            }

            book.add_sheet(&sheet_name, Sheet::from_rows(data))?;
        }

        Ok(book)
    }

    /// Save the book to an Excel file, one worksheet per sheet in book order
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be created or written.
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P, options: &XlsxWriteOptions) -> Result<()> {
        let mut workbook = Workbook::new();
        let number_format = Format::new().set_num_format(&options.number_format);

        for (name, sheet) in self.sheets() {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(name)?;
            sheet.write_to_worksheet(worksheet, &number_format)?;
        }

        workbook.save(path.as_ref())?;
        Ok(())
    }
}

impl Sheet {
    /// Write the sheet's grid (see [`Sheet::to_grid`]) to a worksheet
    fn write_to_worksheet(&self, worksheet: &mut Worksheet, number_format: &Format) -> Result<()> {
        for (row_idx, row) in self.to_grid().iter().enumerate() {
            let row_num = u32::try_from(row_idx).map_err(|_| SheetError::RowIndexOutOfBounds {
                index: row_idx,
                count: self.row_count(),
            })?;

            for (col_idx, cell) in row.iter().enumerate() {
                let col_num =
                    u16::try_from(col_idx).map_err(|_| SheetError::ColumnIndexOutOfBounds {
                        index: col_idx,
                        count: self.col_count(),
                    })?;

                match cell {
                    CellValue::Null => {} // Leave empty
                    CellValue::Bool(b) => {
                        worksheet.write_boolean(row_num, col_num, *b)?;
                    }
                    CellValue::Int(i) => {
                        // Note: Excel stores all numbers as f64, so integers > 2^53
                        // may lose precision
                        worksheet.write_number(row_num, col_num, *i as f64)?;
                    }
                    CellValue::Float(f) => {
                        worksheet.write_number_with_format(row_num, col_num, *f, number_format)?;
                    }
                    CellValue::String(s) => {
                        worksheet.write_string(row_num, col_num, s)?;
                    }
                    CellValue::Formula(source) => {
                        worksheet.write_formula(row_num, col_num, source.as_str())?;
                    }
                }
            }
        }

        Ok(())
    }
}

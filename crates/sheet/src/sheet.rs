use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use std::collections::HashMap;
use std::ops::Range;

/// A sheet representing a 2D grid of cells (row-major storage)
///
/// Every row carries an index label. A fresh sheet is positionally indexed
/// (`0..n`); labels survive row removal unless the index is reset, so a row
/// can always be traced back to where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
    column_names: Option<Vec<String>>,
    column_index: Option<HashMap<String, usize>>,
    index: Vec<CellValue>,
    index_name: Option<String>,
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
            column_names: None,
            column_index: None,
            index: Vec::new(),
            index_name: None,
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let converted: Vec<Vec<CellValue>> = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self::from_rows(converted)
    }

    /// Create a positionally indexed sheet from rows, padding ragged rows
    /// with nulls to the widest row.
    #[must_use]
    pub fn from_rows(mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, CellValue::Null);
        }

        let mut sheet = Self::new();
        sheet.index = (0..rows.len()).map(CellValue::from).collect();
        sheet.data = rows;
        sheet
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data
            .first()
            .map_or_else(|| self.column_names.as_ref().map_or(0, Vec::len), Vec::len)
    }

    /// Check if the sheet is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // ===== Cell Access =====

    /// Get a cell value by row and column index (0-based)
    pub fn get(&self, row: usize, col: usize) -> Result<&CellValue> {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(SheetError::IndexOutOfBounds {
                row,
                col,
                rows: self.row_count(),
                cols: self.col_count(),
            })
    }

    /// Get a cell value by row index and column name
    pub fn get_by_name(&self, row: usize, col_name: &str) -> Result<&CellValue> {
        let col = self.column_index_by_name(col_name)?;
        self.get(row, col)
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &Vec<CellValue>> {
        self.data.iter()
    }

    // ===== Labels =====

    /// Get column names (if set)
    #[must_use]
    pub fn column_names(&self) -> Option<&Vec<String>> {
        self.column_names.as_ref()
    }

    /// Check whether a named column exists
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index
            .as_ref()
            .is_some_and(|index| index.contains_key(name))
    }

    /// Label the columns.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::LengthMismatch` if `names` does not cover every column.
    pub fn set_column_names(&mut self, names: Vec<String>) -> Result<()> {
        if !self.data.is_empty() && names.len() != self.col_count() {
            return Err(SheetError::LengthMismatch {
                expected: self.col_count(),
                actual: names.len(),
            });
        }

        self.column_index = Some(build_column_index(&names));
        self.column_names = Some(names);
        Ok(())
    }

    /// Use the first row as column labels, then drop it together with its
    /// index label. A sheet without rows is left untouched.
    pub fn promote_header_row(&mut self) -> Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        let header = self.data.remove(0);
        self.index.remove(0);
        self.set_column_names(header.iter().map(CellValue::as_str).collect())
    }

    /// Row index labels, one per row
    #[must_use]
    pub fn index(&self) -> &[CellValue] {
        &self.index
    }

    /// The label of the row index (if set)
    #[must_use]
    pub fn index_name(&self) -> Option<&str> {
        self.index_name.as_deref()
    }

    /// Replace the row index.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::LengthMismatch` if there is not one label per row.
    pub fn set_index(&mut self, labels: Vec<CellValue>, name: Option<&str>) -> Result<()> {
        if labels.len() != self.row_count() {
            return Err(SheetError::LengthMismatch {
                expected: self.row_count(),
                actual: labels.len(),
            });
        }
        self.index = labels;
        self.index_name = name.map(str::to_string);
        Ok(())
    }

    /// Move a named column out of the data and use its values as the row index.
    pub fn set_index_column(&mut self, name: &str) -> Result<()> {
        let col = self.column_index_by_name(name)?;

        self.index = self.data.iter_mut().map(|row| row.remove(col)).collect();
        self.index_name = Some(name.to_string());

        let mut names = self.column_names.take().unwrap_or_default();
        names.remove(col);
        self.set_column_names(names)
    }

    /// Renumber the index positionally and drop its name.
    pub fn reset_index(&mut self) {
        self.index = (0..self.row_count()).map(CellValue::from).collect();
        self.index_name = None;
    }

    /// Position of the first row whose index label renders as `label`.
    pub fn index_position(&self, label: &str) -> Result<usize> {
        self.index
            .iter()
            .position(|cell| cell.as_str() == label)
            .ok_or_else(|| SheetError::RowNotFound {
                name: label.to_string(),
            })
    }

    fn column_index_by_name(&self, name: &str) -> Result<usize> {
        self.column_index
            .as_ref()
            .ok_or_else(|| {
                SheetError::ColumnsNotNamed("Call promote_header_row() first".to_string())
            })?
            .get(name)
            .copied()
            .ok_or_else(|| SheetError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    // ===== Transformation =====

    /// Copy a range of rows into a new sheet, keeping their index labels,
    /// column labels and the sheet name.
    #[must_use]
    pub fn slice_rows(&self, range: Range<usize>) -> Sheet {
        let end = range.end.min(self.row_count());
        let start = range.start.min(end);
        Sheet {
            name: self.name.clone(),
            data: self.data[start..end].to_vec(),
            column_names: self.column_names.clone(),
            column_index: self.column_index.clone(),
            index: self.index[start..end].to_vec(),
            index_name: self.index_name.clone(),
        }
    }

    /// Turn every string cell equal to `marker` into a null.
    /// Returns the number of cells replaced.
    pub fn replace_blank(&mut self, marker: &str) -> usize {
        let mut replaced = 0;
        for cell in self.data.iter_mut().flatten() {
            if cell.is_text(marker) {
                *cell = CellValue::Null;
                replaced += 1;
            }
        }
        replaced
    }

    /// Remove rows where every cell is null. Returns the number of rows removed.
    ///
    /// With `reset_index` the surviving rows are renumbered `0..n`; otherwise
    /// they keep their labels.
    pub fn drop_empty_rows(&mut self, reset_index: bool) -> usize {
        let before = self.row_count();
        let (data, index): (Vec<_>, Vec<_>) = std::mem::take(&mut self.data)
            .into_iter()
            .zip(std::mem::take(&mut self.index))
            .filter(|(row, _)| !row.iter().all(CellValue::is_null))
            .unzip();
        self.data = data;
        self.index = index;

        if reset_index {
            self.reset_index();
        }
        before - self.row_count()
    }

    /// Remove columns where every cell is null, along with their labels.
    /// Returns the number of columns removed.
    pub fn drop_empty_columns(&mut self) -> usize {
        if self.data.is_empty() {
            return 0;
        }
        let empty: Vec<usize> = (0..self.col_count())
            .filter(|&col| self.data.iter().all(|row| row[col].is_null()))
            .collect();
        if empty.is_empty() {
            return 0;
        }

        for &col in empty.iter().rev() {
            for row in &mut self.data {
                row.remove(col);
            }
        }

        if let Some(mut names) = self.column_names.take() {
            for &col in empty.iter().rev() {
                if col < names.len() {
                    names.remove(col);
                }
            }
            self.column_index = Some(build_column_index(&names));
            self.column_names = Some(names);
        }
        empty.len()
    }

    // ===== Export =====

    /// Render the sheet as a plain grid.
    ///
    /// Sheets with column labels get a header row (index name first) and the
    /// row index as their first column, so data cell (i, j) lands at grid
    /// position (i + 1, j + 1). Unlabelled sheets render their data as is.
    #[must_use]
    pub fn to_grid(&self) -> Vec<Vec<CellValue>> {
        let Some(names) = &self.column_names else {
            return self.data.clone();
        };

        let mut grid = Vec::with_capacity(self.row_count() + 1);
        let mut header = Vec::with_capacity(names.len() + 1);
        header.push(CellValue::from(self.index_name.clone()));
        header.extend(names.iter().map(|name| CellValue::String(name.clone())));
        grid.push(header);

        for (label, row) in self.index.iter().zip(&self.data) {
            let mut line = Vec::with_capacity(row.len() + 1);
            line.push(label.clone());
            line.extend(row.iter().cloned());
            grid.push(line);
        }
        grid
    }
}

/// Map labels to positions; repeated labels resolve to their first occurrence.
fn build_column_index(names: &[String]) -> HashMap<String, usize> {
    let mut index_map = HashMap::new();
    for (i, name) in names.iter().enumerate() {
        index_map.entry(name.clone()).or_insert(i);
    }
    index_map
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

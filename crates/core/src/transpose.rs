//! Pivot of per-compound value tables into one compound-by-sample table.

use crate::config::{RtNaming, TransposeConfig};
use crate::error::{TransposeError, TransposeResult};
use crate::split::SplitBook;
use indexmap::{IndexMap, IndexSet};
use peaktable_sheet::{CellValue, Sheet};
use tracing::{debug, info};

/// Accumulates `(compound, column) -> value` cells, remembering the order in
/// which compounds and columns are first seen.
#[derive(Debug, Default)]
pub struct WideTableBuilder {
    compounds: IndexSet<String>,
    columns: IndexMap<String, IndexMap<String, CellValue>>,
}

impl WideTableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store one cell. Writing the same cell again replaces the value but
    /// keeps the original row and column positions.
    pub fn record(&mut self, compound: &str, column: &str, value: CellValue) {
        self.compounds.insert(compound.to_string());
        self.columns
            .entry(column.to_string())
            .or_default()
            .insert(compound.to_string(), value);
    }

    /// Build the wide table: one row per compound, one column per recorded
    /// column, nulls where a compound has no value.
    pub fn finish(self, name: &str) -> TransposeResult<Sheet> {
        let rows: Vec<Vec<CellValue>> = self
            .compounds
            .iter()
            .map(|compound| {
                self.columns
                    .values()
                    .map(|cells| cells.get(compound).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();

        let mut sheet = Sheet::from_rows(rows);
        sheet.set_name(name);
        sheet.set_column_names(self.columns.into_keys().collect())?;
        sheet.set_index(
            self.compounds.into_iter().map(CellValue::String).collect(),
            None,
        )?;
        Ok(sheet)
    }
}

/// Pivots split sheets into the wide table.
#[derive(Debug, Clone)]
pub struct Transposer {
    separator: String,
    area_column: String,
    rt_column: String,
    rt_naming: RtNaming,
    sheet_name: String,
}

impl Transposer {
    #[must_use]
    pub fn new(config: &TransposeConfig) -> Self {
        Transposer {
            separator: config.separator.clone(),
            area_column: config.area_column.clone(),
            rt_column: config.rt_column.clone(),
            rt_naming: config.rt_naming,
            sheet_name: config.aggregates_sheet.clone(),
        }
    }

    /// Wide-table column holding a sample's retention time.
    #[must_use]
    pub fn rt_column_for(&self, sample: &str) -> String {
        match self.rt_naming {
            RtNaming::Shared => self.rt_column.clone(),
            RtNaming::PerSample => format!("{sample}_{}", self.rt_column),
        }
    }

    /// Wide-table column holding a sample's area.
    #[must_use]
    pub fn area_column_for(&self, sample: &str) -> String {
        format!("{sample}_{}", self.area_column)
    }

    /// Build the wide table from split sheets, in sheet order.
    ///
    /// Sheets whose value region is not indexed by the separator column are
    /// skipped. A sample-indexed sheet missing the area or RT column is an
    /// error.
    pub fn transpose(&self, split: &SplitBook) -> TransposeResult<Sheet> {
        info!("Creating the transposed table");
        let mut builder = WideTableBuilder::new();

        for (compound, parts) in split {
            let values = &parts.values;
            if values.index_name() != Some(self.separator.as_str()) {
                debug!(
                    "Skipping sheet {} as its values are not indexed by {}",
                    compound, self.separator
                );
                continue;
            }

            for (row, sample) in values.index().iter().enumerate() {
                let sample = sample.as_str();
                let area = self.measurement(compound, values, row, &self.area_column)?;
                let rt = self.measurement(compound, values, row, &self.rt_column)?;
                debug!(
                    "Compound: {}, sample: {}, area: {}, rt: {}",
                    compound, sample, area, rt
                );

                builder.record(compound, &self.rt_column_for(&sample), rt);
                builder.record(compound, &self.area_column_for(&sample), area);
            }
        }

        builder.finish(&self.sheet_name)
    }

    fn measurement(
        &self,
        compound: &str,
        values: &Sheet,
        row: usize,
        column: &str,
    ) -> TransposeResult<CellValue> {
        if !values.has_column(column) {
            return Err(TransposeError::MissingColumn {
                sheet: compound.to_string(),
                column: column.to_string(),
            });
        }
        Ok(values.get_by_name(row, column)?.clone())
    }
}

//! Run configuration, passed explicitly to every stage.

use crate::error::{TransposeError, TransposeResult};
use serde::Deserialize;
use std::path::Path;

/// How retention-time columns are named in the wide table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RtNaming {
    /// One `RT` column shared by every sample; the last sample written wins.
    #[default]
    Shared,
    /// One `<sample>_RT` column per sample.
    PerSample,
}

/// Settings for one transposition run.
///
/// Every field has a default matching the instrument's export conventions,
/// so a JSON config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransposeConfig {
    /// First-column value of the row that separates metadata from values.
    pub separator: String,
    /// Cell text treated as missing.
    pub blank_marker: String,
    /// Column holding the peak area.
    pub area_column: String,
    /// Column holding the retention time.
    pub rt_column: String,
    /// Shared `RT` column or one `<sample>_RT` column per sample.
    pub rt_naming: RtNaming,
    /// Compound every other compound is divided by.
    pub normalization_key: String,
    /// Name of the output sheet holding the wide table.
    pub aggregates_sheet: String,
    /// Name of the output sheet holding the ratio formulas.
    pub formulas_sheet: String,
    /// Excel number format for floating point cells.
    pub number_format: String,
}

impl Default for TransposeConfig {
    fn default() -> Self {
        TransposeConfig {
            separator: "Filename".to_string(),
            blank_marker: " ".to_string(),
            area_column: "Area".to_string(),
            rt_column: "RT".to_string(),
            rt_naming: RtNaming::Shared,
            normalization_key: "Nor".to_string(),
            aggregates_sheet: "Aggregates".to_string(),
            formulas_sheet: "Aggregates_formulas".to_string(),
            number_format: "0.000000".to_string(),
        }
    }
}

impl TransposeConfig {
    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> TransposeResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Parse a configuration from a JSON string. Missing fields keep their defaults.
    pub fn from_json_str(content: &str) -> TransposeResult<Self> {
        let config: TransposeConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the normalization compound
    #[must_use]
    pub fn with_normalization_key(mut self, key: &str) -> Self {
        self.normalization_key = key.to_string();
        self
    }

    /// Set the retention-time column naming
    #[must_use]
    pub fn with_rt_naming(mut self, rt_naming: RtNaming) -> Self {
        self.rt_naming = rt_naming;
        self
    }

    /// Check that the settings can produce a well-formed workbook.
    pub fn validate(&self) -> TransposeResult<()> {
        let required = [
            ("separator", &self.separator),
            ("area_column", &self.area_column),
            ("rt_column", &self.rt_column),
            ("normalization_key", &self.normalization_key),
            ("aggregates_sheet", &self.aggregates_sheet),
            ("formulas_sheet", &self.formulas_sheet),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(TransposeError::Config(format!("{field} must not be empty")));
        }
        if self.aggregates_sheet == self.formulas_sheet {
            return Err(TransposeError::Config(format!(
                "aggregates_sheet and formulas_sheet are both '{}'",
                self.aggregates_sheet
            )));
        }
        if self.area_column == self.rt_column {
            return Err(TransposeError::Config(format!(
                "area_column and rt_column are both '{}'",
                self.area_column
            )));
        }
        Ok(())
    }
}

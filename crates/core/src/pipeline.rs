//! End-to-end run: clean, split, transpose, generate formulas.

use crate::clean::Cleaner;
use crate::config::TransposeConfig;
use crate::error::TransposeResult;
use crate::formulas::FormulaGenerator;
use crate::split::Splitter;
use crate::transpose::Transposer;
use peaktable_sheet::{Book, Sheet};
use tracing::debug;

/// The two derived tables of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Transposition {
    /// Compound-by-sample wide table.
    pub aggregates: Sheet,
    /// Ratio formulas referencing `aggregates`.
    pub formulas: Sheet,
}

/// Runs every stage with one configuration.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: TransposeConfig,
}

impl Pipeline {
    /// Create a pipeline, rejecting unusable configurations.
    pub fn new(config: TransposeConfig) -> TransposeResult<Self> {
        config.validate()?;
        Ok(Pipeline { config })
    }

    #[must_use]
    pub fn config(&self) -> &TransposeConfig {
        &self.config
    }

    /// Derive the wide table and its formulas from raw sheets.
    ///
    /// Fails on the first sheet without a separator row or when the
    /// normalization compound is absent; nothing is produced in either case.
    pub fn transpose(&self, input: &Book) -> TransposeResult<Transposition> {
        debug!("Input sheets: {:?}", input.sheet_names());
        let cleaned = Cleaner::new(&self.config)
            .reset_index(true)
            .clean_book(input.clone());
        let split = Splitter::new(&self.config).split_book(&cleaned)?;
        let aggregates = Transposer::new(&self.config).transpose(&split)?;
        let formulas = FormulaGenerator::new(&self.config).generate(&aggregates)?;
        Ok(Transposition {
            aggregates,
            formulas,
        })
    }

    /// Assemble the output workbook: wide table, formulas, then every input
    /// sheet unchanged and in its original order.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::SheetAlreadyExists` if an input sheet shares a
    /// name with a derived sheet.
    pub fn output_book(&self, input: &Book, transposition: Transposition) -> TransposeResult<Book> {
        let mut output = Book::new();
        output.add_sheet(&self.config.aggregates_sheet, transposition.aggregates)?;
        output.add_sheet(&self.config.formulas_sheet, transposition.formulas)?;
        for (name, sheet) in input.sheets() {
            output.add_sheet(name, sheet.clone())?;
        }
        Ok(output)
    }

    /// Transpose and assemble the output workbook in one go.
    pub fn run(&self, input: &Book) -> TransposeResult<Book> {
        let transposition = self.transpose(input)?;
        self.output_book(input, transposition)
    }
}

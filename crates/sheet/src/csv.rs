use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use std::io::Write;

impl Sheet {
    /// Write the sheet's grid (see [`Sheet::to_grid`]) as CSV.
    pub fn to_csv_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);

        for row in self.to_grid() {
            let record: Vec<String> = row.iter().map(CellValue::as_str).collect();
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Render the sheet's grid as a CSV string
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.to_csv_writer(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| SheetError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}

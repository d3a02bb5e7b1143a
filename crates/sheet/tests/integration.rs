use peaktable_sheet::{
    column_index_to_letters, parse_a1, Book, CellValue, Sheet, SheetError, XlsxWriteOptions,
};
use tempfile::tempdir;

fn instrument_sheet() -> Sheet {
    Sheet::from_rows(vec![
        vec![CellValue::from("Compound"), CellValue::from("Method"), CellValue::Null],
        vec![CellValue::from("Gly"), CellValue::from("Quan"), CellValue::Null],
        vec![CellValue::from("Filename"), CellValue::from("Area"), CellValue::from("RT")],
        vec![CellValue::from("S1"), CellValue::Float(1000.0), CellValue::Float(4.1)],
        vec![CellValue::from("S2"), CellValue::Float(1500.0), CellValue::Float(4.2)],
    ])
}

// ===== Labels and index =====

#[test]
fn test_value_region_labelling() {
    let mut values = instrument_sheet().slice_rows(2..5);
    values.promote_header_row().unwrap();
    values.set_index_column("Filename").unwrap();

    assert_eq!(values.index_name(), Some("Filename"));
    assert_eq!(
        values.column_names().unwrap(),
        &vec!["Area".to_string(), "RT".to_string()]
    );
    assert_eq!(values.index(), &[CellValue::from("S1"), CellValue::from("S2")]);
    assert_eq!(values.get_by_name(1, "RT").unwrap(), &CellValue::Float(4.2));
}

#[test]
fn test_column_lookup_without_labels() {
    let sheet = instrument_sheet();
    assert!(matches!(
        sheet.get_by_name(0, "Area"),
        Err(SheetError::ColumnsNotNamed(_))
    ));
}

#[test]
fn test_set_index_length_mismatch() {
    let mut sheet = instrument_sheet();
    let result = sheet.set_index(vec![CellValue::Int(0)], None);
    assert!(matches!(result, Err(SheetError::LengthMismatch { .. })));
}

#[test]
fn test_set_column_names_length_mismatch() {
    let mut sheet = instrument_sheet();
    let result = sheet.set_column_names(vec!["only".to_string()]);
    assert!(matches!(result, Err(SheetError::LengthMismatch { .. })));
}

#[test]
fn test_get_out_of_bounds() {
    let sheet = instrument_sheet();
    assert!(matches!(
        sheet.get(10, 0),
        Err(SheetError::IndexOutOfBounds { .. })
    ));
}

// ===== Column letters =====

#[test]
fn test_column_letters_match_a1_parsing() {
    for col in [0, 25, 26, 27, 701, 702, 16383] {
        let notation = format!("{}1", column_index_to_letters(col));
        assert_eq!(parse_a1(&notation).unwrap(), (0, col));
    }
}

// ===== Spreadsheet I/O =====

#[test]
fn test_instrument_book_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("instrument.xlsx");

    let mut book = Book::new();
    book.add_sheet("Gly", instrument_sheet()).unwrap();
    book.add_sheet("Nor", instrument_sheet()).unwrap();
    book.save_as_xlsx(&path, &XlsxWriteOptions::default()).unwrap();

    let loaded = Book::from_spreadsheet(&path).unwrap();
    assert_eq!(loaded.sheet_names(), vec!["Gly", "Nor"]);

    let gly = loaded.get_sheet("Gly").unwrap();
    assert_eq!(gly.row_count(), 5);
    assert!(gly.get(2, 0).unwrap().is_text("Filename"));
    assert_eq!(gly.get(4, 1).unwrap().as_float(), Some(1500.0));
}

#[test]
fn test_formula_cells_are_written_as_formulas() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("formulas.xlsx");

    let mut book = Book::new();
    book.add_sheet("Aggregates", Sheet::from_data(vec![vec![2.0], vec![4.0]]))
        .unwrap();
    book.add_sheet(
        "Ratios",
        Sheet::from_rows(vec![vec![CellValue::formula("=Aggregates!A2 / Aggregates!A1")]]),
    )
    .unwrap();
    book.save_as_xlsx(&path, &XlsxWriteOptions::default().with_number_format("0.00"))
        .unwrap();

    let loaded = Book::from_spreadsheet(&path).unwrap();
    assert_eq!(loaded.sheet_names(), vec!["Aggregates", "Ratios"]);
}

use crate::error::{Result, SheetError};

/// Parse A1-style cell notation (e.g., "A1", "Z99", "AA1")
/// Returns (row, column) as 0-based indices
pub fn parse_a1(notation: &str) -> Result<(usize, usize)> {
    let notation = notation.to_uppercase();
    let split_pos = notation
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| SheetError::InvalidCellNotation(notation.clone()))?;

    if split_pos == 0 {
        return Err(SheetError::InvalidCellNotation(notation));
    }

    let col = parse_column_letters(&notation[..split_pos])?;
    let row = notation[split_pos..]
        .parse::<usize>()
        .map_err(|_| SheetError::InvalidCellNotation(notation.clone()))?;

    // Convert to 0-based indexing (A1 = 0,0)
    if row == 0 {
        return Err(SheetError::InvalidCellNotation(notation));
    }

    Ok((row - 1, col))
}

/// Convert column letters to 0-based column index
/// A=0, B=1, ... Z=25, AA=26, AB=27, ...
pub fn parse_column_letters(col_str: &str) -> Result<usize> {
    if col_str.is_empty() {
        return Err(SheetError::InvalidCellNotation(col_str.to_string()));
    }

    let mut col = 0;
    for b in col_str.bytes() {
        if !b.is_ascii_uppercase() {
            return Err(SheetError::InvalidCellNotation(col_str.to_string()));
        }
        col = col * 26 + (b - b'A') as usize + 1;
    }

    Ok(col - 1) // Convert to 0-based
}

/// Convert 0-based column index to column letters
/// 0=A, 1=B, ... 25=Z, 26=AA, 27=AB, ...
pub fn column_index_to_letters(mut col: usize) -> String {
    let mut result = String::new();
    col += 1; // Convert to 1-based for calculation

    while col > 0 {
        col -= 1;
        result.insert(0, ((col % 26) as u8 + b'A') as char);
        col /= 26;
    }

    result
}

/// Convert (row, col) to A1 notation
/// (0, 0) = "A1", (0, 1) = "B1", etc.
pub fn to_a1_notation(row: usize, col: usize) -> String {
    format!("{}{}", column_index_to_letters(col), row + 1)
}

/// A cell reference into another sheet, e.g. `Aggregates!B3`.
///
/// Sheet names containing anything other than ASCII alphanumerics and `_`
/// are quoted (`'My Sheet'!B3`), with embedded quotes doubled.
pub fn sheet_reference(sheet: &str, row: usize, col: usize) -> String {
    let plain = !sheet.is_empty()
        && sheet
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        format!("{sheet}!{}", to_a1_notation(row, col))
    } else {
        format!("'{}'!{}", sheet.replace('\'', "''"), to_a1_notation(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_a1() {
        assert_eq!(parse_a1("A1").unwrap(), (0, 0));
        assert_eq!(parse_a1("B1").unwrap(), (0, 1));
        assert_eq!(parse_a1("A2").unwrap(), (1, 0));
        assert_eq!(parse_a1("Z1").unwrap(), (0, 25));
        assert_eq!(parse_a1("AA1").unwrap(), (0, 26));
        assert_eq!(parse_a1("AB1").unwrap(), (0, 27));
        assert_eq!(parse_a1("ZZ1").unwrap(), (0, 701));

        // Test case insensitive
        assert_eq!(parse_a1("aA1").unwrap(), (0, 26));
    }

    #[test]
    fn test_parse_a1_errors() {
        assert!(parse_a1("").is_err());
        assert!(parse_a1("A").is_err());
        assert!(parse_a1("1").is_err());
        assert!(parse_a1("A0").is_err()); // Row must be >= 1
        assert!(parse_a1("ABC").is_err());
    }

    #[test]
    fn test_column_index_to_letters() {
        assert_eq!(column_index_to_letters(0), "A");
        assert_eq!(column_index_to_letters(1), "B");
        assert_eq!(column_index_to_letters(25), "Z");
        assert_eq!(column_index_to_letters(26), "AA");
        assert_eq!(column_index_to_letters(27), "AB");
        assert_eq!(column_index_to_letters(51), "AZ");
        assert_eq!(column_index_to_letters(52), "BA");
        assert_eq!(column_index_to_letters(701), "ZZ");
        assert_eq!(column_index_to_letters(702), "AAA");
    }

    #[test]
    fn test_column_letters_bijection() {
        let mut seen = std::collections::HashSet::new();
        for col in 0..2000 {
            let letters = column_index_to_letters(col);
            assert!(seen.insert(letters.clone()), "duplicate letters {letters}");
            assert_eq!(parse_column_letters(&letters).unwrap(), col);
        }
    }

    #[test]
    fn test_to_a1_notation() {
        assert_eq!(to_a1_notation(0, 0), "A1");
        assert_eq!(to_a1_notation(1, 0), "A2");
        assert_eq!(to_a1_notation(99, 25), "Z100");
        assert_eq!(to_a1_notation(0, 26), "AA1");
    }

    #[test]
    fn test_sheet_reference() {
        assert_eq!(sheet_reference("Aggregates", 2, 1), "Aggregates!B3");
        assert_eq!(sheet_reference("My Sheet", 0, 0), "'My Sheet'!A1");
        assert_eq!(sheet_reference("It's", 0, 0), "'It''s'!A1");
    }
}

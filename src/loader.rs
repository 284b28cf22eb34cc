use crate::dataset::Dataset;
use crate::error::LoadError;
use calamine::{Data, Range, Reader, open_workbook_auto, open_workbook_auto_from_rs};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Worksheet the study sheet lives in unless configured otherwise.
pub const DEFAULT_SHEET: &str = "Sheet1";

/// Positional columns: branch, topic, subtopic, description.
const COLUMNS: u32 = 4;

/// Load a dataset from a workbook on disk
///
/// Opens any workbook format calamine understands (xlsx, xlsm, xls, ods) and
/// reads the named worksheet. The first row of the used range is the header
/// and is skipped; the remaining rows are read positionally from column A.
///
/// # Arguments
/// * `filepath` - Path to the workbook
/// * `sheet` - Name of the worksheet to read
///
/// # Examples
/// ```no_run
/// use study_tree::loader::{from_excel, DEFAULT_SHEET};
///
/// match from_excel("data.xlsx", DEFAULT_SHEET) {
///     Ok(dataset) => println!("Loaded {} records", dataset.len()),
///     Err(e) => eprintln!("Error loading workbook: {}", e),
/// }
/// ```
pub fn from_excel(filepath: impl AsRef<Path>, sheet: &str) -> Result<Dataset, LoadError> {
    let mut workbook = open_workbook_auto(filepath)?;
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| LoadError::Worksheet {
            sheet: sheet.to_string(),
            source,
        })?;
    Ok(dataset_from_range(&range))
}

/// Load a dataset from workbook bytes already in memory
///
/// Same rules as [`from_excel`]; the format is sniffed from the content.
pub fn from_excel_bytes(bytes: &[u8], sheet: &str) -> Result<Dataset, LoadError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| LoadError::Worksheet {
            sheet: sheet.to_string(),
            source,
        })?;
    Ok(dataset_from_range(&range))
}

/// Load a dataset from a CSV file
///
/// Handles quoted fields, doubled quotes and line breaks inside quotes. The
/// first line is the header.
pub fn from_csv(filepath: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = filepath.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = parse_csv(&content)
        .into_iter()
        .map(|row| row.into_iter().map(Some).collect::<Vec<_>>());
    Ok(Dataset::from_rows(rows))
}

/// Detect file type and load appropriate format
///
/// `sheet` is ignored for CSV input.
///
/// # Examples
/// ```no_run
/// use study_tree::loader::load_dataset;
///
/// match load_dataset("data.csv", "Sheet1") {
///     Ok(dataset) => println!("Loaded {} records", dataset.len()),
///     Err(e) => eprintln!("Error loading file: {}", e),
/// }
/// ```
pub fn load_dataset(filepath: impl AsRef<Path>, sheet: &str) -> Result<Dataset, LoadError> {
    let path = filepath.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    match extension.as_deref() {
        Some("csv") => from_csv(path),
        Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => {
            from_excel(path, sheet)
        }
        Some(ext) => Err(LoadError::UnsupportedExtension(ext.to_string())),
        None => Err(LoadError::MissingExtension),
    }
}

/// Load a dataset, degrading to an empty one on failure.
///
/// The error goes to the log only; the viewer then shows no branches.
pub fn load_or_empty(filepath: impl AsRef<Path>, sheet: &str) -> Dataset {
    let path = filepath.as_ref();
    match load_dataset(path, sheet) {
        Ok(dataset) => {
            log::info!(
                "loaded {} records from {} ({} branches)",
                dataset.len(),
                path.display(),
                dataset.branches().len()
            );
            dataset
        }
        Err(e) => {
            log::error!("error reading study sheet {}: {}", path.display(), e);
            Dataset::empty()
        }
    }
}

fn dataset_from_range(range: &Range<Data>) -> Dataset {
    let (Some(start), Some(end)) = (range.start(), range.end()) else {
        return Dataset::empty();
    };

    // Rows follow the used range (its first row is the header); columns are
    // absolute so an empty column A still maps to `branch`.
    let rows = (start.0..=end.0).map(|row| {
        (0..COLUMNS)
            .map(|col| range.get_value((row, col)).and_then(cell_text))
            .collect::<Vec<_>>()
    });
    Dataset::from_rows(rows)
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

// Parse CSV content into rows of fields
fn parse_csv(content: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut current_field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Double quote inside quoted field - add a single quote
                    current_field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(std::mem::take(&mut current_field));
            }
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            '\n' if !in_quotes => {
                row.push(std::mem::take(&mut current_field));
                rows.push(std::mem::take(&mut row));
            }
            _ => current_field.push(c),
        }
    }

    // Last line without a trailing newline
    if !current_field.is_empty() || !row.is_empty() {
        row.push(current_field);
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::parse_csv;

    #[test]
    fn csv_quotes_and_embedded_newlines() {
        let rows = parse_csv("a,b\r\n\"x, y\",\"say \"\"hi\"\"\nthere\"\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "b"]);
        assert_eq!(rows[1], vec!["x, y", "say \"hi\"\nthere"]);
    }

    #[test]
    fn csv_without_trailing_newline() {
        let rows = parse_csv("h1,h2\nv1,");
        assert_eq!(rows, vec![vec!["h1", "h2"], vec!["v1", ""]]);
    }
}

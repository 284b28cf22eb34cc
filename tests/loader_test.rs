mod common;

use common::{write_xlsx, xlsx_bytes};
use rust_xlsxwriter::Workbook;
use std::fs;
use study_tree::loader::{DEFAULT_SHEET, from_excel, from_excel_bytes, load_dataset, load_or_empty};
use study_tree::{LoadError, Record};
use tempfile::tempdir;

#[test]
fn xlsx_rows_are_mapped_positionally_and_header_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.xlsx");
    write_xlsx(
        &path,
        DEFAULT_SHEET,
        &[
            ["Optics", "Wave", "Interference", "Waves add."],
            ["Mechanics", "", "Kinematics", "Motion."],
        ],
    );

    let dataset = from_excel(&path, DEFAULT_SHEET).unwrap();
    assert_eq!(
        dataset.records(),
        &[
            Record::new("Optics", "Wave", "Interference", "Waves add."),
            Record::new("Mechanics", "", "Kinematics", "Motion."),
        ]
    );
    println!("✓ Header skipped, columns mapped, empty topic kept");
}

#[test]
fn rows_missing_branch_or_subtopic_are_dropped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.xlsx");
    write_xlsx(
        &path,
        DEFAULT_SHEET,
        &[
            ["Optics", "Wave", "", "no subtopic"],
            ["", "Wave", "Diffraction", "no branch"],
            ["Optics", "Wave", "Interference", ""],
        ],
    );

    let dataset = from_excel(&path, DEFAULT_SHEET).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].subtopic, "Interference");
    assert_eq!(dataset.records()[0].description, "");
}

#[test]
fn numeric_and_boolean_cells_are_coerced_to_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("numbers.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(DEFAULT_SHEET).unwrap();
    worksheet.write_string(0, 0, "Branch").unwrap();
    worksheet.write_number(1, 0, 10.0).unwrap();
    worksheet.write_number(1, 1, 2.5).unwrap();
    worksheet.write_boolean(1, 2, true).unwrap();
    worksheet.write_string(1, 3, "text").unwrap();
    workbook.save(&path).unwrap();

    let dataset = from_excel(&path, DEFAULT_SHEET).unwrap();
    assert_eq!(dataset.records(), &[Record::new("10", "2.5", "true", "text")]);
}

#[test]
fn workbook_bytes_load_like_files() {
    let bytes = xlsx_bytes(DEFAULT_SHEET, &[["Mechanics", "", "Dynamics", "Forces."]]);
    let dataset = from_excel_bytes(&bytes, DEFAULT_SHEET).unwrap();
    assert_eq!(dataset.records(), &[Record::new("Mechanics", "", "Dynamics", "Forces.")]);
}

#[test]
fn missing_worksheet_is_an_error() {
    let bytes = xlsx_bytes("Other", &[["Mechanics", "", "Dynamics", "Forces."]]);
    let err = from_excel_bytes(&bytes, DEFAULT_SHEET).unwrap_err();
    assert!(matches!(err, LoadError::Worksheet { ref sheet, .. } if sheet == "Sheet1"));
}

#[test]
fn malformed_workbook_is_an_error() {
    assert!(from_excel_bytes(b"definitely not a workbook", DEFAULT_SHEET).is_err());
}

#[test]
fn header_only_sheet_gives_empty_dataset() {
    let bytes = xlsx_bytes(DEFAULT_SHEET, &[]);
    let dataset = from_excel_bytes(&bytes, DEFAULT_SHEET).unwrap();
    assert!(dataset.is_empty());
}

#[test]
fn csv_is_detected_by_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(
        &path,
        "branch,topic,subtopic,description\n\
         Optics,Wave,Interference,\"Waves add,\nand cancel.\"\n\
         Optics,Wave,,dropped\n\
         Mechanics,,Kinematics\n",
    )
    .unwrap();

    let dataset = load_dataset(&path, DEFAULT_SHEET).unwrap();
    assert_eq!(
        dataset.records(),
        &[
            Record::new("Optics", "Wave", "Interference", "Waves add,\nand cancel."),
            Record::new("Mechanics", "", "Kinematics", ""),
        ]
    );
}

#[test]
fn unsupported_extensions_are_rejected() {
    assert!(matches!(
        load_dataset("notes.txt", DEFAULT_SHEET),
        Err(LoadError::UnsupportedExtension(ext)) if ext == "txt"
    ));
    assert!(matches!(
        load_dataset("notes", DEFAULT_SHEET),
        Err(LoadError::MissingExtension)
    ));
}

#[test]
fn binary_workbooks_go_through_calamine() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.xlsb");
    fs::write(&path, b"not a workbook").unwrap();

    assert!(matches!(
        load_dataset(&path, DEFAULT_SHEET),
        Err(LoadError::Workbook(_))
    ));
}

#[test]
fn load_failure_degrades_to_empty_dataset() {
    let dir = tempdir().unwrap();
    let dataset = load_or_empty(dir.path().join("missing.xlsx"), DEFAULT_SHEET);
    assert!(dataset.is_empty());
    assert!(dataset.branches().is_empty());

    let garbage = dir.path().join("garbage.xlsx");
    fs::write(&garbage, b"not a zip").unwrap();
    assert!(load_or_empty(&garbage, DEFAULT_SHEET).is_empty());
}

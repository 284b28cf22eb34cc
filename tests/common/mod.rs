#![allow(dead_code)]

use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;
use study_tree::{Dataset, Record};

/// Header row plus data rows, as they appear in the sheet.
pub type Row<'a> = [&'a str; 4];

pub const HEADER: Row<'static> = ["Branch", "Topic", "Subtopic", "Description"];

fn fill_workbook(sheet_name: &str, rows: &[Row]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (r, row) in std::iter::once(&HEADER).chain(rows.iter()).enumerate() {
        for (c, value) in row.iter().enumerate() {
            // Leave empty cells unwritten, like a hand-edited sheet would.
            if !value.is_empty() {
                worksheet.write_string(r as u32, c as u16, *value)?;
            }
        }
    }
    Ok(workbook)
}

pub fn write_xlsx(path: &Path, sheet_name: &str, rows: &[Row]) {
    let mut workbook = fill_workbook(sheet_name, rows).unwrap();
    workbook.save(path).unwrap();
}

pub fn xlsx_bytes(sheet_name: &str, rows: &[Row]) -> Vec<u8> {
    let mut workbook = fill_workbook(sheet_name, rows).unwrap();
    workbook.save_to_buffer().unwrap()
}

pub fn dataset(rows: &[Row]) -> Dataset {
    Dataset::new(
        rows.iter()
            .map(|[b, t, s, d]| Record::new(*b, *t, *s, *d))
            .collect(),
    )
}

/// Two direct subtopics under one branch.
pub fn mechanics() -> Dataset {
    dataset(&[
        ["Mechanics", "", "Kinematics", "d1"],
        ["Mechanics", "", "Dynamics", "d2"],
    ])
}

/// A topic-scoped branch and a direct branch.
pub fn physics() -> Dataset {
    dataset(&[
        ["Optics", "Geometric", "Reflection", "Light bounces.\nAngle in equals angle out."],
        ["Optics", "Geometric", "Refraction", "Light bends."],
        ["Optics", "Geometric", "Lenses", "Focus."],
        ["Optics", "Wave", "Interference", "Waves add."],
        ["Optics", "Wave", "Diffraction", "Waves spread."],
        ["Mechanics", "", "Kinematics", "d1"],
        ["Mechanics", "", "Dynamics", "d2"],
        ["Mechanics", "", "Statics", "d3"],
    ])
}

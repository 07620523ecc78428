//! Excel export functionality

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use haulbook_domain::model::Subtrip;
use haulbook_types::{Error, Result};

use super::rows::{subtrip_rows, ExportRow, HEADERS};

/// Export a subtrip collection to an Excel file
pub fn export_subtrips(subtrips: &[Subtrip], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_subtrip_sheet(sheet, subtrips)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_subtrip_sheet(sheet: &mut Worksheet, subtrips: &[Subtrip]) -> Result<()> {
    sheet
        .set_name("Subtrips")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    let rows = subtrip_rows(subtrips);
    let last = rows.len() - 1;
    let total_format = Format::new().set_bold();

    for (row_idx, row) in rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        if row_idx == last {
            write_row_with_format(sheet, excel_row, row, Some(&total_format))?;
        } else {
            write_row_with_format(sheet, excel_row, row, None)?;
        }
    }

    sheet
        .set_column_width(0, 14)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 12)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(2, 16)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(3, 16)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_row_with_format(
    sheet: &mut Worksheet,
    excel_row: u32,
    row: &ExportRow,
    format: Option<&Format>,
) -> Result<()> {
    let strings = [&row.subtrip, &row.date, &row.vehicle, &row.route];
    for (col, value) in strings.iter().enumerate() {
        write_string_cell(sheet, excel_row, col as u16, value.as_str(), format)?;
    }

    let numbers = [
        row.loading_wt,
        row.unloading_wt,
        row.rate,
        row.freight_amount,
        row.diesel_ltr,
        row.driver_salary,
        row.total_expense,
        row.distance_km,
    ];
    for (offset, value) in numbers.iter().enumerate() {
        write_number_cell(sheet, excel_row, (offset + strings.len()) as u16, *value, format)?;
    }

    Ok(())
}

fn write_string_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    format: Option<&Format>,
) -> Result<()> {
    match format {
        Some(f) => sheet.write_string_with_format(row, col, value, f),
        None => sheet.write_string(row, col, value),
    }
    .map_err(|e| Error::Excel(e.to_string()))?;
    Ok(())
}

fn write_number_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: f64,
    format: Option<&Format>,
) -> Result<()> {
    match format {
        Some(f) => sheet.write_number_with_format(row, col, value, f),
        None => sheet.write_number(row, col, value),
    }
    .map_err(|e| Error::Excel(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_writes_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("subtrips.xlsx");

        let subtrips = vec![Subtrip {
            subtrip_id: "ST-1".to_string(),
            loading_weight: Some(10.0),
            rate: Some(1000.0),
            ..Default::default()
        }];

        export_subtrips(&subtrips, &out).unwrap();
        assert!(out.exists());
        assert!(std::fs::metadata(&out).unwrap().len() > 0);
    }

    #[test]
    fn test_export_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.xlsx");
        export_subtrips(&[], &out).unwrap();
        assert!(out.exists());
    }
}

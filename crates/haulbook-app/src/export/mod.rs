//! Spreadsheet export: row shaping and the Excel writer

pub mod excel;
pub mod rows;

pub use excel::export_subtrips;
pub use rows::{subtrip_rows, ExportRow, HEADERS};

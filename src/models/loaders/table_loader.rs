use crate::error::{AppError, AppResult, ConfigError, FileError};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

pub const COLUMN_AWS_URL: &str = "aws_blog_url";
pub const COLUMN_GDOC_URL: &str = "google_doc_url";

/// One data row of the input table.
///
/// Cells are trimmed; blank cells are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based index among data rows (header excluded)
    pub row_number: usize,
    pub aws_blog_url: Option<String>,
    pub google_doc_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableFormat {
    Csv,
    Spreadsheet,
}

impl TableFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(TableFormat::Csv),
            "xls" | "xlsx" => Some(TableFormat::Spreadsheet),
            _ => None,
        }
    }
}

/// Load a `.csv`, `.xls` or `.xlsx` file of URL pairs.
///
/// Fails before returning any row when the extension is unknown, the file
/// is missing, or either required column is absent.
pub fn load_table(path: &Path) -> AppResult<Vec<TableRow>> {
    let display = path.display().to_string();

    let format = TableFormat::from_path(path).ok_or_else(|| {
        AppError::from(ConfigError::UnsupportedTableFormat {
            path: display.clone(),
        })
    })?;

    if !path.exists() {
        return Err(FileError::NotFound { path: display }.into());
    }

    let (header, rows) = match format {
        TableFormat::Csv => read_csv(path)?,
        TableFormat::Spreadsheet => read_spreadsheet(path)?,
    };

    let aws_idx = column_index(&header, COLUMN_AWS_URL)
        .ok_or_else(|| AppError::missing_column(&display, COLUMN_AWS_URL))?;
    let gdoc_idx = column_index(&header, COLUMN_GDOC_URL)
        .ok_or_else(|| AppError::missing_column(&display, COLUMN_GDOC_URL))?;

    let table = rows
        .into_iter()
        .enumerate()
        .map(|(i, cells)| TableRow {
            row_number: i + 1,
            aws_blog_url: cell(&cells, aws_idx),
            google_doc_url: cell(&cells, gdoc_idx),
        })
        .collect();

    Ok(table)
}

type RawTable = (Vec<String>, Vec<Vec<String>>);

fn read_csv(path: &Path) -> AppResult<RawTable> {
    let display = path.display().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::file_read_failed(&display, e))?;

    let header = reader
        .headers()
        .map_err(|e| AppError::file_read_failed(&display, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AppError::file_read_failed(&display, e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok((header, rows))
}

/// First worksheet; first row is the header.
fn read_spreadsheet(path: &Path) -> AppResult<RawTable> {
    let display = path.display().to_string();
    let mut workbook =
        open_workbook_auto(path).map_err(|e| AppError::file_read_failed(&display, e))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| AppError::file_read_failed(&display, e))?,
        None => return Ok((Vec::new(), Vec::new())),
    };

    let mut rows = range.rows().map(|row| {
        row.iter()
            .map(|c| match c {
                Data::Empty => String::new(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
    });

    let header = rows.next().unwrap_or_default();
    Ok((header, rows.collect()))
}

fn column_index(header: &[String], name: &str) -> Option<usize> {
    header.iter().position(|h| h.trim() == name)
}

fn cell(cells: &[String], idx: usize) -> Option<String> {
    cells
        .get(idx)
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

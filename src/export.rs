//! CSV export of the currently filtered roster

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::models::Employee;

pub const EXPORT_FILE_NAME: &str = "employees.csv";

/// Render the export document: header plus one row per employee, every field
/// double-quoted verbatim. Embedded quotes and commas are NOT escaped; this
/// matches the legacy export format byte for byte.
pub fn csv_document(rows: &[Employee]) -> String {
    let header = "Name,Email,Department,Salary".to_string();
    let body: Vec<String> = rows
        .iter()
        .map(|e| {
            format!(
                "\"{}\",\"{}\",\"{}\",\"{}\"",
                e.name, e.email, e.department, e.salary
            )
        })
        .collect();
    let mut lines = vec![header];
    lines.extend(body);
    lines.join("\n")
}

/// Where exports land: the user's download directory, or the working
/// directory when none is known.
fn export_dir() -> Result<PathBuf> {
    if let Some(dir) = dirs::download_dir() {
        return Ok(dir);
    }
    std::env::current_dir().context("no download directory and no working directory")
}

/// Write `employees.csv` and return its path. The caller is responsible for
/// refusing empty row sets before getting here.
pub fn write_csv(rows: &[Employee]) -> Result<PathBuf> {
    let path = export_dir()?.join(EXPORT_FILE_NAME);
    std::fs::write(&path, csv_document(rows))
        .with_context(|| format!("could not write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_row_document_matches_expected_bytes() {
        let rows = vec![Employee {
            id: 1,
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            department: "Eng".to_string(),
            salary: "100".to_string(),
        }];
        assert_eq!(
            csv_document(&rows),
            "Name,Email,Department,Salary\n\"Ann\",\"a@x.com\",\"Eng\",\"100\""
        );
    }

    #[test]
    fn empty_rows_yield_header_only() {
        assert_eq!(csv_document(&[]), "Name,Email,Department,Salary");
    }

    #[test]
    fn fields_are_quoted_verbatim_without_escaping() {
        let rows = vec![Employee {
            id: 2,
            name: "O\"Brien, Pat".to_string(),
            email: "pat@x.com".to_string(),
            department: "R&D".to_string(),
            salary: "90".to_string(),
        }];
        // Legacy behavior: the embedded quote and comma pass through as-is.
        assert_eq!(
            csv_document(&rows),
            "Name,Email,Department,Salary\n\"O\"Brien, Pat\",\"pat@x.com\",\"R&D\",\"90\""
        );
    }
}

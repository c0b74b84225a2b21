// Copyright © 2025 mailblast.io
// Licensed under MailBlast License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::error::code::ErrorCode;
use crate::modules::error::MailBlastResult;
use crate::raise_error;
use csv::ReaderBuilder;
use std::path::Path;

/// One parsed entry from the recipient table. Only the raw address matters;
/// every other column is carried past and ignored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecipientRow {
    pub email: String,
}

/// Recipient table format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
}

impl TableFormat {
    /// Detect format from filename
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.split('.').next_back()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(TableFormat::Csv),
            "tsv" | "tab" => Some(TableFormat::Tsv),
            _ => None,
        }
    }

    fn delimiter(&self) -> u8 {
        match self {
            TableFormat::Csv => b',',
            TableFormat::Tsv => b'\t',
        }
    }
}

/// Reads the recipient table into ordered rows.
///
/// The table must expose a column named "Email". A row with a missing field
/// still yields a row (with an empty address) so the send pass can account
/// for it instead of dropping it.
pub fn load_recipients(path: &Path) -> MailBlastResult<Vec<RecipientRow>> {
    let format = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(TableFormat::from_filename)
        .ok_or_else(|| {
            raise_error!(
                format!("Unsupported recipient table format: {}", path.display()),
                ErrorCode::RecipientFileError
            )
        })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(format.delimiter())
        .flexible(true)
        .from_path(path)
        .map_err(|e| {
            raise_error!(
                format!("Failed to open recipient table '{}': {}", path.display(), e),
                ErrorCode::RecipientFileError
            )
        })?;

    let headers = reader
        .headers()
        .map_err(|e| {
            raise_error!(
                format!("Failed to read recipient table headers: {}", e),
                ErrorCode::RecipientFileError
            )
        })?
        .clone();

    let email_index = headers
        .iter()
        .position(|header| header.trim() == "Email")
        .ok_or_else(|| {
            raise_error!(
                "Recipient table has no 'Email' column".into(),
                ErrorCode::RecipientFileError
            )
        })?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            raise_error!(
                format!("Failed to parse recipient table row: {}", e),
                ErrorCode::RecipientFileError
            )
        })?;
        let email = record.get(email_index).unwrap_or_default().to_string();
        rows.push(RecipientRow { email });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_table(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_email_column_in_order() {
        let (_dir, path) = write_table(
            "list.csv",
            "Name,Email\nAlice,a@x.com\nBob,bad\nCarol,c@x.com\n",
        );
        let rows = load_recipients(&path).unwrap();
        let emails: Vec<&str> = rows.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(emails, vec!["a@x.com", "bad", "c@x.com"]);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let (_dir, path) = write_table(
            "list.csv",
            "Id,Email,Company,Notes\n1,a@x.com,Acme,vip\n",
        );
        let rows = load_recipients(&path).unwrap();
        assert_eq!(rows, vec![RecipientRow { email: "a@x.com".to_string() }]);
    }

    #[test]
    fn tsv_tables_are_accepted() {
        let (_dir, path) = write_table("list.tsv", "Email\tName\na@x.com\tAlice\n");
        let rows = load_recipients(&path).unwrap();
        assert_eq!(rows[0].email, "a@x.com");
    }

    #[test]
    fn missing_email_column_is_an_error() {
        let (_dir, path) = write_table("list.csv", "Name,Address\nAlice,a@x.com\n");
        let error = load_recipients(&path).unwrap_err();
        assert_eq!(error.code(), ErrorCode::RecipientFileError);
    }

    #[test]
    fn short_row_yields_empty_address_instead_of_dropping() {
        let (_dir, path) = write_table("list.csv", "Name,Email\nAlice,a@x.com\nBob\n");
        let rows = load_recipients(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].email, "");
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let (_dir, path) = write_table("list.xlsx", "not a real workbook");
        assert!(load_recipients(&path).is_err());
    }

    #[test]
    fn format_sniffing_matches_extensions() {
        assert_eq!(TableFormat::from_filename("a.csv"), Some(TableFormat::Csv));
        assert_eq!(TableFormat::from_filename("a.TSV"), Some(TableFormat::Tsv));
        assert_eq!(TableFormat::from_filename("a.tab"), Some(TableFormat::Tsv));
        assert_eq!(TableFormat::from_filename("a.xlsx"), None);
    }
}

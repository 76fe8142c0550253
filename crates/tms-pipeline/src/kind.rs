//! File-format dispatch by filename extension.

use std::path::Path;

/// Parser family a file dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `.csv`: decoded to text and run through the lenient CSV scanner.
    Csv,
    /// `.xlsx` / `.xls`: read as a binary spreadsheet container.
    Sheet,
}

impl FileKind {
    /// Resolves the parser family from a file name, case-insensitive.
    /// Returns `None` for unrecognized extensions.
    pub fn from_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name).extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xls" => Some(Self::Sheet),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_supported_extensions_case_insensitively() {
        assert_eq!(FileKind::from_name("bank.csv"), Some(FileKind::Csv));
        assert_eq!(FileKind::from_name("BANK.CSV"), Some(FileKind::Csv));
        assert_eq!(FileKind::from_name("fx.xlsx"), Some(FileKind::Sheet));
        assert_eq!(FileKind::from_name("fx.XLS"), Some(FileKind::Sheet));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(FileKind::from_name("notes.txt"), None);
        assert_eq!(FileKind::from_name("archive.csv.zip"), None);
        assert_eq!(FileKind::from_name("no_extension"), None);
        assert_eq!(FileKind::from_name(""), None);
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unreadable spreadsheet: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("spreadsheet contains no worksheets")]
    NoWorksheet,
}

pub type Result<T> = std::result::Result<T, IngestError>;

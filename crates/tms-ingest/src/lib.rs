pub mod csv;
pub mod error;
pub mod sheet;
pub mod text;

pub use csv::parse_csv;
pub use error::{IngestError, Result};
pub use sheet::parse_sheet;
pub use text::decode_text;

pub mod dates;
pub mod numbers;

pub use dates::{is_date_serial, is_likely_date, serial_to_canonical, to_canonical_date};
pub use numbers::is_numeric_value;

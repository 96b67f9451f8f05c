pub mod csv;

pub use self::csv::{escape_csv_field, to_csv, CSV_HEADER};

pub mod domain;
pub mod dto;
pub mod error;
pub mod export;
pub mod index;
pub mod query;
pub mod rules;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use export::{escape_csv_field, to_csv, CSV_HEADER};
pub use index::build_haystack;
pub use query::{query, LeadQuery, SortKey};
pub use rules::*;

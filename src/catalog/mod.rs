//! Catalog core: record model, parser, filter, sort and query pipeline.
//!
//! Nothing in this module depends on the terminal UI. The UI drives it
//! through [`CatalogController`].

mod controller;
mod demo;
mod export;
mod filter;
mod parser;
mod query;
mod reader;
mod record;
mod sort;

pub use controller::{CatalogController, LoadOutcome};
pub use demo::DEMO_CSV;
pub use export::{to_csv, to_csv_row};
pub use filter::{matches, Criteria};
pub use parser::{parse, FIELD_COUNT, HEADER};
pub use query::{apply_query, distinct_categories, distinct_genres};
pub use reader::CatalogReader;
pub use record::{RawFields, Record};
pub use sort::{compare, locale_cmp, sorted, SortKey, UnknownSortKey};

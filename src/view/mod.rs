// View-model shaping for the console's tables and dashboard

pub mod error;
pub mod sort;
pub mod query;
pub mod dashboard;

pub use error::*;
pub use sort::{parse_sort_specs, SortSpec};
pub use query::*;
pub use dashboard::*;

pub mod date;
pub mod fuzzy;

pub use date::{format_relative_days, parse_date_expr};

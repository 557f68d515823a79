// Sort specifications shared by the member and lead tables

use std::cmp::Ordering;

use crate::view::error::ViewError;

/// Column name with optional `-` prefix for descending order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub descending: bool,
}

impl SortSpec {
    pub fn parse(spec: &str) -> Self {
        if let Some(col) = spec.strip_prefix('-') {
            SortSpec { column: col.to_lowercase(), descending: true }
        } else {
            SortSpec { column: spec.to_lowercase(), descending: false }
        }
    }

    pub fn apply(&self, ordering: Ordering) -> Ordering {
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

pub fn parse_sort_specs(specs: &[String]) -> Vec<SortSpec> {
    specs.iter().map(|s| SortSpec::parse(s)).collect()
}

/// Reject specs naming a column outside `columns`
pub fn validate_sort_specs(specs: &[SortSpec], columns: &[&str]) -> Result<(), ViewError> {
    for spec in specs {
        if !columns.contains(&spec.column.as_str()) {
            return Err(ViewError::UnknownSortColumn {
                column: spec.column.clone(),
                available: columns.join(", "),
            });
        }
    }
    Ok(())
}

/// Compare ids so `member-2` sorts before `member-10`
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    let (a_prefix, a_num) = split_numeric_suffix(a);
    let (b_prefix, b_num) = split_numeric_suffix(b);
    a_prefix
        .cmp(b_prefix)
        .then_with(|| a_num.cmp(&b_num))
        .then_with(|| a.cmp(b))
}

fn split_numeric_suffix(id: &str) -> (&str, Option<u64>) {
    let digits = id.chars().rev().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return (id, None);
    }
    let (prefix, suffix) = id.split_at(id.len() - digits);
    (prefix, suffix.parse().ok())
}

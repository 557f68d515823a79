use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("cannot sort by '{column}' (available: {available})")]
    UnknownSortColumn { column: String, available: String },
}

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockError {
    #[error("anchor date {0} is too close to the supported calendar range")]
    AnchorOutOfRange(NaiveDate),
}

// Sales pipeline: stage configuration, aging classification, and the board

pub mod error;
pub mod stage;
pub mod aging;
pub mod board;

pub use error::*;
pub use stage::*;
pub use aging::*;
pub use board::*;

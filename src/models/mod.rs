// Core data models for gymdesk
// These structs represent the console's domain entities

pub mod brand;
pub mod member;
pub mod lead;

pub use brand::*;
pub use member::*;
pub use lead::*;

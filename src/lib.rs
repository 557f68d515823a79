//! gymdesk - data engine for a multi-brand gym franchise console
//!
//! This library provides the view-model layer behind the console:
//! - Deterministic mock data: a polynomial string hash seeds stable
//!   per-entity attributes (names, visits, alerts, coach, appointments)
//! - Pipeline stage configuration and fresh/aging/stale classification
//! - The sales pipeline board with per-stage risk counts
//! - Member and lead table queries (filter, sort) and the brand dashboard
//! - rc-file configuration and dataset assembly
//! - CLI command parsing and execution
//!
//! # Example
//!
//! ```
//! use gymdesk::mock::hash_code;
//! use gymdesk::pipeline::{classify, AgingStatus, Thresholds};
//!
//! assert_eq!(hash_code("lead-0"), hash_code("lead-0"));
//! let thresholds = Thresholds::new(7, 14).unwrap();
//! assert_eq!(classify(10, thresholds), AgingStatus::Aging);
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod mock;
pub mod models;
pub mod pipeline;
pub mod utils;
pub mod view;

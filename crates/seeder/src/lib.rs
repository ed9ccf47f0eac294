//! Clario question seeder.
//!
//! Loads the bundled assessment questions, checks them, converts each record
//! to a store item (numbers as exact decimals) and writes them one at a time.
//! A failed write is logged and counted; the batch carries on.

pub mod config;
pub mod data;
pub mod seed;
pub mod store;

pub use seed::{run_seed, seed_questions, SeedError, SeedFailure, SeedReport};
pub use store::{DryRunStore, DynamoStore, QuestionStore, StoreError, TableInfo};

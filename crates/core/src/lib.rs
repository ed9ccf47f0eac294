//! Clario domain types and pure logic.
//!
//! - [`suggestion`]: the suggestion form with its field constraints, and the
//!   notification email composed from it.
//! - [`question`]: assessment question records and seed-set integrity checks.
//! - [`item`]: store-ready record trees with every number held as an exact
//!   decimal.

pub mod error;
pub mod item;
pub mod question;
pub mod suggestion;

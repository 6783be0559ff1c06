//! Prelude module for dual_calendar crate.
//!
//! Re-exports commonly used derive macros from derive_more.

#[allow(unused_imports)]
pub use derive_more::{Display, From, Into};

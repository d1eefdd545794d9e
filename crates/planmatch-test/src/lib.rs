//! Shared test fixtures for PlanMatch crates.
//!
//! This crate provides data and pure helpers for testing. It depends only on
//! `planmatch-core` so that `planmatch-scoring` can use it as a dev-dependency
//! without a cycle.
//!
//! - [`answers`] - Canonical questionnaire answers
//! - [`plans`] - Plan builders for the documented scenarios
//! - [`catalog`] - A small mixed catalog for ranking tests
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! planmatch-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use planmatch_test::answers::beginner_muscle;
//! use planmatch_test::plans::{ideal_beginner_plan, advanced_five_day_plan};
//! ```

pub mod answers;
pub mod catalog;
pub mod plans;

// Re-export commonly used fixtures at crate root for convenience
pub use answers::beginner_muscle;
pub use catalog::sample_catalog;
pub use plans::{advanced_five_day_plan, bare_plan, ideal_beginner_plan};

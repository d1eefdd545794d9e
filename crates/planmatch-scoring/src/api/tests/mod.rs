//! Consolidated tests for api module.

mod rule_set;

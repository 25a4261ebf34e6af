//! Source merging for the layered configuration.

pub mod merge_policy;

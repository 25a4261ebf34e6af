//! Pathy: editor panel backend
//!
//! Converts file paths into slash-delimited API paths, checks pasted text for
//! JSON well-formedness, and mirrors the workspace directory as a nested tree.
//! The panel talks to the host through the messages in [`panel::message`].

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod panel;
pub mod path;
pub mod tree;
pub mod validate;

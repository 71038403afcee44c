//! Top-level views: the aggregated panel board and the configuration page.

pub mod config;
pub mod panels;

//! # free-dispatcher-ui
//!
//! Leptos + WASM administrative console for the Free-Dispatcher
//! model-railroad backend. Eight independent collection panels (modules,
//! endplates, signals, switches, blocks, dispatchers, trains, yardmasters),
//! each a list view plus a create form over one REST endpoint, and a
//! configuration page that repoints the UI at a different backend base URL
//! persisted in `localStorage`.

pub mod app;
pub mod components;
pub mod form;
pub mod model;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

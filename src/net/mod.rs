//! HTTP plumbing for the backend collection endpoints.

pub mod api;

//! Networking: wire schema and the classification server API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` mirrors the server's JSON bodies, `api` defines the [`api::DigitApi`]
//! seam and its `reqwest` implementation.

pub mod api;
pub mod types;

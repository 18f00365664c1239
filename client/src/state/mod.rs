//! Client-side state mirrored from the server.
//!
//! DESIGN
//! ======
//! State objects here own reconciliation only. They expose ordered values
//! for a separate, stateless renderer (`crate::render`) and never format
//! anything themselves.

pub mod history;

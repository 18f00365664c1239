//! Client side of the digit classifier.
//!
//! Wraps a [`canvas::surface::CaptureSurface`] with the network protocol of
//! the classification server: submitting the rendered surface for
//! prediction, mirroring the server-held prediction history, and reading the
//! analytics aggregates.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | [`session::Session`]: one surface, one history, one API, user-facing notices |
//! | [`predict`] | Validation-gated submit/response protocol |
//! | [`state`] | [`state::history::HistoryStore`] and its optimistic/authoritative reconciliation |
//! | [`analytics`] | Read-only aggregate queries |
//! | [`net`] | Wire types, [`net::api::DigitApi`] seam, and the `reqwest` implementation |
//! | [`render`] | Stateless text rendering of results, history, and analytics |
//! | [`config`] | Environment-driven configuration |
//! | [`error`] | [`error::ClientError`] taxonomy |
//! | [`notice`] | User-facing notices returned instead of raised errors |
//!
//! ## Suspend points
//!
//! Only three operations await: PNG serialization of the surface (run on a
//! blocking task), the prediction request, and the history load/clear
//! requests. Everything touching the surface itself runs to completion.

pub mod analytics;
pub mod config;
pub mod error;
pub mod net;
pub mod notice;
pub mod predict;
pub mod render;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::ClientError;
pub use notice::{Notice, NoticeLevel};
pub use session::Session;

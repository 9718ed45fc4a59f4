//! A JSON request/response session around a [`SearchEngine`]. Each request
//! drives exactly one engine operation and gets exactly one response.
//!
//! [`SearchEngine`]: crate::search::search_engines::SearchEngine

mod messages;
mod session;

pub use messages::{NodePayload, Request, Response};
pub use session::Session;

//! gigboard - submit and list gig requests over HTTP
//!
//! The interesting part lives in [`requests`]: an in-memory store that
//! assigns ids and timestamps atomically, plus the validation and supplier
//! filtering applied around it. Everything else is plumbing.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod requests;

//! Observable events
//!
//! Every log line names one of these. Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Listener bound, accepting connections
    ServerStart,
    /// Shutdown signal received, server drained
    ServerStop,
    /// Could not start serving (FATAL)
    StartupFailed,

    // Requests
    /// A gig request was stored
    RequestCreated,
    /// A creation payload failed validation
    RequestRejected,
    /// A creation body could not be decoded
    InvalidBody,
    /// A listing was served
    RequestsListed,
    /// A response could not be encoded
    EncodingFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ServerStart => "SERVER_START",
            Event::ServerStop => "SERVER_STOP",
            Event::StartupFailed => "STARTUP_FAILED",
            Event::RequestCreated => "REQUEST_CREATED",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::InvalidBody => "INVALID_BODY",
            Event::RequestsListed => "REQUESTS_LISTED",
            Event::EncodingFailed => "ENCODING_FAILED",
        }
    }

    /// Severity this event is logged at.
    ///
    /// Rejections are the client's fault and stay at WARN.
    pub fn severity(&self) -> Severity {
        match self {
            Event::StartupFailed => Severity::Fatal,
            Event::EncodingFailed => Severity::Error,
            Event::RequestRejected | Event::InvalidBody => Severity::Warn,
            Event::RequestsListed => Severity::Trace,
            _ => Severity::Info,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

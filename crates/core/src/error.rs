//! Typed errors for the external collaborators.
//!
//! "No unread mail", "position already gone", and "no result object" are
//! normal outcomes modelled as `Ok(None)` on the collaborator traits, not
//! errors. These enums carry only genuine failures.

use thiserror::Error;

/// Errors reading the alert mailbox.
///
/// Every variant degrades to "no action this tick" at the poll loop, but
/// stays distinguishable from "no new mail" in logs and tests.
#[derive(Debug, Error)]
pub enum MailboxError {
    /// Mail server unreachable or connection dropped.
    #[error("mail server unreachable: {0}")]
    Connection(String),

    /// Login to the mailbox was refused.
    #[error("mailbox authentication failed: {0}")]
    Auth(String),

    /// The server rejected or garbled a protocol exchange.
    #[error("mailbox protocol error: {0}")]
    Protocol(String),

    /// Message content could not be decoded.
    #[error("could not decode message body: {0}")]
    Parse(String),

    /// The blocking mailbox task died before completing.
    #[error("mailbox task failed: {0}")]
    Task(String),
}

/// Errors talking to the trading platform.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Platform bridge unreachable.
    #[error("platform unreachable: {0}")]
    Connection(String),

    /// Platform login was refused.
    #[error("platform authentication failed: {0}")]
    Auth(String),

    /// The platform answered with something unparseable.
    #[error("malformed platform response: {0}")]
    InvalidResponse(String),

    /// No quote available for the requested symbol.
    #[error("no quote available for {symbol}")]
    MissingQuote {
        /// Symbol the quote was requested for.
        symbol: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailbox_error_display_names_the_failure() {
        let err = MailboxError::Auth("invalid credentials".to_string());
        assert!(err.to_string().contains("authentication"));
        assert!(err.to_string().contains("invalid credentials"));
    }

    #[test]
    fn mailbox_connection_error_distinct_from_auth() {
        let conn = MailboxError::Connection("refused".to_string());
        let auth = MailboxError::Auth("refused".to_string());
        assert_ne!(conn.to_string(), auth.to_string());
    }

    #[test]
    fn platform_missing_quote_names_symbol() {
        let err = PlatformError::MissingQuote {
            symbol: "EURUSD".to_string(),
        };
        assert!(err.to_string().contains("EURUSD"));
    }
}

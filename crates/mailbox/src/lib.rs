//! IMAP alert source for the signal relay.
//!
//! This crate provides:
//! - [`ImapMailbox`], an [`AlertSource`] that reads the most recent unread
//!   message from one IMAP folder and marks it read
//! - Plain-text body extraction for single-part and multipart messages
//!
//! Every fetch runs a short-lived IMAPS session (connect, login, select,
//! search, fetch, logout); no connection outlives the call. Transport and
//! authentication failures surface as typed
//! [`MailboxError`](inbox_trader_core::MailboxError)s so the caller can
//! tell them apart from "no new mail" while still treating both as
//! "nothing to do".
//!
//! [`AlertSource`]: inbox_trader_core::AlertSource

pub mod imap_source;
pub mod mime;

pub use imap_source::ImapMailbox;
pub use mime::plain_text_body;

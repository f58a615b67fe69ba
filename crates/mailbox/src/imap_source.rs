//! IMAP implementation of the alert source.

use crate::mime;
use async_trait::async_trait;
use inbox_trader_core::{AlertSource, MailConfig, MailboxError};
use native_tls::{TlsConnector, TlsStream};
use std::net::TcpStream;

type ImapSession = imap::Session<TlsStream<TcpStream>>;

/// Alert source watching one IMAP folder.
///
/// Each fetch opens its own IMAPS session and logs out before returning,
/// so a flaky mail server never leaves a connection dangling between
/// ticks. The blocking IMAP I/O runs on the tokio blocking pool.
pub struct ImapMailbox {
    config: MailConfig,
}

impl ImapMailbox {
    /// Creates a mailbox reader for the configured account and folder.
    #[must_use]
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl AlertSource for ImapMailbox {
    async fn fetch_latest_unread(&self) -> Result<Option<String>, MailboxError> {
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || fetch_latest_unread_blocking(&config))
            .await
            .map_err(|err| MailboxError::Task(err.to_string()))?
    }
}

fn fetch_latest_unread_blocking(config: &MailConfig) -> Result<Option<String>, MailboxError> {
    let mut session = open_session(config)?;
    let result = fetch_from_session(&mut session, config);

    // The fetch outcome stands whether or not the goodbye went through.
    if let Err(err) = session.logout() {
        tracing::debug!("mailbox logout failed: {err}");
    }

    result
}

fn open_session(config: &MailConfig) -> Result<ImapSession, MailboxError> {
    let tls = TlsConnector::builder()
        .build()
        .map_err(|err| MailboxError::Connection(err.to_string()))?;

    let client = imap::connect(
        (config.host.as_str(), config.port),
        config.host.as_str(),
        &tls,
    )
    .map_err(map_imap_error)?;

    client
        .login(&config.user, &config.password)
        .map_err(|(err, _client)| MailboxError::Auth(err.to_string()))
}

fn fetch_from_session(
    session: &mut ImapSession,
    config: &MailConfig,
) -> Result<Option<String>, MailboxError> {
    session.select(&config.folder).map_err(map_imap_error)?;

    let unseen = session.search("UNSEEN").map_err(map_imap_error)?;
    let Some(latest) = unseen.iter().copied().max() else {
        return Ok(None);
    };

    let sequence = latest.to_string();
    let fetches = session.fetch(&sequence, "RFC822").map_err(map_imap_error)?;
    let body = fetches
        .iter()
        .next()
        .and_then(imap::types::Fetch::body)
        .and_then(mime::plain_text_body);

    // Fetching RFC822 already implies \Seen on most servers; the explicit
    // store is idempotent and covers the ones where it does not.
    session
        .store(&sequence, "+FLAGS (\\Seen)")
        .map_err(map_imap_error)?;

    match body {
        Some(text) => Ok(Some(text)),
        None => {
            tracing::warn!(
                sequence = latest,
                "unread message had no decodable plain-text body"
            );
            Ok(None)
        }
    }
}

fn map_imap_error(err: imap::Error) -> MailboxError {
    match err {
        imap::Error::Io(err) => MailboxError::Connection(err.to_string()),
        imap::Error::ConnectionLost => MailboxError::Connection("connection lost".to_string()),
        other => MailboxError::Protocol(other.to_string()),
    }
}

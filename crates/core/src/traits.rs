//! Narrow interfaces to the two external collaborators: the alert mailbox
//! and the trading platform.

use crate::error::{MailboxError, PlatformError};
use crate::types::{OrderRequest, OrderResult, PlatformPosition, PositionTicket, TickQuote};
use async_trait::async_trait;

/// Source of trading alert texts.
#[async_trait]
pub trait AlertSource: Send + Sync {
    /// Fetches the plain-text body of the most recent unread message and
    /// marks it read. `Ok(None)` means no unread mail — a normal outcome,
    /// not an error.
    async fn fetch_latest_unread(&self) -> Result<Option<String>, MailboxError>;
}

/// The trading platform collaborator.
#[async_trait]
pub trait TradingPlatform: Send + Sync {
    /// Current bid/ask for `symbol`.
    async fn current_tick(&self, symbol: &str) -> Result<TickQuote, PlatformError>;

    /// Looks up an open position by ticket. `Ok(None)` means the platform
    /// no longer knows the position.
    async fn position(
        &self,
        ticket: PositionTicket,
    ) -> Result<Option<PlatformPosition>, PlatformError>;

    /// Submits a market order. `Ok(None)` means the platform returned no
    /// result object at all, which is distinct from an explicit rejection
    /// (`Ok(Some)` with a non-done retcode).
    async fn send_market_order(
        &self,
        request: &OrderRequest,
    ) -> Result<Option<OrderResult>, PlatformError>;

    /// Best-effort diagnostic for the platform's last recorded error, used
    /// after a null order result.
    async fn last_error(&self) -> String;
}

//! Position lifecycle: close the tracked position, open the next one.

use inbox_trader_core::{
    OrderRequest, PlatformError, SessionState, TradeDirection, TradingPlatform,
};
use rust_decimal::Decimal;
use thiserror::Error;

/// Failure closing the tracked position.
#[derive(Debug, Error)]
pub enum CloseError {
    /// Transport or protocol failure talking to the platform.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// The platform rejected the closing order.
    #[error("close order rejected with retcode {retcode}: {comment}")]
    Rejected {
        /// Platform return code.
        retcode: u32,
        /// Platform comment for the rejection.
        comment: String,
    },

    /// The platform returned no result object for the closing order.
    #[error("platform returned no result for close order")]
    NoResult,
}

/// Failure opening a new position.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The prior position could not be closed; no open was attempted.
    #[error("prior position not closed: {0}")]
    CloseFailed(#[from] CloseError),

    /// Transport or protocol failure talking to the platform.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// The platform rejected the order.
    #[error("order rejected with retcode {retcode}: {comment}")]
    Rejected {
        /// Platform return code.
        retcode: u32,
        /// Platform comment for the rejection.
        comment: String,
    },

    /// The platform returned no result object for the order.
    #[error("platform returned no result for order; last error: {last_error}")]
    NoResult {
        /// Diagnostic fetched from the platform after the null result.
        last_error: String,
    },
}

/// Tracks the one open position and flips it on demand.
///
/// Session state changes only after the platform confirms an outcome;
/// every failure path leaves it untouched so the next tick re-derives a
/// consistent decision. Each call makes at most one close attempt and one
/// open attempt; retries happen only through the outer loop, and only if
/// a new signal arrives.
pub struct PositionManager<P: TradingPlatform> {
    platform: P,
    symbol: String,
    lot_size: Decimal,
    deviation: u32,
    state: SessionState,
}

impl<P: TradingPlatform> PositionManager<P> {
    /// Creates a manager trading `symbol` with a fixed lot size.
    pub fn new(platform: P, symbol: impl Into<String>, lot_size: Decimal, deviation: u32) -> Self {
        Self {
            platform,
            symbol: symbol.into(),
            lot_size,
            deviation,
            state: SessionState::new(),
        }
    }

    /// Direction of the last confirmed fill, if any.
    #[must_use]
    pub const fn last_direction(&self) -> Option<TradeDirection> {
        self.state.last_direction()
    }

    /// Current session state, for inspection.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Closes the tracked open position, if any.
    ///
    /// Succeeds without a platform call when no position is tracked. A
    /// position the platform no longer knows counts as already closed —
    /// the platform is the source of truth, not local memory — so the
    /// tracked ticket is cleared and no closing order is submitted.
    ///
    /// # Errors
    /// Returns an error when the closing order is rejected or lost, or the
    /// platform is unreachable; the tracked ticket is kept in every such
    /// case.
    pub async fn close_open_position(&mut self) -> Result<(), CloseError> {
        let Some(ticket) = self.state.open_position() else {
            return Ok(());
        };

        let Some(position) = self.platform.position(ticket).await? else {
            tracing::info!(ticket, "tracked position already gone on platform");
            self.state.clear_position();
            return Ok(());
        };

        let quote = self.platform.current_tick(&self.symbol).await?;
        let request = OrderRequest::market_close(
            ticket,
            self.symbol.as_str(),
            position.volume,
            position.direction.opposite(),
            quote.close_price(position.direction),
            self.deviation,
        );

        match self.platform.send_market_order(&request).await? {
            Some(result) if result.is_done() => {
                tracing::info!(ticket, "closed position");
                self.state.clear_position();
                Ok(())
            }
            Some(result) => Err(CloseError::Rejected {
                retcode: result.retcode,
                comment: result.comment,
            }),
            None => Err(CloseError::NoResult),
        }
    }

    /// Closes any tracked position, then opens a new one in `direction`
    /// for the configured lot size at the current entry-side price.
    ///
    /// # Errors
    /// Returns an error when the prior close fails (no open is attempted)
    /// or when the opening order is rejected or lost; session state is
    /// unchanged on every failure path.
    pub async fn open_position(&mut self, direction: TradeDirection) -> Result<(), OpenError> {
        self.close_open_position().await?;

        let quote = self.platform.current_tick(&self.symbol).await?;
        let price = quote.entry_price(direction);
        let request = OrderRequest::market_open(
            self.symbol.as_str(),
            self.lot_size,
            direction,
            price,
            self.deviation,
        );

        match self.platform.send_market_order(&request).await? {
            Some(result) if result.is_done() => {
                tracing::info!(%direction, %price, ticket = result.order, "order filled");
                self.state.record_fill(direction, result.order);
                Ok(())
            }
            Some(result) => Err(OpenError::Rejected {
                retcode: result.retcode,
                comment: result.comment,
            }),
            None => {
                let last_error = self.platform.last_error().await;
                Err(OpenError::NoResult { last_error })
            }
        }
    }
}

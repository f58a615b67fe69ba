//! Data models shared across the signal relay.
//!
//! All financial values use `rust_decimal::Decimal` for precision.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Broker-assigned handle identifying an open position.
pub type PositionTicket = u64;

/// Return code the platform reports for a completed trade request.
pub const TRADE_RETCODE_DONE: u32 = 10009;

// =============================================================================
// Direction
// =============================================================================

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    /// Long the symbol.
    Buy,
    /// Short the symbol.
    Sell,
}

impl TradeDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

// =============================================================================
// Market Data
// =============================================================================

/// Current bid/ask quote for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickQuote {
    /// Best bid price.
    pub bid: Decimal,

    /// Best ask price.
    pub ask: Decimal,

    /// Time the quote was taken.
    pub time: DateTime<Utc>,
}

impl TickQuote {
    /// Price at which a new position in `direction` enters the market:
    /// ask for a buy, bid for a sell.
    #[must_use]
    pub const fn entry_price(&self, direction: TradeDirection) -> Decimal {
        match direction {
            TradeDirection::Buy => self.ask,
            TradeDirection::Sell => self.bid,
        }
    }

    /// Price at which an open position in `open_side` closes:
    /// bid when the open side is a buy, ask when it is a sell.
    #[must_use]
    pub const fn close_price(&self, open_side: TradeDirection) -> Decimal {
        match open_side {
            TradeDirection::Buy => self.bid,
            TradeDirection::Sell => self.ask,
        }
    }
}

/// The platform's view of an open position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformPosition {
    /// Broker-assigned ticket.
    pub ticket: PositionTicket,

    /// Traded symbol.
    pub symbol: String,

    /// Side the position was opened on.
    pub direction: TradeDirection,

    /// Position volume in lots.
    pub volume: Decimal,

    /// Price the position was opened at.
    pub open_price: Decimal,
}

// =============================================================================
// Orders
// =============================================================================

/// How long an order stays working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeInForce {
    /// Order stays until cancelled.
    GoodTillCancelled,
    /// Order expires at end of the trading day.
    Day,
}

/// How partial availability is handled at execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillPolicy {
    /// Fill what is available immediately, cancel the rest.
    ImmediateOrCancel,
    /// Fill completely or not at all.
    FillOrKill,
}

/// A market order request, constructed fresh per attempt and never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Traded symbol.
    pub symbol: String,

    /// Volume in lots.
    pub volume: Decimal,

    /// Order side.
    pub direction: TradeDirection,

    /// Reference price for the market order.
    pub price: Decimal,

    /// Maximum allowed deviation from `price`, in points.
    pub deviation: u32,

    /// Ticket of the position this order closes, if it is a closing order.
    pub position: Option<PositionTicket>,

    /// Time-in-force; always good-till-cancelled in this design.
    pub time_in_force: TimeInForce,

    /// Fill policy; always immediate-or-cancel in this design.
    pub fill_policy: FillPolicy,

    /// Free-form order tag shown in the platform's journal.
    pub comment: String,
}

impl OrderRequest {
    /// Builds a market order opening a new position.
    #[must_use]
    pub fn market_open(
        symbol: impl Into<String>,
        volume: Decimal,
        direction: TradeDirection,
        price: Decimal,
        deviation: u32,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            volume,
            direction,
            price,
            deviation,
            position: None,
            time_in_force: TimeInForce::GoodTillCancelled,
            fill_policy: FillPolicy::ImmediateOrCancel,
            comment: "signal relay".to_string(),
        }
    }

    /// Builds a market order closing the position identified by `ticket`.
    ///
    /// `direction` is the side of the closing order (the opposite of the
    /// open side) and `volume` must be the position's exact volume.
    #[must_use]
    pub fn market_close(
        ticket: PositionTicket,
        symbol: impl Into<String>,
        volume: Decimal,
        direction: TradeDirection,
        price: Decimal,
        deviation: u32,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            volume,
            direction,
            price,
            deviation,
            position: Some(ticket),
            time_in_force: TimeInForce::GoodTillCancelled,
            fill_policy: FillPolicy::ImmediateOrCancel,
            comment: "close previous trade".to_string(),
        }
    }

    /// Returns true if this order closes an existing position.
    #[must_use]
    pub const fn is_close(&self) -> bool {
        self.position.is_some()
    }
}

/// Result object the platform returns for a submitted order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResult {
    /// Platform return code; `TRADE_RETCODE_DONE` on a confirmed fill.
    pub retcode: u32,

    /// Ticket of the resulting order/position.
    pub order: PositionTicket,

    /// Human-readable detail from the platform.
    pub comment: String,
}

impl OrderResult {
    /// Returns true if the platform confirmed the fill.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.retcode == TRADE_RETCODE_DONE
    }
}

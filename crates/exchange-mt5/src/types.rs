//! Wire types for the terminal bridge.
//!
//! Field names mirror the terminal's own trade request fields (`type_time`,
//! `type_filling`, `deviation`, ...) so bridge logs line up with terminal
//! logs. All financial values use `rust_decimal::Decimal`.

use chrono::{DateTime, Utc};
use inbox_trader_core::{
    FillPolicy, OrderRequest, OrderResult, PlatformPosition, TickQuote, TimeInForce,
    TradeDirection,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Session
// =============================================================================

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Trading account number.
    pub account: u64,
    /// Account password.
    pub password: String,
    /// Broker server name.
    pub server: String,
}

/// Bridge status snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    /// Whether the terminal behind the bridge is initialized.
    pub initialized: bool,
    /// Terminal build number, when the bridge reports one.
    #[serde(default)]
    pub terminal_build: Option<u32>,
}

/// Last error recorded by the terminal.
#[derive(Debug, Clone, Deserialize)]
pub struct LastErrorResponse {
    /// Terminal error code.
    pub code: i32,
    /// Terminal error description.
    pub message: String,
}

// =============================================================================
// Market Data & Positions
// =============================================================================

/// Current tick for a symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct TickResponse {
    pub bid: Decimal,
    pub ask: Decimal,
    pub time: DateTime<Utc>,
}

impl From<TickResponse> for TickQuote {
    fn from(tick: TickResponse) -> Self {
        Self {
            bid: tick.bid,
            ask: tick.ask,
            time: tick.time,
        }
    }
}

/// Open position as reported by the terminal.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionResponse {
    pub ticket: u64,
    pub symbol: String,
    /// Side the position was opened on.
    #[serde(rename = "type")]
    pub direction: TradeDirection,
    pub volume: Decimal,
    pub price_open: Decimal,
}

impl From<PositionResponse> for PlatformPosition {
    fn from(position: PositionResponse) -> Self {
        Self {
            ticket: position.ticket,
            symbol: position.symbol,
            direction: position.direction,
            volume: position.volume,
            open_price: position.price_open,
        }
    }
}

// =============================================================================
// Orders
// =============================================================================

/// Market order submission body.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSendRequest {
    pub symbol: String,
    pub volume: Decimal,
    #[serde(rename = "type")]
    pub direction: TradeDirection,
    /// Ticket of the position this order closes, for closing orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u64>,
    pub price: Decimal,
    pub deviation: u32,
    pub type_time: TimeInForce,
    pub type_filling: FillPolicy,
    pub comment: String,
}

impl From<&OrderRequest> for OrderSendRequest {
    fn from(request: &OrderRequest) -> Self {
        Self {
            symbol: request.symbol.clone(),
            volume: request.volume,
            direction: request.direction,
            position: request.position,
            price: request.price,
            deviation: request.deviation,
            type_time: request.time_in_force,
            type_filling: request.fill_policy,
            comment: request.comment.clone(),
        }
    }
}

/// Result of an order submission. The bridge sends `null` when the
/// terminal produced no result object at all.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderSendResponse {
    /// Terminal return code.
    pub retcode: u32,
    /// Ticket of the resulting order.
    pub order: u64,
    /// Terminal comment for the result.
    #[serde(default)]
    pub comment: String,
}

impl From<OrderSendResponse> for OrderResult {
    fn from(response: OrderSendResponse) -> Self {
        Self {
            retcode: response.retcode,
            order: response.order,
            comment: response.comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inbox_trader_core::TRADE_RETCODE_DONE;
    use rust_decimal_macros::dec;

    #[test]
    fn order_send_request_serializes_terminal_field_names() {
        let order = OrderRequest::market_open(
            "EURUSD",
            dec!(0.01),
            TradeDirection::Buy,
            dec!(1.1002),
            10,
        );
        let wire = OrderSendRequest::from(&order);
        let json = serde_json::to_value(&wire).unwrap();

        assert_eq!(json["type"], "buy");
        assert_eq!(json["deviation"], 10);
        assert_eq!(json["type_time"], "good_till_cancelled");
        assert_eq!(json["type_filling"], "immediate_or_cancel");
        assert!(json.get("position").is_none());
    }

    #[test]
    fn closing_order_carries_position_ticket() {
        let order = OrderRequest::market_close(
            101,
            "EURUSD",
            dec!(0.01),
            TradeDirection::Sell,
            dec!(1.1000),
            10,
        );
        let wire = OrderSendRequest::from(&order);
        let json = serde_json::to_value(&wire).unwrap();

        assert_eq!(json["position"], 101);
        assert_eq!(json["type"], "sell");
    }

    #[test]
    fn order_send_response_parses_and_converts() {
        let json = r#"{"retcode": 10009, "order": 101, "comment": "done"}"#;
        let response: OrderSendResponse = serde_json::from_str(json).unwrap();
        let result = OrderResult::from(response);

        assert_eq!(result.retcode, TRADE_RETCODE_DONE);
        assert_eq!(result.order, 101);
        assert!(result.is_done());
    }

    #[test]
    fn null_order_response_parses_to_none() {
        let response: Option<OrderSendResponse> = serde_json::from_str("null").unwrap();
        assert!(response.is_none());
    }

    #[test]
    fn tick_response_converts_to_quote() {
        let json = r#"{"bid": "1.1000", "ask": "1.1002", "time": "2024-05-01T12:00:00Z"}"#;
        let tick: TickResponse = serde_json::from_str(json).unwrap();
        let quote = TickQuote::from(tick);

        assert_eq!(quote.bid, dec!(1.1000));
        assert_eq!(quote.ask, dec!(1.1002));
    }

    #[test]
    fn position_response_converts_with_renamed_fields() {
        let json = r#"{
            "ticket": 101,
            "symbol": "EURUSD",
            "type": "buy",
            "volume": "0.01",
            "price_open": "1.1002"
        }"#;
        let response: PositionResponse = serde_json::from_str(json).unwrap();
        let position = PlatformPosition::from(response);

        assert_eq!(position.ticket, 101);
        assert_eq!(position.direction, TradeDirection::Buy);
        assert_eq!(position.open_price, dec!(1.1002));
    }
}

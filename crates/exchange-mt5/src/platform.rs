//! `TradingPlatform` implementation over the bridge client.

use crate::client::Mt5BridgeClient;
use crate::types::{
    LastErrorResponse, OrderSendRequest, OrderSendResponse, PositionResponse, TickResponse,
};
use async_trait::async_trait;
use inbox_trader_core::{
    OrderRequest, OrderResult, PlatformError, PlatformPosition, PositionTicket, TickQuote,
    TradingPlatform,
};

#[async_trait]
impl TradingPlatform for Mt5BridgeClient {
    async fn current_tick(&self, symbol: &str) -> Result<TickQuote, PlatformError> {
        let tick: TickResponse = self
            .get(&format!("/symbols/{symbol}/tick"))
            .await
            .map_err(PlatformError::from)?;
        Ok(tick.into())
    }

    async fn position(
        &self,
        ticket: PositionTicket,
    ) -> Result<Option<PlatformPosition>, PlatformError> {
        let position: Option<PositionResponse> = self
            .get_optional(&format!("/positions/{ticket}"))
            .await
            .map_err(PlatformError::from)?;
        Ok(position.map(Into::into))
    }

    async fn send_market_order(
        &self,
        request: &OrderRequest,
    ) -> Result<Option<OrderResult>, PlatformError> {
        let wire = OrderSendRequest::from(request);
        tracing::debug!(
            symbol = %wire.symbol,
            direction = %wire.direction,
            volume = %wire.volume,
            closing = wire.position.is_some(),
            "submitting market order"
        );

        let response: Option<OrderSendResponse> = self
            .post("/orders", &wire)
            .await
            .map_err(PlatformError::from)?;
        Ok(response.map(Into::into))
    }

    async fn last_error(&self) -> String {
        match self.get::<LastErrorResponse>("/last_error").await {
            Ok(err) => format!("{} (code {})", err.message, err.code),
            Err(_) => "last error unavailable".to_string(),
        }
    }
}

//! Scripted collaborator doubles for position and poll-loop tests.

use async_trait::async_trait;
use chrono::Utc;
use inbox_trader_core::{
    AlertSource, MailboxError, OrderRequest, OrderResult, PlatformError, PlatformPosition,
    PositionTicket, TickQuote, TradingPlatform, TRADE_RETCODE_DONE,
};
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted mail source: pops one canned outcome per fetch, then reports
/// no mail.
pub struct MockMailbox {
    responses: Mutex<VecDeque<Result<Option<String>, MailboxError>>>,
}

impl MockMailbox {
    pub fn scripted(responses: Vec<Result<Option<String>, MailboxError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl AlertSource for MockMailbox {
    async fn fetch_latest_unread(&self) -> Result<Option<String>, MailboxError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(None))
    }
}

#[derive(Default)]
struct MockPlatformState {
    tick: Option<TickQuote>,
    positions: Vec<PlatformPosition>,
    order_results: VecDeque<Option<OrderResult>>,
    sent_orders: Vec<OrderRequest>,
    position_queries: Vec<PositionTicket>,
    last_error: String,
}

/// Scripted platform: serves a fixed tick, tracks open positions, and pops
/// one scripted result per submitted order while recording every call.
///
/// On a confirmed fill it also updates its own position book (adds the
/// opened position, removes a closed one) so multi-tick scenarios behave
/// like the real platform.
#[derive(Clone, Default)]
pub struct MockPlatform {
    inner: Arc<Mutex<MockPlatformState>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tick(&self, bid: Decimal, ask: Decimal) {
        self.inner.lock().unwrap().tick = Some(TickQuote {
            bid,
            ask,
            time: Utc::now(),
        });
    }

    pub fn set_last_error(&self, message: &str) {
        self.inner.lock().unwrap().last_error = message.to_string();
    }

    pub fn push_order_result(&self, result: Option<OrderResult>) {
        self.inner.lock().unwrap().order_results.push_back(result);
    }

    pub fn push_fill(&self, ticket: PositionTicket) {
        self.push_order_result(Some(OrderResult {
            retcode: TRADE_RETCODE_DONE,
            order: ticket,
            comment: "done".to_string(),
        }));
    }

    pub fn push_rejection(&self, retcode: u32, comment: &str) {
        self.push_order_result(Some(OrderResult {
            retcode,
            order: 0,
            comment: comment.to_string(),
        }));
    }

    pub fn remove_position(&self, ticket: PositionTicket) {
        self.inner
            .lock()
            .unwrap()
            .positions
            .retain(|p| p.ticket != ticket);
    }

    pub fn sent_orders(&self) -> Vec<OrderRequest> {
        self.inner.lock().unwrap().sent_orders.clone()
    }

    pub fn position_queries(&self) -> Vec<PositionTicket> {
        self.inner.lock().unwrap().position_queries.clone()
    }
}

#[async_trait]
impl TradingPlatform for MockPlatform {
    async fn current_tick(&self, symbol: &str) -> Result<TickQuote, PlatformError> {
        self.inner
            .lock()
            .unwrap()
            .tick
            .clone()
            .ok_or(PlatformError::MissingQuote {
                symbol: symbol.to_string(),
            })
    }

    async fn position(
        &self,
        ticket: PositionTicket,
    ) -> Result<Option<PlatformPosition>, PlatformError> {
        let mut state = self.inner.lock().unwrap();
        state.position_queries.push(ticket);
        Ok(state.positions.iter().find(|p| p.ticket == ticket).cloned())
    }

    async fn send_market_order(
        &self,
        request: &OrderRequest,
    ) -> Result<Option<OrderResult>, PlatformError> {
        let mut state = self.inner.lock().unwrap();
        state.sent_orders.push(request.clone());

        let result = state.order_results.pop_front().unwrap_or(None);
        if let Some(filled) = result.as_ref().filter(|r| r.is_done()) {
            match request.position {
                Some(closed) => state.positions.retain(|p| p.ticket != closed),
                None => state.positions.push(PlatformPosition {
                    ticket: filled.order,
                    symbol: request.symbol.clone(),
                    direction: request.direction,
                    volume: request.volume,
                    open_price: request.price,
                }),
            }
        }

        Ok(result)
    }

    async fn last_error(&self) -> String {
        self.inner.lock().unwrap().last_error.clone()
    }
}

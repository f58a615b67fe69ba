//! MetaTrader 5 integration for the signal relay.
//!
//! The terminal has no native Rust API, so this crate talks to a local
//! bridge gateway that fronts a running terminal over REST. It provides:
//! - [`Mt5BridgeClient`], a typed REST client for the bridge
//! - The [`TradingPlatform`](inbox_trader_core::TradingPlatform)
//!   implementation used by the position manager
//! - Wire types mirroring the terminal's trade request fields, so bridge
//!   logs line up with terminal logs
//!
//! # Bridge endpoints
//!
//! - `GET /status` - terminal initialization state
//! - `POST /login` - log the trading account in
//! - `GET /symbols/{symbol}/tick` - current bid/ask
//! - `GET /positions/{ticket}` - open position by ticket (404 when gone)
//! - `POST /orders` - submit a market order (body may be `null` when the
//!   terminal produced no result object)
//! - `GET /last_error` - last error recorded by the terminal
//!
//! # Example
//!
//! ```ignore
//! use inbox_trader_mt5::{Mt5BridgeClient, Mt5ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Mt5BridgeClient::new(Mt5ClientConfig::default())?;
//!     let status = client.status().await?;
//!     assert!(status.initialized);
//!     client.login(12345678, "password", "Broker-MT5").await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod platform;
pub mod types;

pub use client::{Mt5BridgeClient, Mt5ClientConfig, DEFAULT_BRIDGE_URL};
pub use error::{Mt5Error, Result};
pub use types::{
    LastErrorResponse, LoginRequest, OrderSendRequest, OrderSendResponse, PositionResponse,
    StatusResponse, TickResponse,
};

pub mod config;
pub mod config_loader;
pub mod error;
pub mod session;
pub mod signal;
pub mod traits;
pub mod types;

pub use config::{AppConfig, MailConfig, PlatformConfig, TradingConfig};
pub use config_loader::ConfigLoader;
pub use error::{MailboxError, PlatformError};
pub use session::SessionState;
pub use signal::{SignalDetector, DEFAULT_SIGNAL_MARKER};
pub use traits::{AlertSource, TradingPlatform};
pub use types::{
    FillPolicy, OrderRequest, OrderResult, PlatformPosition, PositionTicket, TickQuote,
    TimeInForce, TradeDirection, TRADE_RETCODE_DONE,
};

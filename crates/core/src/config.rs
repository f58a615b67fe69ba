//! Application configuration.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub mail: MailConfig,
    pub platform: PlatformConfig,
    pub trading: TradingConfig,
}

/// Mailbox connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// IMAP server host.
    pub host: String,
    /// IMAPS port.
    pub port: u16,
    /// Mailbox login.
    pub user: String,
    /// Mailbox password (an app password for most providers).
    pub password: String,
    /// Folder to watch for alerts.
    pub folder: String,
}

/// Trading platform bridge settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Base URL of the local terminal bridge.
    pub bridge_url: String,
    /// Platform account number.
    pub account: u64,
    /// Platform account password.
    pub password: String,
    /// Broker server name.
    pub server: String,
}

/// Trading parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingConfig {
    /// Symbol to trade.
    pub symbol: String,
    /// Fixed order volume in lots.
    pub lot_size: Decimal,
    /// Maximum allowed price deviation, in points.
    pub deviation: u32,
    /// Substring that identifies an alert email.
    pub signal_marker: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mail: MailConfig {
                host: "imap.gmail.com".to_string(),
                port: 993,
                user: String::new(),
                password: String::new(),
                folder: "INBOX".to_string(),
            },
            platform: PlatformConfig {
                bridge_url: "http://127.0.0.1:6542".to_string(),
                account: 0,
                password: String::new(),
                server: String::new(),
            },
            trading: TradingConfig {
                symbol: String::new(),
                lot_size: Decimal::new(1, 2), // 0.01 lots
                deviation: 10,
                signal_marker: crate::signal::DEFAULT_SIGNAL_MARKER.to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Checks that every field the relay cannot run without is present.
    ///
    /// # Errors
    /// Returns an error naming the first missing or invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.mail.user.is_empty() {
            anyhow::bail!("mail.user is not set");
        }
        if self.mail.password.is_empty() {
            anyhow::bail!("mail.password is not set");
        }
        if self.platform.account == 0 {
            anyhow::bail!("platform.account is not set");
        }
        if self.platform.password.is_empty() {
            anyhow::bail!("platform.password is not set");
        }
        if self.platform.server.is_empty() {
            anyhow::bail!("platform.server is not set");
        }
        if self.trading.symbol.is_empty() {
            anyhow::bail!("trading.symbol is not set");
        }
        if self.trading.lot_size <= Decimal::ZERO {
            anyhow::bail!("trading.lot_size must be positive");
        }
        if self.trading.signal_marker.is_empty() {
            anyhow::bail!("trading.signal_marker is not set");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn filled_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.mail.user = "alerts@example.com".to_string();
        config.mail.password = "app-password".to_string();
        config.platform.account = 12345678;
        config.platform.password = "secret".to_string();
        config.platform.server = "Broker-MT5".to_string();
        config.trading.symbol = "EURUSD".to_string();
        config
    }

    #[test]
    fn defaults_match_observed_design() {
        let config = AppConfig::default();
        assert_eq!(config.mail.folder, "INBOX");
        assert_eq!(config.mail.port, 993);
        assert_eq!(config.trading.deviation, 10);
        assert_eq!(config.trading.signal_marker, "Crossing");
        assert_eq!(config.trading.lot_size, dec!(0.01));
    }

    #[test]
    fn filled_config_validates() {
        assert!(filled_config().validate().is_ok());
    }

    #[test]
    fn missing_mail_user_fails_validation() {
        let mut config = filled_config();
        config.mail.user.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("mail.user"));
    }

    #[test]
    fn missing_symbol_fails_validation() {
        let mut config = filled_config();
        config.trading.symbol.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("trading.symbol"));
    }

    #[test]
    fn zero_lot_size_fails_validation() {
        let mut config = filled_config();
        config.trading.lot_size = Decimal::ZERO;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("lot_size"));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = filled_config();
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.trading.symbol, "EURUSD");
        assert_eq!(back.platform.account, 12345678);
    }
}

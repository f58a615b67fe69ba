//! The fixed-interval poll loop driving the relay.

use crate::position::PositionManager;
use inbox_trader_core::{AlertSource, SignalDetector, TradeDirection, TradingPlatform};
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Time between poll ticks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Next order direction under the strict-alternation rule: buy first, then
/// flip on every signal. Elapsed ticks and market state are irrelevant; so
/// is the email text.
#[must_use]
pub const fn next_direction(last: Option<TradeDirection>) -> TradeDirection {
    match last {
        None | Some(TradeDirection::Sell) => TradeDirection::Buy,
        Some(TradeDirection::Buy) => TradeDirection::Sell,
    }
}

/// Polls the alert source and flips the position on every detected signal.
pub struct PollLoop<M, P>
where
    M: AlertSource,
    P: TradingPlatform,
{
    mailbox: M,
    detector: SignalDetector,
    positions: PositionManager<P>,
}

impl<M, P> PollLoop<M, P>
where
    M: AlertSource,
    P: TradingPlatform,
{
    /// Wires the loop together from its three collaborators.
    pub fn new(mailbox: M, detector: SignalDetector, positions: PositionManager<P>) -> Self {
        Self {
            mailbox,
            detector,
            positions,
        }
    }

    /// Runs one poll pass: fetch the latest unread alert, detect the
    /// marker, flip the position.
    ///
    /// Component failures are logged and absorbed into "no action this
    /// tick"; a tick never returns an error and never stops the loop.
    pub async fn tick(&mut self) {
        let body = match self.mailbox.fetch_latest_unread().await {
            Ok(Some(body)) => body,
            Ok(None) => {
                tracing::debug!("no new mail");
                return;
            }
            Err(err) => {
                tracing::warn!("mail check failed: {err}");
                return;
            }
        };

        if !self.detector.matches(&body) {
            tracing::debug!("latest mail carries no alert marker");
            return;
        }

        let direction = next_direction(self.positions.last_direction());
        tracing::info!(%direction, "signal detected, flipping position");

        if let Err(err) = self.positions.open_position(direction).await {
            tracing::error!("position flip failed: {err}");
        }
    }

    /// Runs ticks forever at [`POLL_INTERVAL`].
    ///
    /// Ticks are strictly sequential: a slow tick delays the next one
    /// rather than overlapping it. There is no terminal state; the loop
    /// runs until the process is terminated.
    pub async fn run(mut self) {
        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.tick().await;
        }
    }
}

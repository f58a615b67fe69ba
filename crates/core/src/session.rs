//! Per-process trading session state.
//!
//! One instance is constructed at startup and threaded through the position
//! manager; nothing is persisted, so a restart begins flat.

use crate::types::{PositionTicket, TradeDirection};

/// Mutable session state: the last trade direction and the currently
/// tracked open position, if any.
///
/// Invariant: at most one open position is tracked at a time, and both
/// fields change only after the platform confirms a fill or a close.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    last_direction: Option<TradeDirection>,
    open_position: Option<PositionTicket>,
}

impl SessionState {
    /// Creates a fresh session with no trade history and no open position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction of the last confirmed fill, if any.
    #[must_use]
    pub const fn last_direction(&self) -> Option<TradeDirection> {
        self.last_direction
    }

    /// Ticket of the tracked open position, if any.
    #[must_use]
    pub const fn open_position(&self) -> Option<PositionTicket> {
        self.open_position
    }

    /// Returns true when no position is tracked.
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        self.open_position.is_none()
    }

    /// Records a confirmed fill: the new open ticket and its direction.
    pub fn record_fill(&mut self, direction: TradeDirection, ticket: PositionTicket) {
        self.last_direction = Some(direction);
        self.open_position = Some(ticket);
    }

    /// Clears the tracked position after a confirmed close, or after the
    /// platform reports it gone. The last direction is kept so the
    /// alternation rule still has history.
    pub fn clear_position(&mut self) {
        self.open_position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_flat_with_no_history() {
        let state = SessionState::new();
        assert!(state.is_flat());
        assert!(state.last_direction().is_none());
        assert!(state.open_position().is_none());
    }

    #[test]
    fn record_fill_sets_both_fields() {
        let mut state = SessionState::new();
        state.record_fill(TradeDirection::Buy, 101);

        assert_eq!(state.last_direction(), Some(TradeDirection::Buy));
        assert_eq!(state.open_position(), Some(101));
        assert!(!state.is_flat());
    }

    #[test]
    fn clear_position_keeps_last_direction() {
        let mut state = SessionState::new();
        state.record_fill(TradeDirection::Sell, 42);
        state.clear_position();

        assert!(state.is_flat());
        assert_eq!(state.last_direction(), Some(TradeDirection::Sell));
    }

    #[test]
    fn record_fill_replaces_previous_ticket() {
        let mut state = SessionState::new();
        state.record_fill(TradeDirection::Buy, 101);
        state.clear_position();
        state.record_fill(TradeDirection::Sell, 102);

        assert_eq!(state.open_position(), Some(102));
        assert_eq!(state.last_direction(), Some(TradeDirection::Sell));
    }
}

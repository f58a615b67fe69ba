//! The relay's decision core: the position-flip state machine and the
//! fixed-interval poll loop that drives it.
//!
//! - [`PositionManager`] tracks the one open position, closes it, and
//!   opens the next one; session state changes only on confirmed platform
//!   outcomes.
//! - [`PollLoop`] runs the fetch-detect-flip cycle on a fixed interval and
//!   absorbs every component error into a logged no-op, so the loop never
//!   terminates on its own.

pub mod poll_loop;
pub mod position;

#[cfg(test)]
pub(crate) mod mock;

pub use poll_loop::{next_direction, PollLoop, POLL_INTERVAL};
pub use position::{CloseError, OpenError, PositionManager};

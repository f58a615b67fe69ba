//! Alert detection over email bodies.
//!
//! Deliberately a crude trigger: a case-sensitive substring check, not a
//! parser. Direction, symbol and size never come from the email text; the
//! position manager's alternation rule decides direction.

/// Marker substring the observed alerts carry.
pub const DEFAULT_SIGNAL_MARKER: &str = "Crossing";

/// Detects whether an email body contains the configured alert marker.
#[derive(Debug, Clone)]
pub struct SignalDetector {
    marker: String,
}

impl SignalDetector {
    /// Creates a detector for the given marker substring.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// The marker substring this detector looks for.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Returns true iff `body` contains the marker verbatim. Pure and
    /// deterministic; no side effects.
    #[must_use]
    pub fn matches(&self, body: &str) -> bool {
        body.contains(&self.marker)
    }
}

impl Default for SignalDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNAL_MARKER)
    }
}

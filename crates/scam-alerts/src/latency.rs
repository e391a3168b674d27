//! Simulated network latency for the mock backend.
//!
//! Every identity, report, and agency operation awaits this delay before
//! touching its repository, modeling the round trip a real backend would
//! cost the caller. Most operations use the base delay; session checks
//! take the [`SimulatedLatency::brief`] variant and report submission the
//! [`SimulatedLatency::extended`] one. Operations are still serialized on
//! the runtime; the delay never fails and is never cancelled.

use std::time::Duration;

/// Network-like delay applied ahead of each mock-backend operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            delay: Duration::from_millis(millis),
        }
    }

    /// No delay at all. Tests run with this so assertions stay fast.
    pub const fn none() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Reduced delay for lightweight lookups such as session checks.
    /// Scales the base round trip to two fifths, so the 500 ms default
    /// yields 200 ms; zero stays zero.
    pub fn brief(self) -> Self {
        Self {
            delay: self.delay * 2 / 5,
        }
    }

    /// Doubled delay for heavyweight writes such as report submission,
    /// where the payload carries proof images.
    pub fn extended(self) -> Self {
        Self {
            delay: self.delay * 2,
        }
    }

    pub async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::none()
    }
}

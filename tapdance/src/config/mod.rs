use embassy_time::Duration;

use crate::DEFAULT_TAPPING_TERM;

/// Behavior config of tap dances
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDanceConfig {
    /// Window in which further presses of the same key count towards one interaction.
    /// Each press restarts the window.
    pub tapping_term: Duration,
}

impl Default for TapDanceConfig {
    fn default() -> Self {
        Self {
            tapping_term: DEFAULT_TAPPING_TERM,
        }
    }
}

impl TapDanceConfig {
    pub const fn new(tapping_term: Duration) -> Self {
        Self { tapping_term }
    }

    pub const fn with_tapping_term_ms(tapping_term_ms: u64) -> Self {
        Self::new(Duration::from_millis(tapping_term_ms))
    }
}

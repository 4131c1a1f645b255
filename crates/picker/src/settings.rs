use std::time::Duration;

pub const DEFAULT_STEPS: usize = 11;
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(100);

/// Shape of one shuffle sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleSettings {
    /// Transient picks shown before the final one.
    pub steps: usize,
    /// Pause before each transient pick.
    pub step_delay: Duration,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ShuffleSettings {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            step_delay: DEFAULT_STEP_DELAY,
            seed: None,
        }
    }
}

//! Trigger search over a raw capture.
//!
//! The detector picks the first sample that satisfies the configured
//! condition. It is a single linear pass without look-ahead or debounce, so a
//! noisy signal triggers on its first qualifying sample.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(test), derive(defmt::Format))]
pub enum TriggerMode {
    /// Free running, the window always starts at the first sample.
    Off,
    /// Previous sample below the level, current at or above it.
    RisingEdge,
    /// Previous sample at or above the level, current below it.
    FallingEdge,
    /// Any change of side relative to the level.
    LevelCross,
}

impl Default for TriggerMode {
    fn default() -> Self {
        TriggerMode::Off
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub mode: TriggerMode,
    pub level: u8,
}

impl Default for Trigger {
    fn default() -> Self {
        Trigger::new(TriggerMode::Off, Trigger::DEFAULT_LEVEL)
    }
}

impl Trigger {
    /// Mid-scale of the 8-bit sample range.
    pub const DEFAULT_LEVEL: u8 = 128;

    pub const fn new(mode: TriggerMode, level: u8) -> Self {
        Trigger { mode, level }
    }

    /// Returns the index of the first sample matching the trigger condition.
    ///
    /// Buffers shorter than two samples never trigger.
    pub fn find(&self, samples: &[u8]) -> Option<usize> {
        if samples.len() < 2 {
            return None;
        }

        let level = self.level;
        match self.mode {
            TriggerMode::Off => None,
            TriggerMode::RisingEdge => samples
                .windows(2)
                .position(|pair| pair[0] < level && pair[1] >= level)
                .map(|i| i + 1),
            TriggerMode::FallingEdge => samples
                .windows(2)
                .position(|pair| pair[0] >= level && pair[1] < level)
                .map(|i| i + 1),
            TriggerMode::LevelCross => {
                let above = |sample: u8| sample >= level;
                // Index 0 has no predecessor and always counts as a crossing
                (0..samples.len()).find(|&i| i == 0 || above(samples[i]) != above(samples[i - 1]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn trigger(mode: TriggerMode, level: u8) -> Trigger {
        Trigger::new(mode, level)
    }

    #[test]
    fn test_defaults() {
        let t = Trigger::default();
        assert_eq!(t.mode, TriggerMode::Off);
        assert_eq!(t.level, 128);
    }

    #[test]
    fn test_short_buffers_never_trigger() {
        for mode in [
            TriggerMode::Off,
            TriggerMode::RisingEdge,
            TriggerMode::FallingEdge,
            TriggerMode::LevelCross,
        ]
        .iter()
        {
            assert_eq!(trigger(*mode, 128).find(&[]), None);
            assert_eq!(trigger(*mode, 128).find(&[200]), None);
        }
    }

    #[test]
    fn test_off_never_triggers() {
        assert_eq!(trigger(TriggerMode::Off, 128).find(&[0, 255, 0, 255]), None);
    }

    #[test]
    fn test_rising_edge() {
        let mut samples = [0u8; 100];
        samples[50..].iter_mut().for_each(|s| *s = 200);
        assert_eq!(trigger(TriggerMode::RisingEdge, 128).find(&samples), Some(50));
    }

    #[test]
    fn test_rising_edge_includes_level() {
        assert_eq!(
            trigger(TriggerMode::RisingEdge, 128).find(&[127, 128, 0]),
            Some(1)
        );
        // Starting above the level is not an edge
        assert_eq!(trigger(TriggerMode::RisingEdge, 128).find(&[200, 255]), None);
    }

    #[test]
    fn test_falling_edge() {
        let samples = [200, 200, 130, 127, 10];
        assert_eq!(trigger(TriggerMode::FallingEdge, 128).find(&samples), Some(3));
        assert_eq!(trigger(TriggerMode::FallingEdge, 128).find(&[0, 0, 0]), None);
    }

    #[test]
    fn test_first_match_wins() {
        let samples = [0, 200, 0, 200, 0, 200];
        assert_eq!(trigger(TriggerMode::RisingEdge, 100).find(&samples), Some(1));
        assert_eq!(trigger(TriggerMode::FallingEdge, 100).find(&samples), Some(2));
    }

    #[test]
    fn test_level_cross_counts_first_sample() {
        assert_eq!(trigger(TriggerMode::LevelCross, 128).find(&[0, 0]), Some(0));
        assert_eq!(trigger(TriggerMode::LevelCross, 128).find(&[255, 0]), Some(0));
        let ramp: Vec<u8> = (0..=255).collect();
        assert_eq!(trigger(TriggerMode::LevelCross, 128).find(&ramp), Some(0));
    }

    #[test]
    fn test_level_cross_on_ramp_starting_at_crossing() {
        // The ramp's only crossing sits at index 0
        let ramp: Vec<u8> = (128..=255).collect();
        assert_eq!(trigger(TriggerMode::LevelCross, 128).find(&ramp), Some(0));
    }

    proptest! {
        #[test]
        fn test_rising_edge_previous_sample_below_level(
            samples in prop::collection::vec(any::<u8>(), 0..256),
            level in any::<u8>(),
        ) {
            if let Some(i) = trigger(TriggerMode::RisingEdge, level).find(&samples) {
                prop_assert!(i >= 1);
                prop_assert!(samples[i - 1] < level);
                prop_assert!(samples[i] >= level);
            }
        }

        #[test]
        fn test_falling_edge_previous_sample_at_or_above_level(
            samples in prop::collection::vec(any::<u8>(), 0..256),
            level in any::<u8>(),
        ) {
            if let Some(i) = trigger(TriggerMode::FallingEdge, level).find(&samples) {
                prop_assert!(i >= 1);
                prop_assert!(samples[i - 1] >= level);
                prop_assert!(samples[i] < level);
            }
        }

        #[test]
        fn test_rising_edge_is_first_match(
            samples in prop::collection::vec(any::<u8>(), 2..256),
            level in any::<u8>(),
        ) {
            let expected = (1..samples.len())
                .find(|&i| samples[i - 1] < level && samples[i] >= level);
            prop_assert_eq!(trigger(TriggerMode::RisingEdge, level).find(&samples), expected);
        }
    }
}

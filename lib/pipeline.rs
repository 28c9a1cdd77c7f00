//! Capture-to-frame pipeline.
//!
//! A [`Pipeline`] owns the processing configuration and the outcome of the
//! last trigger search. Each [`Pipeline::process`] call borrows a raw capture
//! and a frame, clears the frame and draws the trace into it:
//!
//! 1. the trigger search picks the first sample of the visible window,
//! 2. the seed column is mapped from the raw sample at that index,
//! 3. every further column averages `samples_per_pixel` samples, is mapped to
//!    a row and connected to the previous column with a line.

use crate::amplitude::to_row;
use crate::decimate::representative;
use crate::error::{Error, Result};
use crate::raster::draw_line;
use crate::trigger::{Trigger, TriggerMode};
use crate::{Bitmap, TRACE_INTENSITY, WIDTH};

/// Processing configuration.
///
/// `amplitude_scale > 0` and `samples_per_pixel >= 1` always hold, invalid
/// values handed to the builders or setters are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    trigger: Trigger,
    amplitude_scale: f32,
    samples_per_pixel: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            trigger: Trigger::default(),
            amplitude_scale: 1.0,
            samples_per_pixel: 1,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    pub fn with_trigger(mut self, mode: TriggerMode, level: u8) -> Self {
        self.trigger = Trigger::new(mode, level);
        self
    }

    pub fn with_amplitude_scale(mut self, scale: f32) -> Self {
        self.update_amplitude_scale(scale);
        self
    }

    pub fn with_time_scale(mut self, samples_per_pixel: u16) -> Self {
        self.update_time_scale(samples_per_pixel);
        self
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    pub fn amplitude_scale(&self) -> f32 {
        self.amplitude_scale
    }

    pub fn samples_per_pixel(&self) -> u16 {
        self.samples_per_pixel
    }

    fn update_amplitude_scale(&mut self, scale: f32) -> bool {
        // Also rejects NaN
        if scale > 0.0 && scale.is_finite() {
            self.amplitude_scale = scale;
            true
        } else {
            false
        }
    }

    fn update_time_scale(&mut self, samples_per_pixel: u16) -> bool {
        if samples_per_pixel > 0 {
            self.samples_per_pixel = samples_per_pixel;
            true
        } else {
            false
        }
    }
}

/// Result of the trigger search of the last processed capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerStatus {
    pub detected: bool,
    /// Index of the last detected trigger, kept when a later search fails.
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Uninitialized,
    Ready,
}

pub struct Pipeline {
    config: Config,
    state: State,
    status: TriggerStatus,
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::new(Config::default())
    }
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Pipeline {
            config,
            state: State::Uninitialized,
            status: TriggerStatus::default(),
        }
    }

    /// Enables processing. Calls to [`Pipeline::process`] fail before this.
    pub fn begin(&mut self) {
        self.state = State::Ready;
        info!("pipeline initialized");
    }

    pub fn is_ready(&self) -> bool {
        self.state == State::Ready
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_trigger(&mut self, mode: TriggerMode, level: u8) {
        self.config.trigger = Trigger::new(mode, level);
        info!("trigger set: mode={}, level={=u8}", mode, level);
    }

    /// Ignored unless `scale` is positive and finite.
    pub fn set_amplitude_scale(&mut self, scale: f32) {
        if self.config.update_amplitude_scale(scale) {
            info!("amplitude scale: {=f32}", scale);
        }
    }

    /// Ignored if `samples_per_pixel` is 0.
    pub fn set_time_scale(&mut self, samples_per_pixel: u16) {
        if self.config.update_time_scale(samples_per_pixel) {
            info!("time scale: {=u16} samples/column", samples_per_pixel);
        }
    }

    pub fn trigger_status(&self) -> bool {
        self.status.detected
    }

    pub fn trigger_position(&self) -> usize {
        self.status.position
    }

    pub fn status(&self) -> TriggerStatus {
        self.status
    }

    /// Renders `samples` into `bitmap` and returns the number of columns
    /// emitted, the seed column included.
    ///
    /// Validation failures leave both the frame and the trigger status
    /// untouched. Once validation passes the frame is cleared, so
    /// `InsufficientData` leaves an empty frame behind.
    pub fn process(&mut self, samples: &[u8], bitmap: &mut Bitmap) -> Result<usize> {
        if self.state != State::Ready {
            warn!("process called before begin");
            return Err(Error::NotInitialized);
        }
        if samples.is_empty() {
            warn!("empty sample buffer");
            return Err(Error::InvalidInput);
        }

        bitmap.clear();
        self.status.detected = false;

        let start = self.locate_start(samples);
        let samples_per_pixel = self.config.samples_per_pixel as usize;
        let available = samples.len() - start;
        let columns = (available / samples_per_pixel).min(WIDTH);
        // The seed column alone draws nothing
        if columns < 2 {
            warn!(
                "{=usize} samples after offset {=usize}, not enough for a trace",
                available,
                start
            );
            return Err(Error::InsufficientData);
        }

        let scale = self.config.amplitude_scale;
        let mut previous = to_row(samples[start], scale) as usize;
        let mut emitted = 1;
        for x in 1..columns {
            let index = start + x * samples_per_pixel;
            let window = match representative(samples, index, samples_per_pixel) {
                Some(window) => window,
                None => break,
            };
            let row = to_row(window.value, scale) as usize;
            draw_line(bitmap, x - 1, previous, x, row, TRACE_INTENSITY);
            previous = row;
            emitted += 1;
        }

        debug!("frame done: {=usize} columns", emitted);
        Ok(emitted)
    }

    fn locate_start(&mut self, samples: &[u8]) -> usize {
        let trigger = self.config.trigger;
        if trigger.mode == TriggerMode::Off {
            return 0;
        }

        match trigger.find(samples) {
            Some(position) => {
                self.status = TriggerStatus {
                    detected: true,
                    position,
                };
                debug!("trigger at {=usize}", position);
                position
            }
            None => {
                debug!("no trigger, using start of capture");
                0
            }
        }
    }
}

#![cfg_attr(not(test), no_std)]

#[cfg(target_os = "none")]
use core::sync::atomic::{AtomicUsize, Ordering};

#[cfg(target_os = "none")]
use defmt_rtt as _; // global logger
#[cfg(target_os = "none")]
use panic_probe as _;

#[macro_use]
mod log;

pub mod amplitude;
pub mod bitmap;
pub mod decimate;
pub mod error;
pub mod hw;
pub mod pipeline;
pub mod raster;
pub mod scope;
pub mod trigger;

pub use bitmap::Bitmap;
pub use error::{Error, Result};
pub use pipeline::{Config, Pipeline, TriggerStatus};
pub use scope::Scope;
pub use trigger::{Trigger, TriggerMode};

/// Output width in columns.
pub const WIDTH: usize = 800;
/// Output height in rows, row 0 is the top of the frame.
pub const HEIGHT: usize = 600;
/// Number of cells in one frame.
pub const FRAME_LEN: usize = WIDTH * HEIGHT;
/// Intensity written into trace cells. The background is always 0.
pub const TRACE_INTENSITY: u8 = 255;

#[cfg(target_os = "none")]
static COUNT: AtomicUsize = AtomicUsize::new(0);
#[cfg(target_os = "none")]
defmt::timestamp!("{=usize}", {
    let n = COUNT.load(Ordering::Relaxed);
    COUNT.store(n + 1, Ordering::Relaxed);
    n
});

mod ram;

pub use ram::{SpiRam, SpiRamError, CLOCK_HZ, DEFAULT_CAPACITY, MODE};

/// Addressable device holding raw 8-bit samples.
pub trait SampleSource {
    type Error;

    fn is_ready(&self) -> bool;

    /// Reads bytes starting at `address` into the front of `buffer`.
    ///
    /// Returns the number of bytes written, which is 0 when the device is not
    /// ready and is clamped to the device capacity. Bytes past that count are
    /// left as they were.
    fn read_block(&mut self, address: u32, buffer: &mut [u8]) -> Result<usize, Self::Error>;
}

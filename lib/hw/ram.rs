use embedded_hal::blocking::spi::{Transfer, Write};
use embedded_hal::digital::v2::OutputPin;
use embedded_hal::spi::{Mode, MODE_0};

use crate::hw::SampleSource;

/// Bus clock the SRAM is specified for.
pub const CLOCK_HZ: u32 = 10_000_000;
/// CPOL = 0, CPHA = 0
pub const MODE: Mode = MODE_0;
pub const DEFAULT_CAPACITY: u32 = 1024;

const CMD_READ: u8 = 0x03;
// 24-bit address, most significant byte first
const ADDRESS_BYTES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiRamError<SPI, PIN> {
    Spi(SPI),
    // Chip select
    Pin(PIN),
}

/// Serial SRAM read over SPI with a dedicated chip select line.
pub struct SpiRam<SPI, CS> {
    spi: SPI,
    cs: CS,
    capacity: u32,
    ready: bool,
}

impl<SPI, CS, E, P> SpiRam<SPI, CS>
where
    SPI: Transfer<u8, Error = E> + Write<u8, Error = E>,
    CS: OutputPin<Error = P>,
{
    pub fn new(spi: SPI, cs: CS) -> Self {
        SpiRam::with_capacity(spi, cs, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(spi: SPI, cs: CS, capacity: u32) -> Self {
        SpiRam {
            spi,
            cs,
            capacity,
            ready: false,
        }
    }

    /// Deselects the device and enables reads.
    pub fn begin(&mut self) -> Result<(), SpiRamError<E, P>> {
        self.cs.set_high().map_err(SpiRamError::Pin)?;
        self.ready = true;
        debug!("sram ready, {=u32} bytes", self.capacity);
        Ok(())
    }

    pub fn end(&mut self) {
        self.ready = false;
        debug!("sram stopped");
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Reads a single byte, 0 if the device is not ready or `address` is out of range.
    pub fn read_byte(&mut self, address: u32) -> Result<u8, SpiRamError<E, P>> {
        let mut byte = [0u8];
        self.read_block(address, &mut byte)?;
        Ok(byte[0])
    }

    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    fn read_selected(&mut self, address: u32, buffer: &mut [u8]) -> Result<(), E> {
        let mut header = [CMD_READ; 1 + ADDRESS_BYTES];
        for (i, byte) in header[1..].iter_mut().enumerate() {
            *byte = (address >> (8 * (ADDRESS_BYTES - 1 - i))) as u8;
        }
        self.spi.write(&header)?;

        // Clock out zeros, the device answers in place
        buffer.fill(0);
        self.spi.transfer(buffer)?;
        Ok(())
    }
}

impl<SPI, CS, E, P> SampleSource for SpiRam<SPI, CS>
where
    SPI: Transfer<u8, Error = E> + Write<u8, Error = E>,
    CS: OutputPin<Error = P>,
{
    type Error = SpiRamError<E, P>;

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn read_block(&mut self, address: u32, buffer: &mut [u8]) -> Result<usize, Self::Error> {
        if !self.ready || buffer.is_empty() || address >= self.capacity {
            return Ok(0);
        }

        let len = buffer.len().min((self.capacity - address) as usize);
        if len < buffer.len() {
            trace!(
                "sram read clamped to {=usize} of {=usize} bytes",
                len,
                buffer.len()
            );
        }

        self.cs.set_low().map_err(SpiRamError::Pin)?;
        let read = self.read_selected(address, &mut buffer[..len]);
        // Deselect even if the transfer failed, the bus error wins
        let deselect = self.cs.set_high();
        read.map_err(SpiRamError::Spi)?;
        deselect.map_err(SpiRamError::Pin)?;
        Ok(len)
    }
}

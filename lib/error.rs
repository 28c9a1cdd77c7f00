use core::convert::Infallible;
use core::fmt;

pub type Result<T, BUS = Infallible> = core::result::Result<T, Error<BUS>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(test), derive(defmt::Format))]
pub enum Error<BUS = Infallible> {
    // Processing requested before `Pipeline::begin`
    NotInitialized,
    // Empty sample buffer
    InvalidInput,
    // Not enough samples left for a trace after trigger offset and decimation
    InsufficientData,
    // Acquisition bus error
    Bus(BUS),
}

impl Error {
    /// Lifts a pipeline error into the error space of an acquisition bus.
    pub fn widen<BUS>(self) -> Error<BUS> {
        match self {
            Error::NotInitialized => Error::NotInitialized,
            Error::InvalidInput => Error::InvalidInput,
            Error::InsufficientData => Error::InsufficientData,
            Error::Bus(never) => match never {},
        }
    }
}

impl<BUS: fmt::Debug> fmt::Display for Error<BUS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotInitialized => f.write_str("pipeline not initialized"),
            Error::InvalidInput => f.write_str("empty sample buffer"),
            Error::InsufficientData => f.write_str("not enough samples to draw a trace"),
            Error::Bus(err) => write!(f, "acquisition bus error: {:?}", err),
        }
    }
}

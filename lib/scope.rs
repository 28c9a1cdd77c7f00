use heapless::Vec;

use crate::error::{Error, Result};
use crate::hw::SampleSource;
use crate::{Bitmap, Pipeline};

/// Captures up to `LEN` samples from a source and renders them.
pub struct Scope<S, const LEN: usize> {
    source: S,
    samples: Vec<u8, LEN>,
    pipeline: Pipeline,
}

impl<S, const LEN: usize> Scope<S, LEN>
where
    S: SampleSource,
{
    pub fn new(source: S, pipeline: Pipeline) -> Self {
        Scope {
            source,
            samples: Vec::new(),
            pipeline,
        }
    }

    /// Reads a block starting at `address` and draws it into `bitmap`.
    ///
    /// A source that delivers no bytes, e.g. because it is not ready, yields
    /// `InvalidInput` and the frame is left as it was.
    pub fn capture(&mut self, address: u32, bitmap: &mut Bitmap) -> Result<usize, S::Error> {
        self.samples.clear();
        self.samples
            .resize(LEN, 0)
            .map_err(|_| Error::InvalidInput)?;

        let read = self
            .source
            .read_block(address, &mut self.samples)
            .map_err(Error::Bus)?;
        self.samples.truncate(read);
        trace!("captured {=usize} samples at {=u32}", read, address);

        self.pipeline
            .process(&self.samples, bitmap)
            .map_err(|err| err.widen())
    }

    /// Samples of the last capture.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut Pipeline {
        &mut self.pipeline
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn release(self) -> (S, Pipeline) {
        (self.source, self.pipeline)
    }
}

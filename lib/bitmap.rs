use core::convert::{Infallible, TryFrom};

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::{Gray8, GrayColor};
use embedded_graphics::Pixel;

use crate::{FRAME_LEN, HEIGHT, WIDTH};

/// Row-major WIDTH x HEIGHT intensity frame over caller-owned storage.
pub struct Bitmap<'a> {
    cells: &'a mut [u8; FRAME_LEN],
}

impl<'a> Bitmap<'a> {
    pub fn new(cells: &'a mut [u8; FRAME_LEN]) -> Self {
        Bitmap { cells }
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        Bitmap::index(x, y).map(|i| self.cells[i])
    }

    /// Writes one cell, returns `false` if the coordinate is outside the frame.
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> bool {
        match Bitmap::index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= HEIGHT {
            return None;
        }
        Some(&self.cells[y * WIDTH..(y + 1) * WIDTH])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.cells[..]
    }

    /// Number of cells holding `value`.
    pub fn count(&self, value: u8) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    fn index(x: usize, y: usize) -> Option<usize> {
        if x < WIDTH && y < HEIGHT {
            Some(y * WIDTH + x)
        } else {
            None
        }
    }
}

impl OriginDimensions for Bitmap<'_> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Bitmap<'_> {
    type Color = Gray8;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                self.set(x, y, color.luma());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn storage() -> Box<[u8; FRAME_LEN]> {
    use std::convert::TryInto;

    match vec![0u8; FRAME_LEN].into_boxed_slice().try_into() {
        Ok(cells) => cells,
        Err(_) => unreachable!("frame storage has FRAME_LEN cells"),
    }
}

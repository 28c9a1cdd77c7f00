use crate::{Bitmap, HEIGHT, WIDTH};

/// Draws a line between two cells with Bresenham's algorithm, both ends
/// included.
///
/// Every visited cell is overwritten with `value`. The call does nothing if
/// any endpoint lies outside the frame.
pub fn draw_line(bitmap: &mut Bitmap, x1: usize, y1: usize, x2: usize, y2: usize, value: u8) {
    if x1 >= WIDTH || x2 >= WIDTH || y1 >= HEIGHT || y2 >= HEIGHT {
        return;
    }

    // Frame coordinates fit i32 with room for the doubled error term
    let (x2, y2) = (x2 as i32, y2 as i32);
    let (mut x, mut y) = (x1 as i32, y1 as i32);
    let dx = (x2 - x).abs();
    let dy = (y2 - y).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let sy = if y < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        bitmap.set(x as usize, y as usize, value);
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

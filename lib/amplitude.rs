use crate::HEIGHT;

const FULL_SCALE: f32 = 255.0;
const BOTTOM_ROW: u16 = (HEIGHT - 1) as u16;

/// Maps a sample to a row, larger samples land closer to the top.
///
/// The scaled sample saturates at the 8-bit range before mapping, so any
/// positive `scale` yields a row in `0..HEIGHT`. NaN maps to the bottom row.
pub fn to_row(value: u8, scale: f32) -> u16 {
    // f32::max drops a NaN operand
    let scaled = (value as f32 * scale).max(0.0).min(FULL_SCALE);
    // Half-up rounding, the offset is never negative here
    let offset = scaled / FULL_SCALE * BOTTOM_ROW as f32 + 0.5;
    let offset = (offset as u16).min(BOTTOM_ROW);
    BOTTOM_ROW - offset
}

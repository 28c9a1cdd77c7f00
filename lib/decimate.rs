//! Time-axis decimation: several raw samples folded into one column.
//!
//! Columns are averaged rather than subsampled, which keeps high compression
//! ratios from aliasing at the cost of temporal detail.

/// One decimated column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Integer mean of the samples in the window, truncated.
    pub value: u8,
    /// Samples actually summed, less than requested at the end of the buffer.
    pub consumed: usize,
}

/// Averages up to `samples_per_pixel` samples starting at `start`.
///
/// Returns `None` when no sample is available at `start`.
pub fn representative(samples: &[u8], start: usize, samples_per_pixel: usize) -> Option<Window> {
    let tail = samples.get(start..)?;
    let window = &tail[..tail.len().min(samples_per_pixel)];
    if window.is_empty() {
        return None;
    }

    let sum: u32 = window.iter().map(|&s| s as u32).sum();
    Some(Window {
        value: (sum / window.len() as u32) as u8,
        consumed: window.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_values_average_exactly() {
        let samples = [100u8; 10];
        assert_eq!(
            representative(&samples, 0, 10),
            Some(Window {
                value: 100,
                consumed: 10
            })
        );
    }

    #[test]
    fn test_mean_truncates() {
        // (1 + 2) / 2 = 1.5
        let window = representative(&[1, 2], 0, 2).unwrap();
        assert_eq!(window.value, 1);
        // (254 + 255 + 255) / 3 = 254.67
        let window = representative(&[254, 255, 255], 0, 3).unwrap();
        assert_eq!(window.value, 254);
    }

    #[test]
    fn test_window_starts_at_offset() {
        let samples = [0, 0, 10, 20, 30, 0];
        let window = representative(&samples, 2, 3).unwrap();
        assert_eq!(window.value, 20);
        assert_eq!(window.consumed, 3);
    }

    #[test]
    fn test_window_clipped_at_buffer_end() {
        let samples = [0, 0, 0, 90, 30];
        let window = representative(&samples, 3, 10).unwrap();
        assert_eq!(window.consumed, 2);
        assert_eq!(window.value, 60);
    }

    #[test]
    fn test_no_samples_left() {
        let samples = [1, 2, 3];
        assert_eq!(representative(&samples, 3, 1), None);
        assert_eq!(representative(&samples, 7, 4), None);
        assert_eq!(representative(&[], 0, 1), None);
    }

    #[test]
    fn test_large_window_does_not_overflow() {
        let samples = vec![255u8; u16::MAX as usize];
        let window = representative(&samples, 0, u16::MAX as usize).unwrap();
        assert_eq!(window.value, 255);
        assert_eq!(window.consumed, u16::MAX as usize);
    }
}

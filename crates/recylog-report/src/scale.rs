/// Cell budget for single-series horizontal bars.
pub const BAR_WIDTH: usize = 40;

/// Cell budget for histogram bars.
pub const HIST_BAR_WIDTH: usize = 30;

/// Cell budget for line and comparative dual-series bars.
pub const DUAL_BAR_WIDTH: usize = 20;

/// Bar length in display cells for a magnitude relative to the series
/// maximum: `floor(magnitude / max * width)`, zero when the maximum is
/// zero so an all-zero series renders flat instead of dividing by zero.
pub fn bar_len(magnitude: f64, max_magnitude: f64, width: usize) -> usize {
    if max_magnitude <= 0.0 {
        return 0;
    }
    (((magnitude / max_magnitude) * width as f64) as usize).min(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales_proportionally() {
        assert_eq!(bar_len(50.0, 100.0, BAR_WIDTH), 20);
        assert_eq!(bar_len(100.0, 100.0, BAR_WIDTH), 40);
        assert_eq!(bar_len(0.0, 100.0, BAR_WIDTH), 0);
    }

    #[test]
    fn test_truncates_rather_than_rounds() {
        // 0.33 * 30 = 9.9 -> 9 cells
        assert_eq!(bar_len(33.0, 100.0, HIST_BAR_WIDTH), 9);
    }

    #[test]
    fn test_zero_maximum_means_zero_length() {
        assert_eq!(bar_len(0.0, 0.0, BAR_WIDTH), 0);
        assert_eq!(bar_len(5.0, 0.0, DUAL_BAR_WIDTH), 0);
    }
}

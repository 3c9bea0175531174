//! Chart configuration
//!
//! Growth steps are stored in sixteenths of a pixel (`_x16`) so the scale
//! can drop below one pixel per unit without floating point.

use crate::color::Rgb;
use crate::error::ConfigError;
use crate::geometry::PANEL_HEIGHT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of bins
pub const DEFAULT_BIN_COUNT: usize = 16;

/// Rows reserved below the bars for the x-axis, tick pointers and labels
pub const DEFAULT_BOTTOM_MARGIN: u8 = 8;

/// Smallest margin that fits the frame under the bars: the bar bottom row,
/// one axis row, one tick row and five label rows
pub const MIN_BOTTOM_MARGIN: u8 = 8;

/// Nominal bar height per unit of magnitude before scaling (3.0 px)
pub const DEFAULT_BASE_GROWTH_STEP_X16: u16 = 0x30;

/// Default histogram bin width (16 bins x 20 covers 0-320)
pub const DEFAULT_BIN_WIDTH: u32 = 20;

/// How the growth step shrinks when the tallest bar would overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScaleMode {
    /// Halve the step until the peak fits (smallest power-of-two divisor)
    #[default]
    Halving,
    /// `k = peak / max_growth_steps` halvings minus one. Can overshoot or
    /// undershoot near the power-of-two boundaries.
    Legacy,
}

/// Bar chart rendering configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChartConfig {
    /// Rows below the bars (default 8, leaving 56 px for bars). The axis,
    /// tick pointers and labels follow the bar bottom, so a larger margin
    /// moves the whole frame up.
    pub bottom_margin: u8,
    /// Bar height per unit of magnitude at full scale, in 1/16 px
    pub base_growth_step_x16: u16,
    /// Scaling strategy
    pub scale_mode: ScaleMode,
    /// Color of a bin whose value changed since the previous frame.
    /// Unchanged bins keep only the green channel.
    pub bar_color: Rgb,
    /// Color of the last bin
    pub highlight_color: Rgb,
    /// Always draw the last bin in `highlight_color`
    pub highlight_last: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bottom_margin: DEFAULT_BOTTOM_MARGIN,
            base_growth_step_x16: DEFAULT_BASE_GROWTH_STEP_X16,
            scale_mode: ScaleMode::Halving,
            bar_color: Rgb::WHITE,
            highlight_color: Rgb::RED,
            highlight_last: true,
        }
    }
}

impl ChartConfig {
    /// Pixel rows available to a bar (panel height minus margin)
    pub fn usable_height(&self) -> u8 {
        PANEL_HEIGHT.saturating_sub(self.bottom_margin)
    }

    /// Row on which every bar ends
    ///
    /// Equal to the usable height: a bar of full height spans rows
    /// `0..=usable_height`.
    pub fn bar_bottom(&self) -> u8 {
        self.usable_height()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_growth_step_x16 == 0 {
            return Err(ConfigError::ZeroGrowthStep);
        }
        if self.bottom_margin >= PANEL_HEIGHT {
            return Err(ConfigError::MarginTooLarge);
        }
        if self.bottom_margin < MIN_BOTTOM_MARGIN {
            return Err(ConfigError::MarginTooSmall);
        }
        Ok(())
    }
}

/// Histogram binning configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistogramConfig {
    /// Width of each bin in sample units
    pub bin_width: u32,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bin_width: DEFAULT_BIN_WIDTH,
        }
    }
}

impl HistogramConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bin_width == 0 {
            return Err(ConfigError::ZeroBinWidth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = ChartConfig::default();
        assert_eq!(config.usable_height(), 56);
        assert_eq!(config.bar_bottom(), 0x38);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_step() {
        let config = ChartConfig {
            base_growth_step_x16: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroGrowthStep));
    }

    #[test]
    fn test_validate_rejects_margin() {
        let config = ChartConfig {
            bottom_margin: 64,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MarginTooLarge));
        assert_eq!(config.usable_height(), 0);
    }

    #[test]
    fn test_validate_margin_range() {
        let small = ChartConfig {
            bottom_margin: 2,
            ..Default::default()
        };
        assert_eq!(small.validate(), Err(ConfigError::MarginTooSmall));

        let tall = ChartConfig {
            bottom_margin: 20,
            ..Default::default()
        };
        assert!(tall.validate().is_ok());
        assert_eq!(tall.bar_bottom(), 44);

        let widest = ChartConfig {
            bottom_margin: PANEL_HEIGHT - 1,
            ..Default::default()
        };
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn test_histogram_config() {
        assert!(HistogramConfig::default().validate().is_ok());
        assert_eq!(
            HistogramConfig { bin_width: 0 }.validate(),
            Err(ConfigError::ZeroBinWidth)
        );
    }
}

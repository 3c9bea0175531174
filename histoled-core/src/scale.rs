//! Adaptive growth scale
//!
//! The growth step is the bar height per unit of magnitude, kept in
//! sixteenths of a pixel. It is derived from the current frame's peak
//! alone, so rendering the same magnitudes always gives the same bars.
//!
//! With the default numbers (56 usable rows, base step 0x30 = 3 px):
//!
//! ```text
//! max_growth_steps = 56 * 16 / 48 = 18
//! peak <= 18  -> step stays at 3 px
//! peak  > 18  -> step is halved until peak * step fits in 56 rows
//! ```

use crate::config::{ChartConfig, ScaleMode};

/// Sub-pixel resolution of a growth step
pub const SUBPIXELS: u32 = 16;

/// Smallest step the halving loop will produce (1/16 px per unit)
pub const MIN_STEP_X16: u16 = 1;

/// Scale derived for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GrowthScale {
    /// Effective bar height per unit of magnitude (1/16 px)
    pub step_x16: u16,
    /// Base step the frame started from (1/16 px)
    pub base_x16: u16,
    /// Magnitude units that fit the usable height at the base step
    pub max_growth_steps: u32,
    /// How many times the base step was halved
    pub halvings: u8,
}

impl GrowthScale {
    /// Scale for a frame whose tallest bin is `peak`
    pub fn for_peak(peak: u32, config: &ChartConfig) -> Self {
        Self::compute(
            peak,
            config.usable_height(),
            config.base_growth_step_x16,
            config.scale_mode,
        )
    }

    /// Scale for the given peak, usable height (px) and base step (1/16 px)
    pub fn compute(peak: u32, usable_height: u8, base_x16: u16, mode: ScaleMode) -> Self {
        let base = base_x16.max(MIN_STEP_X16);
        let usable_x16 = usable_height as u32 * SUBPIXELS;
        let max_growth_steps = usable_x16 / base as u32;

        let (step_x16, halvings) = if peak <= max_growth_steps {
            (base, 0)
        } else {
            match mode {
                ScaleMode::Halving => halve_to_fit(peak, usable_x16, base),
                ScaleMode::Legacy => legacy_halvings(peak, max_growth_steps, base),
            }
        };

        Self {
            step_x16,
            base_x16: base,
            max_growth_steps,
            halvings,
        }
    }

    /// Whether the step was reduced below the base
    pub fn is_scaled(&self) -> bool {
        self.step_x16 < self.base_x16
    }

    /// Bar height in whole pixels (truncating, saturating)
    pub fn bar_height(&self, magnitude: u32) -> u32 {
        magnitude.saturating_mul(self.step_x16 as u32) / SUBPIXELS
    }

    /// Top row of a bar ending on `bottom`
    ///
    /// Clamped to row 0: a bar taller than the chart stops at the panel top
    /// instead of wrapping to a large row number on the wire.
    pub fn row_start(&self, bottom: u8, magnitude: u32) -> u8 {
        let height = self.bar_height(magnitude);
        (bottom as u32).saturating_sub(height) as u8
    }
}

/// Smallest power-of-two divisor of `base` that makes `peak` fit
fn halve_to_fit(peak: u32, usable_x16: u32, base: u16) -> (u16, u8) {
    let mut step = base;
    let mut halvings = 0u8;
    while step > MIN_STEP_X16 && peak.saturating_mul(step as u32) > usable_x16 {
        step >>= 1;
        halvings += 1;
    }
    (step.max(MIN_STEP_X16), halvings)
}

/// `base / 2^(k-1)` with `k = peak / max_growth_steps`
fn legacy_halvings(peak: u32, max_growth_steps: u32, base: u16) -> (u16, u8) {
    let k = peak / max_growth_steps.max(1);
    let shift = k.saturating_sub(1).min(15) as u8;
    ((base >> shift).max(MIN_STEP_X16), shift)
}

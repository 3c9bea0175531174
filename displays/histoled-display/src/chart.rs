//! Bar chart renderer
//!
//! One filled rectangle per bin, over a static frame of axes, tick
//! pointers and labels. Bar heights follow the frame's [`GrowthScale`]:
//!
//! ```text
//! row_start = bottom - magnitude * step   (clamped at row 0)
//! row_end   = bottom
//! ```
//!
//! Changed bins are drawn in the bar color, unchanged ones keep only its
//! green channel, and the last (overflow) bin is highlighted.

use heapless::Vec;
use histoled_core::config::ChartConfig;
use histoled_core::traits::PrimitiveDisplay;
use histoled_core::{DisplayError, Frame, GrowthScale, PreconditionError, Rgb, Window};

use crate::glyph;
use crate::layout::{axes, labels, ticks, BIN_COLUMNS, MAX_BINS};

/// Geometry and color of one bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bar {
    pub index: usize,
    pub window: Window,
    pub color: Rgb,
}

/// Renders bins as vertical bars with an adaptive scale
#[derive(Debug, Clone, Default)]
pub struct BarChartRenderer {
    config: ChartConfig,
}

impl BarChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Scale for a set of magnitudes
    pub fn scale(&self, magnitudes: &[u32]) -> GrowthScale {
        let peak = magnitudes.iter().copied().max().unwrap_or(0);
        GrowthScale::for_peak(peak, &self.config)
    }

    /// Compute every bar without drawing
    pub fn bars(
        &self,
        magnitudes: &[u32],
        changed: &[bool],
    ) -> Result<Vec<Bar, MAX_BINS>, PreconditionError> {
        check_inputs(magnitudes, changed)?;
        Ok(self.bars_with_scale(magnitudes, changed, &self.scale(magnitudes)))
    }

    /// Bars for inputs that already passed `check_inputs`
    fn bars_with_scale(
        &self,
        magnitudes: &[u32],
        changed: &[bool],
        scale: &GrowthScale,
    ) -> Vec<Bar, MAX_BINS> {
        let bottom = self.config.bar_bottom();
        let last = magnitudes.len() - 1;

        let mut bars = Vec::new();
        for (index, ((&magnitude, &is_changed), &(col_start, col_end))) in magnitudes
            .iter()
            .zip(changed)
            .zip(BIN_COLUMNS.iter())
            .enumerate()
        {
            let color = if self.config.highlight_last && index == last {
                self.config.highlight_color
            } else {
                self.config.bar_color.mask_non_green(is_changed)
            };
            let window = Window::new(
                col_start,
                scale.row_start(bottom, magnitude),
                col_end,
                bottom,
            );
            // capacity equals the column table, already checked
            let _ = bars.push(Bar {
                index,
                window,
                color,
            });
        }
        bars
    }

    /// Clear the panel and draw one complete frame
    ///
    /// Inputs are validated before anything is sent, so a rejected frame
    /// leaves the panel untouched. Returns the scale that was used.
    pub fn render<D: PrimitiveDisplay>(
        &self,
        display: &mut D,
        magnitudes: &[u32],
        changed: &[bool],
    ) -> Result<GrowthScale, DisplayError> {
        check_inputs(magnitudes, changed)?;
        let scale = self.scale(magnitudes);
        let bars = self.bars_with_scale(magnitudes, changed, &scale);

        display.clear()?;
        self.draw_axes(display)?;
        for bar in &bars {
            display.draw_rect(bar.window, bar.color, bar.color)?;
        }
        Ok(scale)
    }

    pub fn render_frame<D: PrimitiveDisplay, const N: usize>(
        &self,
        display: &mut D,
        frame: &Frame<N>,
    ) -> Result<GrowthScale, DisplayError> {
        self.render(display, &frame.magnitudes, &frame.changed)
    }

    /// Axes, tick pointers and labels, placed under the bar bottom
    pub fn draw_axes<D: PrimitiveDisplay>(&self, display: &mut D) -> Result<(), DisplayError> {
        let bottom = self.config.bar_bottom();
        for stroke in axes(bottom).iter().chain(ticks(bottom).iter()) {
            display.draw_line(stroke.window, stroke.color)?;
        }
        for label in &labels(bottom) {
            glyph::draw_text(display, label.text, label.x, label.y, label.color)?;
        }
        Ok(())
    }
}

fn check_inputs(magnitudes: &[u32], changed: &[bool]) -> Result<(), PreconditionError> {
    if magnitudes.len() != changed.len() {
        return Err(PreconditionError::LengthMismatch {
            magnitudes: magnitudes.len(),
            changed: changed.len(),
        });
    }
    if magnitudes.is_empty() {
        return Err(PreconditionError::NoBins);
    }
    if magnitudes.len() > MAX_BINS {
        return Err(PreconditionError::TooManyBins {
            bins: magnitudes.len(),
            max: MAX_BINS,
        });
    }
    Ok(())
}

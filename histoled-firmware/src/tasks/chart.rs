//! Chart display task
//!
//! Owns the SSD1331 for the lifetime of the firmware: brings the panel up,
//! flashes it once so a dead panel is obvious on the bench, then redraws
//! the chart for every frame the sampler publishes.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::{Delay, Timer};

use histoled_core::config::ChartConfig;
use histoled_display::BarChartRenderer;
use histoled_drivers::ssd1331::Ssd1331;
use histoled_hal::Compat;

use crate::channels::FRAME_READY;

/// White flash after bring-up (ms)
pub const FLASH_MS: u32 = 200;

/// Wait before retrying a failed bring-up (ms)
const INIT_RETRY_MS: u64 = 1_000;

/// The panel as wired on the board
pub type Display = Ssd1331<
    Compat<Spi<'static, SPI0, Blocking>>,
    Compat<Output<'static>>,
    Compat<Output<'static>>,
    Compat<Output<'static>>,
    Compat<Delay>,
>;

/// Chart task - initializes the display, then renders frames as they arrive
#[embassy_executor::task]
pub async fn chart_task(mut display: Display, config: ChartConfig, flash_ms: u32) {
    info!("Chart task started");

    loop {
        match display.initialize() {
            Ok(()) => break,
            Err(e) => {
                warn!("Display init failed: {}, retrying", e);
                Timer::after_millis(INIT_RETRY_MS).await;
            }
        }
    }
    info!("Display ready");

    if let Err(e) = display.flash(flash_ms) {
        warn!("Display flash failed: {}", e);
    }

    let renderer = BarChartRenderer::new(config);

    loop {
        let frame = FRAME_READY.wait().await;

        if !frame.any_changed() {
            trace!("Frame unchanged, skipping redraw");
            continue;
        }

        match renderer.render_frame(&mut display, &frame) {
            Ok(scale) => {
                if scale.is_scaled() {
                    debug!(
                        "Peak {} scaled: step {}/16 px ({} halvings)",
                        frame.peak(),
                        scale.step_x16,
                        scale.halvings
                    );
                }
            }
            Err(e) => warn!("Render failed: {}", e),
        }

        let stats = display.stats();
        if stats.failed > 0 {
            trace!("Command bytes: {} sent, {} failed", stats.sent, stats.failed);
        }
    }
}

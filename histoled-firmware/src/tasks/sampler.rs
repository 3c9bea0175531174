//! Sampling task
//!
//! Reads the ADC into a histogram and publishes a frame of bin counts and
//! changed flags once per frame period. Counts accumulate for the life of
//! the firmware, so the chart's scale shrinks as the totals grow.

use defmt::*;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_time::{Duration, Ticker};

use histoled_core::config::HistogramConfig;
use histoled_core::traits::MagnitudeSource;
use histoled_core::{FrameTracker, Histogram, SourceError};

use crate::channels::{BIN_COUNT, FRAME_READY};

/// ADC resolution (12-bit)
const ADC_MAX: u16 = 4095;

/// Sampling configuration
#[derive(Clone)]
pub struct SamplerConfig {
    /// Time between published frames (ms)
    pub frame_period_ms: u32,
    /// ADC readings taken per frame
    pub samples_per_frame: usize,
    /// Value a full-scale reading maps to (16 bins x 20 = 320)
    pub full_scale: u32,
    /// Bin width in scaled units
    pub histogram: HistogramConfig,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            frame_period_ms: 500,
            samples_per_frame: 8,
            full_scale: 320,
            histogram: HistogramConfig::default(),
        }
    }
}

/// Scale a raw ADC reading onto `0..=full_scale`
fn scale_reading(raw: u16, full_scale: u32) -> u32 {
    (raw.min(ADC_MAX) as u32) * full_scale / ADC_MAX as u32
}

/// ADC channel as a magnitude source
pub struct AdcSource<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
    full_scale: u32,
}

impl<'d> AdcSource<'d> {
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>, full_scale: u32) -> Self {
        Self {
            adc,
            channel,
            full_scale,
        }
    }
}

impl MagnitudeSource for AdcSource<'_> {
    fn read_magnitude(&mut self) -> Result<u32, SourceError> {
        let raw = self
            .adc
            .blocking_read(&mut self.channel)
            .map_err(|_| SourceError::NotResponding)?;
        Ok(scale_reading(raw, self.full_scale))
    }
}

/// Sampler task - fills the histogram and publishes frames
#[embassy_executor::task]
pub async fn sampler_task(mut source: AdcSource<'static>, config: SamplerConfig) {
    info!(
        "Sampler task started ({} samples every {} ms)",
        config.samples_per_frame, config.frame_period_ms
    );

    if let Err(e) = config.histogram.validate() {
        error!("Invalid histogram config: {}", e);
    }

    let mut histogram: Histogram<BIN_COUNT> = Histogram::new(&config.histogram);
    let mut tracker: FrameTracker<BIN_COUNT> = FrameTracker::new();
    let mut ticker = Ticker::every(Duration::from_millis(config.frame_period_ms as u64));

    loop {
        ticker.next().await;

        if let Err(e) = histogram.fill_from(&mut source, config.samples_per_frame) {
            warn!("Sampling stopped early: {}", e);
        }

        let frame = tracker.snapshot(histogram.counts());
        trace!("Frame: {} samples, peak {}", histogram.total(), frame.peak());
        FRAME_READY.signal(frame);
    }
}

//! Histogram bins and frame snapshots
//!
//! A [`Histogram`] counts samples into fixed-width bins; the last bin also
//! collects everything past the top of the range. Once per render frame the
//! counts are handed to a [`FrameTracker`], which compares them with the
//! previous frame and produces a [`Frame`] of magnitudes and changed flags.

use crate::config::HistogramConfig;
use crate::error::SourceError;
use crate::traits::MagnitudeSource;

/// One bar of the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bin {
    pub index: usize,
    pub magnitude: u32,
    pub changed: bool,
}

/// Per-frame snapshot of `N` bins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame<const N: usize> {
    pub magnitudes: [u32; N],
    pub changed: [bool; N],
}

impl<const N: usize> Frame<N> {
    pub const fn new(magnitudes: [u32; N], changed: [bool; N]) -> Self {
        Self {
            magnitudes,
            changed,
        }
    }

    /// Largest magnitude in the frame
    pub fn peak(&self) -> u32 {
        self.magnitudes.iter().copied().max().unwrap_or(0)
    }

    /// Whether any bin differs from the previous frame
    pub fn any_changed(&self) -> bool {
        self.changed.iter().any(|&c| c)
    }

    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        self.magnitudes
            .iter()
            .zip(self.changed.iter())
            .enumerate()
            .map(|(index, (&magnitude, &changed))| Bin {
                index,
                magnitude,
                changed,
            })
    }
}

/// Derives changed flags by comparing with the previous snapshot
#[derive(Debug, Clone)]
pub struct FrameTracker<const N: usize> {
    previous: Option<[u32; N]>,
}

impl<const N: usize> Default for FrameTracker<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameTracker<N> {
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// Build a frame from the current counts
    ///
    /// The first snapshot marks every bin as changed.
    pub fn snapshot(&mut self, counts: &[u32; N]) -> Frame<N> {
        let changed = match &self.previous {
            Some(prev) => core::array::from_fn(|i| prev[i] != counts[i]),
            None => [true; N],
        };
        self.previous = Some(*counts);
        Frame::new(*counts, changed)
    }

    /// Forget the previous frame
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

/// Fixed-width histogram with an overflow bin
#[derive(Debug, Clone)]
pub struct Histogram<const N: usize> {
    counts: [u32; N],
    bin_width: u32,
}

impl<const N: usize> Histogram<N> {
    pub fn new(config: &HistogramConfig) -> Self {
        Self {
            counts: [0; N],
            bin_width: config.bin_width.max(1),
        }
    }

    /// Count one sample, returning the bin it landed in
    pub fn record(&mut self, value: u32) -> usize {
        let index = ((value / self.bin_width) as usize).min(N.saturating_sub(1));
        if let Some(count) = self.counts.get_mut(index) {
            *count = count.saturating_add(1);
        }
        index
    }

    /// Pull `samples` readings from `source`
    ///
    /// Stops at the first failed read; samples recorded before it are kept.
    pub fn fill_from<S: MagnitudeSource>(
        &mut self,
        source: &mut S,
        samples: usize,
    ) -> Result<(), SourceError> {
        for _ in 0..samples {
            let value = source.read_magnitude()?;
            self.record(value);
        }
        Ok(())
    }

    pub fn counts(&self) -> &[u32; N] {
        &self.counts
    }

    /// Lower edge of bin `index` in sample units
    pub fn bin_start(&self, index: usize) -> u32 {
        (index as u32).saturating_mul(self.bin_width)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().fold(0u32, |acc, &c| acc.saturating_add(c))
    }

    pub fn clear(&mut self) {
        self.counts = [0; N];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockSource {
        values: heapless::Vec<u32, 16>,
        pos: usize,
    }

    impl MockSource {
        fn new(values: &[u32]) -> Self {
            Self {
                values: heapless::Vec::from_slice(values).unwrap(),
                pos: 0,
            }
        }
    }

    impl MagnitudeSource for MockSource {
        fn read_magnitude(&mut self) -> Result<u32, SourceError> {
            let value = self
                .values
                .get(self.pos)
                .copied()
                .ok_or(SourceError::NotResponding)?;
            self.pos += 1;
            Ok(value)
        }
    }

    #[test]
    fn test_histogram_binning() {
        let mut hist: Histogram<16> = Histogram::new(&HistogramConfig::default());
        assert_eq!(hist.record(0), 0);
        assert_eq!(hist.record(19), 0);
        assert_eq!(hist.record(20), 1);
        assert_eq!(hist.record(299), 14);
        assert_eq!(hist.record(300), 15);
        assert_eq!(hist.counts()[0], 2);
        assert_eq!(hist.total(), 5);
        assert_eq!(hist.bin_start(5), 100);
    }

    #[test]
    fn test_histogram_overflow_bin() {
        let mut hist: Histogram<16> = Histogram::new(&HistogramConfig::default());
        assert_eq!(hist.record(320), 15);
        assert_eq!(hist.record(u32::MAX), 15);
        assert_eq!(hist.counts()[15], 2);
    }

    #[test]
    fn test_histogram_clear() {
        let mut hist: Histogram<4> = Histogram::new(&HistogramConfig { bin_width: 10 });
        hist.record(5);
        hist.record(15);
        hist.clear();
        assert_eq!(hist.total(), 0);
    }

    #[test]
    fn test_fill_from_source() {
        let mut hist: Histogram<16> = Histogram::new(&HistogramConfig::default());
        let mut source = MockSource::new(&[5, 25, 45, 45]);
        hist.fill_from(&mut source, 4).unwrap();
        assert_eq!(&hist.counts()[..3], &[1, 1, 2]);
    }

    #[test]
    fn test_fill_from_stops_on_error() {
        let mut hist: Histogram<16> = Histogram::new(&HistogramConfig::default());
        let mut source = MockSource::new(&[5, 25]);
        assert_eq!(
            hist.fill_from(&mut source, 4),
            Err(SourceError::NotResponding)
        );
        assert_eq!(hist.total(), 2);
    }

    #[test]
    fn test_tracker_first_frame_all_changed() {
        let mut tracker: FrameTracker<4> = FrameTracker::new();
        let frame = tracker.snapshot(&[0, 1, 2, 3]);
        assert_eq!(frame.changed, [true; 4]);
        assert_eq!(frame.peak(), 3);
    }

    #[test]
    fn test_tracker_detects_changes() {
        let mut tracker: FrameTracker<4> = FrameTracker::new();
        tracker.snapshot(&[0, 1, 2, 3]);
        let frame = tracker.snapshot(&[0, 5, 2, 4]);
        assert_eq!(frame.changed, [false, true, false, true]);
        assert!(frame.any_changed());

        let frame = tracker.snapshot(&[0, 5, 2, 4]);
        assert!(!frame.any_changed());

        tracker.reset();
        assert_eq!(tracker.snapshot(&[0, 5, 2, 4]).changed, [true; 4]);
    }

    #[test]
    fn test_frame_bins() {
        let frame = Frame::new([7, 9], [false, true]);
        let mut bins = frame.bins();
        assert_eq!(
            bins.next(),
            Some(Bin {
                index: 0,
                magnitude: 7,
                changed: false
            })
        );
        assert_eq!(
            bins.next(),
            Some(Bin {
                index: 1,
                magnitude: 9,
                changed: true
            })
        );
        assert_eq!(bins.next(), None);
    }
}

//! Value and category scales
//!
//! `LinearScale` maps data values to pixel rows, always including zero and
//! extended to "nice" tick boundaries. `BandScale` splits the plot width into
//! one equal band per category.

/// Nice step sizes, as multiples of a power of ten
const NICE_STEPS: [f64; 4] = [1.0, 2.0, 2.5, 5.0];

/// Round a raw tick step up to 1, 2, 2.5 or 5 × 10^n
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = NICE_STEPS
        .iter()
        .copied()
        .find(|&step| normalized <= step + 1e-9)
        .unwrap_or(10.0);
    factor * magnitude
}

/// Maps values in a domain to pixel positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    /// Lowest and highest tick value
    pub domain: (f64, f64),
    /// Pixel positions of domain.0 and domain.1
    pub range: (f64, f64),
    /// Distance between ticks
    pub step: f64,
    /// Requested number of ticks
    pub tick_count: usize,
}

impl LinearScale {
    /// Build a zero-anchored nice scale covering every value
    ///
    /// An empty or all-zero input yields the domain `[0, 1]`.
    pub fn nice(values: impl IntoIterator<Item = f64>, tick_count: usize, range: (f64, f64)) -> Self {
        let (mut lo, mut hi) = (0.0f64, 0.0f64);
        for v in values.into_iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }

        let tick_count = tick_count.max(2);
        if lo == hi {
            return Self {
                domain: (0.0, 1.0),
                range,
                step: nice_step(1.0 / (tick_count - 1) as f64),
                tick_count,
            };
        }

        // divide before subtracting so extreme bounds stay finite
        let intervals = (tick_count - 1) as f64;
        let step = nice_step(hi / intervals - lo / intervals);
        let nice_lo = (lo / step).floor() * step;
        let nice_hi = (hi / step).ceil() * step;
        let domain = if nice_lo.is_finite() && nice_hi.is_finite() && (nice_hi - nice_lo).is_finite() {
            (nice_lo, nice_hi)
        } else {
            (lo, hi)
        };

        Self {
            domain,
            range,
            step,
            tick_count,
        }
    }

    /// Pixel position of a value
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0;
        }
        let t = if span.is_finite() {
            (value - d0) / span
        } else {
            (value / 2.0 - d0 / 2.0) / (d1 / 2.0 - d0 / 2.0)
        };
        r0 + t * (r1 - r0)
    }

    /// Tick values from the low end of the domain, never past the high end
    ///
    /// At most `tick_count + 2` values.
    pub fn ticks(&self) -> Vec<f64> {
        let (lo, hi) = self.domain;
        let intervals = hi / self.step - lo / self.step;
        if !(intervals.is_finite() && intervals >= 0.0) {
            return vec![lo, hi];
        }
        let count = ((intervals + 1e-9).floor() as usize).min(self.tick_count + 1);
        let half_step = self.step / 2.0;
        (0..=count)
            .map(|i| 2.0 * (lo / 2.0 + i as f64 * half_step))
            .filter(|t| t.is_finite())
            .collect()
    }
}

/// Splits a pixel span into equal category bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    pub count: usize,
    pub start: f64,
    pub end: f64,
}

impl BandScale {
    pub fn new(count: usize, start: f64, end: f64) -> Self {
        Self { count, start, end }
    }

    /// Width of one band
    pub fn bandwidth(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.end - self.start) / self.count as f64
    }

    /// Left edge of band `index`
    pub fn band_start(&self, index: usize) -> f64 {
        self.start + index as f64 * self.bandwidth()
    }

    /// Center of band `index`
    pub fn center(&self, index: usize) -> f64 {
        self.band_start(index) + self.bandwidth() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(2450.0), 2500.0);
        assert_eq!(nice_step(1000.0), 1000.0);
        assert_eq!(nice_step(450.0), 500.0);
        assert_eq!(nice_step(0.3), 0.5);
        assert_eq!(nice_step(7000.0), 10000.0);
        assert_eq!(nice_step(0.0), 1.0);
    }

    #[test]
    fn test_nice_scale_includes_zero() {
        let scale = LinearScale::nice([2000.0, 9800.0], 5, (300.0, 0.0));
        assert_eq!(scale.domain, (0.0, 10000.0));
        assert_eq!(scale.ticks(), vec![0.0, 2500.0, 5000.0, 7500.0, 10000.0]);
        assert_eq!(scale.map(0.0), 300.0);
        assert_eq!(scale.map(10000.0), 0.0);
        assert_eq!(scale.map(5000.0), 150.0);
    }

    #[test]
    fn test_nice_scale_negative_values() {
        let scale = LinearScale::nice([-300.0, 800.0], 5, (100.0, 0.0));
        assert!(scale.domain.0 <= -300.0);
        assert!(scale.domain.1 >= 800.0);
        assert!(scale.ticks().contains(&0.0));
    }

    #[test]
    fn test_empty_scale_defaults() {
        let scale = LinearScale::nice(std::iter::empty(), 5, (100.0, 0.0));
        assert_eq!(scale.domain, (0.0, 1.0));
        assert_eq!(scale.map(0.5), 50.0);
    }

    #[test]
    fn test_extreme_values_stay_finite() {
        let scale = LinearScale::nice([1.7e308], 5, (300.0, 0.0));
        assert_eq!(scale.domain, (0.0, 1.7e308));
        let ticks = scale.ticks();
        assert!(ticks.len() <= 7);
        assert!(ticks.iter().all(|t| t.is_finite() && *t <= 1.7e308));
        assert_eq!(scale.map(0.0), 300.0);
        assert_eq!(scale.map(1.7e308), 0.0);

        let wide = LinearScale::nice([-1e308, 1e308], 5, (100.0, 0.0));
        let ticks = wide.ticks();
        assert!(!ticks.is_empty() && ticks.len() <= 7);
        assert!(ticks.iter().all(|t| t.is_finite()));
        assert_eq!(wide.map(0.0), 50.0);
        assert!(wide.map(1e308).is_finite());
    }

    #[test]
    fn test_small_values_keep_fine_steps() {
        let scale = LinearScale::nice([0.004], 5, (100.0, 0.0));
        assert!((scale.step - 0.001).abs() < 1e-12);
        let ticks = scale.ticks();
        assert!(ticks.len() >= 5);
        assert!(ticks[ticks.len() - 1] >= 0.004 - 1e-12);
    }

    #[test]
    fn test_band_scale() {
        let bands = BandScale::new(4, 0.0, 400.0);
        assert_eq!(bands.bandwidth(), 100.0);
        assert_eq!(bands.band_start(2), 200.0);
        assert_eq!(bands.center(0), 50.0);
        assert_eq!(BandScale::new(0, 0.0, 400.0).bandwidth(), 0.0);
    }
}

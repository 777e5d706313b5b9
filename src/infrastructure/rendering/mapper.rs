//! Coordinate Mapper - the single source of truth for value->pixel mapping.
//!
//! Every pane maps through this module so candle bodies, overlay lines,
//! volume bars and oscillator curves stay visually aligned.

/// Vertical mapping from a value range onto a pane of `height` pixels.
///
/// `map(min) == height`, `map(max) == 0`; a degenerate range collapses to
/// the mid-height flat line instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueMapper {
    min: f64,
    max: f64,
    height: f64,
}

impl ValueMapper {
    pub fn new(min: f64, max: f64, height: u32) -> Self {
        Self { min, max, height: height as f64 }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Pixel Y for a value; NaN in, NaN out (callers skip NaN)
    pub fn y(&self, value: f64) -> f64 {
        if value.is_nan() {
            return f64::NAN;
        }
        let range = self.max - self.min;
        if range == 0.0 {
            return self.height / 2.0;
        }
        self.height * (1.0 - (value - self.min) / range)
    }

    /// Value at `fraction` of the range (0 = min, 1 = max), used for axis labels
    pub fn level(&self, fraction: f64) -> f64 {
        self.min + (self.max - self.min) * fraction
    }
}

/// Horizontal slot layout: index -> bar-center pixel X
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    slot_width: f64,
    count: usize,
}

impl SlotLayout {
    pub fn new(width: u32, count: usize) -> Self {
        let slot_width = if count == 0 { 0.0 } else { width as f64 / count as f64 };
        Self { slot_width, count }
    }

    pub fn slot_width(&self) -> f64 {
        self.slot_width
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Center X of slot `index`
    pub fn x(&self, index: usize) -> f64 {
        index as f64 * self.slot_width + self.slot_width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_edges() {
        let mapper = ValueMapper::new(10.0, 20.0, 100);
        assert_eq!(mapper.y(10.0), 100.0);
        assert_eq!(mapper.y(20.0), 0.0);
        assert_eq!(mapper.y(15.0), 50.0);
    }

    #[test]
    fn degenerate_range_is_mid_height() {
        let mapper = ValueMapper::new(5.0, 5.0, 80);
        assert_eq!(mapper.y(5.0), 40.0);
        assert_eq!(mapper.y(99.0), 40.0);
        assert!(mapper.y(5.0).is_finite());
    }

    #[test]
    fn nan_passes_through() {
        let mapper = ValueMapper::new(0.0, 1.0, 10);
        assert!(mapper.y(f64::NAN).is_nan());
    }

    #[test]
    fn slots_center_bars() {
        let layout = SlotLayout::new(100, 4);
        assert_eq!(layout.slot_width(), 25.0);
        assert_eq!(layout.x(0), 12.5);
        assert_eq!(layout.x(3), 87.5);
    }

    #[test]
    fn empty_layout_is_safe() {
        let layout = SlotLayout::new(100, 0);
        assert_eq!(layout.slot_width(), 0.0);
    }
}

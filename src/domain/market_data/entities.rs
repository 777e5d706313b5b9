pub use super::value_objects::{OHLCV, Price, Volume};
use serde::{Deserialize, Serialize};

/// Domain entity - Candle
///
/// `date` is a zero-padded "YYYYMMDD" token (or any monotonically comparable
/// string); it is used for labeling and trade matching only, never for
/// geometric spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: String,
    pub ohlcv: OHLCV,
}

impl Candle {
    pub fn new(date: String, ohlcv: OHLCV) -> Self {
        Self { date, ohlcv }
    }

    /// Rising bars (close >= open) and falling bars share one color rule
    /// across the candle and volume panes.
    pub fn is_rising(&self) -> bool {
        self.ohlcv.close >= self.ohlcv.open
    }

    pub fn body_size(&self) -> Price {
        Price::from((self.ohlcv.close.value() - self.ohlcv.open.value()).abs())
    }
}

/// Domain entity - an ordered candle sequence for one render pass.
///
/// Strictly ascending by date. Index position is the sole horizontal
/// coordinate used by every renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    pub fn new() -> Self {
        Self { candles: Vec::new() }
    }

    /// Build a series from already-normalized candles, restoring date order
    /// if the input arrived shuffled.
    pub fn from_candles(mut candles: Vec<Candle>) -> Self {
        candles.sort_by(|a, b| a.date.cmp(&b.date));
        candles.dedup_by(|a, b| a.date == b.date);
        Self { candles }
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn count(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.candles.get(index)
    }

    pub fn latest(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// Closing prices aligned by index, the input of every indicator function
    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.ohlcv.close.value()).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.ohlcv.high.value()).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.ohlcv.low.value()).collect()
    }

    /// Price range over the whole window: (min low, max high)
    pub fn price_range(&self) -> Option<(Price, Price)> {
        if self.candles.is_empty() {
            return None;
        }

        let mut min_low = self.candles[0].ohlcv.low;
        let mut max_high = self.candles[0].ohlcv.high;

        for candle in &self.candles {
            if candle.ohlcv.low < min_low {
                min_low = candle.ohlcv.low;
            }
            if candle.ohlcv.high > max_high {
                max_high = candle.ohlcv.high;
            }
        }

        Some((min_low, max_high))
    }

    pub fn max_volume(&self) -> f64 {
        self.candles.iter().map(|c| c.ohlcv.volume.value()).fold(0.0, f64::max)
    }

    /// Index of the candle whose date exactly matches `date`
    pub fn index_of_date(&self, date: &str) -> Option<usize> {
        // Linear scan is fine at display-window scale (<= 120 bars)
        self.candles.iter().position(|c| c.date == date)
    }
}

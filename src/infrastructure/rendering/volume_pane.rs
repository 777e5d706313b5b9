//! Volume pane: auto-scaled bar chart with compact magnitude labels.

use super::mapper::{SlotLayout, ValueMapper};
use super::surface::RenderSurface;
use super::{ChartTheme, draw_placeholder};
use crate::domain::market_data::CandleSeries;

/// Headroom above the tallest bar
const RANGE_PAD: f64 = 1.1;

/// Density-tuned bar widths, coarser as the window grows
fn bar_width_for(count: usize) -> f64 {
    if count <= 30 {
        8.0
    } else if count <= 60 {
        5.0
    } else if count <= 90 {
        3.5
    } else {
        2.5
    }
}

/// Compact magnitude formatting: hundred-million units ("Y") above 1e8,
/// ten-thousand units ("W") above 1e4, plain integers below.
pub fn format_compact_volume(value: f64) -> String {
    if value >= 100_000_000.0 {
        format!("{:.2}Y", value / 100_000_000.0)
    } else if value >= 10_000.0 {
        format!("{:.2}W", value / 10_000.0)
    } else {
        format!("{:.0}", value)
    }
}

pub struct VolumePaneRenderer<'a> {
    theme: &'a ChartTheme,
}

impl<'a> VolumePaneRenderer<'a> {
    pub fn new(theme: &'a ChartTheme) -> Self {
        Self { theme }
    }

    pub fn render(&self, series: &CandleSeries, surface: &mut RenderSurface) {
        if series.is_empty() {
            draw_placeholder(surface, "NO DATA", self.theme);
            return;
        }

        let max_volume = series.max_volume();
        if max_volume <= 0.0 {
            draw_placeholder(surface, "NO VOLUME DATA", self.theme);
            return;
        }

        let mapper = ValueMapper::new(0.0, max_volume * RANGE_PAD, surface.height());
        let slots = SlotLayout::new(surface.width(), series.count());
        let half_width = (bar_width_for(series.count()) / 2.0).round().max(1.0) as i32;
        let base_y = mapper.y(0.0).round() as i32 - 1;

        for (i, candle) in series.candles().iter().enumerate() {
            let volume = candle.ohlcv.volume.value();
            if volume <= 0.0 {
                continue;
            }
            let x = slots.x(i).round() as i32;
            let top_y = mapper.y(volume).round() as i32;
            let color = if candle.is_rising() { self.theme.rising } else { self.theme.falling };
            surface.fill_rect(
                x - half_width,
                top_y,
                2 * half_width + 1,
                (base_y - top_y).max(1),
                color,
            );
        }

        // two tick levels only (mid and max) to avoid clutter at small heights
        for level in [max_volume, max_volume / 2.0] {
            let y = mapper.y(level).round() as i32;
            let text_y = y.clamp(1, surface.height() as i32 - 8);
            surface.hline(0, surface.width() as i32 - 1, y, self.theme.grid);
            surface.draw_text(2, text_y, &format_compact_volume(level), self.theme.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_magnitude_suffixes() {
        assert_eq!(format_compact_volume(250_000_000.0), "2.50Y");
        assert_eq!(format_compact_volume(123_400.0), "12.34W");
        assert_eq!(format_compact_volume(10_000.0), "1.00W");
        assert_eq!(format_compact_volume(9_999.0), "9999");
        assert_eq!(format_compact_volume(0.0), "0");
    }

    #[test]
    fn bar_width_breakpoints() {
        assert_eq!(bar_width_for(30), 8.0);
        assert_eq!(bar_width_for(31), 5.0);
        assert_eq!(bar_width_for(60), 5.0);
        assert_eq!(bar_width_for(90), 3.5);
        assert_eq!(bar_width_for(120), 2.5);
    }
}

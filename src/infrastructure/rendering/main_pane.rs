//! Main pane: grid, price axis, indicator overlays, candles, trade markers.

use super::mapper::{SlotLayout, ValueMapper};
use super::surface::{RenderSurface, Rgba};
use super::{ChartTheme, draw_grid, draw_placeholder, draw_series_polyline, GRID_LINES};
use crate::domain::chart::{Chart, TradeMarker};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{Candle, CandleSeries, IndicatorKind, TradeAction, indicators};
use crate::log_debug;

/// Fixed 2% padding keeps extremes off the canvas edge
const RANGE_PAD_LOW: f64 = 0.98;
const RANGE_PAD_HIGH: f64 = 1.02;

/// Body width bounds keep dense and sparse windows legible
const MIN_BODY_WIDTH: f64 = 1.5;
const MAX_BODY_WIDTH: f64 = 12.0;
const BODY_SLOT_RATIO: f64 = 0.8;

/// Default overlay parameters when a spec omits them
const DEFAULT_MA_PERIOD: usize = 20;
const DEFAULT_EMA_PERIOD: usize = 12;
const DEFAULT_BOLL_PERIOD: usize = 20;
const DEFAULT_BOLL_STD: f64 = 2.0;

const MARKER_GAP: i32 = 3;
const MARKER_SIZE: i32 = 5;

pub struct MainPaneRenderer<'a> {
    theme: &'a ChartTheme,
}

impl<'a> MainPaneRenderer<'a> {
    pub fn new(theme: &'a ChartTheme) -> Self {
        Self { theme }
    }

    /// Draw order is fixed: grid, axis labels, overlays, candles, markers -
    /// later draws occlude earlier ones.
    pub fn render(&self, chart: &Chart, surface: &mut RenderSurface) {
        let series = chart.series();
        let Some((min_low, max_high)) = series.price_range() else {
            draw_placeholder(surface, "NO DATA", self.theme);
            return;
        };
        let mapper = ValueMapper::new(
            min_low.value() * RANGE_PAD_LOW,
            max_high.value() * RANGE_PAD_HIGH,
            surface.height(),
        );
        let slots = SlotLayout::new(surface.width(), series.count());

        draw_grid(surface, self.theme);
        self.draw_axis_labels(surface, &mapper);
        self.draw_overlays(chart, surface, &slots, &mapper);
        self.draw_candles(series, surface, &slots, &mapper);
        self.draw_markers(series, chart.markers(), surface, &slots, &mapper);
    }

    /// Price labels at the five grid levels, top to bottom
    fn draw_axis_labels(&self, surface: &mut RenderSurface, mapper: &ValueMapper) {
        let h = surface.height() as i32;
        for i in 0..GRID_LINES {
            let fraction = i as f64 / (GRID_LINES - 1) as f64;
            let value = mapper.level(1.0 - fraction);
            let line_y = ((h - 1) as f64 * fraction).round() as i32;
            let text_y = line_y.clamp(2, h - 9);
            surface.draw_text(2, text_y, &format!("{:.2}", value), self.theme.text);
        }
    }

    fn draw_overlays(
        &self,
        chart: &Chart,
        surface: &mut RenderSurface,
        slots: &SlotLayout,
        mapper: &ValueMapper,
    ) {
        let closes = chart.series().closes();
        let palette = &self.theme.overlay_palette;
        let mut color_index = 0usize;
        let mut next_color = move || {
            let color = palette[color_index % palette.len()];
            color_index += 1;
            color
        };

        for spec in chart.overlay_specs() {
            match spec.kind {
                IndicatorKind::Ma => {
                    let period = spec.period_param("period", DEFAULT_MA_PERIOD);
                    let values = indicators::ma(&closes, period);
                    draw_series_polyline(surface, slots, mapper, &values, next_color());
                }
                IndicatorKind::Ema => {
                    let period = spec.period_param("period", DEFAULT_EMA_PERIOD);
                    let values = indicators::ema(&closes, period);
                    draw_series_polyline(surface, slots, mapper, &values, next_color());
                }
                IndicatorKind::Boll => {
                    let period = spec.period_param("period", DEFAULT_BOLL_PERIOD);
                    let multiplier = spec.param("std", DEFAULT_BOLL_STD);
                    let bands = indicators::boll(&closes, period, multiplier);
                    self.fill_band(surface, slots, mapper, &bands.upper, &bands.lower);
                    draw_series_polyline(surface, slots, mapper, &bands.upper, next_color());
                    draw_series_polyline(surface, slots, mapper, &bands.middle, next_color());
                    draw_series_polyline(surface, slots, mapper, &bands.lower, next_color());
                }
                // oscillators never reach the overlay iterator
                _ => {}
            }
        }
    }

    /// Translucent fill between the upper and lower band, interpolated per
    /// pixel column; columns touching a NaN edge stay empty.
    fn fill_band(
        &self,
        surface: &mut RenderSurface,
        slots: &SlotLayout,
        mapper: &ValueMapper,
        upper: &[f64],
        lower: &[f64],
    ) {
        for i in 0..upper.len().saturating_sub(1) {
            let segment = [upper[i], upper[i + 1], lower[i], lower[i + 1]];
            if segment.iter().any(|v| v.is_nan()) {
                continue;
            }
            let x0 = slots.x(i).round() as i32;
            let x1 = slots.x(i + 1).round() as i32;
            if x1 <= x0 {
                continue;
            }
            for x in x0..x1 {
                let t = (x - x0) as f64 / (x1 - x0) as f64;
                let top = mapper.y(upper[i] + (upper[i + 1] - upper[i]) * t).round() as i32;
                let bottom = mapper.y(lower[i] + (lower[i + 1] - lower[i]) * t).round() as i32;
                surface.vline(x, top, bottom, self.theme.boll_fill);
            }
        }
    }

    fn draw_candles(
        &self,
        series: &CandleSeries,
        surface: &mut RenderSurface,
        slots: &SlotLayout,
        mapper: &ValueMapper,
    ) {
        let body_width = (slots.slot_width() * BODY_SLOT_RATIO)
            .clamp(MIN_BODY_WIDTH, MAX_BODY_WIDTH);
        let half_width = (body_width / 2.0).round().max(1.0) as i32;

        for (i, candle) in series.candles().iter().enumerate() {
            let x = slots.x(i).round() as i32;
            let color = self.candle_color(candle);

            let high_y = mapper.y(candle.ohlcv.high.value()).round() as i32;
            let low_y = mapper.y(candle.ohlcv.low.value()).round() as i32;
            let open_y = mapper.y(candle.ohlcv.open.value()).round() as i32;
            let close_y = mapper.y(candle.ohlcv.close.value()).round() as i32;

            // wick first so the body occludes its middle
            surface.vline(x, high_y, low_y, self.theme.wick);

            let top = open_y.min(close_y);
            let bottom = open_y.max(close_y);
            if bottom - top < 1 {
                // doji: flat tick instead of a degenerate rectangle
                surface.hline(x - half_width, x + half_width, open_y, color);
            } else {
                surface.fill_rect(x - half_width, top, 2 * half_width + 1, bottom - top, color);
            }
        }
    }

    fn candle_color(&self, candle: &Candle) -> Rgba {
        if candle.is_rising() { self.theme.rising } else { self.theme.falling }
    }

    /// Directional triangles with a one-character label, offset outward from
    /// the candle so they never overlap the body. Unmatched dates are skipped.
    fn draw_markers(
        &self,
        series: &CandleSeries,
        markers: &[TradeMarker],
        surface: &mut RenderSurface,
        slots: &SlotLayout,
        mapper: &ValueMapper,
    ) {
        let mut skipped = 0usize;
        for marker in markers {
            let Some(index) = series.index_of_date(&marker.date) else {
                skipped += 1;
                continue;
            };
            let Some(candle) = series.get(index) else {
                continue;
            };
            let x = slots.x(index).round() as i32;
            let color = match marker.action {
                TradeAction::Buy => self.theme.rising,
                TradeAction::Sell => self.theme.falling,
            };
            let label = marker.action.marker_label().to_string();
            let label_x = x - RenderSurface::text_width(&label) / 2;

            match marker.action {
                TradeAction::Buy => {
                    // below the low, apex pointing up at the price
                    let base = mapper.y(candle.ohlcv.low.value()).round() as i32 + MARKER_GAP;
                    surface.fill_triangle(
                        (x, base),
                        (x - MARKER_SIZE, base + MARKER_SIZE),
                        (x + MARKER_SIZE, base + MARKER_SIZE),
                        color,
                    );
                    surface.draw_text(label_x, base + MARKER_SIZE + 2, &label, color);
                }
                TradeAction::Sell => {
                    // above the high, apex pointing down at the price
                    let base = mapper.y(candle.ohlcv.high.value()).round() as i32 - MARKER_GAP;
                    surface.fill_triangle(
                        (x, base),
                        (x - MARKER_SIZE, base - MARKER_SIZE),
                        (x + MARKER_SIZE, base - MARKER_SIZE),
                        color,
                    );
                    surface.draw_text(
                        label_x,
                        base - MARKER_SIZE - 2 - font_height(),
                        &label,
                        color,
                    );
                }
            }
        }

        if skipped > 0 {
            log_debug!(
                LogComponent::Infrastructure("MainPane"),
                "skipped {} trade marker(s) with no matching candle",
                skipped
            );
        }
    }
}

fn font_height() -> i32 {
    super::font::GLYPH_HEIGHT as i32
}

//! Pixel-level pane renderers and their shared plumbing.

pub mod font;
pub mod main_pane;
pub mod mapper;
pub mod sub_pane;
pub mod surface;
pub mod volume_pane;

pub use main_pane::MainPaneRenderer;
pub use mapper::{SlotLayout, ValueMapper};
pub use sub_pane::SubPaneRenderer;
pub use surface::{RenderSurface, Rgba};
pub use volume_pane::VolumePaneRenderer;

use crate::domain::chart::Chart;
use crate::domain::errors::{ChartError, RenderResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::IndicatorKind;
use crate::log_warn;

/// Number of grid lines per direction on the main pane (edges included)
pub const GRID_LINES: u32 = 5;

/// Caller/theme concern: every color the three panes use
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub background: Rgba,
    pub grid: Rgba,
    pub text: Rgba,
    pub wick: Rgba,
    pub rising: Rgba,
    pub falling: Rgba,
    /// Cycled through MA/EMA overlay lines in spec order
    pub overlay_palette: [Rgba; 5],
    pub boll_fill: Rgba,
    pub dif: Rgba,
    pub dea: Rgba,
    pub kdj_k: Rgba,
    pub kdj_d: Rgba,
    pub kdj_j: Rgba,
    pub reference: Rgba,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: Rgba::opaque(16, 20, 24),
            grid: Rgba::new(255, 255, 255, 28),
            text: Rgba::opaque(170, 170, 170),
            wick: Rgba::opaque(153, 153, 153),
            rising: Rgba::opaque(116, 199, 135),  // #74c787
            falling: Rgba::opaque(225, 108, 72),  // #e16c48
            overlay_palette: [
                Rgba::opaque(255, 51, 51),
                Rgba::opaque(255, 204, 0),
                Rgba::opaque(51, 102, 204),
                Rgba::opaque(204, 51, 204),
                Rgba::opaque(0, 204, 204),
            ],
            boll_fill: Rgba::new(102, 153, 255, 36),
            dif: Rgba::opaque(255, 204, 0),
            dea: Rgba::opaque(51, 153, 255),
            kdj_k: Rgba::opaque(255, 204, 0),
            kdj_d: Rgba::opaque(51, 153, 255),
            kdj_j: Rgba::opaque(204, 51, 204),
            reference: Rgba::new(255, 255, 255, 56),
        }
    }
}

/// Caller-provided pixel dimensions for the three panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub main: (u32, u32),
    pub volume: (u32, u32),
    pub indicator: (u32, u32),
}

impl ChartLayout {
    /// Vertically stacked panes of one width with the classic 60/20/20 split
    pub fn stacked(width: u32, height: u32) -> Self {
        let volume_h = height / 5;
        let indicator_h = height / 5;
        Self {
            main: (width, height - volume_h - indicator_h),
            volume: (width, volume_h),
            indicator: (width, indicator_h),
        }
    }
}

/// One render pass's raster output, one surface per pane
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub main: RenderSurface,
    pub volume: RenderSurface,
    pub indicator: RenderSurface,
}

/// Orchestrates the three pane renderers over one [`Chart`].
///
/// Synchronous and idempotent: the same chart and layout always produce
/// byte-identical frames.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    theme: ChartTheme,
    oscillator: Option<IndicatorKind>,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Select the oscillator family for the sub-pane (default MACD)
    pub fn with_oscillator(mut self, kind: IndicatorKind) -> Self {
        self.oscillator = Some(kind);
        self
    }

    pub fn render(&self, chart: &Chart, layout: &ChartLayout) -> RenderResult<ChartFrame> {
        for (w, h) in [layout.main, layout.volume, layout.indicator] {
            if w == 0 || h == 0 {
                return Err(ChartError::RenderingError(format!(
                    "pane surface must be non-empty, got {}x{}",
                    w, h
                )));
            }
        }

        let family = match self.oscillator {
            Some(kind) if !kind.is_overlay() => kind,
            Some(kind) => {
                log_warn!(
                    LogComponent::Infrastructure("ChartRenderer"),
                    "{} is not an oscillator family, falling back to MACD",
                    kind
                );
                IndicatorKind::Macd
            }
            None => IndicatorKind::Macd,
        };

        let mut main = RenderSurface::new(layout.main.0, layout.main.1, self.theme.background);
        let mut volume =
            RenderSurface::new(layout.volume.0, layout.volume.1, self.theme.background);
        let mut indicator =
            RenderSurface::new(layout.indicator.0, layout.indicator.1, self.theme.background);

        MainPaneRenderer::new(&self.theme).render(chart, &mut main);
        VolumePaneRenderer::new(&self.theme).render(chart.series(), &mut volume);
        SubPaneRenderer::new(&self.theme, family).render(chart, &mut indicator);

        Ok(ChartFrame { main, volume, indicator })
    }
}

/// Polyline over an index-aligned series, skipping NaN with a pen-up gap
/// (never a stroke to a default coordinate).
pub(crate) fn draw_series_polyline(
    surface: &mut RenderSurface,
    slots: &SlotLayout,
    mapper: &ValueMapper,
    values: &[f64],
    color: Rgba,
) {
    let mut last: Option<(i32, i32)> = None;
    for (i, value) in values.iter().enumerate() {
        if value.is_nan() {
            last = None;
            continue;
        }
        let point = (slots.x(i).round() as i32, mapper.y(*value).round() as i32);
        if let Some((px, py)) = last {
            surface.line(px, py, point.0, point.1, color);
        }
        last = Some(point);
    }
}

/// Centered placeholder text for degraded panes ("NO DATA" and friends)
pub(crate) fn draw_placeholder(surface: &mut RenderSurface, text: &str, theme: &ChartTheme) {
    let x = (surface.width() as i32 - RenderSurface::text_width(text)) / 2;
    let y = (surface.height() as i32 - font::GLYPH_HEIGHT as i32) / 2;
    surface.draw_text(x, y, text, theme.text);
}

/// Fixed 5 + 5 background grid, edges included
pub(crate) fn draw_grid(surface: &mut RenderSurface, theme: &ChartTheme) {
    let w = surface.width() as i32;
    let h = surface.height() as i32;
    for i in 0..GRID_LINES {
        let fraction = i as f64 / (GRID_LINES - 1) as f64;
        let y = ((h - 1) as f64 * fraction).round() as i32;
        let x = ((w - 1) as f64 * fraction).round() as i32;
        surface.hline(0, w - 1, y, theme.grid);
        surface.vline(x, 0, h - 1, theme.grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_gap_at_nan_draws_nothing_at_origin() {
        let theme = ChartTheme::default();
        let mut surface = RenderSurface::new(100, 50, theme.background);
        let slots = SlotLayout::new(100, 5);
        let mapper = ValueMapper::new(0.0, 10.0, 50);
        draw_series_polyline(
            &mut surface,
            &slots,
            &mapper,
            &[f64::NAN, 5.0, f64::NAN, 5.0, f64::NAN],
            Rgba::opaque(255, 0, 0),
        );
        // isolated defined points with NaN neighbors produce no strokes
        assert!(surface.pixels().iter().all(|p| *p == theme.background));
    }

    #[test]
    fn zero_sized_layout_is_rejected() {
        let renderer = ChartRenderer::new();
        let chart = Chart::default();
        let layout = ChartLayout { main: (0, 100), volume: (10, 10), indicator: (10, 10) };
        assert!(renderer.render(&chart, &layout).is_err());
    }
}

//! Oscillator sub-pane: exactly one family (MACD | RSI | KDJ) per render.

use super::mapper::{SlotLayout, ValueMapper};
use super::surface::RenderSurface;
use super::{ChartTheme, draw_placeholder, draw_series_polyline};
use crate::domain::chart::{Chart, IndicatorSpec};
use crate::domain::market_data::{IndicatorKind, indicators};

/// Documented fallback parameters when no spec is supplied
const MACD_DEFAULTS: (usize, usize, usize) = (12, 26, 9);
const RSI_DEFAULT_PERIOD: usize = 14;
const KDJ_DEFAULTS: (usize, usize, usize) = (9, 3, 3);

pub struct SubPaneRenderer<'a> {
    theme: &'a ChartTheme,
    family: IndicatorKind,
}

impl<'a> SubPaneRenderer<'a> {
    pub fn new(theme: &'a ChartTheme, family: IndicatorKind) -> Self {
        Self { theme, family }
    }

    pub fn render(&self, chart: &Chart, surface: &mut RenderSurface) {
        if chart.series().is_empty() {
            draw_placeholder(surface, "NO DATA", self.theme);
            return;
        }

        let spec = chart.oscillator_spec(self.family);
        match self.family {
            IndicatorKind::Rsi => self.render_rsi(chart, spec, surface),
            IndicatorKind::Kdj => self.render_kdj(chart, spec, surface),
            // MACD is both the named family and the unknown-family fallback
            _ => self.render_macd(chart, spec, surface),
        }
    }

    fn render_macd(
        &self,
        chart: &Chart,
        spec: Option<&IndicatorSpec>,
        surface: &mut RenderSurface,
    ) {
        let (fast, slow, signal) = match spec {
            Some(s) => (
                s.period_param("fast", MACD_DEFAULTS.0),
                s.period_param("slow", MACD_DEFAULTS.1),
                s.period_param("signal", MACD_DEFAULTS.2),
            ),
            None => MACD_DEFAULTS,
        };
        let out = indicators::macd(&chart.series().closes(), fast, slow, signal);

        // the range spans every drawn element: DIF, DEA and histogram bars
        let Some((min, max)) =
            observed_range(&[&out.dif, &out.dea, &out.histogram])
        else {
            draw_placeholder(surface, "NO DATA", self.theme);
            return;
        };
        let mapper = ValueMapper::new(min, max, surface.height());
        let slots = SlotLayout::new(surface.width(), chart.series().count());

        let zero_y = mapper.y(0.0).round() as i32;
        surface.hline(0, surface.width() as i32 - 1, zero_y, self.theme.reference);

        for (i, value) in out.histogram.iter().enumerate() {
            if value.is_nan() {
                continue;
            }
            let x = slots.x(i).round() as i32;
            let y = mapper.y(*value).round() as i32;
            let color = if *value >= 0.0 { self.theme.rising } else { self.theme.falling };
            surface.vline(x, zero_y, y, color);
        }

        draw_series_polyline(surface, &slots, &mapper, &out.dif, self.theme.dif);
        draw_series_polyline(surface, &slots, &mapper, &out.dea, self.theme.dea);
    }

    fn render_rsi(
        &self,
        chart: &Chart,
        spec: Option<&IndicatorSpec>,
        surface: &mut RenderSurface,
    ) {
        let period = spec
            .map(|s| s.period_param("period", RSI_DEFAULT_PERIOD))
            .unwrap_or(RSI_DEFAULT_PERIOD);
        let values = indicators::rsi(&chart.series().closes(), period);

        // RSI is bounded, so the pane scale is fixed
        let mapper = ValueMapper::new(0.0, 100.0, surface.height());
        let slots = SlotLayout::new(surface.width(), chart.series().count());

        for level in [30.0, 50.0, 70.0] {
            let y = mapper.y(level).round() as i32;
            surface.hline(0, surface.width() as i32 - 1, y, self.theme.reference);
            surface.draw_text(2, y - 8, &format!("{:.0}", level), self.theme.text);
        }

        draw_series_polyline(surface, &slots, &mapper, &values, self.theme.dif);
    }

    fn render_kdj(
        &self,
        chart: &Chart,
        spec: Option<&IndicatorSpec>,
        surface: &mut RenderSurface,
    ) {
        let (n, k_smooth, d_smooth) = match spec {
            Some(s) => (
                s.period_param("n", KDJ_DEFAULTS.0),
                s.period_param("k", KDJ_DEFAULTS.1),
                s.period_param("d", KDJ_DEFAULTS.2),
            ),
            None => KDJ_DEFAULTS,
        };
        let series = chart.series();
        let out = indicators::kdj(&series.highs(), &series.lows(), &series.closes(), n, k_smooth, d_smooth);

        // J can leave [0, 100], so the scale follows the observed extremes
        let Some((min, max)) = observed_range(&[&out.k, &out.d, &out.j]) else {
            draw_placeholder(surface, "NO DATA", self.theme);
            return;
        };
        let mapper = ValueMapper::new(min, max, surface.height());
        let slots = SlotLayout::new(surface.width(), series.count());

        for level in [20.0, 50.0, 80.0] {
            if level < min || level > max {
                continue;
            }
            let y = mapper.y(level).round() as i32;
            surface.hline(0, surface.width() as i32 - 1, y, self.theme.reference);
        }

        draw_series_polyline(surface, &slots, &mapper, &out.k, self.theme.kdj_k);
        draw_series_polyline(surface, &slots, &mapper, &out.d, self.theme.kdj_d);
        draw_series_polyline(surface, &slots, &mapper, &out.j, self.theme.kdj_j);
    }
}

/// Min/max across several NaN-bearing series; None when nothing is defined
fn observed_range(series: &[&[f64]]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for values in series {
        for v in values.iter().filter(|v| !v.is_nan()) {
            min = min.min(*v);
            max = max.max(*v);
        }
    }
    if min.is_finite() && max.is_finite() { Some((min, max)) } else { None }
}

use super::value_objects::{IndicatorSpec, TradeMarker};
use crate::domain::market_data::{CandleSeries, IndicatorKind};

/// Domain entity - everything one render pass consumes.
///
/// Owns its inputs exclusively for the duration of the pass; repeated renders
/// of the same chart must produce pixel-identical output.
#[derive(Debug, Clone, Default)]
pub struct Chart {
    series: CandleSeries,
    specs: Vec<IndicatorSpec>,
    markers: Vec<TradeMarker>,
}

impl Chart {
    pub fn new(series: CandleSeries) -> Self {
        Self { series, specs: Vec::new(), markers: Vec::new() }
    }

    pub fn with_indicators(mut self, specs: Vec<IndicatorSpec>) -> Self {
        self.specs = specs;
        self
    }

    pub fn with_trades(mut self, markers: Vec<TradeMarker>) -> Self {
        self.markers = markers;
        self
    }

    pub fn series(&self) -> &CandleSeries {
        &self.series
    }

    pub fn markers(&self) -> &[TradeMarker] {
        &self.markers
    }

    /// Enabled overlay specs (MA/EMA/BOLL) in caller order
    pub fn overlay_specs(&self) -> impl Iterator<Item = &IndicatorSpec> {
        self.specs.iter().filter(|s| s.enabled && s.kind.is_overlay())
    }

    /// Enabled spec for the requested oscillator family, if the caller
    /// supplied one. Renderers fall back to documented defaults otherwise.
    pub fn oscillator_spec(&self, kind: IndicatorKind) -> Option<&IndicatorSpec> {
        self.specs.iter().find(|s| s.enabled && s.kind == kind)
    }
}

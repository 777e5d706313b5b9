//! OHLC chart rendering and technical-indicator engine.
//!
//! A pure transform: (raw bar payload, indicator config, trade list) in,
//! (normalized candle series, indicator series, per-pane RGBA rasters) out.
//! No fetching, no persistence, no signal interpretation.

pub mod domain;
pub mod infrastructure;

pub use domain::chart::{Chart, IndicatorSpec, TradeMarker};
pub use domain::errors::{ChartError, RenderResult};
pub use domain::market_data::{
    Candle, CandleSeries, IndicatorKind, TradeAction, normalize_payload,
};
pub use infrastructure::rendering::{
    ChartFrame, ChartLayout, ChartRenderer, ChartTheme, RenderSurface, Rgba,
};

use domain::logging::{LogComponent, get_logger};

/// Wire up the stderr logger. Hosts embedding the engine may install their
/// own [`domain::logging::Logger`] instead; first registration wins.
pub fn initialize() {
    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    get_logger().info(LogComponent::Infrastructure("Initialize"), "chart engine ready");
}

/// One-call pipeline with default theme and MACD sub-pane: normalize the
/// payload, assemble the chart and render all three panes.
pub fn render_chart(
    payload: &serde_json::Value,
    specs: Vec<IndicatorSpec>,
    trades: Vec<TradeMarker>,
    layout: &ChartLayout,
) -> RenderResult<ChartFrame> {
    let series = normalize_payload(payload);
    let chart = Chart::new(series).with_indicators(specs).with_trades(trades);
    ChartRenderer::new().render(&chart, layout)
}

use kchart_engine::{ChartLayout, TradeAction, TradeMarker, render_chart};
use serde_json::json;

fn payload() -> serde_json::Value {
    json!((0..20).map(|i| json!({
        "trade_date": format!("202403{:02}", i + 1),
        "open": 50.0 + i as f64,
        "close": 51.0 + i as f64,
        "high": 52.0 + i as f64,
        "low": 49.0 + i as f64,
        "vol": 1000,
    })).collect::<Vec<_>>())
}

#[test]
fn matched_markers_change_the_main_pane() {
    let layout = ChartLayout::stacked(400, 300);
    let plain = render_chart(&payload(), vec![], vec![], &layout).unwrap();
    let marked = render_chart(
        &payload(),
        vec![],
        vec![
            TradeMarker::new("20240305", 54.0, TradeAction::Buy),
            TradeMarker::new("20240312", 62.0, TradeAction::Sell),
        ],
        &layout,
    )
    .unwrap();
    assert_ne!(plain.main, marked.main);
    // markers are a main-pane annotation only
    assert_eq!(plain.volume, marked.volume);
    assert_eq!(plain.indicator, marked.indicator);
}

#[test]
fn unmatched_markers_are_dropped_without_a_trace() {
    let layout = ChartLayout::stacked(400, 300);
    let plain = render_chart(&payload(), vec![], vec![], &layout).unwrap();
    let marked = render_chart(
        &payload(),
        vec![],
        vec![TradeMarker::new("19990101", 54.0, TradeAction::Buy)],
        &layout,
    )
    .unwrap();
    assert_eq!(plain, marked);
}

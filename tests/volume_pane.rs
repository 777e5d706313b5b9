use kchart_engine::{ChartLayout, ChartTheme, render_chart};
use serde_json::json;

fn payload(volume: u64) -> serde_json::Value {
    json!((0..10).map(|i| json!({
        "trade_date": format!("202401{:02}", i + 1),
        "open": 10.0,
        "close": if i % 2 == 0 { 10.5 } else { 9.5 },
        "high": 11.0,
        "low": 9.0,
        "vol": volume,
    })).collect::<Vec<_>>())
}

#[test]
fn bars_take_candle_direction_colors() {
    let layout = ChartLayout::stacked(300, 250);
    let frame = render_chart(&payload(5000), vec![], vec![], &layout).unwrap();
    let theme = ChartTheme::default();
    let pixels = frame.volume.pixels();
    assert!(pixels.iter().any(|p| *p == theme.rising));
    assert!(pixels.iter().any(|p| *p == theme.falling));
}

#[test]
fn all_zero_volume_degrades_to_placeholder() {
    let layout = ChartLayout::stacked(300, 250);
    let frame = render_chart(&payload(0), vec![], vec![], &layout).unwrap();
    let theme = ChartTheme::default();
    let pixels = frame.volume.pixels();
    // no bars, only placeholder text
    assert!(!pixels.iter().any(|p| *p == theme.rising || *p == theme.falling));
    assert!(pixels.iter().any(|p| *p == theme.text));
}

#[test]
fn missing_volume_field_defaults_to_zero() {
    let payload = json!([
        {"trade_date": "20240101", "open": 10.0, "close": 10.5, "high": 11.0, "low": 9.0}
    ]);
    let layout = ChartLayout::stacked(300, 250);
    let frame = render_chart(&payload, vec![], vec![], &layout).unwrap();
    let theme = ChartTheme::default();
    assert!(!frame.volume.pixels().iter().any(|p| *p == theme.rising));
}

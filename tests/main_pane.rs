use kchart_engine::{ChartLayout, ChartTheme, render_chart};
use serde_json::json;

#[test]
fn doji_bars_still_leave_a_visible_tick() {
    // open == close on every bar
    let payload = json!((0..5).map(|i| json!({
        "trade_date": format!("202401{:02}", i + 1),
        "open": 10.0,
        "close": 10.0,
        "high": 10.5,
        "low": 9.5,
        "vol": 100,
    })).collect::<Vec<_>>());
    let layout = ChartLayout::stacked(300, 250);
    let frame = render_chart(&payload, vec![], vec![], &layout).unwrap();
    let theme = ChartTheme::default();
    // flat bars count as rising and draw a rising-colored tick
    assert!(frame.main.pixels().iter().any(|p| *p == theme.rising));
}

#[test]
fn wicks_extend_beyond_the_body() {
    let payload = json!([{
        "trade_date": "20240101",
        "open": 10.0,
        "close": 10.2,
        "high": 12.0,
        "low": 8.0,
        "vol": 100,
    }]);
    let layout = ChartLayout::stacked(300, 250);
    let frame = render_chart(&payload, vec![], vec![], &layout).unwrap();
    let theme = ChartTheme::default();
    assert!(frame.main.pixels().iter().any(|p| *p == theme.wick));
}

#[test]
fn axis_labels_are_drawn_for_nonempty_series() {
    let payload = json!([{
        "trade_date": "20240101",
        "open": 10.0,
        "close": 10.2,
        "high": 12.0,
        "low": 8.0,
    }]);
    let layout = ChartLayout::stacked(300, 250);
    let frame = render_chart(&payload, vec![], vec![], &layout).unwrap();
    let theme = ChartTheme::default();
    assert!(frame.main.pixels().iter().any(|p| *p == theme.text));
}

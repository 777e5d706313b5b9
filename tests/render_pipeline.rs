use kchart_engine::{
    Chart, ChartLayout, ChartRenderer, ChartTheme, IndicatorKind, IndicatorSpec, RenderSurface,
    normalize_payload, render_chart,
};
use serde_json::json;

fn sample_payload(bars: usize) -> serde_json::Value {
    json!((0..bars).map(|i| {
        let base = 100.0 + (i as f64 * 0.4).sin() * 8.0;
        json!({
            "trade_date": format!("{:08}", 20240101 + i),
            "open": base,
            "close": base + if i % 2 == 0 { 1.5 } else { -1.5 },
            "high": base + 2.5,
            "low": base - 2.5,
            "vol": 10_000 + 500 * i,
        })
    }).collect::<Vec<_>>())
}

#[test]
fn full_pipeline_produces_all_three_panes() {
    let layout = ChartLayout::stacked(400, 300);
    let frame = render_chart(&sample_payload(50), vec![], vec![], &layout)
        .expect("render should succeed");
    assert_eq!((frame.main.width(), frame.main.height()), layout.main);
    assert_eq!((frame.volume.width(), frame.volume.height()), layout.volume);
    assert_eq!((frame.indicator.width(), frame.indicator.height()), layout.indicator);

    let background = ChartTheme::default().background;
    for pane in [&frame.main, &frame.volume, &frame.indicator] {
        assert!(pane.pixels().iter().any(|p| *p != background));
    }
}

#[test]
fn rendering_is_deterministic() {
    let layout = ChartLayout::stacked(320, 240);
    let specs = vec![
        IndicatorSpec::new(IndicatorKind::Ma).with_param("period", 5.0),
        IndicatorSpec::new(IndicatorKind::Boll),
    ];
    let payload = sample_payload(40);
    let first = render_chart(&payload, specs.clone(), vec![], &layout).unwrap();
    let second = render_chart(&payload, specs, vec![], &layout).unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_oscillator_family_renders() {
    let chart = Chart::new(normalize_payload(&sample_payload(60)));
    let layout = ChartLayout::stacked(300, 250);
    let background = ChartTheme::default().background;

    for family in [IndicatorKind::Macd, IndicatorKind::Rsi, IndicatorKind::Kdj] {
        let frame = ChartRenderer::new()
            .with_oscillator(family)
            .render(&chart, &layout)
            .unwrap();
        assert!(
            frame.indicator.pixels().iter().any(|p| *p != background),
            "{family} sub-pane stayed blank"
        );
    }
}

#[test]
fn overlay_family_in_sub_pane_slot_falls_back_to_macd() {
    let chart = Chart::new(normalize_payload(&sample_payload(60)));
    let layout = ChartLayout::stacked(300, 250);
    let fallback = ChartRenderer::new()
        .with_oscillator(IndicatorKind::Ma)
        .render(&chart, &layout)
        .unwrap();
    let macd = ChartRenderer::new()
        .with_oscillator(IndicatorKind::Macd)
        .render(&chart, &layout)
        .unwrap();
    assert_eq!(fallback.indicator, macd.indicator);
}

#[test]
fn empty_payload_renders_placeholders_not_errors() {
    let layout = ChartLayout::stacked(200, 150);
    let frame = render_chart(&json!([]), vec![], vec![], &layout).unwrap();
    let background = ChartTheme::default().background;
    // each pane carries placeholder text, nothing else
    for pane in [&frame.main, &frame.volume, &frame.indicator] {
        assert!(pane.pixels().iter().any(|p| *p != background));
    }
}

#[test]
fn frame_bytes_are_tightly_packed_rgba() {
    let surface = RenderSurface::new(3, 2, ChartTheme::default().background);
    assert_eq!(surface.as_bytes().len(), 3 * 2 * 4);
}

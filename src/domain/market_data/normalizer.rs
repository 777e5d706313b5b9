//! Bar Normalizer - turns heterogeneous upstream payloads into a canonical
//! [`CandleSeries`].
//!
//! Two field-naming schemes are probed per record: the "new" scheme
//! (`trade_date`/`open`/`close`/`high`/`low`/`vol`) and the legacy localized
//! scheme (`日期`/`开盘`/`收盘`/`最高`/`最低`/`成交量`). Nothing dynamic
//! survives past this boundary.

use super::entities::{Candle, CandleSeries};
use super::value_objects::{OHLCV, Price, Volume};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};
use serde_json::Value;

/// Volume aliases probed in priority order
const VOLUME_ALIASES: [&str; 3] = ["vol", "volume", "成交量"];

/// Display-window cap for a given number of available bars.
///
/// Fixed breakpoints: >120 bars show 120, >90 show 90, >60 show 60,
/// otherwise everything.
pub fn display_window_cap(total: usize) -> usize {
    if total > 120 {
        120
    } else if total > 90 {
        90
    } else if total > 60 {
        60
    } else {
        total
    }
}

/// Normalize a raw history payload into a canonical candle series.
///
/// Accepts either an object carrying a `data` array or a bare array of
/// per-bar records. Malformed records are dropped individually; a fully
/// empty result is a valid state, not an error.
pub fn normalize_payload(payload: &Value) -> CandleSeries {
    let records: &[Value] = match payload {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(items)) => items,
            _ => {
                log_warn!(
                    LogComponent::Domain("Normalizer"),
                    "payload object has no usable 'data' array, rendering no-data state"
                );
                return CandleSeries::new();
            }
        },
        _ => {
            log_warn!(
                LogComponent::Domain("Normalizer"),
                "unparseable top-level payload, rendering no-data state"
            );
            return CandleSeries::new();
        }
    };

    if records.is_empty() {
        return CandleSeries::new();
    }

    // Most recent `cap` records; upstream delivers history oldest-first
    let cap = display_window_cap(records.len());
    let windowed = &records[records.len() - cap..];

    let mut candles = Vec::with_capacity(windowed.len());
    let mut dropped = 0usize;
    for record in windowed {
        match parse_record(record) {
            Some(candle) => candles.push(candle),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log_warn!(
            LogComponent::Domain("Normalizer"),
            "dropped {} malformed record(s) of {}",
            dropped,
            windowed.len()
        );
    }

    log_debug!(
        LogComponent::Domain("Normalizer"),
        "normalized {} candles (window cap {})",
        candles.len(),
        cap
    );

    CandleSeries::from_candles(candles)
}

/// Probe the new scheme first, then fall back to the legacy one
fn parse_record(record: &Value) -> Option<Candle> {
    let obj = record.as_object()?;

    let (date_field, open_field, close_field, high_field, low_field) =
        if obj.contains_key("trade_date") {
            ("trade_date", "open", "close", "high", "low")
        } else {
            ("日期", "开盘", "收盘", "最高", "最低")
        };

    let date = string_field(obj, date_field)?;
    let open = numeric_field(obj, open_field)?;
    let close = numeric_field(obj, close_field)?;
    let high = numeric_field(obj, high_field)?;
    let low = numeric_field(obj, low_field)?;

    let volume = VOLUME_ALIASES
        .iter()
        .find_map(|alias| numeric_field(obj, alias))
        .unwrap_or(0.0);

    Some(Candle::new(
        date,
        OHLCV::new(
            Price::from(open),
            Price::from(high),
            Price::from(low),
            Price::from(close),
            Volume::from(volume),
        ),
    ))
}

/// Tolerant numeric lookup: accepts numbers and numeric strings
fn numeric_field(obj: &serde_json::Map<String, Value>, key: &str) -> Option<f64> {
    match obj.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Date lookup: accepts strings and integer date tokens like 20240103
fn string_field(obj: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => n.as_i64().map(|v| v.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_scheme_records_parse() {
        let payload = json!({
            "data": [
                {"trade_date": "20240102", "open": 10.0, "close": "10.5", "high": 11, "low": 9.8, "vol": 12345},
                {"trade_date": "20240101", "open": 9.5, "close": 10.0, "high": 10.2, "low": 9.4, "volume": "999"},
            ]
        });
        let series = normalize_payload(&payload);
        assert_eq!(series.count(), 2);
        assert_eq!(series.get(0).unwrap().date, "20240101");
        assert_eq!(series.get(0).unwrap().ohlcv.volume.value(), 999.0);
        assert_eq!(series.get(1).unwrap().ohlcv.close.value(), 10.5);
    }

    #[test]
    fn old_scheme_records_parse() {
        let payload = json!([
            {"日期": "20240101", "开盘": "9.50", "收盘": "10.00", "最高": "10.20", "最低": "9.40", "成交量": 777}
        ]);
        let series = normalize_payload(&payload);
        assert_eq!(series.count(), 1);
        assert_eq!(series.get(0).unwrap().ohlcv.open.value(), 9.5);
        assert_eq!(series.get(0).unwrap().ohlcv.volume.value(), 777.0);
    }

    #[test]
    fn missing_required_field_drops_record_only() {
        let payload = json!([
            {"trade_date": "20240101", "open": 1.0, "close": 2.0, "high": 2.5, "low": 0.5},
            {"trade_date": "20240102", "open": 1.0, "close": 2.0, "high": null, "low": 0.5},
        ]);
        let series = normalize_payload(&payload);
        assert_eq!(series.count(), 1);
        // volume defaults to zero when every alias is absent
        assert_eq!(series.get(0).unwrap().ohlcv.volume.value(), 0.0);
    }

    #[test]
    fn unparseable_payload_degrades_to_empty() {
        assert!(normalize_payload(&json!("garbage")).is_empty());
        assert!(normalize_payload(&json!({"other": 1})).is_empty());
        assert!(normalize_payload(&json!([])).is_empty());
    }

    #[test]
    fn window_cap_breakpoints() {
        assert_eq!(display_window_cap(200), 120);
        assert_eq!(display_window_cap(121), 120);
        assert_eq!(display_window_cap(120), 90);
        assert_eq!(display_window_cap(91), 90);
        assert_eq!(display_window_cap(90), 60);
        assert_eq!(display_window_cap(61), 60);
        assert_eq!(display_window_cap(60), 60);
        assert_eq!(display_window_cap(10), 10);
    }
}

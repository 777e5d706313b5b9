use crate::domain::market_data::{IndicatorKind, Price, TradeAction};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Value Object - caller-owned indicator configuration.
///
/// The engine reads it, never mutates it. Unknown parameters are ignored,
/// missing ones fall back to the documented defaults of each family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSpec {
    pub name: String,
    pub kind: IndicatorKind,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub params: HashMap<String, f64>,
}

fn default_enabled() -> bool {
    true
}

impl IndicatorSpec {
    pub fn new(kind: IndicatorKind) -> Self {
        Self { name: kind.to_string(), kind, enabled: true, params: HashMap::new() }
    }

    pub fn with_param(mut self, key: &str, value: f64) -> Self {
        self.params.insert(key.to_string(), value);
        self
    }

    pub fn param(&self, key: &str, default: f64) -> f64 {
        self.params.get(key).copied().unwrap_or(default)
    }

    /// Integer parameter lookup; non-positive values fall back to the default
    pub fn period_param(&self, key: &str, default: usize) -> usize {
        let value = self.param(key, default as f64);
        if value >= 1.0 { value as usize } else { default }
    }
}

/// Value Object - one trade execution to annotate on the main pane.
///
/// Matched to a candle by exact date equality; unmatched markers are
/// silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeMarker {
    pub date: String,
    pub price: Price,
    pub action: TradeAction,
}

impl TradeMarker {
    pub fn new(date: &str, price: f64, action: TradeAction) -> Self {
        Self { date: date.to_string(), price: Price::from(price), action }
    }
}

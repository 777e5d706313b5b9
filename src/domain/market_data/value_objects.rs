use derive_more::{Constructor, Deref, DerefMut, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - price level
#[derive(
    Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize,
)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - traded volume
#[derive(
    Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize,
)]
pub struct Volume(f64);

impl Volume {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - OHLCV data for one bar
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct OHLCV {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Volume,
}

impl OHLCV {
    /// Basic OHLC ordering check. Renderers assume this holds but never enforce it.
    pub fn is_valid(&self) -> bool {
        self.high >= self.open
            && self.high >= self.close
            && self.high >= self.low
            && self.low <= self.open
            && self.low <= self.close
            && self.volume.value() >= 0.0
    }
}

/// Value Object - indicator family selectable from configuration strings
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum IndicatorKind {
    #[strum(serialize = "MA")]
    #[serde(rename = "MA")]
    Ma,

    #[strum(serialize = "EMA")]
    #[serde(rename = "EMA")]
    Ema,

    #[strum(serialize = "BOLL")]
    #[serde(rename = "BOLL")]
    Boll,

    #[strum(serialize = "MACD")]
    #[serde(rename = "MACD")]
    Macd,

    #[strum(serialize = "RSI")]
    #[serde(rename = "RSI")]
    Rsi,

    #[strum(serialize = "KDJ")]
    #[serde(rename = "KDJ")]
    Kdj,
}

impl IndicatorKind {
    /// Whether the family is drawn on the main price pane (true) or in the
    /// oscillator sub-pane (false).
    pub fn is_overlay(&self) -> bool {
        matches!(self, Self::Ma | Self::Ema | Self::Boll)
    }
}

/// Value Object - side of a trade execution
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    StrumDisplay,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum TradeAction {
    #[strum(serialize = "buy")]
    #[serde(rename = "buy")]
    Buy,

    #[strum(serialize = "sell")]
    #[serde(rename = "sell")]
    Sell,
}

impl TradeAction {
    /// One-character marker label drawn next to the triangle
    pub fn marker_label(&self) -> char {
        match self {
            Self::Buy => 'B',
            Self::Sell => 'S',
        }
    }
}

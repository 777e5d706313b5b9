//! Indicator Calculator - pure, stateless functions over price series.
//!
//! Every function is total over `n = 0` and `period > n`: undefined
//! positions carry `f64::NAN`, and every drawing routine skips them.
//!
//! Documented conventions:
//! - EMA is seeded with the first close (`EMA[0] = C[0]`), `alpha = 2/(p+1)`.
//! - BOLL uses the population standard deviation of the trailing window.
//! - MACD histogram is `2 * (DIF - DEA)`, matching the sub-pane bar scale.
//! - RSI uses Wilder smoothing; flat windows resolve to 50, loss-free
//!   windows to 100.
//! - KDJ smooths RSV with factor `k` and K with factor `d`, both seeded at
//!   50; a degenerate high/low window yields RSV 50.

/// Bollinger band triple aligned by index
#[derive(Debug, Clone, Default)]
pub struct BollSeries {
    pub middle: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

/// MACD triple aligned by index
#[derive(Debug, Clone, Default)]
pub struct MacdSeries {
    pub dif: Vec<f64>,
    pub dea: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// KDJ triple aligned by index
#[derive(Debug, Clone, Default)]
pub struct KdjSeries {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
    pub j: Vec<f64>,
}

/// Simple moving average. NaN for `i < period - 1`.
pub fn ma(closes: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; closes.len()];
    if period == 0 {
        return out;
    }

    let mut rolling_sum = 0.0;
    for (i, close) in closes.iter().enumerate() {
        rolling_sum += close;
        if i >= period {
            rolling_sum -= closes[i - period];
        }
        if i + 1 >= period {
            out[i] = rolling_sum / period as f64;
        }
    }
    out
}

/// Exponential moving average seeded with the first close, defined at
/// every index.
pub fn ema(closes: &[f64], period: usize) -> Vec<f64> {
    if period == 0 {
        return vec![f64::NAN; closes.len()];
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(closes.len());
    let mut last: Option<f64> = None;
    for close in closes {
        let value = match last {
            Some(prev) => alpha * close + (1.0 - alpha) * prev,
            None => *close,
        };
        last = Some(value);
        out.push(value);
    }
    out
}

/// Bollinger bands: middle = MA(period), upper/lower = middle +- multiplier
/// times the population standard deviation of the trailing window.
pub fn boll(closes: &[f64], period: usize, multiplier: f64) -> BollSeries {
    let middle = ma(closes, period);
    let mut upper = vec![f64::NAN; closes.len()];
    let mut lower = vec![f64::NAN; closes.len()];

    if period > 0 {
        for i in 0..closes.len() {
            if middle[i].is_nan() {
                continue;
            }
            let window = &closes[i + 1 - period..=i];
            let mean = middle[i];
            let variance =
                window.iter().map(|c| (c - mean) * (c - mean)).sum::<f64>() / period as f64;
            let deviation = multiplier * variance.sqrt();
            upper[i] = mean + deviation;
            lower[i] = mean - deviation;
        }
    }

    BollSeries { middle, upper, lower }
}

/// MACD: DIF = EMA(fast) - EMA(slow), DEA = EMA(signal) over DIF,
/// histogram = 2 * (DIF - DEA).
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries {
    let ema_fast = ema(closes, fast);
    let ema_slow = ema(closes, slow);

    let dif: Vec<f64> =
        ema_fast.iter().zip(&ema_slow).map(|(f, s)| f - s).collect();
    let dea = ema(&dif, signal);
    let histogram: Vec<f64> = dif.iter().zip(&dea).map(|(d, e)| 2.0 * (d - e)).collect();

    MacdSeries { dif, dea, histogram }
}

/// RSI with Wilder smoothing. NaN for `i < period` (a full window of
/// bar-to-bar deltas is required).
pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; closes.len()];
    if period == 0 || closes.len() <= period {
        return out;
    }

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let delta = closes[i] - closes[i - 1];
        if delta > 0.0 {
            avg_gain += delta;
        } else {
            avg_loss += -delta;
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;
    out[period] = rsi_value(avg_gain, avg_loss);

    for i in period + 1..closes.len() {
        let delta = closes[i] - closes[i - 1];
        let (gain, loss) = if delta > 0.0 { (delta, 0.0) } else { (0.0, -delta) };
        avg_gain = (avg_gain * (period as f64 - 1.0) + gain) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + loss) / period as f64;
        out[i] = rsi_value(avg_gain, avg_loss);
    }
    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        // Flat window reads as neutral, loss-free window as fully overbought
        if avg_gain == 0.0 { 50.0 } else { 100.0 }
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}

/// KDJ stochastic oscillator. NaN for `i < n - 1`.
///
/// RSV = 100 * (C - Ln) / (Hn - Ln) over the trailing `n` bars, K and D are
/// SMA-style smoothings seeded at 50, J = 3K - 2D (and may leave [0, 100]).
pub fn kdj(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    n: usize,
    k_smooth: usize,
    d_smooth: usize,
) -> KdjSeries {
    let len = closes.len().min(highs.len()).min(lows.len());
    let mut series = KdjSeries {
        k: vec![f64::NAN; len],
        d: vec![f64::NAN; len],
        j: vec![f64::NAN; len],
    };
    if n == 0 || k_smooth == 0 || d_smooth == 0 || len < n {
        return series;
    }

    let mut prev_k = 50.0;
    let mut prev_d = 50.0;
    for i in n - 1..len {
        let window_high = highs[i + 1 - n..=i].iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let window_low = lows[i + 1 - n..=i].iter().fold(f64::INFINITY, |a, &b| a.min(b));

        let rsv = if window_high == window_low {
            50.0
        } else {
            100.0 * (closes[i] - window_low) / (window_high - window_low)
        };

        let k = (prev_k * (k_smooth as f64 - 1.0) + rsv) / k_smooth as f64;
        let d = (prev_d * (d_smooth as f64 - 1.0) + k) / d_smooth as f64;
        series.k[i] = k;
        series.d[i] = d;
        series.j[i] = 3.0 * k - 2.0 * d;
        prev_k = k;
        prev_d = d;
    }
    series
}

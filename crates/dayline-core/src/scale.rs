// File: crates/dayline-core/src/scale.rs
// Summary: Value transforms (linear/log family) and time/value pixel scales.

use std::f64::consts::{LN_10, LN_2};
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};

use crate::error::ChartError;

/// Transform applied to every value before it is plotted.
///
/// A closed set; names are only parsed at the configuration boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log,
    Log2,
    Log10,
}

impl ScaleKind {
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            ScaleKind::Linear => x,
            ScaleKind::Log => x.ln(),
            ScaleKind::Log2 => x.ln() / LN_2,
            ScaleKind::Log10 => x.ln() / LN_10,
        }
    }
}

impl FromStr for ScaleKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(ScaleKind::Linear),
            "log" => Ok(ScaleKind::Log),
            "log2" => Ok(ScaleKind::Log2),
            "log10" => Ok(ScaleKind::Log10),
            other => Err(ChartError::UnknownScale(other.to_string())),
        }
    }
}

/// Horizontal time scale mapping a `[t0, t1]` domain onto `[left, right]` pixels.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    t0: DateTime<Utc>,
    t1: DateTime<Utc>,
    left_px: f32,
    right_px: f32,
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f32, f32)) -> Self {
        Self { t0: domain.0, t1: domain.1, left_px: range.0, right_px: range.1 }
    }

    fn span_ms(&self) -> f64 {
        ((self.t1 - self.t0).num_milliseconds() as f64).max(1.0)
    }

    #[inline]
    pub fn to_px(&self, t: DateTime<Utc>) -> f32 {
        let off = (t - self.t0).num_milliseconds() as f64;
        self.left_px + (off / self.span_ms()) as f32 * (self.right_px - self.left_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> DateTime<Utc> {
        let frac = ((px - self.left_px) / (self.right_px - self.left_px)) as f64;
        self.t0 + Duration::milliseconds((frac * self.span_ms()).round() as i64)
    }
}

/// Vertical value scale mapping a `[vmin, vmax]` domain to `[top, bottom]`
/// pixels, inverted so larger values sit higher on screen.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    vmin: f64,
    vmax: f64,
    top_px: f32,
    bottom_px: f32,
}

impl ValueScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { vmin: domain.0, vmax: domain.1, top_px: range.0, bottom_px: range.1 }
    }

    fn span(&self) -> f64 {
        let s = self.vmax - self.vmin;
        if s.abs() < 1e-12 { 1e-12 } else { s }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let frac = ((v - self.vmin) / self.span()) as f32;
        self.bottom_px - frac * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let frac = ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64;
        self.vmin + frac * self.span()
    }
}

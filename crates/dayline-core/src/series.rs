// File: crates/dayline-core/src/series.rs
// Summary: Named time-series model and axis domain computation.

use chrono::{DateTime, Utc};

/// One named sequence of (time, value) points drawn as a single line.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(DateTime<Utc>, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<(DateTime<Utc>, f64)>) -> Self {
        Self { name: name.into(), points }
    }

    /// A series enters the rendered set only with more than one point.
    pub fn is_drawable(&self) -> bool {
        self.points.len() > 1
    }

    pub fn last_point(&self) -> Option<(DateTime<Utc>, f64)> {
        self.points.last().copied()
    }
}

/// Axis input ranges: x spans every parsed row's timestamp, y runs from a
/// hard-wired zero floor to the maximum transformed value over all kept
/// series (regardless of data sign).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domains {
    pub x: (DateTime<Utc>, DateTime<Utc>),
    pub y: (f64, f64),
}

impl Domains {
    /// Compute domains, or `None` when there is nothing to draw.
    pub fn compute(timestamps: &[DateTime<Utc>], series: &[Series]) -> Option<Self> {
        let mut x_min = *timestamps.first()?;
        let mut x_max = x_min;
        for &t in &timestamps[1..] {
            if t < x_min { x_min = t; }
            if t > x_max { x_max = t; }
        }

        let mut y_max = f64::NEG_INFINITY;
        for s in series {
            for &(_, v) in &s.points {
                y_max = y_max.max(v);
            }
        }
        if !y_max.is_finite() {
            return None;
        }

        Some(Self { x: (x_min, x_max), y: (0.0, y_max) })
    }
}

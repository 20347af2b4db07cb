//! Circular pointer-gesture matcher.
//!
//! The last few pointer samples are treated as circular when they all sit at
//! roughly the same distance from their centroid (low variance) and that
//! distance is large enough to rule out jitter around a single point.

use std::collections::VecDeque;

use super::effect::Effect;

/// Samples considered per evaluation.
pub const GESTURE_SAMPLES: usize = 16;
/// Maximum variance of centroid distances, in px².
pub const MAX_DISTANCE_VARIANCE: f64 = 100.0;
/// Minimum mean distance from the centroid, in px.
pub const MIN_RADIUS: f64 = 30.0;

/// A pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Mean and variance of the sample distances from their centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circularity {
    pub mean_radius: f64,
    pub variance: f64,
}

/// Compute [`Circularity`] for a set of samples; `None` when empty.
pub fn circularity<'a, I>(samples: I) -> Option<Circularity>
where
    I: IntoIterator<Item = &'a Point>,
    I::IntoIter: Clone,
{
    let samples = samples.into_iter();
    let count = samples.clone().count();
    if count == 0 {
        return None;
    }
    let n = count as f64;

    let (sum_x, sum_y) = samples
        .clone()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let centroid = Point::new(sum_x / n, sum_y / n);

    let distances: Vec<f64> = samples.map(|p| p.distance(centroid)).collect();
    let mean_radius = distances.iter().sum::<f64>() / n;
    let variance = distances
        .iter()
        .map(|d| (d - mean_radius).powi(2))
        .sum::<f64>()
        / n;

    Some(Circularity {
        mean_radius,
        variance,
    })
}

#[derive(Debug, Clone)]
pub struct CircleGestureMatcher {
    samples: VecDeque<Point>,
    capacity: usize,
    max_variance: f64,
    min_radius: f64,
}

impl Default for CircleGestureMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CircleGestureMatcher {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(GESTURE_SAMPLES),
            capacity: GESTURE_SAMPLES,
            max_variance: MAX_DISTANCE_VARIANCE,
            min_radius: MIN_RADIUS,
        }
    }

    /// Record a pointer sample. Non-finite coordinates are dropped.
    pub fn push(&mut self, point: Point) -> Option<Effect> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }

        self.samples.push_back(point);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
        if self.samples.len() < self.capacity {
            return None;
        }

        let shape = circularity(&self.samples)?;
        if shape.variance < self.max_variance && shape.mean_radius > self.min_radius {
            self.samples.clear();
            return Some(Effect::Sparkles { count: 20 });
        }
        None
    }

    /// Samples currently buffered.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

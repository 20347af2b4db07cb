//! Viewport visibility tracking.
//!
//! The `IntersectionWatcher` keeps one observation per element and turns
//! reported intersection ratios into a visible/hidden flag. The actual
//! observation primitive sits behind [`ViewportObserver`]; when it is not
//! available the watcher fails open and reports every element as visible so
//! content is never held back.

use std::collections::HashMap;

use tracing::{debug, warn};

/// Default fraction of the element that must be on screen.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// The viewport observation primitive is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("viewport observation is unavailable")]
pub struct ObserverUnavailable;

/// Viewport observation primitive.
///
/// After a successful `observe`, the host reports ratio changes for the
/// element through [`IntersectionWatcher::report`].
pub trait ViewportObserver {
    /// Start observing `element` at the given ratio thresholds.
    fn observe(&mut self, element: &str, thresholds: &[f64]) -> Result<(), ObserverUnavailable>;

    /// Stop observing `element`.
    fn unobserve(&mut self, element: &str);
}

/// Observer for hosts that compute ratios themselves (terminal preview, tests).
#[derive(Debug, Default, Clone)]
pub struct ManualViewport {
    observed: Vec<String>,
}

impl ManualViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements currently attached, in attach order.
    pub fn observed(&self) -> &[String] {
        &self.observed
    }
}

impl ViewportObserver for ManualViewport {
    fn observe(&mut self, element: &str, _thresholds: &[f64]) -> Result<(), ObserverUnavailable> {
        self.observed.push(element.to_string());
        Ok(())
    }

    fn unobserve(&mut self, element: &str) {
        self.observed.retain(|e| e != element);
    }
}

/// Observer standing in for a host without viewport observation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoViewport;

impl ViewportObserver for NoViewport {
    fn observe(&mut self, _element: &str, _thresholds: &[f64]) -> Result<(), ObserverUnavailable> {
        Err(ObserverUnavailable)
    }

    fn unobserve(&mut self, _element: &str) {}
}

#[derive(Debug, Clone)]
struct Observation {
    threshold: f64,
    ratio: f64,
    visible: bool,
    /// Attached without a working observer; pinned visible
    fail_open: bool,
}

/// Tracks visibility of observed elements.
#[derive(Debug)]
pub struct IntersectionWatcher<O: ViewportObserver> {
    observer: O,
    observations: HashMap<String, Observation>,
}

impl<O: ViewportObserver> IntersectionWatcher<O> {
    pub fn new(observer: O) -> Self {
        Self {
            observer,
            observations: HashMap::new(),
        }
    }

    /// Attach an observation to `element`.
    ///
    /// Returns false when the element is already observed; the existing
    /// registration (and its threshold) is kept.
    pub fn observe(&mut self, element: &str, threshold: f64) -> bool {
        if self.observations.contains_key(element) {
            return false;
        }

        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_THRESHOLD
        };

        let fail_open = match self.observer.observe(element, &[threshold]) {
            Ok(()) => false,
            Err(e) => {
                warn!(element, "{e}, treating element as visible");
                true
            }
        };

        self.observations.insert(
            element.to_string(),
            Observation {
                threshold,
                ratio: 0.0,
                visible: fail_open,
                fail_open,
            },
        );
        true
    }

    /// Feed a new intersection ratio for `element`.
    ///
    /// Returns `Some(visible)` when the element crossed its threshold in
    /// either direction, `None` otherwise (including for unknown elements).
    pub fn report(&mut self, element: &str, ratio: f64) -> Option<bool> {
        let observation = self.observations.get_mut(element)?;
        if observation.fail_open || !ratio.is_finite() {
            return None;
        }

        observation.ratio = ratio.clamp(0.0, 1.0);
        let visible = observation.ratio > 0.0 && observation.ratio >= observation.threshold;
        if visible == observation.visible {
            return None;
        }

        observation.visible = visible;
        debug!(element, ratio, visible, "visibility changed");
        Some(visible)
    }

    /// Whether `element` is currently visible. Unobserved elements are not.
    pub fn is_visible(&self, element: &str) -> bool {
        self.observations
            .get(element)
            .map(|o| o.visible)
            .unwrap_or(false)
    }

    /// Last reported ratio for `element`.
    pub fn ratio(&self, element: &str) -> Option<f64> {
        self.observations.get(element).map(|o| o.ratio)
    }

    /// Detach the observation for `element`.
    pub fn unobserve(&mut self, element: &str) -> bool {
        match self.observations.remove(element) {
            Some(observation) => {
                if !observation.fail_open {
                    self.observer.unobserve(element);
                }
                true
            }
            None => false,
        }
    }

    /// Number of attached observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }
}

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

/// Fraction of `element` that lies inside `viewport`, in `0.0..=1.0`.
///
/// Zero-area elements report 0.
pub fn intersection_ratio(element: Rect, viewport: Rect) -> f64 {
    let area = element.area();
    if area <= 0.0 {
        return 0.0;
    }

    let left = element.x.max(viewport.x);
    let right = (element.x + element.width).min(viewport.x + viewport.width);
    let top = element.y.max(viewport.y);
    let bottom = (element.y + element.height).min(viewport.y + viewport.height);

    let overlap = (right - left).max(0.0) * (bottom - top).max(0.0);
    (overlap / area).clamp(0.0, 1.0)
}

/// Picks the section with the largest visible ratio as the active one.
///
/// Used for navigation highlighting; the previous choice sticks while no
/// section intersects.
#[derive(Debug, Clone, Default)]
pub struct ActiveSectionTracker {
    active: Option<String>,
}

impl ActiveSectionTracker {
    pub fn new(initial: &str) -> Self {
        Self {
            active: Some(initial.to_string()),
        }
    }

    /// Update from a batch of `(section, ratio)` entries.
    pub fn update<'a, I>(&mut self, entries: I) -> Option<&str>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut best: Option<(&str, f64)> = None;
        for (section, ratio) in entries {
            if ratio > 0.0 && best.map_or(true, |(_, max)| ratio > max) {
                best = Some((section, ratio));
            }
        }

        if let Some((section, _)) = best {
            if self.active.as_deref() != Some(section) {
                self.active = Some(section.to_string());
            }
        }
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

//! One-shot reveal of cards as they scroll into view.
//!
//! Elements are observed until they first intersect the (margin-adjusted)
//! viewport. At that point they are hidden and a reveal is scheduled after a
//! fixed delay; the element is no longer observed, so the reveal fires at
//! most once. Time is passed in by the caller, which keeps the state
//! machine deterministic.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use tracing::debug;

/// Tuning for [`ScrollReveal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Minimum visible fraction of the element.
    pub threshold: f32,
    /// Pixels cut from the bottom of the viewport before intersecting.
    pub bottom_margin_px: f32,
    /// Wait between intersecting and starting the transition.
    pub delay: Duration,
    /// Length of the transition once started.
    pub duration: Duration,
    /// Vertical offset the element slides up from.
    pub offset_px: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 100.0,
            delay: Duration::from_millis(100),
            duration: Duration::from_millis(500),
            offset_px: 20.0,
        }
    }
}

/// Vertical extent in page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            bottom: top + height.max(0.0),
        }
    }

    pub fn height(&self) -> f32 {
        (self.bottom - self.top).max(0.0)
    }
}

/// Fraction of `element` inside `viewport` once the bottom margin is removed.
///
/// A zero-height element counts as fully visible when it sits inside the
/// adjusted viewport.
pub fn intersection_ratio(element: Bounds, viewport: Bounds, bottom_margin_px: f32) -> f32 {
    let root_bottom = viewport.bottom - bottom_margin_px;
    if root_bottom <= viewport.top {
        return 0.0;
    }
    let height = element.height();
    if height == 0.0 {
        return if element.top >= viewport.top && element.top <= root_bottom {
            1.0
        } else {
            0.0
        };
    }
    let overlap = element.bottom.min(root_bottom) - element.top.max(viewport.top);
    (overlap.max(0.0) / height).min(1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Waiting to intersect; drawn normally.
    Observed,
    /// Hidden, transition starts at `at`.
    Scheduled { at: Instant },
    /// Transition started at `started`. Terminal.
    Revealed { started: Instant },
}

/// Style the element should carry in its current phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub translate_y_px: f32,
    pub transition: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct ScrollReveal<K> {
    config: RevealConfig,
    phases: BTreeMap<K, RevealPhase>,
}

impl<K: Ord + Clone + std::fmt::Debug> ScrollReveal<K> {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            phases: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Start observing `key`. Keys that already have a phase keep it.
    pub fn observe(&mut self, key: K) {
        self.phases.entry(key).or_insert(RevealPhase::Observed);
    }

    /// Stop observing `key` if it has not intersected yet.
    pub fn unobserve(&mut self, key: &K) {
        if self.phases.get(key) == Some(&RevealPhase::Observed) {
            self.phases.remove(key);
        }
    }

    pub fn is_observing(&self, key: &K) -> bool {
        self.phases.get(key) == Some(&RevealPhase::Observed)
    }

    pub fn phase(&self, key: &K) -> Option<RevealPhase> {
        self.phases.get(key).copied()
    }

    /// Style for `key`; `None` means the element is left untouched.
    pub fn style(&self, key: &K) -> Option<RevealStyle> {
        match self.phases.get(key)? {
            RevealPhase::Observed => None,
            RevealPhase::Scheduled { .. } => Some(RevealStyle {
                opacity: 0.0,
                translate_y_px: self.config.offset_px,
                transition: None,
            }),
            RevealPhase::Revealed { .. } => Some(RevealStyle {
                opacity: 1.0,
                translate_y_px: 0.0,
                transition: Some(self.config.duration),
            }),
        }
    }

    /// Process a visibility snapshot. Returns how many reveals were scheduled.
    ///
    /// `layout` may mention keys that are not observed; they are ignored.
    pub fn on_viewport(&mut self, viewport: Bounds, layout: &[(K, Bounds)], now: Instant) -> usize {
        let mut scheduled = 0;
        for (key, bounds) in layout {
            let Some(phase) = self.phases.get_mut(key) else {
                continue;
            };
            if *phase != RevealPhase::Observed {
                continue;
            }
            let ratio = intersection_ratio(*bounds, viewport, self.config.bottom_margin_px);
            if ratio > 0.0 && ratio >= self.config.threshold {
                *phase = RevealPhase::Scheduled {
                    at: now + self.config.delay,
                };
                scheduled += 1;
                debug!(?key, ratio, "scheduled reveal");
            }
        }
        scheduled
    }

    /// Start every transition whose delay has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Vec<K> {
        let mut started = Vec::new();
        for (key, phase) in &mut self.phases {
            if let RevealPhase::Scheduled { at } = *phase
                && at <= now
            {
                *phase = RevealPhase::Revealed { started: at };
                started.push(key.clone());
            }
        }
        started
    }

    /// Keys still waiting for their delay.
    pub fn pending(&self) -> usize {
        self.phases
            .values()
            .filter(|phase| matches!(phase, RevealPhase::Scheduled { .. }))
            .count()
    }
}

impl<K: Ord + Clone + std::fmt::Debug> Default for ScrollReveal<K> {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Identifier of a page section, matching the `id` attribute of its region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// In-page anchor for the section, e.g. `#about`.
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SectionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("section registry is empty")]
    Empty,
    #[error("section id is blank")]
    Blank,
    #[error("duplicate section id: {0}")]
    Duplicate(SectionId),
}

/// Fixed, ordered list of the sections the page is made of.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<SectionId>,
}

impl SectionRegistry {
    pub fn new<I, S>(sections: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<SectionId>,
    {
        let mut out: Vec<SectionId> = Vec::new();
        for id in sections.into_iter().map(Into::into) {
            if id.as_str().trim().is_empty() {
                return Err(RegistryError::Blank);
            }
            if out.contains(&id) {
                return Err(RegistryError::Duplicate(id));
            }
            out.push(id);
        }
        if out.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(Self { sections: out })
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.as_str() == id)
    }

    pub fn first(&self) -> &SectionId {
        // non-empty by construction
        &self.sections[0]
    }

    /// The section a tracker starts on: `preferred` when it is registered,
    /// otherwise the first section.
    pub fn initial(&self, preferred: Option<&SectionId>) -> &SectionId {
        preferred
            .and_then(|p| self.sections.iter().find(|s| *s == p))
            .unwrap_or_else(|| self.first())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Fraction of a region that must be visible for it to count as in view.
    pub threshold: f64,
    pub default_section: Option<SectionId>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            default_section: None,
        }
    }
}

/// One observation of a section region, as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry {
    pub section: SectionId,
    pub is_intersecting: bool,
    /// Visible fraction of the region, 0.0 to 1.0.
    pub ratio: f64,
    /// Top edge of the region relative to the viewport top, in px.
    pub top: f64,
}

impl VisibilityEntry {
    pub fn new(section: impl Into<SectionId>, ratio: f64, top: f64) -> Self {
        Self {
            section: section.into(),
            is_intersecting: ratio > 0.0,
            ratio,
            top,
        }
    }

    fn qualifies(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerState {
    Uninitialized,
    Observing(SectionId),
    /// Holds the value frozen at teardown, if the tracker was ever started.
    TornDown(Option<SectionId>),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("tracker is already observing")]
    AlreadyObserving,
    #[error("tracker was torn down")]
    TornDown,
}

/// Keeps the single "active section" value for navigation highlighting.
///
/// A tracker is used once: `init` starts observation, `apply` feeds it
/// batches of visibility entries and `teardown` stops it for good. Starting
/// over means building a new tracker.
#[derive(Debug)]
pub struct ActiveSectionTracker {
    config: TrackerConfig,
    state: TrackerState,
    registry: Option<SectionRegistry>,
    observed: Vec<SectionId>,
}

impl ActiveSectionTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            state: TrackerState::Uninitialized,
            registry: None,
            observed: Vec::new(),
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// The active section. Stays at its last value after teardown.
    pub fn active(&self) -> Option<&SectionId> {
        match &self.state {
            TrackerState::Observing(id) => Some(id),
            TrackerState::TornDown(last) => last.as_ref(),
            TrackerState::Uninitialized => None,
        }
    }

    /// Sections that have a region and are being watched.
    pub fn observed(&self) -> &[SectionId] {
        &self.observed
    }

    /// Starts observing. `has_region` reports whether the host found a region
    /// for a section; sections without one are skipped.
    pub fn init<F>(
        &mut self,
        registry: SectionRegistry,
        has_region: F,
    ) -> Result<SectionId, TrackerError>
    where
        F: Fn(&SectionId) -> bool,
    {
        match self.state {
            TrackerState::Uninitialized => {}
            TrackerState::Observing(_) => return Err(TrackerError::AlreadyObserving),
            TrackerState::TornDown(_) => return Err(TrackerError::TornDown),
        }

        self.observed = registry
            .iter()
            .filter(|id| {
                let found = has_region(*id);
                if !found {
                    log::debug!("no region for section {id}, skipping");
                }
                found
            })
            .cloned()
            .collect();

        let initial = registry
            .initial(self.config.default_section.as_ref())
            .clone();
        log::debug!(
            "observing {} of {} sections, starting on {initial}",
            self.observed.len(),
            registry.len()
        );
        self.registry = Some(registry);
        self.state = TrackerState::Observing(initial.clone());
        Ok(initial)
    }

    /// Applies one batch of visibility entries. Returns the new active section
    /// when it changed.
    ///
    /// When several sections qualify in one batch the one whose top edge is
    /// closest to the viewport top wins, then the earlier registered one, so
    /// the outcome does not depend on delivery order.
    pub fn apply(&mut self, batch: &[VisibilityEntry]) -> Option<&SectionId> {
        let TrackerState::Observing(current) = &self.state else {
            return None;
        };
        let registry = self.registry.as_ref()?;

        let winner = batch
            .iter()
            .filter(|e| e.qualifies(self.config.threshold))
            .filter_map(|e| {
                if !self.observed.contains(&e.section) {
                    return None;
                }
                registry.position(e.section.as_str()).map(|pos| (e, pos))
            })
            .min_by(|(a, a_pos), (b, b_pos)| {
                a.top
                    .abs()
                    .total_cmp(&b.top.abs())
                    .then(a_pos.cmp(b_pos))
            })
            .map(|(e, _)| e.section.clone())?;

        if &winner == current {
            return None;
        }
        log::debug!("active section {current} -> {winner}");
        self.state = TrackerState::Observing(winner);
        self.active()
    }

    pub fn teardown(&mut self) {
        let last = match std::mem::replace(&mut self.state, TrackerState::Uninitialized) {
            TrackerState::Observing(id) => {
                log::debug!("tracker torn down on {id}");
                Some(id)
            }
            TrackerState::TornDown(last) => last,
            TrackerState::Uninitialized => None,
        };
        self.state = TrackerState::TornDown(last);
        self.observed.clear();
        self.registry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_registry() -> SectionRegistry {
        SectionRegistry::new(["home", "about", "projects", "contact"])
            .expect("registry should build")
    }

    fn observing(registry: SectionRegistry) -> ActiveSectionTracker {
        let mut tracker = ActiveSectionTracker::new(TrackerConfig::default());
        tracker
            .init(registry, |_| true)
            .expect("tracker should initialize");
        tracker
    }

    fn active(tracker: &ActiveSectionTracker) -> &str {
        tracker.active().expect("tracker should have an active section").as_str()
    }

    #[test]
    fn test_registry_rejects_bad_input() {
        let empty: [&str; 0] = [];
        assert_eq!(SectionRegistry::new(empty), Err(RegistryError::Empty));
        assert_eq!(
            SectionRegistry::new(["home", "about", "home"]),
            Err(RegistryError::Duplicate(SectionId::from("home")))
        );
        assert_eq!(
            SectionRegistry::new(["home", "  "]),
            Err(RegistryError::Blank)
        );
    }

    #[test]
    fn test_registry_initial_section() {
        let registry = page_registry();
        assert_eq!(registry.initial(None).as_str(), "home");
        assert_eq!(
            registry.initial(Some(&SectionId::from("projects"))).as_str(),
            "projects"
        );
        // unknown preference falls back to the first section
        assert_eq!(
            registry.initial(Some(&SectionId::from("blog"))).as_str(),
            "home"
        );
    }

    #[test]
    fn test_starts_on_first_section() {
        let tracker = ActiveSectionTracker::new(TrackerConfig::default());
        assert_eq!(tracker.state(), &TrackerState::Uninitialized);
        assert!(tracker.active().is_none());

        let tracker = observing(SectionRegistry::new(["a", "b", "c", "d"]).unwrap());
        assert_eq!(active(&tracker), "a");
    }

    #[test]
    fn test_half_visible_section_becomes_active() {
        let mut tracker = observing(SectionRegistry::new(["a", "b", "c", "d"]).unwrap());

        assert_eq!(
            tracker.apply(&[VisibilityEntry::new("b", 0.5, 120.0)]),
            Some(&SectionId::from("b"))
        );
        assert_eq!(active(&tracker), "b");

        // regardless of the previous value
        tracker.apply(&[VisibilityEntry::new("d", 0.8, 10.0)]);
        tracker.apply(&[VisibilityEntry::new("b", 0.6, 40.0)]);
        assert_eq!(active(&tracker), "b");
    }

    #[test]
    fn test_below_threshold_is_ignored() {
        let mut tracker = observing(page_registry());

        // crossing back under the threshold still reports intersecting
        assert!(tracker
            .apply(&[VisibilityEntry::new("about", 0.49, 300.0)])
            .is_none());
        let leaving = VisibilityEntry {
            section: SectionId::from("about"),
            is_intersecting: false,
            ratio: 0.7,
            top: 0.0,
        };
        assert!(tracker.apply(&[leaving]).is_none());
        assert_eq!(active(&tracker), "home");
    }

    #[test]
    fn test_repeated_notifications_are_idempotent() {
        let mut tracker = observing(page_registry());
        let entry = VisibilityEntry::new("projects", 0.9, 0.0);

        assert!(tracker.apply(&[entry.clone()]).is_some());
        for _ in 0..5 {
            assert!(tracker.apply(&[entry.clone()]).is_none());
            assert_eq!(active(&tracker), "projects");
        }
        assert!(tracker.apply(&[entry.clone(), entry]).is_none());
        assert_eq!(active(&tracker), "projects");
    }

    #[test]
    fn test_teardown_freezes_value() {
        let mut tracker = observing(page_registry());
        tracker.apply(&[VisibilityEntry::new("about", 1.0, 0.0)]);
        tracker.teardown();

        assert_eq!(
            tracker.state(),
            &TrackerState::TornDown(Some(SectionId::from("about")))
        );
        assert!(tracker
            .apply(&[VisibilityEntry::new("contact", 1.0, 0.0)])
            .is_none());
        assert_eq!(active(&tracker), "about");
        assert!(tracker.observed().is_empty());

        // a second teardown keeps the frozen value
        tracker.teardown();
        assert_eq!(active(&tracker), "about");
        assert_eq!(
            tracker.init(page_registry(), |_| true),
            Err(TrackerError::TornDown)
        );
    }

    #[test]
    fn test_teardown_before_init_has_no_value() {
        let mut tracker = ActiveSectionTracker::new(TrackerConfig::default());
        tracker.teardown();
        assert_eq!(tracker.state(), &TrackerState::TornDown(None));
        assert!(tracker.active().is_none());
        assert_eq!(
            tracker.init(page_registry(), |_| true),
            Err(TrackerError::TornDown)
        );
    }

    #[test]
    fn test_init_twice_is_rejected() {
        let mut tracker = observing(page_registry());
        assert_eq!(
            tracker.init(page_registry(), |_| true),
            Err(TrackerError::AlreadyObserving)
        );
        assert_eq!(active(&tracker), "home");
    }

    #[test]
    fn test_scroll_through_page() {
        let mut tracker = observing(page_registry());
        assert_eq!(active(&tracker), "home");

        // home scrolls out, about scrolls in past half
        tracker.apply(&[
            VisibilityEntry::new("home", 0.45, -420.0),
            VisibilityEntry::new("about", 0.55, 380.0),
        ]);
        assert_eq!(active(&tracker), "about");

        tracker.apply(&[VisibilityEntry::new("projects", 0.51, 300.0)]);
        assert_eq!(active(&tracker), "projects");
    }

    #[test]
    fn test_reinit_uses_new_registry_default() {
        let config = TrackerConfig {
            default_section: Some(SectionId::from("home")),
            ..Default::default()
        };
        let mut tracker = ActiveSectionTracker::new(config.clone());
        tracker.init(page_registry(), |_| true).unwrap();
        tracker.apply(&[VisibilityEntry::new("contact", 1.0, 0.0)]);
        tracker.teardown();

        let mut tracker = ActiveSectionTracker::new(config);
        let registry = SectionRegistry::new(["intro", "work", "home"]).unwrap();
        // configured default is kept when it is registered
        assert_eq!(tracker.init(registry, |_| true).unwrap().as_str(), "home");

        let mut tracker = ActiveSectionTracker::new(TrackerConfig::default());
        let registry = SectionRegistry::new(["intro", "work"]).unwrap();
        assert_eq!(tracker.init(registry, |_| true).unwrap().as_str(), "intro");
    }

    #[test]
    fn test_batch_tie_break_ignores_delivery_order() {
        let about = VisibilityEntry::new("about", 0.6, -200.0);
        let projects = VisibilityEntry::new("projects", 0.6, 150.0);

        let mut forward = observing(page_registry());
        forward.apply(&[about.clone(), projects.clone()]);
        let mut backward = observing(page_registry());
        backward.apply(&[projects, about]);

        assert_eq!(active(&forward), "projects");
        assert_eq!(active(&backward), "projects");

        // equal distance goes to the earlier section
        let mut tracker = observing(page_registry());
        tracker.apply(&[
            VisibilityEntry::new("contact", 0.5, 100.0),
            VisibilityEntry::new("about", 0.5, -100.0),
        ]);
        assert_eq!(active(&tracker), "about");
    }

    #[test]
    fn test_missing_regions_are_skipped() {
        let mut tracker = ActiveSectionTracker::new(TrackerConfig::default());
        let initial = tracker
            .init(page_registry(), |id| id.as_str() != "projects")
            .unwrap();
        assert_eq!(initial.as_str(), "home");
        assert_eq!(
            tracker.observed(),
            &[
                SectionId::from("home"),
                SectionId::from("about"),
                SectionId::from("contact")
            ]
        );

        assert!(tracker
            .apply(&[VisibilityEntry::new("projects", 1.0, 0.0)])
            .is_none());
        assert!(tracker
            .apply(&[VisibilityEntry::new("blog", 1.0, 0.0)])
            .is_none());
        assert_eq!(active(&tracker), "home");
    }

    #[test]
    fn test_custom_threshold() {
        let mut tracker = ActiveSectionTracker::new(TrackerConfig {
            threshold: 0.25,
            default_section: None,
        });
        tracker.init(page_registry(), |_| true).unwrap();
        tracker.apply(&[VisibilityEntry::new("contact", 0.3, 500.0)]);
        assert_eq!(active(&tracker), "contact");
    }
}

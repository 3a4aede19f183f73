//! The core state machine deciding which section is "active" during scrolling.
//!
//! A navigation sidebar needs a single source of truth for which section the
//! reader is currently looking at. We achieve this by tracking, per section
//! id, whether the section intersects the host's observation band, and on
//! every visibility change or throttled scroll sample selecting the visible
//! section whose top edge sits closest to a configured reference line.
//!
//! The tracker is deliberately host-agnostic: geometry is read through the
//! [`Geometry`] port and time arrives as millisecond stamps supplied by the
//! caller, so the same component drives a terminal viewport here and is
//! testable without one.

use std::collections::HashMap;

/// Opaque section identifier, unique among currently tracked sections.
///
/// Mirrors a stable element id in the rendered document; the tracker never
/// interprets its contents.
pub type SectionId = String;

/// Read-only port supplying live geometry for tracked sections.
pub trait Geometry {
    /// Current top-edge distance of the section from the viewport top, in
    /// the host's vertical units. Negative once the section has scrolled
    /// past the top. `None` when the id has no renderable element, in which
    /// case the section is silently skipped.
    fn top_offset(&self, id: &str) -> Option<f64>;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// What `configure` does when handed an empty id list.
///
/// The behaviour differs between deployments: some want a bare reconfigure
/// to leave the previous tracking state untouched (a host mid-rebuild whose
/// section list is momentarily empty), others want it to drop everything.
pub enum EmptyConfigure {
    /// Keep the previous tracked set and any armed throttle deadline.
    Preserve,
    /// Clear all tracking state, as if `dispose` had been called.
    Clear,
}

#[derive(Clone, Copy, Debug)]
/// Tuning knobs for active-section selection.
pub struct TrackerOptions {
    /// Distance from the viewport top used as the anchor for "closest wins"
    /// selection among visible sections.
    pub reference_line: f64,
    /// Trailing-edge delay applied to raw scroll activity before a geometry
    /// sample runs.
    pub throttle_ms: u64,
    /// When set, a best candidate whose distance from the reference line
    /// exceeds this threshold loses to the first visible section instead.
    pub fallback_beyond: Option<f64>,
    /// Policy applied when `configure` receives no ids.
    pub on_empty: EmptyConfigure,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            reference_line: 120.0,
            throttle_ms: 50,
            fallback_beyond: None,
            on_empty: EmptyConfigure::Preserve,
        }
    }
}

/// Decides which tracked section should be highlighted as active.
///
/// Driven entirely by its host: visibility transitions arrive through
/// [`set_visibility`](Self::set_visibility), raw scroll activity through
/// [`note_scroll`](Self::note_scroll), and throttled samples are drained by
/// [`poll`](Self::poll). Each call that triggers a recomputation returns the
/// emission for that instant: `Some(id)` is a notification (repeated ids are
/// re-emitted, the tracker does not de-duplicate), `None` means nothing was
/// emitted.
pub struct SectionTracker {
    /// Tracked ids in their configured order; selection ties break to the
    /// earliest entry.
    order: Vec<SectionId>,
    /// Visibility per tracked id. The key set always matches `order`.
    visible: HashMap<SectionId, bool>,
    /// Selection and throttling configuration.
    options: TrackerOptions,
    /// Pending trailing-edge sample time, in host milliseconds.
    deadline: Option<u64>,
}

impl SectionTracker {
    #[must_use]
    /// Creates an empty tracker with the given options.
    pub fn new(options: TrackerOptions) -> Self {
        Self {
            order: Vec::new(),
            visible: HashMap::new(),
            options,
            deadline: None,
        }
    }

    /// Replaces the tracked id list.
    ///
    /// Previous tracking state is dropped and every new id starts out not
    /// visible; the host reports actual intersections once its layout has
    /// committed. Any armed throttle deadline is cancelled so no sample from
    /// the stale configuration fires afterwards. An empty `ids` follows the
    /// configured [`EmptyConfigure`] policy.
    pub fn configure(&mut self, ids: &[SectionId], options: TrackerOptions) {
        if ids.is_empty() {
            if options.on_empty == EmptyConfigure::Clear {
                self.dispose();
            }
            self.options = options;
            return;
        }

        self.options = options;
        self.deadline = None;
        self.order = ids.to_vec();
        self.visible = ids.iter().map(|id| (id.clone(), false)).collect();
    }

    /// Consumes a visibility transition from the host's intersection source.
    ///
    /// Ids outside the current tracked set are ignored: they belong to a
    /// configuration that has since been replaced. A tracked transition
    /// updates the visible set and recomputes the active section against
    /// `geometry`; the return value is the emission for this event.
    pub fn set_visibility(
        &mut self,
        id: &str,
        is_visible: bool,
        geometry: &dyn Geometry,
    ) -> Option<SectionId> {
        let entry = self.visible.get_mut(id)?;
        *entry = is_visible;
        self.compute_active(geometry)
    }

    /// Records raw scroll activity at `now` milliseconds.
    ///
    /// Arms (or pushes back) the trailing-edge throttle deadline; the actual
    /// geometry sample runs when [`poll`](Self::poll) observes the deadline
    /// passing.
    pub fn note_scroll(&mut self, now: u64) {
        self.deadline = Some(now + self.options.throttle_ms);
    }

    /// Runs the throttled geometry sample if its deadline has passed.
    ///
    /// Returns the emission from the sample, or `None` when no sample was
    /// due or no section is visible. Safe to call at any cadence; repeated
    /// polls with an unchanged state are idempotent.
    pub fn poll(&mut self, now: u64, geometry: &dyn Geometry) -> Option<SectionId> {
        if self.deadline.is_some_and(|at| now >= at) {
            self.deadline = None;
            return self.compute_active(geometry);
        }
        None
    }

    #[must_use]
    /// Milliseconds until the armed throttle deadline, if one is pending.
    ///
    /// Hosts use this to bound their event-loop wait so trailing samples
    /// fire on time. A deadline already in the past reports zero.
    pub fn next_deadline_in(&self, now: u64) -> Option<u64> {
        self.deadline.map(|at| at.saturating_sub(now))
    }

    #[must_use]
    /// Selects the active section from the current visible set.
    ///
    /// Candidates are the visible ids scanned in configured order; the one
    /// whose top edge lies closest to the reference line wins, ties going to
    /// the earliest candidate. Ids the geometry source cannot resolve are
    /// skipped. With a fallback threshold configured, a winner further from
    /// the reference line than the threshold is replaced by the first
    /// visible candidate. No visible candidate means no emission.
    pub fn compute_active(&self, geometry: &dyn Geometry) -> Option<SectionId> {
        let mut first_visible: Option<&SectionId> = None;
        let mut best: Option<(&SectionId, f64)> = None;

        for id in &self.order {
            if !self.visible.get(id).copied().unwrap_or(false) {
                continue;
            }
            if first_visible.is_none() {
                first_visible = Some(id);
            }
            let Some(top) = geometry.top_offset(id) else {
                continue;
            };
            let distance = (top - self.options.reference_line).abs();
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((id, distance));
            }
        }

        let (id, distance) = best?;
        if self.options.fallback_beyond.is_some_and(|t| distance > t) {
            first_visible.cloned()
        } else {
            Some(id.clone())
        }
    }

    #[must_use]
    /// Whether an id belongs to the current tracked set.
    pub fn is_tracked(&self, id: &str) -> bool {
        self.visible.contains_key(id)
    }

    #[must_use]
    /// Whether a tracked id was last reported visible.
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.get(id).copied().unwrap_or(false)
    }

    #[must_use]
    /// Tracked ids in configured order.
    pub fn tracked_ids(&self) -> &[SectionId] {
        &self.order
    }

    /// Releases all observation.
    ///
    /// Clears the tracked set and cancels the pending throttle deadline, so
    /// no callback derived from this tracker fires afterwards.
    pub fn dispose(&mut self) {
        self.order.clear();
        self.visible.clear();
        self.deadline = None;
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;

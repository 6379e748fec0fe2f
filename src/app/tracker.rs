use super::regions::RegionId;

/// Vertical distance from the top of the window at which a section counts as
/// "in view". Sits 20 px below the header bar.
pub const ACTIVATION_LINE: i32 = 100;

/// A section anchor's vertical extent in window coordinates. Content scrolled
/// under the header keeps reporting its real position, so `top` can be
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub top: i32,
    pub bottom: i32,
}

impl SectionBounds {
    fn straddles_activation_line(&self) -> bool {
        self.top <= ACTIVATION_LINE && self.bottom >= ACTIVATION_LINE
    }
}

/// Tracks which section is currently in view.
///
/// `active` starts out as `None` and afterwards only ever moves between
/// configured regions: when no section straddles the activation line the
/// previous value is kept, so the navigation highlight never flickers to
/// "nothing" between sections.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    active: Option<RegionId>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<RegionId> {
        self.active
    }

    /// Re-evaluate against the current section bounds, given in page order.
    /// The first section straddling the activation line wins. Returns whether
    /// the active region changed, so callers only restyle the navigation on
    /// transitions.
    pub fn recompute(&mut self, bounds: &[(RegionId, SectionBounds)]) -> bool {
        let current = bounds
            .iter()
            .find(|(_, b)| b.straddles_activation_line())
            .map(|(id, _)| *id);

        match current {
            Some(id) if self.active != Some(id) => {
                self.active = Some(id);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(top: i32, bottom: i32) -> SectionBounds {
        SectionBounds { top, bottom }
    }

    #[test]
    fn test_starts_with_no_active_region() {
        let tracker = ScrollTracker::new();
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn test_single_match_becomes_active() {
        let mut tracker = ScrollTracker::new();
        let changed = tracker.recompute(&[
            (RegionId::Inicio, bounds(-500, 60)),
            (RegionId::QuienesSomos, bounds(60, 90)),
            (RegionId::QueHacemos, bounds(50, 400)),
        ]);
        assert!(changed);
        assert_eq!(tracker.active(), Some(RegionId::QueHacemos));
    }

    #[test]
    fn test_boundary_overlap_prefers_page_order() {
        // Both sections touch the activation line; the earlier one wins.
        let mut tracker = ScrollTracker::new();
        tracker.recompute(&[
            (RegionId::QuienesSomos, bounds(20, 100)),
            (RegionId::QueHacemos, bounds(100, 700)),
        ]);
        assert_eq!(tracker.active(), Some(RegionId::QuienesSomos));
    }

    #[test]
    fn test_no_match_keeps_previous_value() {
        let mut tracker = ScrollTracker::new();
        tracker.recompute(&[(RegionId::Contacto, bounds(80, 900))]);
        assert_eq!(tracker.active(), Some(RegionId::Contacto));

        // Every section is now outside the activation window.
        let changed = tracker.recompute(&[
            (RegionId::Transparencia, bounds(-900, -200)),
            (RegionId::Contacto, bounds(300, 900)),
        ]);
        assert!(!changed);
        assert_eq!(tracker.active(), Some(RegionId::Contacto));
    }

    #[test]
    fn test_recompute_reports_changes_only() {
        let mut tracker = ScrollTracker::new();
        let sections = [(RegionId::Inicio, bounds(0, 500))];
        assert!(tracker.recompute(&sections));
        assert!(!tracker.recompute(&sections));
    }

    #[test]
    fn test_section_spanning_line_from_above() {
        // que-hacemos top=50 bottom=400 with the line at 100.
        let mut tracker = ScrollTracker::new();
        tracker.recompute(&[
            (RegionId::Inicio, bounds(-800, -300)),
            (RegionId::QuienesSomos, bounds(-300, 50)),
            (RegionId::QueHacemos, bounds(50, 400)),
            (RegionId::AQuienApoyamos, bounds(400, 1000)),
            (RegionId::Transparencia, bounds(1000, 1600)),
            (RegionId::Contacto, bounds(1600, 2400)),
        ]);
        assert_eq!(tracker.active(), Some(RegionId::QueHacemos));
    }
}

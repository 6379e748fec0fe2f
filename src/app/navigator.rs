use std::cell::Cell;
use std::rc::Rc;

use fltk::{app, group::Scroll, prelude::*};

/// Height of the fixed header bar. Navigation aligns the target section
/// directly beneath it.
pub const HEADER_HEIGHT: i32 = 80;

const SCROLL_DURATION_SECS: f64 = 0.3;
const SCROLL_TICK_SECS: f64 = 0.016;

/// Scroll offset that puts a section anchor right below the header.
///
/// `anchor_top` is the anchor's current position in window coordinates,
/// `scroll_offset` the scroll position it was measured at. Negative results
/// are clamped; the caller clamps against the maximum scroll range.
pub fn scroll_target(anchor_top: i32, scroll_offset: i32) -> i32 {
    (anchor_top + scroll_offset - HEADER_HEIGHT).max(0)
}

/// Animates the scroll area toward a target offset with a cubic ease-out.
///
/// Each `animate_to` bumps a generation counter; ticks from a superseded
/// animation observe the bump and stop, so a new navigation pre-empts an
/// in-flight one without error. Fire-and-forget: there is no completion
/// signal.
pub struct SmoothScroll {
    generation: Rc<Cell<u64>>,
}

impl SmoothScroll {
    pub fn new() -> Self {
        Self {
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn animate_to(&self, scroll: &Scroll, target: i32) {
        let generation = self.generation.clone();
        let ticket = generation.get() + 1;
        generation.set(ticket);

        let mut scroll = scroll.clone();
        let start = scroll.yposition();
        let distance = target - start;
        if distance == 0 {
            return;
        }

        let total_ticks = (SCROLL_DURATION_SECS / SCROLL_TICK_SECS).ceil() as u32;
        let mut tick = 0u32;

        app::add_timeout3(SCROLL_TICK_SECS, move |handle| {
            if generation.get() != ticket {
                return;
            }
            tick += 1;
            if tick >= total_ticks {
                scroll.scroll_to(0, target);
                scroll.redraw();
                return;
            }
            let t = f64::from(tick) / f64::from(total_ticks);
            let eased = 1.0 - (1.0 - t).powi(3);
            let position = start + (f64::from(distance) * eased).round() as i32;
            scroll.scroll_to(0, position);
            scroll.redraw();
            app::repeat_timeout3(SCROLL_TICK_SECS, handle);
        });
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_is_anchor_top_minus_header() {
        assert_eq!(scroll_target(500, 0), 420);
        assert_eq!(scroll_target(80, 0), 0);
    }

    #[test]
    fn test_target_accounts_for_current_scroll() {
        // Anchor measured at y=300 while already scrolled 1000 px down.
        assert_eq!(scroll_target(300, 1000), 1220);
    }

    #[test]
    fn test_target_never_negative() {
        assert_eq!(scroll_target(-400, 0), 0);
        assert_eq!(scroll_target(20, 10), 0);
    }
}

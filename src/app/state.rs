use std::cell::RefCell;
use std::rc::Rc;

use fltk::{group::Scroll, prelude::*, window::Window};

use crate::ui::header::Header;
use crate::ui::main_window::MainWidgets;
use crate::ui::overlay::NavOverlay;
use crate::ui::sections::Sections;
use crate::ui::theme::palette;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

use super::links;
use super::messages::Message;
use super::navigator::{self, SmoothScroll};
use super::regions::RegionId;
use super::settings::AppSettings;
use super::theme::ThemePreference;
use super::tracker::ScrollTracker;

/// Owns every widget handle plus the page's behavioral state: the committed
/// theme, the scroll tracker, and the compact-menu flag. All mutation happens
/// here, driven by the dispatch loop in main.
pub struct AppState {
    pub window: Window,
    pub scroll: Scroll,
    pub header: Header,
    pub overlay: NavOverlay,
    pub sections: Sections,
    pub settings: Rc<RefCell<AppSettings>>,
    pub theme: ThemePreference,
    pub menu_open: bool,
    tracker: ScrollTracker,
    smooth: SmoothScroll,
    last_scroll: i32,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        settings: Rc<RefCell<AppSettings>>,
        theme: ThemePreference,
    ) -> Self {
        Self {
            window: widgets.window,
            scroll: widgets.scroll,
            header: widgets.header,
            overlay: widgets.overlay,
            sections: widgets.sections,
            settings,
            theme,
            menu_open: false,
            tracker: ScrollTracker::new(),
            smooth: SmoothScroll::new(),
            last_scroll: 0,
        }
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::NavigateTo(id) => self.navigate_to(id),
            Message::ToggleTheme => self.apply_theme(self.theme.toggled()),
            Message::ToggleMenu => self.set_menu_open(!self.menu_open),
            Message::OpenExternal(link) => links::open_external(link),
            Message::WindowResized(w, h) => self.on_resize(w, h),
            Message::Quit => self.quit(),
        }
    }

    // --- theme ----------------------------------------------------------

    /// Commit a preference: restyle the whole widget tree and persist it.
    /// A storage failure only costs persistence and is reported on stderr.
    pub fn apply_theme(&mut self, preference: ThemePreference) {
        self.theme = preference;
        let p = palette(preference.is_dark());

        self.window.set_color(p.background);
        self.scroll.set_color(p.background);
        self.header.apply_theme(&p, preference, self.tracker.active());
        self.overlay.apply_theme(&p, self.tracker.active());
        self.sections.apply_theme(&p);
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, preference.is_dark());
        self.window.redraw();

        let mut settings = self.settings.borrow_mut();
        settings.theme = Some(preference);
        if let Err(e) = settings.save() {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    // --- navigation -----------------------------------------------------

    /// Animated scroll to a section. Always closes the compact menu, even
    /// when the anchor cannot be found.
    pub fn navigate_to(&mut self, id: RegionId) {
        self.set_menu_open(false);

        let Some(anchor_top) = self.sections.anchor_top(id) else {
            return;
        };
        let target = navigator::scroll_target(anchor_top, self.scroll.yposition());
        self.smooth
            .animate_to(&self.scroll, target.min(self.max_scroll()));
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
        self.overlay.set_visible(open);
        self.header.set_menu_open(open);
    }

    // --- scroll tracking ------------------------------------------------

    /// Called once per processed event by the dispatch loop; recomputes the
    /// active region whenever the scroll offset moved.
    pub fn poll_scroll(&mut self) {
        let position = self.scroll.yposition();
        if position == self.last_scroll {
            return;
        }
        self.last_scroll = position;
        self.update_active_region();
    }

    pub fn update_active_region(&mut self) {
        let bounds = self.sections.region_bounds();
        if self.tracker.recompute(&bounds) {
            let p = palette(self.theme.is_dark());
            self.header.set_active(self.tracker.active(), &p);
            self.overlay.apply_theme(&p, self.tracker.active());
        }
    }

    // --- window ---------------------------------------------------------

    pub fn on_resize(&mut self, width: i32, _height: i32) {
        self.header.relayout(width);
        if !self.header.is_compact() && self.menu_open {
            self.set_menu_open(false);
        }
        self.overlay.relayout(width);
        self.sections.relayout(width);

        let max = self.max_scroll();
        if self.scroll.yposition() > max {
            self.scroll.scroll_to(0, max);
        }
        self.update_active_region();
        self.window.redraw();
    }

    fn max_scroll(&self) -> i32 {
        (self.sections.content_height() - self.scroll.h()).max(0)
    }

    fn quit(&mut self) {
        {
            let mut settings = self.settings.borrow_mut();
            settings.window_width = self.window.w();
            settings.window_height = self.window.h();
            if let Err(e) = settings.save() {
                eprintln!("Failed to save settings: {}", e);
            }
        }
        self.window.hide();
    }
}

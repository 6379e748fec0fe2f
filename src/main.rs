use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, prelude::*};

use luz_de_vida::app::{AppSettings, AppState, Message, platform, theme};
use luz_de_vida::ui::main_window::build_main_window;

fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = Rc::new(RefCell::new(AppSettings::load()));
    let resolved = {
        let s = settings.borrow();
        theme::resolve(s.theme, platform::prefers_dark_mode)
    };
    let (width, height) = {
        let s = settings.borrow();
        (s.window_width.max(640), s.window_height.max(480))
    };

    let widgets = build_main_window(width, height, &sender);
    let mut state = AppState::new(widgets, settings, resolved);

    state.window.show();
    // Titlebar theming needs a realized window, so theme after show. Also
    // persists the resolved preference, so the next launch skips the
    // ambient probe.
    state.apply_theme(resolved);
    state.update_active_region();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            state.handle(msg);
        }
        state.poll_scroll();
    }
}

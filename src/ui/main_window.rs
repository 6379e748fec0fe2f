use fltk::{
    app::Sender,
    enums::FrameType,
    group::{Scroll, ScrollType},
    prelude::*,
    window::Window,
};

use crate::app::messages::Message;
use crate::app::navigator::HEADER_HEIGHT;

use super::content;
use super::header::Header;
use super::overlay::NavOverlay;
use super::sections::Sections;

pub struct MainWidgets {
    pub window: Window,
    pub scroll: Scroll,
    pub header: Header,
    pub overlay: NavOverlay,
    pub sections: Sections,
}

pub fn build_main_window(width: i32, height: i32, sender: &Sender<Message>) -> MainWidgets {
    let mut window = Window::new(100, 100, width, height, content::BRAND);
    window.set_xclass("LuzDeVida");
    window.size_range(640, 480, 0, 0);

    // Content scrolls beneath the fixed header.
    let mut scroll = Scroll::new(0, HEADER_HEIGHT, width, height - HEADER_HEIGHT, None);
    scroll.set_type(ScrollType::Vertical);
    scroll.set_frame(FrameType::NoBox);
    let sections = Sections::build(width, sender);
    scroll.end();

    // Built after the scroll so they draw (and receive clicks) on top.
    let header = Header::new(width, sender);
    let overlay = NavOverlay::new(width, sender);

    window.end();
    window.resizable(&scroll);

    // Route close requests through the dispatch loop so settings persist.
    window.set_callback({
        let s = *sender;
        move |_| s.send(Message::Quit)
    });
    window.resize_callback({
        let s = *sender;
        move |_, _, _, w, h| s.send(Message::WindowResized(w, h))
    });

    MainWidgets {
        window,
        scroll,
        header,
        overlay,
        sections,
    }
}

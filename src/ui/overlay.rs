use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, FrameType},
    group::Group,
    prelude::*,
};

use crate::app::messages::Message;
use crate::app::navigator::HEADER_HEIGHT;
use crate::app::regions::RegionId;

use super::theme::Palette;

const ROW_H: i32 = 44;
const PADDING: i32 = 8;

/// Compact-mode navigation: a dropdown listing every region, shown under the
/// header while the hamburger is open. Hidden (and therefore inert) the rest
/// of the time.
pub struct NavOverlay {
    pub group: Group,
    buttons: Vec<(RegionId, Button)>,
}

impl NavOverlay {
    pub fn new(width: i32, sender: &Sender<Message>) -> Self {
        let height = RegionId::ALL.len() as i32 * ROW_H + 2 * PADDING;
        let mut group = Group::new(0, HEADER_HEIGHT, width, height, None);
        group.set_frame(FrameType::FlatBox);

        let mut buttons = Vec::with_capacity(RegionId::ALL.len());
        for (i, region) in RegionId::ALL.into_iter().enumerate() {
            let y = HEADER_HEIGHT + PADDING + i as i32 * ROW_H;
            let mut btn = Button::new(PADDING, y, width - 2 * PADDING, ROW_H - 4, None);
            btn.set_label(region.label());
            btn.set_frame(FrameType::FlatBox);
            btn.set_label_size(14);
            btn.set_align(Align::Inside | Align::Left);
            btn.clear_visible_focus();
            btn.set_callback({
                let s = *sender;
                move |_| s.send(Message::NavigateTo(region))
            });
            buttons.push((region, btn));
        }

        group.end();
        group.hide();

        Self { group, buttons }
    }

    pub fn set_visible(&mut self, open: bool) {
        if open {
            self.group.show();
        } else {
            self.group.hide();
        }
    }

    pub fn relayout(&mut self, width: i32) {
        // Height is fixed; window resizes may have scaled the group.
        let height = RegionId::ALL.len() as i32 * ROW_H + 2 * PADDING;
        self.group.resize(0, HEADER_HEIGHT, width, height);
        for (i, (_, btn)) in self.buttons.iter_mut().enumerate() {
            let y = HEADER_HEIGHT + PADDING + i as i32 * ROW_H;
            btn.resize(PADDING, y, width - 2 * PADDING, ROW_H - 4);
        }
    }

    pub fn apply_theme(&mut self, p: &Palette, active: Option<RegionId>) {
        self.group.set_color(p.header);
        for (region, btn) in &mut self.buttons {
            if active == Some(*region) {
                btn.set_color(p.section_bg(true));
                btn.set_label_color(p.accent);
            } else {
                btn.set_color(p.header);
                btn.set_label_color(p.text_muted);
            }
            btn.set_selection_color(p.section_bg(true));
        }
        self.group.redraw();
    }
}

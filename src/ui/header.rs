use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::messages::Message;
use crate::app::navigator::HEADER_HEIGHT;
use crate::app::regions::RegionId;
use crate::app::theme::ThemePreference;

use super::content;
use super::theme::Palette;

/// Below this window width the per-region buttons give way to the hamburger.
pub const COMPACT_BREAKPOINT: i32 = 940;

const EDGE_PADDING: i32 = 16;
const NAV_BUTTON_H: i32 = 36;
const NAV_GAP: i32 = 4;
const ICON_BUTTON: i32 = 40;

fn nav_width(label: &str) -> i32 {
    label.chars().count() as i32 * 8 + 24
}

/// The fixed bar across the top of the window: brand, one button per region,
/// theme toggle, and (in compact mode) the hamburger.
pub struct Header {
    pub group: Group,
    brand: Button,
    nav_buttons: Vec<(RegionId, Button)>,
    theme_btn: Button,
    menu_btn: Button,
    rule: Frame,
    compact: bool,
}

impl Header {
    pub fn new(width: i32, sender: &Sender<Message>) -> Self {
        let mut group = Group::new(0, 0, width, HEADER_HEIGHT, None);
        group.set_frame(FrameType::FlatBox);

        let mut brand = Button::new(EDGE_PADDING, 20, 250, 40, None);
        brand.set_label(content::BRAND);
        brand.set_frame(FrameType::NoBox);
        brand.set_label_font(Font::TimesBold);
        brand.set_label_size(19);
        brand.set_align(Align::Inside | Align::Left);
        brand.clear_visible_focus();
        brand.set_callback({
            let s = *sender;
            move |_| s.send(Message::NavigateTo(RegionId::Inicio))
        });

        let mut nav_buttons = Vec::with_capacity(RegionId::ALL.len());
        for region in RegionId::ALL {
            let mut btn = Button::new(0, 22, nav_width(region.label()), NAV_BUTTON_H, None);
            btn.set_label(region.label());
            btn.set_frame(FrameType::RFlatBox);
            btn.set_label_size(13);
            btn.clear_visible_focus();
            btn.set_callback({
                let s = *sender;
                move |_| s.send(Message::NavigateTo(region))
            });
            nav_buttons.push((region, btn));
        }

        let mut theme_btn = Button::new(0, 20, ICON_BUTTON, ICON_BUTTON, None);
        theme_btn.set_frame(FrameType::RFlatBox);
        theme_btn.set_label_size(18);
        theme_btn.clear_visible_focus();
        theme_btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::ToggleTheme)
        });

        let mut menu_btn = Button::new(0, 20, ICON_BUTTON, ICON_BUTTON, None);
        menu_btn.set_label("☰");
        menu_btn.set_frame(FrameType::RFlatBox);
        menu_btn.set_label_size(18);
        menu_btn.set_tooltip("Menú");
        menu_btn.clear_visible_focus();
        menu_btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::ToggleMenu)
        });

        let mut rule = Frame::new(0, HEADER_HEIGHT - 1, width, 1, None);
        rule.set_frame(FrameType::FlatBox);

        group.end();

        let mut header = Self {
            group,
            brand,
            nav_buttons,
            theme_btn,
            menu_btn,
            rule,
            compact: false,
        };
        header.relayout(width);
        header
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Re-place every control for the given window width and derive the
    /// compact/wide layout.
    pub fn relayout(&mut self, width: i32) {
        self.group.resize(0, 0, width, HEADER_HEIGHT);
        self.rule.resize(0, HEADER_HEIGHT - 1, width, 1);
        self.brand.resize(EDGE_PADDING, 20, 250, 40);

        self.compact = width < COMPACT_BREAKPOINT;

        let mut right = width - EDGE_PADDING - ICON_BUTTON;
        self.theme_btn.resize(right, 20, ICON_BUTTON, ICON_BUTTON);

        if self.compact {
            right -= ICON_BUTTON + 8;
            self.menu_btn.resize(right, 20, ICON_BUTTON, ICON_BUTTON);
            self.menu_btn.show();
            for (_, btn) in &mut self.nav_buttons {
                btn.hide();
            }
        } else {
            self.menu_btn.hide();
            let total: i32 = self
                .nav_buttons
                .iter()
                .map(|(region, _)| nav_width(region.label()) + NAV_GAP)
                .sum();
            let mut x = right - 12 - total;
            for (region, btn) in &mut self.nav_buttons {
                let w = nav_width(region.label());
                btn.resize(x, 22, w, NAV_BUTTON_H);
                btn.show();
                x += w + NAV_GAP;
            }
        }
        self.group.redraw();
    }

    /// Tint the button for the active region; everything else stays quiet.
    pub fn set_active(&mut self, active: Option<RegionId>, p: &Palette) {
        for (region, btn) in &mut self.nav_buttons {
            if active == Some(*region) {
                btn.set_color(p.section_bg(true));
                btn.set_label_color(p.accent);
            } else {
                btn.set_color(p.header);
                btn.set_label_color(p.text_muted);
            }
            btn.set_selection_color(p.section_bg(true));
            btn.redraw();
        }
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_btn.set_label(if open { "✕" } else { "☰" });
        self.menu_btn.redraw();
    }

    pub fn apply_theme(&mut self, p: &Palette, theme: ThemePreference, active: Option<RegionId>) {
        self.group.set_color(p.header);
        self.rule.set_color(p.border);
        self.brand.set_label_color(p.text);
        self.brand.set_selection_color(p.header);

        // Shows the mode a click switches to, like the site's sun/moon.
        if theme.is_dark() {
            self.theme_btn.set_label("☀");
            self.theme_btn.set_tooltip("Modo claro");
        } else {
            self.theme_btn.set_label("☾");
            self.theme_btn.set_tooltip("Modo oscuro");
        }
        for btn in [&mut self.theme_btn, &mut self.menu_btn] {
            btn.set_color(p.header);
            btn.set_label_color(p.text);
            btn.set_selection_color(p.section_bg(true));
        }

        self.set_active(active, p);
        self.group.redraw();
    }
}

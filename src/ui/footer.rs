use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::links::ExternalLink;
use crate::app::messages::Message;
use crate::app::regions::RegionId;

use super::content;
use super::theme::footer as colors;

const MARGIN: i32 = 70;

/// Page footer. Stays dark in both display modes, like the site, so its
/// colors are fixed at build time.
pub struct Footer {
    pub group: Group,
}

impl Footer {
    pub const HEIGHT: i32 = 440;

    pub fn build(y: i32, width: i32, sender: &Sender<Message>) -> Self {
        let mut group = Group::new(0, y, width, Self::HEIGHT, None);
        group.set_frame(FrameType::FlatBox);
        group.set_color(colors::background());

        let cw = width - 2 * MARGIN;
        let col_w = (cw - 80) / 3;

        // Brand column
        let mut brand = Frame::new(MARGIN, y + 50, col_w, 28, None);
        brand.set_label(content::BRAND_SHORT);
        brand.set_label_font(Font::TimesBold);
        brand.set_label_size(18);
        brand.set_label_color(colors::text());
        brand.set_align(Align::Inside | Align::Left);
        let mut blurb = Frame::new(MARGIN, y + 90, col_w, 110, None);
        blurb.set_label(content::FOOTER_BLURB);
        blurb.set_label_size(12);
        blurb.set_label_color(colors::text());
        blurb.set_align(Align::Inside | Align::Wrap | Align::Top | Align::Left);

        // Quick links column
        let lx = MARGIN + col_w + 40;
        let mut links_heading = Frame::new(lx, y + 50, col_w, 24, None);
        links_heading.set_label(content::FOOTER_LINKS_HEADING);
        links_heading.set_label_font(Font::HelveticaBold);
        links_heading.set_label_size(14);
        links_heading.set_label_color(colors::heading());
        links_heading.set_align(Align::Inside | Align::Left);
        for (i, region) in RegionId::ALL.into_iter().enumerate() {
            let mut btn = Button::new(lx, y + 86 + i as i32 * 28, col_w, 24, None);
            btn.set_label(region.label());
            btn.set_frame(FrameType::NoBox);
            btn.set_label_size(12);
            btn.set_label_color(colors::text());
            btn.set_align(Align::Inside | Align::Left);
            btn.clear_visible_focus();
            btn.set_callback({
                let s = *sender;
                move |_| s.send(Message::NavigateTo(region))
            });
        }

        // Contact column
        let cx = lx + col_w + 40;
        let mut contact_heading = Frame::new(cx, y + 50, col_w, 24, None);
        contact_heading.set_label(content::FOOTER_CONTACT_HEADING);
        contact_heading.set_label_font(Font::HelveticaBold);
        contact_heading.set_label_size(14);
        contact_heading.set_label_color(colors::heading());
        contact_heading.set_align(Align::Inside | Align::Left);
        for (i, (label, link)) in [
            (content::CONTACT_PHONE_PRIMARY, ExternalLink::WhatsAppPrimary),
            (content::CONTACT_PHONE_SECONDARY, ExternalLink::WhatsAppSecondary),
        ]
        .into_iter()
        .enumerate()
        {
            let mut btn = Button::new(cx, y + 86 + i as i32 * 28, col_w, 24, None);
            btn.set_label(label);
            btn.set_frame(FrameType::NoBox);
            btn.set_label_size(12);
            btn.set_label_color(colors::text());
            btn.set_align(Align::Inside | Align::Left);
            btn.clear_visible_focus();
            btn.set_callback({
                let s = *sender;
                move |_| s.send(Message::OpenExternal(link))
            });
        }
        let mut address = Frame::new(cx, y + 146, col_w, 70, None);
        address.set_label(content::CONTACT_ADDRESS);
        address.set_label_size(12);
        address.set_label_color(colors::text());
        address.set_align(Align::Inside | Align::Wrap | Align::Top | Align::Left);

        let mut rule = Frame::new(MARGIN, y + Self::HEIGHT - 90, cw, 1, None);
        rule.set_frame(FrameType::FlatBox);
        rule.set_color(colors::rule());

        let mut legal = Frame::new(MARGIN, y + Self::HEIGHT - 64, cw, 24, None);
        legal.set_label(content::FOOTER_LEGAL);
        legal.set_label_size(11);
        legal.set_label_color(colors::text());

        group.end();

        Self { group }
    }

    pub fn relayout(&mut self, width: i32) {
        let (y, h) = (self.group.y(), self.group.h());
        self.group.resize(0, y, width, h);
    }
}

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
use crate::app::navigator::HEADER_HEIGHT;
use crate::app::regions::RegionId;
use crate::app::tracker::SectionBounds;

use super::content;
use super::footer::Footer;
use super::theme::Palette;

const MARGIN: i32 = 70;

const HERO_H: i32 = 660;
const ABOUT_H: i32 = 560;
const PROGRAMS_H: i32 = 840;
const SUPPORT_H: i32 = 800;
const VALUES_H: i32 = 580;
const PRIVACY_H: i32 = 820;
const CONTACT_H: i32 = 1060;

/// One content section: a full-width group plus its widgets, bucketed by the
/// role they take when a palette is applied. `region` is `None` for page
/// sections without a navigation entry (Valores).
pub struct Section {
    pub region: Option<RegionId>,
    pub group: Group,
    alt_surface: bool,
    headings: Vec<Frame>,
    muted: Vec<Frame>,
    accent_labels: Vec<Frame>,
    rules: Vec<Frame>,
    cards: Vec<Group>,
    chips: Vec<Frame>,
    accent_buttons: Vec<Button>,
    quiet_buttons: Vec<Button>,
    link_buttons: Vec<Button>,
}

impl Section {
    fn new(region: Option<RegionId>, y: i32, width: i32, height: i32, alt_surface: bool) -> Self {
        let mut group = Group::new(0, y, width, height, None);
        group.set_frame(FrameType::FlatBox);
        Self {
            region,
            group,
            alt_surface,
            headings: Vec::new(),
            muted: Vec::new(),
            accent_labels: Vec::new(),
            rules: Vec::new(),
            cards: Vec::new(),
            chips: Vec::new(),
            accent_buttons: Vec::new(),
            quiet_buttons: Vec::new(),
            link_buttons: Vec::new(),
        }
    }

    fn finish(mut self) -> Self {
        self.group.end();
        self
    }

    // --- widget helpers -------------------------------------------------

    fn title(&mut self, y: i32, size: i32, label: &str) {
        let mut f = Frame::new(0, y, self.group.w(), size + 34, None);
        f.set_label(label);
        f.set_label_font(Font::TimesBold);
        f.set_label_size(size);
        f.set_align(Align::Inside | Align::Wrap);
        self.headings.push(f);
    }

    fn gold_rule(&mut self, y: i32) {
        let mut f = Frame::new(self.group.w() / 2 - 48, y, 96, 3, None);
        f.set_frame(FrameType::FlatBox);
        self.rules.push(f);
    }

    fn text(&mut self, x: i32, y: i32, w: i32, h: i32, size: i32, label: &str) -> Frame {
        let mut f = Frame::new(x, y, w, h, None);
        f.set_label(label);
        f.set_label_size(size);
        f.set_align(Align::Inside | Align::Wrap | Align::Top | Align::Left);
        f
    }

    fn paragraph(&mut self, x: i32, y: i32, w: i32, h: i32, size: i32, label: &str) {
        let f = self.text(x, y, w, h, size, label);
        self.muted.push(f);
    }

    fn centered(&mut self, y: i32, w: i32, h: i32, size: i32, label: &str) -> Frame {
        let mut f = Frame::new((self.group.w() - w) / 2, y, w, h, None);
        f.set_label(label);
        f.set_label_size(size);
        f.set_align(Align::Inside | Align::Wrap | Align::Top);
        f
    }

    fn card(&mut self, x: i32, y: i32, w: i32, h: i32) -> Group {
        let mut card = Group::new(x, y, w, h, None);
        card.set_frame(FrameType::RFlatBox);
        card
    }

    fn chip(&mut self, x: i32, y: i32, glyph: &str) {
        let mut f = Frame::new(x, y, 56, 56, None);
        f.set_frame(FrameType::RFlatBox);
        f.set_label(glyph);
        f.set_label_size(24);
        self.chips.push(f);
    }

    fn accent_button(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        label: &'static str,
        sender: &Sender<Message>,
        msg: Message,
    ) {
        let mut btn = Button::new(x, y, w, h, None);
        btn.set_label(label);
        btn.set_frame(FrameType::RFlatBox);
        btn.set_label_font(Font::HelveticaBold);
        btn.set_label_size(14);
        btn.clear_visible_focus();
        btn.set_callback({
            let s = *sender;
            move |_| s.send(msg)
        });
        self.accent_buttons.push(btn);
    }

    fn quiet_button(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        label: &'static str,
        sender: &Sender<Message>,
        msg: Message,
    ) {
        let mut btn = Button::new(x, y, w, h, None);
        btn.set_label(label);
        btn.set_frame(FrameType::RFlatBox);
        btn.set_label_font(Font::HelveticaBold);
        btn.set_label_size(14);
        btn.clear_visible_focus();
        btn.set_callback({
            let s = *sender;
            move |_| s.send(msg)
        });
        self.quiet_buttons.push(btn);
    }

    fn link_button(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        label: &'static str,
        sender: &Sender<Message>,
        link: ExternalLink,
    ) {
        let mut btn = Button::new(x, y, w, h, None);
        btn.set_label(label);
        btn.set_frame(FrameType::NoBox);
        btn.set_label_font(Font::HelveticaBold);
        btn.set_label_size(14);
        btn.set_align(Align::Inside | Align::Left);
        btn.clear_visible_focus();
        btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::OpenExternal(link))
        });
        self.link_buttons.push(btn);
    }

    // --- theming --------------------------------------------------------

    pub fn apply_theme(&mut self, p: &Palette) {
        self.group.set_color(p.section_bg(self.alt_surface));
        for f in &mut self.headings {
            f.set_label_color(p.text);
        }
        for f in &mut self.muted {
            f.set_label_color(p.text_muted);
        }
        for f in &mut self.accent_labels {
            f.set_label_color(p.accent);
        }
        for f in &mut self.rules {
            f.set_color(p.accent);
        }
        let card_bg = p.card_bg(self.alt_surface);
        for c in &mut self.cards {
            c.set_color(card_bg);
        }
        for f in &mut self.chips {
            f.set_color(p.chip);
            f.set_label_color(p.accent);
        }
        for b in &mut self.accent_buttons {
            b.set_color(p.accent);
            b.set_label_color(p.on_accent);
            b.set_selection_color(p.accent_hover);
        }
        for b in &mut self.quiet_buttons {
            b.set_color(card_bg);
            b.set_label_color(p.text);
            b.set_selection_color(p.chip);
        }
        for b in &mut self.link_buttons {
            b.set_label_color(p.accent);
            b.set_selection_color(card_bg);
        }
        self.group.redraw();
    }

    pub fn bounds(&self) -> SectionBounds {
        SectionBounds {
            top: self.group.y(),
            bottom: self.group.y() + self.group.h(),
        }
    }
}

/// The whole scrollable page: the seven content sections plus the footer,
/// in page order. Section groups double as the anchors the tracker and
/// navigator measure.
pub struct Sections {
    list: Vec<Section>,
    footer: Footer,
    content_height: i32,
}

impl Sections {
    /// Build every section. Must run between `scroll.begin()` and
    /// `scroll.end()` with the scroll at offset zero.
    pub fn build(width: i32, sender: &Sender<Message>) -> Self {
        let mut y = HEADER_HEIGHT;
        let mut list = Vec::new();

        list.push(build_hero(y, width, sender));
        y += HERO_H;
        list.push(build_about(y, width));
        y += ABOUT_H;
        list.push(build_programs(y, width));
        y += PROGRAMS_H;
        list.push(build_support(y, width));
        y += SUPPORT_H;
        list.push(build_values(y, width));
        y += VALUES_H;
        list.push(build_privacy(y, width));
        y += PRIVACY_H;
        list.push(build_contact(y, width, sender));
        y += CONTACT_H;

        let footer = Footer::build(y, width, sender);
        y += Footer::HEIGHT;

        Self {
            list,
            footer,
            content_height: y - HEADER_HEIGHT,
        }
    }

    /// Live bounds of every navigable section, in page order, in window
    /// coordinates.
    pub fn region_bounds(&self) -> Vec<(RegionId, SectionBounds)> {
        self.list
            .iter()
            .filter_map(|s| s.region.map(|region| (region, s.bounds())))
            .collect()
    }

    /// Current top of a section anchor, if it exists on the page.
    pub fn anchor_top(&self, id: RegionId) -> Option<i32> {
        self.list
            .iter()
            .find(|s| s.region == Some(id))
            .map(|s| s.group.y())
    }

    pub fn content_height(&self) -> i32 {
        self.content_height
    }

    pub fn relayout(&mut self, width: i32) {
        for s in &mut self.list {
            let (y, h) = (s.group.y(), s.group.h());
            s.group.resize(0, y, width, h);
        }
        self.footer.relayout(width);
    }

    pub fn apply_theme(&mut self, p: &Palette) {
        for s in &mut self.list {
            s.apply_theme(p);
        }
        // footer keeps its dark treatment in both modes
    }
}

// --- section builders ---------------------------------------------------

fn build_hero(y: i32, width: i32, sender: &Sender<Message>) -> Section {
    let mut s = Section::new(Some(RegionId::Inicio), y, width, HERO_H, false);
    let cw = width - 2 * MARGIN;

    s.title(y + 130, 38, content::BRAND);
    s.gold_rule(y + 200);

    let mut nit = s.centered(y + 235, cw, 24, 15, content::HERO_NIT);
    nit.set_label_font(Font::HelveticaBold);
    s.headings.push(nit);
    let mut registry = s.centered(y + 262, cw, 20, 13, content::HERO_REGISTRY);
    registry.set_label_font(Font::HelveticaBold);
    s.muted.push(registry);
    let mut date = s.centered(y + 284, cw, 20, 13, content::HERO_DATE);
    date.set_label_font(Font::HelveticaBold);
    s.muted.push(date);

    let tagline = s.centered(y + 324, cw - 80, 60, 19, content::HERO_TAGLINE);
    s.muted.push(tagline);
    let mission = s.centered(y + 396, cw - 140, 60, 14, content::HERO_MISSION);
    s.muted.push(mission);

    let bx = width / 2 - 218;
    s.accent_button(
        bx,
        y + 486,
        230,
        52,
        content::CTA_REQUEST_INFO,
        sender,
        Message::OpenExternal(ExternalLink::WhatsAppInfo),
    );
    s.quiet_button(
        bx + 246,
        y + 486,
        190,
        52,
        content::CTA_PARTICIPATE,
        sender,
        Message::NavigateTo(RegionId::QueHacemos),
    );

    s.finish()
}

fn build_about(y: i32, width: i32) -> Section {
    let mut s = Section::new(Some(RegionId::QuienesSomos), y, width, ABOUT_H, true);
    let cw = width - 2 * MARGIN;

    s.title(y + 70, 28, "Quiénes Somos");
    s.gold_rule(y + 125);

    let mut py = y + 165;
    for paragraph in content::ABOUT_PARAGRAPHS {
        s.paragraph(MARGIN, py, cw, 100, 14, paragraph);
        py += 114;
    }

    s.finish()
}

fn build_programs(y: i32, width: i32) -> Section {
    let mut s = Section::new(Some(RegionId::QueHacemos), y, width, PROGRAMS_H, false);
    let cw = width - 2 * MARGIN;

    s.title(y + 70, 28, "Qué Hacemos");
    s.gold_rule(y + 125);
    let intro = s.centered(y + 160, cw - 60, 48, 14, content::PROGRAMS_INTRO);
    s.muted.push(intro);

    let card_w = (cw - 20) / 2;
    for (i, (glyph, title, desc)) in content::PROGRAM_CARDS.into_iter().enumerate() {
        let cx = MARGIN + (i as i32 % 2) * (card_w + 20);
        let cy = y + 240 + (i as i32 / 2) * 280;
        let mut card = s.card(cx, cy, card_w, 260);
        s.chip(cx + 24, cy + 28, glyph);
        let mut heading = s.text(cx + 24, cy + 100, card_w - 48, 26, 16, title);
        heading.set_label_font(Font::TimesBold);
        s.headings.push(heading);
        s.paragraph(cx + 24, cy + 134, card_w - 48, 100, 13, desc);
        card.end();
        s.cards.push(card);
    }

    s.finish()
}

fn build_support(y: i32, width: i32) -> Section {
    let mut s = Section::new(Some(RegionId::AQuienApoyamos), y, width, SUPPORT_H, true);
    let cw = width - 2 * MARGIN;

    s.title(y + 70, 28, "A Quién Apoyamos");
    s.gold_rule(y + 125);

    let stat_w = (cw - 40) / 3;
    for (i, (value, title, desc)) in content::SUPPORT_STATS.into_iter().enumerate() {
        let cx = MARGIN + i as i32 * (stat_w + 20);
        let cy = y + 170;
        let mut card = s.card(cx, cy, stat_w, 190);
        let mut value_frame = Frame::new(cx + 12, cy + 30, stat_w - 24, 40, None);
        value_frame.set_label(value);
        value_frame.set_label_font(Font::Times);
        value_frame.set_label_size(26);
        s.accent_labels.push(value_frame);
        let mut heading = Frame::new(cx + 12, cy + 84, stat_w - 24, 24, None);
        heading.set_label(title);
        heading.set_label_font(Font::HelveticaBold);
        heading.set_label_size(15);
        s.headings.push(heading);
        let mut desc_frame = Frame::new(cx + 16, cy + 116, stat_w - 32, 56, None);
        desc_frame.set_label(desc);
        desc_frame.set_label_size(12);
        desc_frame.set_align(Align::Inside | Align::Wrap | Align::Top);
        s.muted.push(desc_frame);
        card.end();
        s.cards.push(card);
    }

    let mut focus = s.card(MARGIN, y + 400, cw, 320);
    s.paragraph(MARGIN + 36, y + 436, cw - 72, 120, 14, content::SUPPORT_PARAGRAPHS[0]);
    s.paragraph(MARGIN + 36, y + 576, cw - 72, 120, 14, content::SUPPORT_PARAGRAPHS[1]);
    focus.end();
    s.cards.push(focus);

    s.finish()
}

fn build_values(y: i32, width: i32) -> Section {
    let mut s = Section::new(None, y, width, VALUES_H, false);
    let cw = width - 2 * MARGIN;

    s.title(y + 70, 28, "Nuestros Valores");
    s.gold_rule(y + 125);

    let card_w = (cw - 32) / 3;
    for (i, (title, desc)) in content::VALUES.into_iter().enumerate() {
        let cx = MARGIN + (i as i32 % 3) * (card_w + 16);
        let cy = y + 170 + (i as i32 / 3) * 166;
        let mut card = s.card(cx, cy, card_w, 150);
        let mut heading = s.text(cx + 18, cy + 20, card_w - 36, 44, 15, title);
        heading.set_label_font(Font::TimesBold);
        s.accent_labels.push(heading);
        s.paragraph(cx + 18, cy + 70, card_w - 36, 70, 12, desc);
        card.end();
        s.cards.push(card);
    }

    s.finish()
}

fn build_privacy(y: i32, width: i32) -> Section {
    let mut s = Section::new(Some(RegionId::Transparencia), y, width, PRIVACY_H, true);
    let cw = width - 2 * MARGIN;

    s.title(y + 70, 28, "Transparencia y Protección de Datos");
    s.gold_rule(y + 150);

    let mut card = s.card(MARGIN, y + 190, cw, 560);
    let cx = MARGIN + 36;
    let iw = cw - 72;

    let mut subheading = s.text(cx, y + 220, iw, 28, 18, content::PRIVACY_HEADING);
    subheading.set_label_font(Font::TimesBold);
    s.accent_labels.push(subheading);

    s.paragraph(cx, y + 262, iw, 80, 14, content::PRIVACY_INTRO);

    let mut collected = s.text(cx, y + 352, iw, 24, 13, content::PRIVACY_COLLECTED_HEADING);
    collected.set_label_font(Font::HelveticaBold);
    s.headings.push(collected);
    let mut by = y + 382;
    for bullet in content::PRIVACY_COLLECTED {
        s.paragraph(cx + 12, by, iw - 12, 28, 13, bullet);
        by += 30;
    }

    s.paragraph(cx, y + 486, iw, 90, 14, content::PRIVACY_USE);
    s.paragraph(cx, y + 582, iw, 80, 14, content::PRIVACY_CONFIDENTIALITY);
    s.paragraph(cx, y + 668, iw, 60, 12, content::PRIVACY_RIGHTS);

    card.end();
    s.cards.push(card);

    s.finish()
}

fn build_contact(y: i32, width: i32, sender: &Sender<Message>) -> Section {
    let mut s = Section::new(Some(RegionId::Contacto), y, width, CONTACT_H, false);
    let cw = width - 2 * MARGIN;

    s.title(y + 70, 28, "Contacto");
    s.gold_rule(y + 125);

    let card_w = (cw - 20) / 2;

    // WhatsApp card
    let cx = MARGIN;
    let cy = y + 170;
    let mut whatsapp = s.card(cx, cy, card_w, 300);
    s.chip(cx + 24, cy + 28, "📞");
    let mut heading = s.text(cx + 96, cy + 30, card_w - 120, 24, 15, content::CONTACT_WHATSAPP_HEADING);
    heading.set_label_font(Font::HelveticaBold);
    s.headings.push(heading);
    s.link_button(
        cx + 96,
        cy + 60,
        190,
        26,
        content::CONTACT_PHONE_PRIMARY,
        sender,
        ExternalLink::WhatsAppPrimary,
    );
    s.link_button(
        cx + 96,
        cy + 90,
        190,
        26,
        content::CONTACT_PHONE_SECONDARY,
        sender,
        ExternalLink::WhatsAppSecondary,
    );
    s.paragraph(cx + 24, cy + 170, card_w - 48, 110, 13, content::CONTACT_WHATSAPP_BLURB);
    whatsapp.end();
    s.cards.push(whatsapp);

    // Location card
    let cx = MARGIN + card_w + 20;
    let mut location = s.card(cx, cy, card_w, 300);
    s.chip(cx + 24, cy + 28, "📍");
    let mut heading = s.text(cx + 96, cy + 30, card_w - 120, 24, 15, content::CONTACT_LOCATION_HEADING);
    heading.set_label_font(Font::HelveticaBold);
    s.headings.push(heading);
    s.paragraph(cx + 96, cy + 60, card_w - 120, 66, 13, content::CONTACT_ADDRESS);
    s.accent_button(
        cx + 96,
        cy + 136,
        150,
        40,
        content::CTA_DIRECTIONS,
        sender,
        Message::OpenExternal(ExternalLink::Map),
    );
    s.paragraph(cx + 24, cy + 196, card_w - 48, 90, 13, content::CONTACT_LOCATION_BLURB);
    location.end();
    s.cards.push(location);

    // Map card: the site embeds Google Maps; the desktop opens it outside.
    let mut map = s.card(MARGIN, y + 500, cw, 200);
    let mut heading = s.centered(y + 540, cw - 80, 26, 16, "Fundación Luz de Vida Soacha");
    heading.set_label_font(Font::TimesBold);
    s.headings.push(heading);
    let address = s.centered(y + 574, cw - 80, 56, 13, content::CONTACT_ADDRESS);
    s.muted.push(address);
    s.accent_button(
        width / 2 - 115,
        y + 636,
        230,
        44,
        content::CTA_OPEN_MAPS,
        sender,
        Message::OpenExternal(ExternalLink::Map),
    );
    map.end();
    s.cards.push(map);

    // Closing call to action
    let mut closing = s.card(MARGIN, y + 730, cw, 270);
    let mut heading = s.centered(y + 770, cw - 80, 30, 20, content::CONTACT_CLOSING_HEADING);
    heading.set_label_font(Font::TimesBold);
    s.headings.push(heading);
    let text = s.centered(y + 812, cw - 140, 80, 14, content::CONTACT_CLOSING);
    s.muted.push(text);
    s.accent_button(
        width / 2 - 155,
        y + 912,
        310,
        52,
        content::CTA_SEND_WHATSAPP,
        sender,
        Message::OpenExternal(ExternalLink::WhatsAppInfo),
    );
    closing.end();
    s.cards.push(closing);

    s.finish()
}
